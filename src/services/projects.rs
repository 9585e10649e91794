//! Project resolution service.

use regex::Regex;

use crate::client::SonarClient;
use crate::config::RunConfig;
use crate::error::Result;
use crate::models::ProjectPage;
use crate::pagination::fetch_all_pages;

/// Resolve the set of project keys to download hotspots from.
///
/// Explicit keys short-circuit enumeration entirely and are returned
/// verbatim; in particular they bypass `key_filter`. Otherwise every
/// project visible to the credentials is enumerated and keys are kept only
/// when they fully match the filter, if one is given.
pub async fn resolve_project_keys(
    client: &SonarClient,
    config: &RunConfig,
    explicit_keys: &[String],
    key_filter: Option<&Regex>,
) -> Result<Vec<String>> {
    if !explicit_keys.is_empty() {
        return Ok(explicit_keys.to_vec());
    }

    let projects = fetch_all_pages::<ProjectPage, _>(
        |page| client.projects_page(page),
        config.page_errors,
        config.max_concurrent,
    )
    .await?;
    log::debug!("Enumerated {} projects.", projects.len());

    Ok(projects
        .into_iter()
        .map(|project| project.key)
        .filter(|key| key_filter.is_none_or(|re| re.is_match(key)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::full_match_regex;

    #[tokio::test]
    async fn explicit_keys_bypass_the_filter_and_the_network() {
        // Unroutable base URL: any request would fail immediately.
        let config = RunConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            ..RunConfig::default()
        };
        let client = SonarClient::new(&config).unwrap();
        let filter = full_match_regex("zzz.*").unwrap();

        let keys = resolve_project_keys(
            &client,
            &config,
            &["proj-A".to_string()],
            Some(&filter),
        )
        .await
        .unwrap();

        assert_eq!(keys, vec!["proj-A".to_string()]);
    }
}

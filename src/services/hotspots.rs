//! Hotspot collection and detail enrichment service.
//!
//! Two fan-out stages run here: one concurrent collection task per resolved
//! project (whose internal pagination fans out again), then one concurrent
//! detail fetch per matched hotspot. Each stage launches all of its tasks
//! and joins them before the next stage starts; aggregation happens only
//! after the join, in spawn order.

use futures::stream::{self, StreamExt};
use regex::Regex;

use crate::client::{SonarClient, send_json};
use crate::config::{DetailErrorPolicy, RunConfig};
use crate::error::Result;
use crate::models::{Hotspot, HotspotDetail, HotspotPage, HotspotShow};
use crate::pagination::fetch_all_pages;

/// Fetch all hotspots of one project, keeping only those whose message
/// fully matches `message_filter` when one is given.
pub async fn collect_hotspots(
    client: &SonarClient,
    config: &RunConfig,
    project_key: &str,
    message_filter: Option<&Regex>,
) -> Result<Vec<Hotspot>> {
    let hotspots = fetch_all_pages::<HotspotPage, _>(
        |page| client.hotspots_page(project_key, page),
        config.page_errors,
        config.max_concurrent,
    )
    .await?;

    Ok(hotspots
        .into_iter()
        .filter(|hotspot| message_filter.is_none_or(|re| re.is_match(&hotspot.message)))
        .collect())
}

/// Collect hotspots for every resolved project, one concurrent task per
/// project, flattened in project order.
///
/// A failed first page of any project's pagination is fatal here, matching
/// the per-call error policy of [`fetch_all_pages`].
pub async fn collect_all_hotspots(
    client: &SonarClient,
    config: &RunConfig,
    project_keys: &[String],
    message_filter: Option<&Regex>,
) -> Result<Vec<Hotspot>> {
    let width = config.fanout_width(project_keys.len());

    let per_project: Vec<Result<Vec<Hotspot>>> = stream::iter(project_keys)
        .map(|key| async move {
            log::debug!("Downloading hotspots for {key}...");
            let hotspots = collect_hotspots(client, config, key, message_filter).await?;
            log::debug!("Downloaded {} hotspots for {key}.", hotspots.len());
            Ok(hotspots)
        })
        .buffered(width)
        .collect()
        .await;

    let mut all = Vec::new();
    for result in per_project {
        all.extend(result?);
    }
    Ok(all)
}

/// Fetch the detail view for every hotspot concurrently, then keep only
/// details passing the rule-key filter.
///
/// Each task carries its source hotspot as closure state, so the joined
/// pair always shares one hotspot key. Detail failures follow
/// `config.detail_errors`; the default aborts the run.
pub async fn enrich_and_filter(
    client: &SonarClient,
    config: &RunConfig,
    hotspots: Vec<Hotspot>,
    rule_keys: &[String],
) -> Result<Vec<HotspotDetail>> {
    let width = config.fanout_width(hotspots.len());
    let mut details = Vec::with_capacity(hotspots.len());

    let mut fetches = stream::iter(hotspots)
        .map(|hotspot| async move {
            let show: Result<HotspotShow> = send_json(client.hotspot_show(&hotspot.key)).await;
            show.map(|show| HotspotDetail { hotspot, show })
        })
        .buffered(width);

    while let Some(result) = fetches.next().await {
        match result {
            Ok(detail) => details.push(detail),
            Err(error) => match config.detail_errors {
                DetailErrorPolicy::Abort => return Err(error),
                DetailErrorPolicy::Skip => {
                    log::warn!("Skipping hotspot detail: {error}");
                }
            },
        }
    }

    details.retain(|detail| passes_rule_filter(detail, rule_keys));
    Ok(details)
}

/// An empty rule-key set passes everything; otherwise the detail's rule key
/// must be a member.
fn passes_rule_filter(detail: &HotspotDetail, rule_keys: &[String]) -> bool {
    rule_keys.is_empty() || rule_keys.iter().any(|key| key == &detail.show.rule.key)
}

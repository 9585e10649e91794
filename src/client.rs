// src/client.rs

//! HTTP client for the SonarQube web API.

use std::time::Duration;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::config::RunConfig;
use crate::error::{AppError, Result};

/// Client for the three web API endpoints this tool talks to.
///
/// Owns one `reqwest::Client` configured with the uniform request timeout
/// (when set) and attaches credentials and the optional organization to
/// every request it builds.
#[derive(Debug, Clone)]
pub struct SonarClient {
    http: reqwest::Client,
    base_url: String,
    organization: Option<String>,
    token: Option<String>,
    page_size: u32,
}

impl SonarClient {
    /// Build a client for the given run configuration.
    pub fn new(config: &RunConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        // A blank token means unauthenticated requests.
        let token = config
            .token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .map(str::to_string);

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            organization: config.organization.clone(),
            token,
            page_size: config.page_size,
        })
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Page request for `/api/projects/search`.
    pub fn projects_page(&self, page: u32) -> RequestBuilder {
        self.get(
            "/api/projects/search",
            &[("ps", self.page_size.to_string()), ("p", page.to_string())],
        )
    }

    /// Page request for `/api/hotspots/search` scoped to one project.
    pub fn hotspots_page(&self, project_key: &str, page: u32) -> RequestBuilder {
        self.get(
            "/api/hotspots/search",
            &[
                ("projectKey", project_key.to_string()),
                ("ps", self.page_size.to_string()),
                ("p", page.to_string()),
            ],
        )
    }

    /// Detail request for `/api/hotspots/show`.
    pub fn hotspot_show(&self, hotspot_key: &str) -> RequestBuilder {
        self.get("/api/hotspots/show", &[("hotspot", hotspot_key.to_string())])
    }

    /// Build an authenticated GET request, appending the organization
    /// parameter only when one is configured.
    fn get(&self, path: &str, params: &[(&str, String)]) -> RequestBuilder {
        let mut request = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(params);

        if let Some(org) = &self.organization {
            request = request.query(&[("organization", org.as_str())]);
        }

        // HTTP Basic with the token as username and an empty password.
        if let Some(token) = &self.token {
            request = request.basic_auth(token, Some(""));
        }

        request
    }
}

/// Send a request and decode the JSON body, treating non-2xx statuses as
/// errors rather than trusting whatever body they carry.
pub async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Status {
            url: response.url().to_string(),
            status: status.as_u16(),
        });
    }
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(config: RunConfig) -> SonarClient {
        SonarClient::new(&config).unwrap()
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = RunConfig {
            base_url: "https://sonar.example.com/".to_string(),
            ..RunConfig::default()
        };
        assert_eq!(client(config).base_url(), "https://sonar.example.com");
    }

    #[test]
    fn blank_token_means_unauthenticated() {
        let config = RunConfig {
            token: Some("   ".to_string()),
            ..RunConfig::default()
        };
        let request = client(config).projects_page(1).build().unwrap();
        assert!(request.headers().get("authorization").is_none());
    }

    #[test]
    fn token_is_sent_as_basic_auth_username() {
        let config = RunConfig {
            token: Some("squ_token".to_string()),
            ..RunConfig::default()
        };
        let request = client(config).projects_page(1).build().unwrap();
        let auth = request.headers().get("authorization").unwrap();
        assert!(auth.to_str().unwrap().starts_with("Basic "));
    }

    #[test]
    fn organization_is_appended_only_when_present() {
        let without = client(RunConfig::default())
            .hotspots_page("proj", 2)
            .build()
            .unwrap();
        assert_eq!(
            without.url().query(),
            Some("projectKey=proj&ps=500&p=2")
        );

        let config = RunConfig {
            organization: Some("acme".to_string()),
            ..RunConfig::default()
        };
        let with = client(config).hotspot_show("hs-1").build().unwrap();
        assert_eq!(with.url().query(), Some("hotspot=hs-1&organization=acme"));
    }
}

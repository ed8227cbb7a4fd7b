//! Cloudinary Search API client.

use crate::config::FunctionConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;

pub const SEARCH_MAX_RESULTS: u32 = 200;
const API_HOST: &str = "https://api.cloudinary.com";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Cloudinary API {status}: {body}")]
    Status { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub expression: String,
    pub max_results: u32,
    pub sort_by: Vec<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub with_field: Vec<String>,
}

impl SearchRequest {
    /// Newest images first from `folder` and its subfolders.
    pub fn for_folder(folder: &str) -> Self {
        Self {
            expression: format!("folder:{folder}/* AND resource_type:image"),
            max_results: SEARCH_MAX_RESULTS,
            sort_by: vec![BTreeMap::from([("created_at".to_string(), "desc".to_string())])],
            with_field: Vec::new(),
        }
    }

    /// Also ask for EXIF metadata, context and tags.
    pub fn with_metadata(mut self) -> Self {
        self.with_field = ["image_metadata", "context", "tags"]
            .into_iter()
            .map(String::from)
            .collect();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub secure_url: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub image_metadata: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    pub context: Option<serde_json::Value>,
}

impl Resource {
    /// `context.custom.caption`, when set.
    pub fn caption(&self) -> Option<&str> {
        self.context
            .as_ref()?
            .get("custom")?
            .get("caption")?
            .as_str()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub resources: Vec<Resource>,
}

/// Anything that can answer a folder search.
pub trait MediaSearch {
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError>;
}

pub struct CloudinaryClient {
    http: reqwest::blocking::Client,
    cloud_name: String,
    api_key: String,
    api_secret: String,
}

impl CloudinaryClient {
    pub fn new(config: &FunctionConfig) -> Result<Self, SearchError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self {
            http,
            cloud_name: config.cloud_name.clone(),
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
        })
    }

    pub fn endpoint(&self) -> String {
        search_endpoint(&self.cloud_name)
    }
}

pub fn search_endpoint(cloud_name: &str) -> String {
    format!("{API_HOST}/v1_1/{cloud_name}/resources/search")
}

impl MediaSearch for CloudinaryClient {
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        log::info!("[search] {}", request.expression);
        let response = self
            .http
            .post(self.endpoint())
            .basic_auth(&self.api_key, Some(&self.api_secret))
            .json(request)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_search_api() {
        let body = serde_json::to_value(SearchRequest::for_folder("my_love")).expect("serializable");
        assert_eq!(
            body,
            serde_json::json!({
                "expression": "folder:my_love/* AND resource_type:image",
                "max_results": 200,
                "sort_by": [{ "created_at": "desc" }]
            })
        );
    }

    #[test]
    fn metadata_request_lists_fields() {
        let body = serde_json::to_value(SearchRequest::for_folder("f").with_metadata())
            .expect("serializable");
        assert_eq!(
            body["with_field"],
            serde_json::json!(["image_metadata", "context", "tags"])
        );
    }

    #[test]
    fn endpoint_includes_cloud_name() {
        assert_eq!(
            search_endpoint("demo"),
            "https://api.cloudinary.com/v1_1/demo/resources/search"
        );
    }

    #[test]
    fn caption_is_read_from_custom_context() {
        let r: Resource = serde_json::from_value(serde_json::json!({
            "secure_url": "https://res.cloudinary.com/demo/a.jpg",
            "context": { "custom": { "caption": "first dance" } }
        }))
        .expect("resource");
        assert_eq!(r.caption(), Some("first dance"));
        assert_eq!(Resource::default().caption(), None);
    }
}

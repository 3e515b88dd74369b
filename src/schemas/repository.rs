use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repository as returned by the search endpoint.
///
/// Field names follow the GitHub wire format so the same struct is used for
/// decoding responses and for the JSON output of one-shot mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    #[serde(rename = "language", default)]
    pub primary_language: Option<String>,
    #[serde(rename = "forks_count")]
    pub fork_count: u64,
    #[serde(rename = "stargazers_count")]
    pub star_count: u64,
    #[serde(rename = "updated_at")]
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub license: Option<License>,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
}

/// Body of a successful `GET /search/repositories`. Only these two fields are read.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<RepositorySummary>,
    pub total_count: u64,
}

impl RepositorySummary {
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.name)
    }

    pub fn license_name(&self) -> Option<&str> {
        self.license.as_ref().map(|l| l.name.as_str())
    }

    pub fn topics(&self) -> &[String] {
        self.topics.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_github_item() {
        let json = r#"{
            "id": 10270250,
            "name": "react",
            "full_name": "facebook/react",
            "html_url": "https://github.com/facebook/react",
            "language": "JavaScript",
            "forks_count": 46000,
            "stargazers_count": 220000,
            "updated_at": "2024-05-01T12:30:00Z",
            "description": "The library for web and native user interfaces.",
            "license": {"key": "mit", "name": "MIT License", "spdx_id": "MIT"},
            "topics": ["javascript", "ui"],
            "private": false
        }"#;

        let repo: RepositorySummary = serde_json::from_str(json).unwrap();

        assert_eq!(repo.id, 10270250);
        assert_eq!(repo.display_name(), "facebook/react");
        assert_eq!(repo.primary_language.as_deref(), Some("JavaScript"));
        assert_eq!(repo.fork_count, 46000);
        assert_eq!(repo.star_count, 220000);
        assert_eq!(repo.last_updated.to_rfc3339(), "2024-05-01T12:30:00+00:00");
        assert_eq!(repo.license_name(), Some("MIT License"));
        assert_eq!(repo.topics(), ["javascript", "ui"]);
    }

    #[test]
    fn test_deserialize_nullable_fields() {
        let json = r#"{
            "id": 1,
            "name": "bare",
            "language": null,
            "forks_count": 0,
            "stargazers_count": 0,
            "updated_at": "2023-01-01T00:00:00Z",
            "description": null,
            "license": null
        }"#;

        let repo: RepositorySummary = serde_json::from_str(json).unwrap();

        assert_eq!(repo.display_name(), "bare");
        assert!(repo.primary_language.is_none());
        assert!(repo.description.is_none());
        assert!(repo.license_name().is_none());
        assert!(repo.topics().is_empty());
    }

    #[test]
    fn test_search_response_reads_items_and_total() {
        let json = r#"{
            "total_count": 57,
            "incomplete_results": false,
            "items": [{
                "id": 2,
                "name": "redux",
                "forks_count": 15000,
                "stargazers_count": 60000,
                "updated_at": "2024-02-02T00:00:00Z"
            }]
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.total_count, 57);
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].name, "redux");
    }
}

//! Analyze request and result.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Title shown when the server did not extract one.
pub const UNTITLED_VIDEO: &str = "Untitled Video";

/// Language assumed when the server did not detect one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Translation targets offered when the server does not send its own table.
pub const DEFAULT_SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("hi", "Hindi"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("bn", "Bengali"),
    ("mr", "Marathi"),
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("zh", "Chinese"),
];

/// Body of `POST /analyze/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub url: String,
}

impl AnalysisRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploader: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// A book, tool, site or other resource the video refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionedResource {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_topics: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentioned_resources: Option<Vec<MentionedResource>>,
}

/// Result of `POST /analyze/`.
///
/// Only the identity fields are required; the server omits or nulls the rest
/// depending on how far the analysis got. The accessor methods apply the
/// display defaults so callers never branch on `Option` themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub analysis_id: String,
    pub original_url: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AnalysisMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<AnalysisContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_transcript: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_languages: Option<BTreeMap<String, String>>,
    /// Server timestamp, kept verbatim (the backend emits naive ISO-8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl AnalysisResult {
    pub fn title(&self) -> &str {
        self.metadata
            .as_ref()
            .and_then(|m| m.title.as_deref())
            .filter(|t| !t.is_empty())
            .unwrap_or(UNTITLED_VIDEO)
    }

    pub fn summary(&self) -> &str {
        self.content
            .as_ref()
            .and_then(|c| c.summary.as_deref())
            .unwrap_or("")
    }

    pub fn key_topics(&self) -> &[String] {
        self.content
            .as_ref()
            .and_then(|c| c.key_topics.as_deref())
            .unwrap_or(&[])
    }

    pub fn mentioned_resources(&self) -> &[MentionedResource] {
        self.content
            .as_ref()
            .and_then(|c| c.mentioned_resources.as_deref())
            .unwrap_or(&[])
    }

    pub fn full_transcript(&self) -> &str {
        self.full_transcript.as_deref().unwrap_or("")
    }

    pub fn detected_language(&self) -> &str {
        self.detected_language
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Language code to display name, falling back to the built-in table.
    pub fn supported_languages(&self) -> BTreeMap<String, String> {
        match &self.supported_languages {
            Some(langs) if !langs.is_empty() => langs.clone(),
            _ => DEFAULT_SUPPORTED_LANGUAGES
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string()))
                .collect(),
        }
    }
}

//! Transcript language selection.

use crate::api::AnalysisApi;
use crate::types::analysis::DEFAULT_LANGUAGE;
use crate::types::AnalysisResult;
use crate::Result;
use std::collections::BTreeMap;
use tracing::debug;

/// Tracks which language the transcript is shown in.
///
/// Translations are not cached: switching back to a language requests it
/// again.
#[derive(Debug, Clone)]
pub struct TranscriptSelector {
    analysis_id: String,
    original: String,
    detected_language: String,
    supported: BTreeMap<String, String>,
    selected: String,
    translated: Option<String>,
}

impl TranscriptSelector {
    pub fn new(result: &AnalysisResult) -> Self {
        let supported = result.supported_languages();
        let detected_language = result.detected_language().to_string();
        let selected = Self::default_language(&supported, &detected_language);
        Self {
            analysis_id: result.analysis_id.clone(),
            original: result.full_transcript().to_string(),
            detected_language,
            supported,
            selected,
            translated: None,
        }
    }

    /// Detected language if offered, else English if offered, else the first code.
    pub fn default_language(supported: &BTreeMap<String, String>, detected: &str) -> String {
        if supported.contains_key(detected) {
            detected.to_string()
        } else if supported.contains_key(DEFAULT_LANGUAGE) {
            DEFAULT_LANGUAGE.to_string()
        } else {
            supported
                .keys()
                .next()
                .cloned()
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
        }
    }

    pub fn selected_language(&self) -> &str {
        &self.selected
    }

    pub fn supported_languages(&self) -> &BTreeMap<String, String> {
        &self.supported
    }

    /// The original transcript is shown for the detected language and English.
    pub fn needs_translation(&self, code: &str) -> bool {
        code != self.detected_language && code != DEFAULT_LANGUAGE
    }

    pub fn translated_text(&self) -> Option<&str> {
        self.translated.as_deref()
    }

    pub fn displayed_transcript(&self) -> &str {
        self.translated.as_deref().unwrap_or(&self.original)
    }

    /// Switch to `code`, translating when needed.
    ///
    /// The selection changes even if translation fails; in that case the
    /// original transcript is shown and the error is returned.
    pub async fn select<A>(&mut self, api: &A, code: &str) -> Result<()>
    where
        A: AnalysisApi + ?Sized,
    {
        self.selected = code.to_string();
        if !self.needs_translation(code) {
            self.translated = None;
            return Ok(());
        }

        debug!(
            analysis_id = self.analysis_id.as_str(),
            target_language = code,
            "translating transcript"
        );
        match api.translate_transcript(&self.analysis_id, code).await {
            Ok(result) => {
                self.translated = Some(result.translated_text);
                Ok(())
            }
            Err(err) => {
                self.translated = None;
                Err(err)
            }
        }
    }
}

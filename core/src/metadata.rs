use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::page::FIRST_PAGE;

/// Descriptor written next to the page images at build time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub page_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slides: Option<BTreeMap<String, SlideMeta>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_notes: Option<String>,
}

impl Metadata {
    pub fn new(page_count: u32) -> Self {
        Self {
            page_count,
            slides: None,
        }
    }

    pub fn with_notes(mut self, page: u32, notes: &str) -> Self {
        self.slides.get_or_insert_with(BTreeMap::new).insert(
            page.to_string(),
            SlideMeta {
                speaker_notes: Some(notes.to_string()),
            },
        );
        self
    }

    pub fn parse(raw: &str) -> Result<Self, MetadataError> {
        let metadata: Metadata =
            serde_json::from_str(raw).map_err(|err| MetadataError::Malformed(err.to_string()))?;
        if metadata.page_count < FIRST_PAGE {
            return Err(MetadataError::EmptyDeck);
        }
        Ok(metadata)
    }

    pub fn contains_page(&self, page: u32) -> bool {
        (FIRST_PAGE..=self.page_count).contains(&page)
    }

    /// Speaker notes for a page; out-of-range keys and blank notes are ignored.
    pub fn speaker_notes(&self, page: u32) -> Option<&str> {
        if !self.contains_page(page) {
            return None;
        }
        self.slides
            .as_ref()?
            .get(&page.to_string())?
            .speaker_notes
            .as_deref()
            .filter(|notes| !notes.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    Malformed(String),
    EmptyDeck,
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataError::Malformed(reason) => write!(f, "malformed metadata: {reason}"),
            MetadataError::EmptyDeck => write!(f, "metadata declares no pages"),
        }
    }
}

impl std::error::Error for MetadataError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_descriptor_with_notes() {
        let raw = r#"{"pageCount":3,"slides":{"2":{"speakerNotes":"Pause here."}}}"#;
        let metadata = Metadata::parse(raw).expect("parse");
        assert_eq!(metadata.page_count, 3);
        assert_eq!(metadata.speaker_notes(2), Some("Pause here."));
        assert_eq!(metadata.speaker_notes(1), None);
    }

    #[test]
    fn slides_are_optional() {
        let metadata = Metadata::parse(r#"{"pageCount":1}"#).expect("parse");
        assert_eq!(metadata.slides, None);
        assert_eq!(metadata.speaker_notes(1), None);
    }

    #[test]
    fn ignores_out_of_range_and_odd_keys() {
        let raw = r#"{
            "pageCount": 2,
            "slides": {
                "0": {"speakerNotes": "zero"},
                "3": {"speakerNotes": "past the end"},
                "02": {"speakerNotes": "padded"},
                "x": {"speakerNotes": "junk"},
                "1": {"speakerNotes": "first"},
                "2": {}
            }
        }"#;
        let metadata = Metadata::parse(raw).expect("parse");
        assert_eq!(metadata.speaker_notes(3), None);
        assert_eq!(metadata.speaker_notes(2), None);
        assert_eq!(metadata.speaker_notes(0), None);
        assert_eq!(metadata.speaker_notes(1), Some("first"));
    }

    #[test]
    fn rejects_empty_deck() {
        assert_eq!(
            Metadata::parse(r#"{"pageCount":0}"#),
            Err(MetadataError::EmptyDeck)
        );
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Metadata::parse("<html>not found</html>").unwrap_err();
        assert!(matches!(err, MetadataError::Malformed(_)));
        assert!(err.to_string().starts_with("malformed metadata"));
        assert!(matches!(
            Metadata::parse(r#"{"pageCount":-1}"#),
            Err(MetadataError::Malformed(_))
        ));
    }

    #[test]
    fn builder_matches_parsed_form() {
        let built = Metadata::new(2).with_notes(1, "hello");
        let parsed = Metadata::parse(r#"{"pageCount":2,"slides":{"1":{"speakerNotes":"hello"}}}"#)
            .expect("parse");
        assert_eq!(built, parsed);
    }
}

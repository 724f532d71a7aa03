//! JSON import/export of a whole deck.
//!
//! Link label overrides are session state and are not part of the document.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::deck::Presentation;

/// Fixed name of exported documents.
pub const EXPORT_FILE_NAME: &str = "presentation.json";

/// Serialize with two-space indentation.
pub fn to_json(presentation: &Presentation) -> Result<String> {
    serde_json::to_string_pretty(presentation).context("Failed to serialize presentation")
}

/// Parse and validate a document. Rejects decks without slides and decks whose
/// slide ids are not unique.
pub fn parse(text: &str) -> Result<Presentation> {
    let presentation: Presentation =
        serde_json::from_str(text).context("Not a valid presentation document")?;
    if presentation.slides.is_empty() {
        anyhow::bail!("Presentation document contains no slides");
    }
    if let Some(id) = presentation.duplicate_id() {
        anyhow::bail!("Presentation document contains duplicate slide id {id}");
    }
    Ok(presentation)
}

pub fn read(path: &Path) -> Result<Presentation> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse(&text).with_context(|| format!("Failed to import {}", path.display()))
}

/// Write the deck to `dir/presentation.json`, creating `dir` if needed.
pub fn export_to_dir(presentation: &Presentation, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join(EXPORT_FILE_NAME);
    let json = to_json(presentation)?;
    std::fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!(
        "Exported {} slide(s) to {}",
        presentation.slides.len(),
        path.display()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{SlideKind, default_presentation};

    #[test]
    fn test_round_trip_preserves_deck() {
        let pres = default_presentation();
        let json = to_json(&pres).unwrap();
        assert_eq!(parse(&json).unwrap(), pres);
    }

    #[test]
    fn test_export_is_indented() {
        let json = to_json(&default_presentation()).unwrap();
        assert!(json.contains("\n  \"title\""), "got {json}");
        assert!(json.contains("\"type\": \"title\""));
    }

    #[test]
    fn test_parse_accepts_documented_shape() {
        let text = r#"{
            "title": "Deck",
            "subtitle": "Sub",
            "slides": [
                { "id": 10, "title": "Hi", "content": ["a", "  • b"], "type": "agenda" },
                { "id": 3, "title": "Bye", "content": [], "type": "qa" }
            ]
        }"#;
        let pres = parse(text).unwrap();
        assert_eq!(pres.slides.len(), 2);
        assert_eq!(pres.slides[0].kind, SlideKind::Agenda);
        assert_eq!(pres.slides[1].id, 3);
    }

    #[test]
    fn test_parse_rejects_missing_or_empty_slides() {
        assert!(parse(r#"{ "title": "T", "subtitle": "S" }"#).is_err());
        assert!(parse(r#"{ "title": "T", "subtitle": "S", "slides": [] }"#).is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        assert!(parse("not json").is_err());
        assert!(parse(r#"{ "title": "T", "subtitle": "S", "slides": [{ "id": 1 }] }"#).is_err());
        let bad_kind = r#"{ "title": "T", "subtitle": "S",
            "slides": [{ "id": 1, "title": "x", "content": [], "type": "video" }] }"#;
        assert!(parse(bad_kind).is_err());
    }

    #[test]
    fn test_parse_accepts_negative_and_zero_ids() {
        let text = r#"{ "title": "T", "subtitle": "S", "slides": [
            { "id": -1, "title": "a", "content": [], "type": "content" },
            { "id": 0, "title": "b", "content": [], "type": "title" }
        ] }"#;
        let pres = parse(text).unwrap();
        assert_eq!(pres.slides[0].id, -1);
        assert_eq!(pres.next_id(), Some(1));
    }

    #[test]
    fn test_parse_rejects_duplicate_ids() {
        let text = r#"{ "title": "T", "subtitle": "S", "slides": [
            { "id": 1, "title": "a", "content": [], "type": "content" },
            { "id": 1, "title": "b", "content": [], "type": "content" }
        ] }"#;
        let err = parse(text).unwrap_err();
        assert!(err.to_string().contains("duplicate slide id 1"));
    }

    #[test]
    fn test_export_to_dir_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let pres = default_presentation();
        let path = export_to_dir(&pres, &dir.path().join("out")).unwrap();
        assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);
        assert_eq!(read(&path).unwrap(), pres);
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read(&dir.path().join("nope.json")).is_err());
    }
}

//! Medical record references and their wire format.
//!
//! Records arrive from the host as a YAML or JSON sequence (the YAML parser accepts both).
//! The engine only reads them. Field names used by the patient app are accepted as aliases:
//! `aiSummary` for `summary`, `type` for `category` and `contentText` for `free_text`.
//!
//! Two parsers are provided:
//! - [`parse_records`] is strict and reports the failing path.
//! - [`parse_records_lenient`] never fails: a malformed document yields no records and
//!   malformed entries are skipped.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{BodyMapError, BodyMapResult};

/// A read-only summary of one medical record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalRecordRef {
    #[serde(default)]
    pub title: String,

    #[serde(default, alias = "aiSummary")]
    pub summary: Option<String>,

    #[serde(default, alias = "type")]
    pub category: Option<String>,

    #[serde(default, alias = "contentText", alias = "freeText")]
    pub free_text: Option<String>,
}

impl MedicalRecordRef {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_free_text(mut self, free_text: impl Into<String>) -> Self {
        self.free_text = Some(free_text.into());
        self
    }

    /// The lowercase text keywords are matched against.
    ///
    /// `title summary category free_text`, missing fields as empty strings.
    pub fn haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.summary.as_deref().unwrap_or(""),
            self.category.as_deref().unwrap_or(""),
            self.free_text.as_deref().unwrap_or(""),
        )
        .to_lowercase()
    }
}

/// Parse a record list, failing on the first schema mismatch.
///
/// # Errors
///
/// Returns [`BodyMapError::InvalidYaml`] if the text is not YAML (or JSON) at all, and
/// [`BodyMapError::Translation`] naming the failing path (for example `[1].title`) if the
/// document is not a sequence of records.
pub fn parse_records(text: &str) -> BodyMapResult<Vec<MedicalRecordRef>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: serde_yaml::Value = serde_yaml::from_str(text).map_err(BodyMapError::InvalidYaml)?;
    match serde_path_to_error::deserialize::<_, Vec<MedicalRecordRef>>(value) {
        Ok(records) => Ok(records),
        Err(err) => {
            let path = err.path().to_string();
            let source = err.into_inner();
            let path = if path.is_empty() || path == "." {
                "<root>"
            } else {
                path.as_str()
            };
            Err(BodyMapError::Translation(format!(
                "record list schema mismatch at {path}: {source}"
            )))
        }
    }
}

/// Parse a record list, keeping whatever can be read.
pub fn parse_records_lenient(text: &str) -> Vec<MedicalRecordRef> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let entries = match serde_yaml::from_str::<Vec<serde_yaml::Value>>(text) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("record list is not a sequence, treating as empty: {e}");
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .enumerate()
        .filter_map(
            |(index, entry)| match serde_yaml::from_value::<MedicalRecordRef>(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(index, "skipping malformed record: {e}");
                    None
                }
            },
        )
        .collect()
}

/// Read a record list from `path`.
///
/// With `strict` the document must parse completely; otherwise malformed content is dropped.
///
/// # Errors
///
/// Returns [`BodyMapError::FileRead`] if the file cannot be read, and in strict mode any error
/// from [`parse_records`].
pub fn read_records_file(path: &Path, strict: bool) -> BodyMapResult<Vec<MedicalRecordRef>> {
    let text = std::fs::read_to_string(path).map_err(BodyMapError::FileRead)?;
    if strict {
        parse_records(&text)
    } else {
        Ok(parse_records_lenient(&text))
    }
}

/// Sample records shown when a patient has none on file.
pub fn demo_records() -> Vec<MedicalRecordRef> {
    vec![
        MedicalRecordRef::new("Occasional Migraines")
            .with_summary("Patient reports frequent headaches (Migraine) triggered by stress.")
            .with_category("Consultation"),
        MedicalRecordRef::new("Mild Arrhythmia")
            .with_summary(
                "ECG shows slight irregularities in heart rhythm. Monitoring recommended.",
            )
            .with_category("Cardiology"),
        MedicalRecordRef::new("Sore Knee")
            .with_summary("Left leg knee pain after running.")
            .with_category("Physio"),
    ]
}

use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use crate::page::page_model::FormElement;

/// Metadata entry holding the ISO-8601 submission timestamp.
pub const SUBMITTED_AT_FIELD: &str = "_submittedAt";

/// Metadata entry holding the page URL the submission came from.
pub const SOURCE_FIELD: &str = "_source";

/// Field values longer than this are cut in the error-popup preview.
pub const PREVIEW_VALUE_LIMIT: usize = 120;

const ELLIPSIS: char = '\u{2026}';

/// One submission's worth of data: the form's field values in form order,
/// followed by the two injected metadata entries. Immutable once built;
/// discarded after the attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    entries: Vec<(String, String)>,
    field_count: usize,
}

impl SubmissionPayload {
    /// Build the payload from a form's current field values and the page
    /// URL, stamping the submission time.
    pub fn from_form(form: &FormElement, page_url: &str) -> Self {
        let submitted_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        Self::from_fields(
            form.fields
                .iter()
                .map(|f| (f.name.clone(), f.value.clone()))
                .collect(),
            &submitted_at,
            page_url,
        )
    }

    /// Build from explicit parts. `fields` keeps its order; the metadata
    /// entries are appended after it, timestamp first.
    pub fn from_fields(
        fields: Vec<(String, String)>,
        submitted_at: &str,
        source: &str,
    ) -> Self {
        let field_count = fields.len();
        let mut entries = fields;
        entries.push((SUBMITTED_AT_FIELD.to_string(), submitted_at.to_string()));
        entries.push((SOURCE_FIELD.to_string(), source.to_string()));
        SubmissionPayload {
            entries,
            field_count,
        }
    }

    /// All entries, fields then metadata, in send order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// The user-entered field entries only, without the metadata.
    pub fn fields(&self) -> &[(String, String)] {
        &self.entries[..self.field_count]
    }

    pub fn entry(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// SHA-1 fingerprint of the full entry list, used to correlate trace
    /// events belonging to one submission.
    pub fn fingerprint(&self) -> String {
        use sha1::{Digest, Sha1};

        let mut hasher = Sha1::new();
        for (name, value) in &self.entries {
            hasher.update(name.as_bytes());
            hasher.update(b"=");
            hasher.update(value.as_bytes());
            hasher.update(b"\n");
        }
        format!("{:x}", hasher.finalize())
    }

    /// Pretty-printed JSON preview of the submitted field values, for the
    /// error popup. Metadata entries are excluded, and every over-long
    /// value is truncated so the popup stays readable.
    pub fn preview_json(&self) -> String {
        let mut map = serde_json::Map::new();
        for (name, value) in self.fields() {
            map.insert(name.clone(), Value::String(truncate_preview_value(value)));
        }
        serde_json::to_string_pretty(&Value::Object(map)).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Cut a field value to `PREVIEW_VALUE_LIMIT` characters plus an ellipsis
/// marker. Values at or under the limit pass through untouched.
pub fn truncate_preview_value(value: &str) -> String {
    if value.chars().count() > PREVIEW_VALUE_LIMIT {
        let mut cut: String = value.chars().take(PREVIEW_VALUE_LIMIT).collect();
        cut.push(ELLIPSIS);
        cut
    } else {
        value.to_string()
    }
}

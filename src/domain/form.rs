use percent_encoding::percent_decode_str;
use url::form_urlencoded;

use crate::error::ReaderSyncError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub key: String,
    pub value: String,
}

impl FormField {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        FormField {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Duplicate keys, blank values and empty keys are kept, a `%` without two
/// hex digits stays literal. Only escapes that decode to invalid UTF-8 fail.
pub fn decode_form(raw: &str) -> Result<Vec<FormField>, ReaderSyncError> {
    percent_decode_str(raw)
        .decode_utf8()
        .map_err(|e| ReaderSyncError::Format(format!("payload is not valid UTF-8: {}", e)))?;

    Ok(form_urlencoded::parse(raw.as_bytes())
        .map(|(key, value)| FormField::new(key, value))
        .collect())
}

pub fn encode_form(fields: &[FormField]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields.iter().map(|f| (f.key.as_str(), f.value.as_str())))
        .finish()
}

use crate::error::ReaderSyncError;

use super::form::{decode_form, encode_form, FormField};

pub const DEFAULT_READER_TYPE: &str = "google";

#[derive(Debug, Clone, PartialEq)]
pub struct ReaderEntry<'a> {
    pub index: usize,
    pub email: &'a str,
    pub reader_type: &'a str,
}

impl ReaderEntry<'_> {
    pub fn fields(&self, group_prefix: &str) -> [FormField; 3] {
        let key = |name: &str| format!("{}[{}][{}]", group_prefix, self.index, name);

        [
            FormField::new(key("email"), self.email),
            FormField::new(key("type"), self.reader_type),
            FormField::new(key("password"), ""),
        ]
    }
}

pub fn rewrite_fields(
    original: Vec<FormField>,
    emails: &[String],
    group_prefix: &str,
    reader_type: &str,
) -> Vec<FormField> {
    let mut fields: Vec<FormField> = original
        .into_iter()
        .filter(|field| !field.key.starts_with(group_prefix))
        .collect();

    fields.extend(emails.iter().enumerate().flat_map(|(index, email)| {
        ReaderEntry {
            index,
            email,
            reader_type,
        }
        .fields(group_prefix)
    }));

    fields
}

pub fn rewrite_payload(
    original: &str,
    emails: &[String],
    group_prefix: &str,
) -> Result<String, ReaderSyncError> {
    rewrite_payload_with_type(original, emails, group_prefix, DEFAULT_READER_TYPE)
}

pub fn rewrite_payload_with_type(
    original: &str,
    emails: &[String],
    group_prefix: &str,
    reader_type: &str,
) -> Result<String, ReaderSyncError> {
    let fields = decode_form(original)?;
    let original_count = fields.len();
    let fields = rewrite_fields(fields, emails, group_prefix, reader_type);

    log::debug!(
        "Rewrote payload: {} original fields, {} kept, {} reader groups added",
        original_count,
        fields.len() - emails.len() * 3,
        emails.len()
    );

    Ok(encode_form(&fields))
}

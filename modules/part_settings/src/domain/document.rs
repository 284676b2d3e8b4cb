//! Reading settings back out of documents

use super::hidden;
use crate::contract::{Document, SettingsError, SETTINGS_BOOK_TAG};

/// Hidden payload carried by the last lore line of a book
pub fn document_payload(document: &Document) -> Result<String, SettingsError> {
    let last = document.lore.last().ok_or_else(|| SettingsError::MissingContent {
        section: "lore".to_string(),
    })?;
    if !document.is_book() {
        return Err(SettingsError::NotADocument {
            kind: document.kind.to_string(),
        });
    }
    hidden::decode(last)?.ok_or_else(|| SettingsError::MissingContent {
        section: "settings payload".to_string(),
    })
}

/// Whether a document is a settings book written by `author`
pub fn is_settings_book(document: &Document, author: &str) -> bool {
    document.author.as_deref() == Some(author)
        && document_payload(document)
            .map(|payload| {
                payload
                    .strip_prefix(SETTINGS_BOOK_TAG)
                    .is_some_and(|rest| rest.starts_with(','))
            })
            .unwrap_or(false)
}

// file: src/utils/validation.rs
// description: document record validation at the fetch boundary
// reference: input validation patterns

use crate::error::{PresenterError, Result};
use crate::models::{Document, DocumentRecord};
use std::fs;
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_input_file(path: &Path) -> Result<()> {
        let metadata = fs::metadata(path).map_err(|e| PresenterError::FileOperation {
            path: path.to_path_buf(),
            source: e,
        })?;

        if !metadata.is_file() {
            return Err(PresenterError::Validation(format!(
                "Path is not a file: {}",
                path.display()
            )));
        }

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(()),
            _ => Err(PresenterError::Validation(format!(
                "Input is not a JSON file: {}",
                path.display()
            ))),
        }
    }

    pub fn validate_record(record: &DocumentRecord) -> Result<()> {
        Self::validate_fields(&record.id, &record.title, &record.file_name, &record.file_url)
    }

    pub fn validate_document(document: &Document) -> Result<()> {
        Self::validate_fields(
            &document.id,
            &document.title,
            &document.file_name,
            &document.file_url,
        )
    }

    fn validate_fields(id: &str, title: &str, file_name: &str, file_url: &str) -> Result<()> {
        Self::validate_not_empty("id", id)?;
        Self::validate_not_empty("title", title).map_err(|e| with_id(e, id))?;
        Self::validate_not_empty("fileName", file_name).map_err(|e| with_id(e, id))?;
        Self::validate_url(file_url).map_err(|e| with_id(e, id))?;
        Ok(())
    }

    pub fn validate_not_empty(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(PresenterError::Validation(format!("{} is empty", field)));
        }
        Ok(())
    }

    /// Absolute http(s) URLs or site-relative paths.
    pub fn validate_url(url: &str) -> Result<()> {
        let url = url.trim();
        let absolute = url.starts_with("http://") || url.starts_with("https://");
        let relative = url.starts_with('/') && !url.starts_with("//");

        if !absolute && !relative {
            return Err(PresenterError::Validation(format!(
                "Invalid file URL: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            Some((idx, _)) => format!("{}...", &text[..idx]),
            None => text.to_string(),
        }
    }
}

fn with_id(error: PresenterError, id: &str) -> PresenterError {
    match error {
        PresenterError::Validation(message) => {
            PresenterError::Validation(format!("document {}: {}", id, message))
        }
        other => other,
    }
}

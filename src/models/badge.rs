// file: src/models/badge.rs
// description: file-type badge inferred from a document's file name
// reference: internal data structures

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileBadge {
    Pdf,
    Doc,
    Xls,
    Ppt,
}

impl FileBadge {
    /// Never fails; unknown or missing extensions are shown as PDF.
    pub fn infer(file_name: &str) -> Self {
        let extension = match file_name.rsplit_once('.') {
            Some((_, ext)) => ext.to_ascii_lowercase(),
            None => return FileBadge::Pdf,
        };

        match extension.as_str() {
            "doc" | "docx" => FileBadge::Doc,
            "xls" | "xlsx" => FileBadge::Xls,
            "ppt" | "pptx" => FileBadge::Ppt,
            _ => FileBadge::Pdf,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileBadge::Pdf => "PDF",
            FileBadge::Doc => "DOC",
            FileBadge::Xls => "XLS",
            FileBadge::Ppt => "PPT",
        }
    }
}

impl fmt::Display for FileBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

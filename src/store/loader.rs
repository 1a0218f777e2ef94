// file: src/store/loader.rs
// description: loads stored document records and pre-buckets them by group key
// reference: https://docs.rs/serde_json

use crate::error::{PresenterError, Result};
use crate::grouping::OrderingRules;
use crate::models::{Document, DocumentRecord, GroupingMode};
use crate::utils::Validator;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Accepted input shapes: a flat list of stored rows, or documents already
/// bucketed by raw group key.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DocumentSource {
    Records(Vec<DocumentRecord>),
    Grouped(BTreeMap<String, Vec<Document>>),
}

/// Documents bucketed by raw group key, buckets in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketedDocuments {
    pub groups: Vec<(String, Vec<Document>)>,
    pub skipped: usize,
}

impl BucketedDocuments {
    pub fn document_count(&self) -> usize {
        self.groups.iter().map(|(_, docs)| docs.len()).sum()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}

impl IntoIterator for BucketedDocuments {
    type Item = (String, Vec<Document>);
    type IntoIter = std::vec::IntoIter<(String, Vec<Document>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

pub struct DocumentStore {
    mode: GroupingMode,
    rules: OrderingRules,
    strict: bool,
}

impl DocumentStore {
    pub fn new(mode: GroupingMode, rules: OrderingRules) -> Self {
        Self {
            mode,
            rules,
            strict: false,
        }
    }

    /// Fail on the first invalid or duplicate record instead of skipping it.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn load(&self, path: &Path) -> Result<BucketedDocuments> {
        Validator::validate_input_file(path)?;
        info!("Loading documents from: {}", path.display());

        let content = fs::read_to_string(path).map_err(|e| PresenterError::FileOperation {
            path: path.to_path_buf(),
            source: e,
        })?;

        self.parse(&content)
    }

    pub fn parse(&self, content: &str) -> Result<BucketedDocuments> {
        match serde_json::from_str::<DocumentSource>(content)? {
            DocumentSource::Records(records) => self.bucket(records),
            DocumentSource::Grouped(groups) => self.accept_grouped(groups),
        }
    }

    /// Derive each record's group key and bucket documents under it.
    pub fn bucket(&self, records: Vec<DocumentRecord>) -> Result<BucketedDocuments> {
        let mut out = BucketedDocuments::default();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut seen_ids: HashSet<String> = HashSet::new();

        for record in records {
            let checked = Validator::validate_record(&record);
            if let Err(e) = self.check(&record.id, checked, &seen_ids) {
                if self.strict {
                    return Err(e);
                }
                warn!("Skipping record: {}", e);
                out.skipped += 1;
                continue;
            }
            seen_ids.insert(record.id.clone());

            let key = record.resolve_group_key(self.mode, &self.rules);
            let document = record.into_document();
            match index.get(&key) {
                Some(&i) => out.groups[i].1.push(document),
                None => {
                    index.insert(key.clone(), out.groups.len());
                    out.groups.push((key, vec![document]));
                }
            }
        }

        debug!(
            "Bucketed {} documents into {} groups ({} skipped)",
            out.document_count(),
            out.group_count(),
            out.skipped
        );
        Ok(out)
    }

    fn accept_grouped(
        &self,
        groups: BTreeMap<String, Vec<Document>>,
    ) -> Result<BucketedDocuments> {
        let mut out = BucketedDocuments::default();
        let mut seen_ids: HashSet<String> = HashSet::new();

        for (raw_key, documents) in groups {
            let key = if raw_key.trim().is_empty() {
                self.rules.ungrouped_sentinel.clone()
            } else {
                raw_key
            };

            let mut kept = Vec::with_capacity(documents.len());
            for document in documents {
                let checked = Validator::validate_document(&document);
                if let Err(e) = self.check(&document.id, checked, &seen_ids) {
                    if self.strict {
                        return Err(e);
                    }
                    warn!("Skipping document in group {:?}: {}", key, e);
                    out.skipped += 1;
                    continue;
                }
                seen_ids.insert(document.id.clone());
                kept.push(document);
            }
            out.groups.push((key, kept));
        }

        Ok(out)
    }

    fn check(&self, id: &str, validated: Result<()>, seen_ids: &HashSet<String>) -> Result<()> {
        validated?;
        if seen_ids.contains(id) {
            return Err(PresenterError::Validation(format!("duplicate document id {}", id)));
        }
        Ok(())
    }
}

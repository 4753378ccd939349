//! @ai:module:intent Group edit sites by file and order them for bottom-up application
//! @ai:module:layer domain
//! @ai:module:public_api EditSite, EditSites, FileEdits
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// @ai:intent A declaration start line that needs a deprecation notice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditSite {
    pub line: usize,
    pub declaration: String,
}

/// @ai:intent All sites of one file, highest line first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileEdits {
    pub file: PathBuf,
    pub sites: Vec<EditSite>,
}

/// @ai:intent Mapping from file path to the sites collected for it
#[derive(Debug, Clone, Default)]
pub struct EditSites {
    files: BTreeMap<PathBuf, Vec<EditSite>>,
}

impl EditSite {
    pub fn new(line: usize, declaration: impl Into<String>) -> Self {
        Self {
            line,
            declaration: declaration.into(),
        }
    }
}

impl EditSites {
    /// @ai:intent Record a site under a file; duplicates are kept
    pub fn push(&mut self, file: &Path, site: EditSite) {
        self.files.entry(file.to_path_buf()).or_default().push(site);
    }

    /// @ai:intent Total number of recorded sites across files
    pub fn len(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// @ai:intent Sites recorded for one file, in insertion order
    pub fn get(&self, file: &Path) -> Option<&[EditSite]> {
        self.files.get(file).map(Vec::as_slice)
    }

    /// @ai:intent Consume the group, sorting every file's sites by descending line
    /// @ai:post sites within each FileEdits are strictly non-increasing by line
    /// @ai:effects pure
    pub fn into_descending(self) -> Vec<FileEdits> {
        self.files
            .into_iter()
            .map(|(file, mut sites)| {
                sites.sort_by(|a, b| b.line.cmp(&a.line));
                FileEdits { file, sites }
            })
            .collect()
    }
}

impl FileEdits {
    pub fn lines(&self) -> Vec<usize> {
        self.sites.iter().map(|s| s.line).collect()
    }
}

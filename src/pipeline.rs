//! @ai:module:intent Run the scan, annotate and rewrite pipeline
//! @ai:module:layer application
//! @ai:module:public_api plan, run, RunReport, FileReport
//! @ai:module:depends_on config, metadata, scanner, sites, source, annotator, error

use crate::annotator::{annotate, AppliedEdit, Notice};
use crate::config::AnnotatorConfig;
use crate::error::Result;
use crate::metadata::load_assembly;
use crate::scanner::scan_assembly;
use crate::sites::FileEdits;
use crate::source::SourceFile;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// @ai:intent Edits applied to one file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub file: PathBuf,
    pub edits: Vec<AppliedEdit>,
    pub lines_inserted: usize,
}

/// @ai:intent Outcome of a full run
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RunReport {
    pub target_file: PathBuf,
    pub files: Vec<FileReport>,
}

impl RunReport {
    pub fn total_edits(&self) -> usize {
        self.files.iter().map(|f| f.edits.len()).sum()
    }

    pub fn total_lines_inserted(&self) -> usize {
        self.files.iter().map(|f| f.lines_inserted).sum()
    }
}

/// @ai:intent Compute the edit sites without touching any source file
/// @ai:post each FileEdits lists its sites by descending line
/// @ai:effects fs:read
pub fn plan(config: &AnnotatorConfig) -> Result<Vec<FileEdits>> {
    let metadata_path = config.metadata_path();
    tracing::info!("Loading metadata from {}", metadata_path.display());

    let assembly = load_assembly(&metadata_path)?;
    let sites = scan_assembly(&assembly, &config.target_file, config.member_scope);

    tracing::info!(
        "Found {} edit sites in {} types",
        sites.len(),
        assembly.types.len()
    );

    Ok(sites.into_descending())
}

/// @ai:intent Annotate every planned site and overwrite the touched files
/// @ai:effects fs:read, fs:write
/// @ai:idempotent false
/// @ai:edge_cases the first failing file aborts the run; files already written stay written
pub fn run(config: &AnnotatorConfig) -> Result<RunReport> {
    let notice = Notice::for_replacement(&config.replacement);
    let mut report = RunReport {
        target_file: config.target_file.clone(),
        ..Default::default()
    };

    for file_edits in plan(config)? {
        let path = config.source_path(&file_edits.file);

        let mut source = SourceFile::load(&path)?;
        let edits = annotate(&mut source, &file_edits.sites, &notice)?;
        source.persist()?;

        let lines_inserted: usize = edits.iter().map(|e| e.insertion.lines_added()).sum();
        tracing::info!(
            "Annotated {} ({} edits, {} lines)",
            file_edits.file.display(),
            edits.len(),
            lines_inserted
        );

        report.files.push(FileReport {
            file: file_edits.file,
            edits,
            lines_inserted,
        });
    }

    Ok(report)
}

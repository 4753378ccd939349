//! @ai:module:intent Library for adding deprecation notices to declarations listed in a jsii assembly
//! @ai:module:layer infrastructure
//! @ai:module:public_api annotator, config, error, metadata, output, pipeline, scanner, sites, source
//!
//! # Deprecation annotator
//!
//! Reads the `.jsii` metadata of a module, picks every declaration of one
//! source file that is not already deprecated, and appends a
//! `@deprecated use <module> instead` tag to the doc comment right above it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use deprecation_annotator::{output, pipeline, AnnotatorConfig};
//!
//! let config = AnnotatorConfig::default();
//! let report = pipeline::run(&config).unwrap();
//! println!("{}", output::format_run_report(&report, output::OutputFormat::Text));
//! ```

pub mod annotator;
pub mod config;
pub mod error;
pub mod metadata;
pub mod output;
pub mod pipeline;
pub mod scanner;
pub mod sites;
pub mod source;

pub use annotator::{annotate, starts_new_doc_entry, AppliedEdit, Insertion, Notice};
pub use config::AnnotatorConfig;
pub use error::{Error, Result};
pub use metadata::{load_assembly, Assembly, Stability};
pub use output::{format_plan, format_run_report, OutputFormat};
pub use pipeline::{plan, run, FileReport, RunReport};
pub use scanner::{scan_assembly, MemberScope};
pub use sites::{EditSite, EditSites, FileEdits};
pub use source::SourceFile;

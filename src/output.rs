//! @ai:module:intent Format plans and run reports for different formats (JSON, text)
//! @ai:module:layer infrastructure
//! @ai:module:public_api OutputFormat, format_plan, format_run_report
//! @ai:module:depends_on pipeline, sites, annotator
//! @ai:module:stateless true

use crate::annotator::Insertion;
use crate::pipeline::RunReport;
use crate::sites::FileEdits;
use colored::Colorize;

/// @ai:intent Output format options
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    JsonPretty,
}

/// @ai:intent Format planned edit sites as a string
/// @ai:effects pure
pub fn format_plan(plan: &[FileEdits], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(plan).unwrap_or_default(),
        OutputFormat::JsonPretty => serde_json::to_string_pretty(plan).unwrap_or_default(),
        OutputFormat::Text => format_plan_text(plan),
    }
}

fn format_plan_text(plan: &[FileEdits]) -> String {
    let mut output = String::new();

    for file in plan {
        output.push_str(&format!(
            "{} ({} sites)\n",
            file.file.display().to_string().bold(),
            file.sites.len()
        ));

        for site in &file.sites {
            output.push_str(&format!(
                "  {} {}\n",
                format!("line {:>5}", site.line).dimmed(),
                site.declaration.cyan()
            ));
        }
    }

    let total: usize = plan.iter().map(|f| f.sites.len()).sum();
    if total == 0 {
        output.push_str(&format!("{} Nothing to annotate\n", "OK".green().bold()));
    } else {
        output.push_str(&format!(
            "\n{} edit sites in {} files\n",
            total.to_string().yellow(),
            plan.len()
        ));
    }

    output
}

/// @ai:intent Format a run report as a string
/// @ai:effects pure
pub fn format_run_report(report: &RunReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(report).unwrap_or_default(),
        OutputFormat::JsonPretty => serde_json::to_string_pretty(report).unwrap_or_default(),
        OutputFormat::Text => format_run_report_text(report),
    }
}

fn format_run_report_text(report: &RunReport) -> String {
    let mut output = String::new();

    for file in &report.files {
        output.push_str(&format!("{}\n", file.file.display().to_string().bold()));

        for edit in &file.edits {
            let shape = match edit.insertion {
                Insertion::NoticeOnly => "notice",
                Insertion::SeparatorAndNotice => "separator + notice",
            };

            output.push_str(&format!(
                "  {} {} ({})\n",
                format!("line {:>5}", edit.line).dimmed(),
                edit.declaration.cyan(),
                shape
            ));
        }
    }

    if report.files.is_empty() {
        output.push_str(&format!(
            "{} No declarations to annotate in {}\n",
            "OK".green().bold(),
            report.target_file.display()
        ));
    } else {
        output.push_str(&format!(
            "\n{} Annotated {} declarations, inserted {} lines in {} files\n",
            "OK".green().bold(),
            report.total_edits(),
            report.total_lines_inserted(),
            report.files.len()
        ));
    }

    output
}

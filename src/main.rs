//! @ai:module:intent CLI entry point for the deprecation annotator
//! @ai:module:layer presentation
//! @ai:module:public_api main
//! @ai:module:depends_on pipeline, config, output

use clap::{Args, Parser, Subcommand, ValueEnum};
use deprecation_annotator::{output, pipeline, AnnotatorConfig, MemberScope, OutputFormat};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "deprecate")]
#[command(author, version, about = "Mark a module's declarations @deprecated from its .jsii metadata")]
struct Cli {
    /// Defaults to `apply` with no options
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert deprecation notices and rewrite the affected files
    Apply(RunOptions),

    /// List the lines that would be annotated, without writing
    Plan(RunOptions),

    /// Write a default configuration file
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = "deprecate.toml")]
        output: PathBuf,
    },
}

#[derive(Args, Default)]
struct RunOptions {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the metadata and source paths are relative to
    #[arg(long)]
    root: Option<PathBuf>,

    /// Metadata file, relative to root
    #[arg(long)]
    metadata: Option<PathBuf>,

    /// Source file to annotate, as recorded in the metadata
    #[arg(long)]
    target: Option<PathBuf>,

    /// Module named as the replacement in the notice
    #[arg(long)]
    replacement: Option<String>,

    /// Which file a type's members are recorded under
    #[arg(long, value_enum)]
    members: Option<Members>,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    format: Format,
}

#[derive(Clone, Copy, Default, ValueEnum)]
enum Format {
    #[default]
    Text,
    Json,
    JsonPretty,
}

#[derive(Clone, Copy, ValueEnum)]
enum Members {
    AsReported,
    TargetOnly,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
            Format::JsonPretty => OutputFormat::JsonPretty,
        }
    }
}

impl From<Members> for MemberScope {
    fn from(m: Members) -> Self {
        match m {
            Members::AsReported => MemberScope::AsReported,
            Members::TargetOnly => MemberScope::TargetOnly,
        }
    }
}

impl RunOptions {
    /// @ai:intent Load the config file if given, then apply flag overrides
    /// @ai:effects fs:read
    fn resolve(&self) -> deprecation_annotator::Result<AnnotatorConfig> {
        let mut config = match &self.config {
            Some(path) => AnnotatorConfig::load(path)?,
            None => AnnotatorConfig::default(),
        };

        if let Some(root) = &self.root {
            config.root = root.clone();
        }
        if let Some(metadata) = &self.metadata {
            config.metadata_file = metadata.clone();
        }
        if let Some(target) = &self.target {
            config.target_file = target.clone();
        }
        if let Some(replacement) = &self.replacement {
            config.replacement = replacement.clone();
        }
        if let Some(members) = self.members {
            config.member_scope = members.into();
        }

        Ok(config)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("deprecation_annotator=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or_else(|| Commands::Apply(RunOptions::default())) {
        Commands::Apply(options) => {
            let result = options.resolve().and_then(|config| pipeline::run(&config));

            match result {
                Ok(report) => {
                    println!("{}", output::format_run_report(&report, options.format.into()));
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::from(2)
                }
            }
        }

        Commands::Plan(options) => {
            let result = options.resolve().and_then(|config| pipeline::plan(&config));

            match result {
                Ok(plan) => {
                    println!("{}", output::format_plan(&plan, options.format.into()));
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::from(2)
                }
            }
        }

        Commands::Init { output } => match AnnotatorConfig::default().save(&output) {
            Ok(()) => {
                tracing::info!("Wrote default configuration to {}", output.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(2)
            }
        },
    }
}

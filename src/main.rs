// src/main.rs
use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use nbsummary::{
    analyze_directory, analyze_notebook, deliver, render_json, render_markdown, AnalysisOutcome,
    AppError, CommandLineInput, DeliveryTarget, DirectoryOutcome, NotebookSource, OutputPlan,
    OutputReport, RenderedMarkdown, RunConfig, RunTarget, SummaryComposer, SummaryDelivery,
};
use std::fs;
use std::path::Path;
use std::process::ExitCode;

/// Sets up logging configuration.
///
/// Console output goes to stderr so single-notebook summaries on stdout
/// stay pipeable.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("nbsummary.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let console_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)
        .with_context(|| format!("opening log file {}", log_file_path.display()))?;

    let config = Config::builder()
        .appender(Appender::builder().build("console", Box::new(console_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("console")
                .appender("file")
                .build(log_level),
        )
        .context("building logging configuration")?;

    log4rs::init_config(config).context("installing logger")?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Summarizes one notebook to stdout: analyze → render → deliver.
fn summarize_notebook(config: &RunConfig, path: &Path) -> Result<(), AppError> {
    let summarizer = NotebookSummarizer::new(config);

    let outcome = summarizer.analyze(path);
    let rendered = summarizer.compose(&outcome)?;
    let report = summarizer.deliver(rendered)?;

    log::debug!("Delivered {} bytes", report.bytes_written);
    Ok(())
}

/// Summarizes every notebook under `root` into the configured report file.
fn summarize_directory(config: &RunConfig, root: &Path) -> Result<(), AppError> {
    let outcome = analyze_directory(root, &config.output_filename, |notebook| {
        println!(
            "Analyzing: {}",
            notebook
                .file_name()
                .map(|name| name.to_string_lossy())
                .unwrap_or_default()
        );
    })?;

    match outcome {
        DirectoryOutcome::RootMissing { root } => {
            println!("Directory not found: {}", root.display());
        }
        DirectoryOutcome::NoNotebooks { root } => {
            println!("No notebooks found in {}", root.display());
        }
        DirectoryOutcome::Report(report) => {
            let summary = &report.summary;
            if summary.degraded > 0 {
                eprintln!(
                    "⚠️  {} of {} notebooks could not be loaded and were summarized with fallback values ({} analyzed).",
                    summary.degraded,
                    summary.notebooks,
                    summary.analyzed()
                );
            }
            println!(
                "✓ Summary generated: {} ({} notebooks, {} topics, {} code cells)",
                report.output_path.display(),
                summary.notebooks,
                summary.topics,
                summary.code_cells
            );
        }
    }
    Ok(())
}

/// Runs the single-notebook stages against the resolved configuration.
struct NotebookSummarizer<'a> {
    config: &'a RunConfig,
}

impl<'a> NotebookSummarizer<'a> {
    fn new(config: &'a RunConfig) -> Self {
        Self { config }
    }
}

impl NotebookSource for NotebookSummarizer<'_> {
    fn analyze(&self, path: &Path) -> AnalysisOutcome {
        log::debug!("Analyzing {}", path.display());
        analyze_notebook(path)
    }
}

impl SummaryComposer for NotebookSummarizer<'_> {
    fn compose(&self, outcome: &AnalysisOutcome) -> Result<RenderedMarkdown, AppError> {
        let body = if self.config.json {
            render_json(outcome.result())?
        } else {
            render_markdown(outcome.result())
        };
        Ok(RenderedMarkdown::new(format!("{}\n", body)))
    }
}

impl SummaryDelivery for NotebookSummarizer<'_> {
    fn deliver(&self, rendered: RenderedMarkdown) -> Result<OutputReport, AppError> {
        let plan = OutputPlan::new().with_operation(DeliveryTarget::PrintToStdout {
            content: rendered.into_string(),
        });

        let report = deliver(plan)?;
        if !report.is_success() {
            return Err(AppError::DeliveryFailed {
                failures: report.failure_messages(),
            });
        }
        Ok(report)
    }
}

fn run(cli: CommandLineInput) -> Result<(), AppError> {
    let config = RunConfig::resolve(cli)?;
    setup_logging(config.verbose)?;

    match &config.target {
        RunTarget::Notebook(path) => summarize_notebook(&config, path),
        RunTarget::Directory(root) => summarize_directory(&config, root),
    }
}

fn main() -> ExitCode {
    let cli = CommandLineInput::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

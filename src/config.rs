// src/config.rs
use crate::constants::{DEFAULT_OUTPUT_FILENAME, NOTEBOOK_EXTENSION};
use crate::error::AppError;
use crate::types::OutputFilename;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Analyze Jupyter notebooks and generate descriptions",
    long_about = None
)]
pub struct CommandLineInput {
    /// Path to notebook file or directory
    pub path: PathBuf,

    /// Output file name for directory analysis, relative to the directory
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILENAME)]
    pub output: String,

    /// Print a single notebook's analysis as JSON instead of markdown
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// What an invocation operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunTarget {
    /// A single `.ipynb` file, summarized to stdout.
    Notebook(PathBuf),
    /// A directory tree, summarized into a report file inside it.
    Directory(PathBuf),
}

impl RunTarget {
    /// Classifies `path` by looking at the filesystem.
    pub fn classify(path: &Path) -> Result<Self, AppError> {
        if path.is_file() && has_notebook_extension(path) {
            Ok(Self::Notebook(path.to_path_buf()))
        } else if path.is_dir() {
            Ok(Self::Directory(path.to_path_buf()))
        } else {
            Err(AppError::InvalidInput(path.to_path_buf()))
        }
    }
}

fn has_notebook_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == NOTEBOOK_EXTENSION)
}

/// Resolved run configuration, validated and ready to drive one invocation.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub target: RunTarget,
    pub output_filename: OutputFilename,
    pub json: bool,
    pub verbose: bool,
}

impl RunConfig {
    /// Resolves a complete configuration from CLI input.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let output_filename = OutputFilename::new(cli.output)?;
        let target = RunTarget::classify(&cli.path)?;

        Ok(RunConfig {
            target,
            output_filename,
            json: cli.json,
            verbose: cli.verbose,
        })
    }
}

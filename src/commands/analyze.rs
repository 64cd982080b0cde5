use crate::analyzers::{analyze_path, Extractor, PythonExtractor};
use crate::core::aggregate::aggregate;
use crate::core::{AnalysisResults, DirectoryAnalysis, FileAnalysis, FileReport};
use crate::errors::UnparsableFile;
use crate::formatting::{ColorMode, FormattingConfig};
use crate::io::output;
use crate::io::walker::FileWalker;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: crate::cli::OutputFormat,
    pub output: Option<PathBuf>,
    pub ignore: Vec<String>,
    pub no_default_ignores: bool,
    pub jobs: usize,
    pub parallel: bool,
    pub formatting_config: FormattingConfig,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let formatting = effective_formatting(&config);
    configure_output(formatting);
    configure_thread_pool(config.jobs)?;

    let results = analyze_target(&config)?;

    let mut writer =
        output::create_writer(config.format.into(), config.output.clone(), formatting)?;
    writer.write_results(&results)
}

/// Analyze every Python file under the configured path and assemble the
/// results. Individual files that fail to parse are logged and skipped; the
/// scan itself only fails when the path cannot be walked at all.
pub fn analyze_target(config: &AnalyzeConfig) -> Result<AnalysisResults> {
    anyhow::ensure!(
        config.path.exists(),
        "path does not exist: {}",
        config.path.display()
    );

    let files = collect_files(config)?;
    log::info!(
        "found {} Python files under {}",
        files.len(),
        config.path.display()
    );

    let extractor = PythonExtractor::new();
    let (outcomes, summary) = if config.parallel {
        analyze_files_parallel(&extractor, &files)
    } else {
        analyze_files(&extractor, &files)
    };

    for err in outcomes.iter().filter_map(|outcome| outcome.as_ref().err()) {
        log::warn!("{err}");
    }

    Ok(build_results(&config.path, &files, outcomes, summary))
}

type FileOutcome = Result<FileAnalysis, UnparsableFile>;

fn analyze_files(
    extractor: &dyn Extractor,
    files: &[PathBuf],
) -> (Vec<FileOutcome>, DirectoryAnalysis) {
    let outcomes: Vec<FileOutcome> = files
        .iter()
        .map(|path| analyze_path(extractor, path))
        .collect();
    let summary = aggregate(&outcomes);
    (outcomes, summary)
}

/// Parallel variant: files are parsed on the rayon pool and the per-thread
/// partial summaries are merged. The merge is order-independent, so the
/// result is identical to the sequential fold.
fn analyze_files_parallel(
    extractor: &dyn Extractor,
    files: &[PathBuf],
) -> (Vec<FileOutcome>, DirectoryAnalysis) {
    let outcomes: Vec<FileOutcome> = files
        .par_iter()
        .map(|path| analyze_path(extractor, path))
        .collect();
    let summary = outcomes
        .par_iter()
        .fold(DirectoryAnalysis::default, |acc, outcome| {
            acc.record(outcome)
        })
        .reduce(DirectoryAnalysis::default, DirectoryAnalysis::merge);
    (outcomes, summary)
}

fn build_results(
    root: &Path,
    files: &[PathBuf],
    outcomes: Vec<FileOutcome>,
    summary: DirectoryAnalysis,
) -> AnalysisResults {
    let mut reports: Vec<FileReport> = files
        .iter()
        .zip(outcomes)
        .filter_map(|(path, outcome)| match outcome {
            Ok(analysis) if analysis.has_definitions() => Some(FileReport {
                path: relative_to(root, path),
                analysis,
            }),
            _ => None,
        })
        .collect();
    reports.sort_by(|a, b| a.path.cmp(&b.path));

    AnalysisResults {
        root: root.to_path_buf(),
        files: reports,
        summary,
    }
}

fn relative_to(root: &Path, path: &Path) -> PathBuf {
    match path.strip_prefix(root) {
        Ok(stripped) if !stripped.as_os_str().is_empty() => stripped.to_path_buf(),
        _ => path.to_path_buf(),
    }
}

fn collect_files(config: &AnalyzeConfig) -> Result<Vec<PathBuf>> {
    let mut walker = FileWalker::new(config.path.clone());
    if config.no_default_ignores {
        walker = walker.without_default_ignores();
    }
    walker
        .with_ignore_patterns(&config.ignore)
        .walk()
        .context("failed to scan for Python files")
}

/// Color makes no sense when the report goes to a file.
fn effective_formatting(config: &AnalyzeConfig) -> FormattingConfig {
    let mut formatting = config.formatting_config;
    if config.output.is_some() {
        formatting.color = ColorMode::Never;
    }
    formatting
}

fn configure_output(formatting: FormattingConfig) {
    if formatting.color.should_use_color() {
        colored::control::set_override(true);
    } else {
        colored::control::set_override(false);
    }
}

fn configure_thread_pool(jobs: usize) -> Result<()> {
    if jobs == 0 {
        return Ok(());
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build_global()
        .context("failed to configure worker threads")
}

//! Folding per-file results into a directory-level summary.

use super::{DirectoryAnalysis, FileAnalysis};
use crate::errors::UnparsableFile;
use std::collections::BTreeMap;

/// First dotted segment of a recorded import, used as the aggregation key.
///
/// `os.path` counts toward `os`; a relative import such as `.util` counts
/// toward the empty root.
pub fn import_root(name: &str) -> &str {
    name.split_once('.').map_or(name, |(root, _)| root)
}

impl DirectoryAnalysis {
    /// Absorb the outcome of analyzing one file.
    ///
    /// Files that failed to parse still count toward the file total but
    /// contribute nothing else; their paths land in `skipped`.
    pub fn record(mut self, outcome: &Result<FileAnalysis, UnparsableFile>) -> Self {
        self.files += 1;
        match outcome {
            Ok(analysis) => self.absorb(analysis),
            Err(err) => {
                self.skipped.insert(err.path().to_path_buf());
                self
            }
        }
    }

    fn absorb(mut self, analysis: &FileAnalysis) -> Self {
        self.total_lines += analysis.line_count;
        for class in &analysis.classes {
            self.classes.insert(class.name.clone());
        }
        for function in &analysis.functions {
            self.functions.insert(function.clone());
        }
        for import in &analysis.imports {
            *self
                .import_counts
                .entry(import_root(import).to_string())
                .or_insert(0) += 1;
        }
        self
    }

    /// Combine two summaries. Merging is commutative and associative, so
    /// partial summaries built on worker threads can be combined in any
    /// order.
    pub fn merge(mut self, other: Self) -> Self {
        self.files += other.files;
        self.total_lines += other.total_lines;
        self.classes.extend(other.classes);
        self.functions.extend(other.functions);
        for (root, count) in other.import_counts {
            *self.import_counts.entry(root).or_insert(0) += count;
        }
        self.skipped.extend(other.skipped);
        self
    }
}

/// Fold a sequence of per-file outcomes into one summary.
pub fn aggregate(outcomes: &[Result<FileAnalysis, UnparsableFile>]) -> DirectoryAnalysis {
    outcomes
        .iter()
        .fold(DirectoryAnalysis::default(), |acc, outcome| {
            acc.record(outcome)
        })
}

/// Import roots ranked by frequency, highest first, ties broken by name.
pub fn top_imports(counts: &BTreeMap<String, usize>, limit: usize) -> Vec<(&str, usize)> {
    let mut ranked: Vec<(&str, usize)> = counts
        .iter()
        .map(|(root, count)| (root.as_str(), *count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(limit);
    ranked
}

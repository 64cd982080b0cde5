pub mod aggregate;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// Structure extracted from a single Python source file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAnalysis {
    pub imports: Vec<String>,
    pub classes: Vec<ClassInfo>,
    pub functions: Vec<String>,
    pub line_count: usize,
}

impl FileAnalysis {
    /// True when the file declares at least one class or module-level function.
    pub fn has_definitions(&self) -> bool {
        !self.classes.is_empty() || !self.functions.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfo {
    pub name: String,
    pub methods: Vec<String>,
    pub bases: Vec<String>,
}

impl ClassInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
            bases: Vec::new(),
        }
    }
}

/// Totals accumulated across every file found under the analysis root.
///
/// Class and function names are kept as sets, so a name declared in several
/// files counts once. Import counts are keyed by the root package of each
/// recorded import.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryAnalysis {
    pub files: usize,
    pub total_lines: usize,
    pub classes: BTreeSet<String>,
    pub functions: BTreeSet<String>,
    pub import_counts: BTreeMap<String, usize>,
    pub skipped: BTreeSet<PathBuf>,
}

/// Per-file detail retained for reporting, keyed by path relative to the
/// analysis root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub analysis: FileAnalysis,
}

/// Everything a reporter needs: the root that was analyzed, the per-file
/// reports worth showing, and the aggregate summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub root: PathBuf,
    pub files: Vec<FileReport>,
    pub summary: DirectoryAnalysis,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_has_no_definitions() {
        let analysis = FileAnalysis::default();
        assert!(!analysis.has_definitions());
    }

    #[test]
    fn imports_alone_are_not_definitions() {
        let analysis = FileAnalysis {
            imports: vec!["os".to_string()],
            line_count: 1,
            ..Default::default()
        };
        assert!(!analysis.has_definitions());
    }

    #[test]
    fn classes_and_functions_are_definitions() {
        let with_class = FileAnalysis {
            classes: vec![ClassInfo::new("Config")],
            ..Default::default()
        };
        let with_function = FileAnalysis {
            functions: vec!["main".to_string()],
            ..Default::default()
        };
        assert!(with_class.has_definitions());
        assert!(with_function.has_definitions());
    }

    #[test]
    fn file_report_serializes_flat() {
        let report = FileReport {
            path: PathBuf::from("pkg/app.py"),
            analysis: FileAnalysis {
                functions: vec!["main".to_string()],
                line_count: 3,
                ..Default::default()
            },
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["path"], "pkg/app.py");
        assert_eq!(json["line_count"], 3);
        assert_eq!(json["functions"][0], "main");
    }
}

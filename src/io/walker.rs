use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Directory and file patterns skipped by default. Tool caches, virtual
/// environments, and build output, not source.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    "__pycache__",
    ".git",
    ".pytest_cache",
    ".venv",
    "venv",
    "node_modules",
    ".tox",
    "build",
    "dist",
    "*.egg-info",
];

pub struct FileWalker {
    root: PathBuf,
    ignore_patterns: Vec<glob::Pattern>,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ignore_patterns: compile_patterns(DEFAULT_IGNORE_PATTERNS),
        }
    }

    /// Drop the built-in pattern list, leaving only hidden-entry filtering.
    pub fn without_default_ignores(mut self) -> Self {
        self.ignore_patterns.clear();
        self
    }

    /// Add extra ignore patterns on top of whatever is already configured.
    pub fn with_ignore_patterns(mut self, patterns: &[String]) -> Self {
        self.ignore_patterns.extend(compile_patterns(patterns));
        self
    }

    /// Collect the Python files under the root, sorted by path.
    ///
    /// Hidden files and directories are never descended into. A root that is
    /// itself a file is returned as-is, so explicitly named targets bypass
    /// the extension and ignore filters.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        if self.root.is_file() {
            return Ok(vec![self.root.clone()]);
        }

        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .hidden(true)
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        path.extension().and_then(|ext| ext.to_str()) == Some("py") && !self.is_ignored(path)
    }

    /// Patterns match individual components of the path below the root, so
    /// `build` skips anything inside a `build/` directory without reacting
    /// to a `build` segment in the root itself.
    fn is_ignored(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative.components().any(|component| {
            let name = component.as_os_str().to_string_lossy();
            self.ignore_patterns
                .iter()
                .any(|pattern| pattern.matches(&name))
        })
    }
}

fn compile_patterns<S: AsRef<str>>(patterns: &[S]) -> Vec<glob::Pattern> {
    patterns
        .iter()
        .filter_map(|raw| match glob::Pattern::new(raw.as_ref()) {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                log::warn!("ignoring invalid pattern {:?}: {err}", raw.as_ref());
                None
            }
        })
        .collect()
}

/// Walk `root` with the default ignore patterns.
pub fn find_python_files(root: &Path) -> Result<Vec<PathBuf>> {
    FileWalker::new(root.to_path_buf()).walk()
}

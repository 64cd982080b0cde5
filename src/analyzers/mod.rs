use crate::core::FileAnalysis;
use crate::errors::UnparsableFile;
use std::fs;
use std::path::Path;

pub mod python;

pub use python::PythonExtractor;

/// Extracts the structural outline of one source file.
///
/// Implementations parse `content` and report what the file declares at the
/// top level. They never touch the file system; `path` only labels failures.
/// A failure describes that one file, so callers skip it and keep going.
pub trait Extractor: Send + Sync {
    fn extract(&self, content: &str, path: &Path) -> Result<FileAnalysis, UnparsableFile>;
}

/// Read `path` from disk and run `extractor` over its content.
pub fn analyze_path(
    extractor: &dyn Extractor,
    path: &Path,
) -> Result<FileAnalysis, UnparsableFile> {
    let content = fs::read_to_string(path).map_err(|e| UnparsableFile::read(path, &e))?;
    extractor.extract(&content, path)
}

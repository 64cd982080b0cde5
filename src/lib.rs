// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;

// Re-export commonly used types
pub use crate::core::{AnalysisResults, ClassInfo, DirectoryAnalysis, FileAnalysis, FileReport};

pub use crate::core::aggregate::{aggregate, import_root, top_imports};

pub use crate::errors::UnparsableFile;

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::analyzers::{analyze_path, Extractor, PythonExtractor};

pub use crate::io::walker::{find_python_files, FileWalker};

use crate::core::aggregate::top_imports;
use crate::core::{AnalysisResults, FileReport};
use crate::formatting::{ColoredFormatter, FormattingConfig, OutputFormatter};
use anyhow::Context;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_results(&mut self, results: &AnalysisResults) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(results)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Renders the human-readable report: a header with the file count, one
/// short section per file worth showing, then the codebase summary.
pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: ColoredFormatter,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, FormattingConfig::default())
    }

    pub fn with_config(writer: W, config: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: ColoredFormatter::new(config),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_results(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        self.write_header(results)?;
        for report in &results.files {
            self.write_file(report)?;
        }
        self.write_summary(results)?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_header(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        let title = format!("=== Directory Analysis: {} ===", results.root.display());
        writeln!(self.writer, "{}", self.formatter.header(&title))?;
        writeln!(self.writer, "Found {} Python files", results.summary.files)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_file(&mut self, report: &FileReport) -> anyhow::Result<()> {
        let lines = format!("({} lines)", report.analysis.line_count);
        writeln!(
            self.writer,
            "{} {} {}",
            self.formatter.emoji("\u{1F4C4}", "*"),
            self.formatter.bold(&file_label(report)),
            self.formatter.dim(&lines),
        )?;

        for class in report.analysis.classes.iter().take(2) {
            let methods = if class.methods.is_empty() {
                String::new()
            } else {
                format!(" ({} methods)", class.methods.len())
            };
            writeln!(
                self.writer,
                "   {} {}{}",
                self.formatter.emoji("\u{1F3DB}\u{FE0F}", "class"),
                class.name,
                methods,
            )?;
        }

        for function in report.analysis.functions.iter().take(3) {
            writeln!(
                self.writer,
                "   {} {}()",
                self.formatter.emoji("\u{2699}\u{FE0F}", "fn"),
                function,
            )?;
        }

        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        let summary = &results.summary;
        writeln!(
            self.writer,
            "{}",
            self.formatter.header("=== CODEBASE SUMMARY ===")
        )?;
        writeln!(
            self.writer,
            "{} Total lines: {}",
            self.formatter.emoji("\u{1F4CA}", "-"),
            summary.total_lines,
        )?;
        writeln!(
            self.writer,
            "{} Classes: {}",
            self.formatter.emoji("\u{1F3DB}\u{FE0F}", "-"),
            summary.classes.len(),
        )?;
        writeln!(
            self.writer,
            "{} Functions: {}",
            self.formatter.emoji("\u{2699}\u{FE0F}", "-"),
            summary.functions.len(),
        )?;

        let ranked = top_imports(&summary.import_counts, 5);
        if !ranked.is_empty() {
            let joined = ranked
                .iter()
                .map(|(root, count)| format!("{root}({count})"))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                self.writer,
                "{} Key imports: {}",
                self.formatter.emoji("\u{1F4E6}", "-"),
                joined,
            )?;
        }
        Ok(())
    }
}

/// File sections show just the file name; the full relative path lives in
/// the JSON output.
fn file_label(report: &FileReport) -> String {
    report
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| report.path.display().to_string())
}

pub fn create_writer(
    format: OutputFormat,
    output: Option<PathBuf>,
    config: FormattingConfig,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(std::io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::with_config(sink, config)),
    })
}

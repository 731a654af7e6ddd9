use crate::measures::{InMemorySink, Measure};
use crate::scanner::ScanReport;
use clap::ValueEnum;
use colored::*;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &ScanReport<InMemorySink>) -> anyhow::Result<()>;
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
    fn write_report(&mut self, report: &ScanReport<InMemorySink>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_summary(&mut self, report: &ScanReport<InMemorySink>) -> anyhow::Result<()> {
        let s = &report.summary;
        writeln!(self.writer, "{}", "MetricFu Complexity".bold())?;
        writeln!(
            self.writer,
            "{} files seen, {} measured, {} without functions, {} failed",
            s.files_seen, s.files_measured, s.files_skipped, s.files_failed
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_measures(&mut self, report: &ScanReport<InMemorySink>) -> anyhow::Result<()> {
        for (path, measures) in report.measures.iter() {
            writeln!(self.writer, "{}", path.display().to_string().cyan())?;
            for saved in measures {
                match &saved.measure {
                    Measure::FileComplexityDistribution(dist) => {
                        writeln!(self.writer, "  file complexity distribution: {dist}")?
                    }
                    Measure::FunctionComplexity(mean) => {
                        writeln!(self.writer, "  function complexity (mean): {mean:.1}")?
                    }
                    Measure::FunctionComplexityDistribution(dist) => {
                        writeln!(self.writer, "  function complexity distribution: {dist}")?
                    }
                }
            }
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &ScanReport<InMemorySink>) -> anyhow::Result<()> {
        self.write_summary(report)?;
        self.write_measures(report)?;
        Ok(())
    }
}

/// Writer for the chosen format, to a file when `output` is given and
/// stdout otherwise.
pub fn create_writer(
    format: OutputFormat,
    output: Option<PathBuf>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SourceFile;
    use crate::measures::{MeasureSink, PersistenceMode};
    use crate::scanner::ScanSummary;

    fn sample_report() -> ScanReport<InMemorySink> {
        let mut sink = InMemorySink::new();
        let file = SourceFile::from_path(PathBuf::from("app/models/user.rb"));
        sink.save_measure(
            &file,
            Measure::FunctionComplexity(5.0),
            PersistenceMode::Full,
        );
        ScanReport {
            summary: ScanSummary {
                files_seen: 1,
                files_measured: 1,
                ..ScanSummary::default()
            },
            measures: sink,
        }
    }

    #[test]
    fn json_output_is_valid_json() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["summary"]["files_measured"], 1);
    }

    #[test]
    fn terminal_output_lists_files_and_means() {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("app/models/user.rb"));
        assert!(text.contains("function complexity (mean): 5.0"));
    }
}

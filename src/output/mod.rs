use std::io::{self, Write};
use serde::Serialize;

use crate::scanner::ScanReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    List,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "list" => Ok(OutputFormat::List),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScanStats {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub modules: usize,
}

#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    pub modules: &'a [String],
    pub stats: ScanStats,
}

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(report: &ScanReport, format: OutputFormat) -> String {
        match format {
            OutputFormat::List => Self::format_list(&report.modules),
            OutputFormat::Json => Self::format_json(report),
        }
    }

    /// One name per line, no header.
    pub fn format_list(modules: &[String]) -> String {
        modules.join("\n")
    }

    /// Writes the formatted report followed by a newline, or nothing when it
    /// is empty. A reader that goes away early (`| head`) is not an error.
    pub fn write_report<W: Write>(
        out: &mut W,
        report: &ScanReport,
        format: OutputFormat,
    ) -> io::Result<()> {
        let output = Self::format(report, format);
        if output.is_empty() {
            return Ok(());
        }

        match writeln!(out, "{}", output).and_then(|_| out.flush()) {
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
            result => result,
        }
    }

    pub fn format_json(report: &ScanReport) -> String {
        let output = JsonOutput {
            modules: &report.modules,
            stats: ScanStats {
                files_scanned: report.files_scanned,
                files_skipped: report.files_skipped,
                modules: report.modules.len(),
            },
        };

        serde_json::to_string_pretty(&output).unwrap_or_default()
    }
}

// src/report/mod.rs
// =============================================================================
// Turns an AnalysisResult into something a person or a program can read.
//
// Submodules:
// - text: plain-text sections for the console
// - html: standalone HTML page (also the source for PDFs)
//
// Formats:
// - console: text on stdout
// - json: compact or pretty JSON, on stdout or in a file
// - html: HTML file
// - pdf: HTML converted by an external tool (wkhtmltopdf by default)
//
// The format is checked only when the report is produced, after the
// analysis has finished, so a bad format never costs the analysis.
// =============================================================================

mod html;
mod text;

pub use html::render_html;
pub use text::format_text;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::str::FromStr;

use log::{debug, info};

use crate::analyzer::AnalysisResult;
use crate::error::ExportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Console,
    Json,
    Html,
    Pdf,
}

impl ReportFormat {
    /// File written when no --output is given. JSON and console go to stdout.
    pub fn default_output(self) -> Option<&'static str> {
        match self {
            ReportFormat::Html => Some("seo_report.html"),
            ReportFormat::Pdf => Some("seo_report.pdf"),
            ReportFormat::Console | ReportFormat::Json => None,
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "console" => Ok(ReportFormat::Console),
            "json" => Ok(ReportFormat::Json),
            "html" => Ok(ReportFormat::Html),
            "pdf" => Ok(ReportFormat::Pdf),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportFormat::Console => "console",
            ReportFormat::Json => "json",
            ReportFormat::Html => "html",
            ReportFormat::Pdf => "pdf",
        };
        f.write_str(name)
    }
}

pub fn to_json(result: &AnalysisResult, pretty: bool) -> Result<String, ExportError> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

// Writes the report for a file-based format to `path`
//
// Only json, html and pdf can be written to a file; console is rejected
// with UnsupportedFormat.
pub fn export(
    result: &AnalysisResult,
    format: ReportFormat,
    path: &Path,
    pdf_tool: &str,
) -> Result<(), ExportError> {
    match format {
        ReportFormat::Json => fs::write(path, to_json(result, true)?)?,
        ReportFormat::Html => fs::write(path, render_html(result))?,
        ReportFormat::Pdf => export_pdf(result, path, pdf_tool)?,
        ReportFormat::Console => {
            return Err(ExportError::UnsupportedFormat(format.to_string()));
        }
    }
    info!("{} report written to {}", format, path.display());
    Ok(())
}

// Renders HTML next to the target, converts it, then removes the HTML
fn export_pdf(result: &AnalysisResult, path: &Path, pdf_tool: &str) -> Result<(), ExportError> {
    let temp = temp_html_path(path);
    fs::write(&temp, render_html(result))?;

    debug!("running {} {} {}", pdf_tool, temp.display(), path.display());
    let outcome = Command::new(pdf_tool).arg(&temp).arg(path).output();

    if let Err(e) = fs::remove_file(&temp) {
        debug!("could not remove {}: {}", temp.display(), e);
    }

    let output = outcome.map_err(|e| ExportError::PdfTool {
        tool: pdf_tool.to_string(),
        reason: e.to_string(),
    })?;

    if !output.status.success() {
        return Err(ExportError::PdfTool {
            tool: pdf_tool.to_string(),
            reason: format!(
                "{}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ),
        });
    }
    Ok(())
}

fn temp_html_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp.html");
    PathBuf::from(name)
}

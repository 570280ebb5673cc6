//! Report emitters.
//!
//! Both formats consume the same [`Report`]; they differ only in how it is
//! written out.

mod json;
mod text;

pub use json::write_json;
pub use text::write_text;

use std::io::Write;

use crate::error::HarnessError;
use crate::harness::Report;

/// Output format of a harness run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// One line per (algorithm, dataset), then one summary line per algorithm
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Write `report` to `out` in the given format
pub fn emit<W: Write>(report: &Report, format: ReportFormat, out: &mut W) -> Result<(), HarnessError> {
    match format {
        ReportFormat::Text => write_text(report, out)?,
        ReportFormat::Json => write_json(report, out)?,
    }
    out.flush()?;
    Ok(())
}

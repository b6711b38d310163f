//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod clean;
mod explain;
mod generate;
mod output;

pub use check::CheckReport;
pub use clean::CleanReport;
pub use explain::{AliasSummary, ExplainReport, LintInfo, PhaseInfo};
pub use generate::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};
pub use output::{Report, TerminalOutput};

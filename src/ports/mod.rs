//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Import Ports
//!
//! - `ProblemReader` - Reads a decision problem from CSV, JSON or YAML input
//!
//! ## Export Ports
//!
//! - `ReportExporter` - Renders an evaluation report as a table or JSON

mod problem_reader;
mod report_exporter;

pub use problem_reader::{ImportError, ImportFormat, ProblemReader};
pub use report_exporter::{ExportError, ExportFormat, ReportExporter};

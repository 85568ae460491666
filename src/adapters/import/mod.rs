//! Import adapters - Implementations of the `ProblemReader` port.

mod csv_reader;
mod structured_reader;

pub use csv_reader::CsvProblemReader;
pub use structured_reader::StructuredProblemReader;

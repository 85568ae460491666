//! CSV problem reader.
//!
//! Reads a decision matrix laid out as a spreadsheet: the header row names the
//! criteria, the first column names the alternatives.
//!
//! ```text
//! Alternative,Capacity,Cost,Emissions
//! Plant A,120,45,3.2
//! Plant B,95,38,2.1
//! ```

use std::collections::HashSet;
use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::domain::foundation::CriterionType;
use crate::domain::problem::{Criterion, DecisionProblem};
use crate::ports::{ImportError, ProblemReader};

/// Reads problems from CSV with a header row.
///
/// Every criterion is beneficial unless its header name is listed in
/// `cost_criteria`. A cell is read from its leading number, so `12 kg` is `12`
/// and `3.5%` is `3.5`. Cells without a leading number are read as `0.0` and
/// left for evaluation to reject.
#[derive(Debug, Clone, Default)]
pub struct CsvProblemReader {
    cost_criteria: HashSet<String>,
    delimiter: Option<u8>,
}

impl CsvProblemReader {
    /// Creates a reader with default settings (comma separated, all beneficial).
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the named criteria as cost criteria.
    pub fn with_cost_criteria<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cost_criteria
            .extend(names.into_iter().map(|n| n.into().trim().to_string()));
        self
    }

    /// Uses a field delimiter other than a comma.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    fn criterion_for(&self, name: &str) -> Criterion {
        let criterion_type = if self.cost_criteria.contains(name) {
            CriterionType::Cost
        } else {
            CriterionType::Beneficial
        };
        Criterion::new(name, criterion_type)
    }

    fn parse_row(&self, record: &StringRecord, line: usize, criteria: &[Criterion]) -> Vec<f64> {
        criteria
            .iter()
            .enumerate()
            .map(|(j, criterion)| {
                let cell = record.get(j + 1).unwrap_or("");
                match leading_number(cell) {
                    Some(value) if value.is_finite() => value,
                    _ => {
                        warn!(
                            line,
                            criterion = %criterion.name,
                            cell,
                            "Unparsable cell read as 0"
                        );
                        0.0
                    }
                }
            })
            .collect()
    }
}

impl ProblemReader for CsvProblemReader {
    fn read_problem(&self, input: &mut dyn Read) -> Result<DecisionProblem, ImportError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .delimiter(self.delimiter.unwrap_or(b','))
            .from_reader(input);

        let headers = reader
            .headers()
            .map_err(|e| ImportError::Parse(e.to_string()))?
            .clone();

        if headers.iter().all(|h| h.is_empty()) {
            return Err(ImportError::Empty);
        }
        if headers.len() < 2 {
            return Err(ImportError::MissingCriteria);
        }

        let criteria: Vec<Criterion> = headers
            .iter()
            .skip(1)
            .map(|name| self.criterion_for(name))
            .collect();

        for name in &self.cost_criteria {
            if !criteria.iter().any(|c| &c.name == name) {
                warn!(criterion = %name, "Cost criterion not found in header");
            }
        }

        let mut alternatives = Vec::new();
        let mut values = Vec::new();

        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|e| ImportError::Parse(e.to_string()))?;
            if record.iter().all(|cell| cell.is_empty()) {
                continue;
            }
            // Header is line 1.
            let line = index + 2;
            alternatives.push(record.get(0).unwrap_or("").to_string());
            values.push(self.parse_row(&record, line, &criteria));
        }

        if alternatives.is_empty() {
            return Err(ImportError::Empty);
        }

        debug!(
            alternatives = alternatives.len(),
            criteria = criteria.len(),
            "CSV problem read"
        );

        Ok(DecisionProblem::new(alternatives, criteria, values)?)
    }
}

/// Parses the longest numeric prefix of `cell`: sign, digits, fraction, exponent.
fn leading_number(cell: &str) -> Option<f64> {
    let bytes = cell.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let integer = digits_from(end);
    end += integer;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits_from(end + 1);
        if integer > 0 || fraction > 0 {
            end += 1 + fraction;
        }
    }
    if integer == 0 && fraction == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exponent = digits_from(exp_end);
        if exponent > 0 {
            end = exp_end + exponent;
        }
    }

    cell[..end].parse().ok()
}

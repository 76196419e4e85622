//! Contribution record types shared across the pipeline

/// 0-based field positions per the FEC individual-contributions data
/// dictionary. Only the fields this pipeline reads are named here.
pub const CMTE_ID: usize = 0;
pub const NAME: usize = 7;
pub const ZIP_CODE: usize = 10;
pub const TRANSACTION_DT: usize = 13;
pub const TRANSACTION_AMT: usize = 14;
pub const OTHER_ID: usize = 15;

/// Number of pipe-separated fields in a well-formed input line.
pub const FIELD_COUNT: usize = 21;

/// One pipe-delimited input line, split into its 21 fields.
#[derive(Debug, Clone)]
pub struct RawRecord {
    fields: Vec<String>,
}

impl RawRecord {
    /// Split a line into a `RawRecord`.
    ///
    /// Lines that do not split into exactly 21 fields are rejected here,
    /// before structural validation ever sees them.
    pub fn from_line(line: &str) -> Option<Self> {
        let fields: Vec<String> = line.split('|').map(str::to_string).collect();
        if fields.len() != FIELD_COUNT {
            return None;
        }
        Some(Self { fields })
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn committee_id(&self) -> &str {
        &self.fields[CMTE_ID]
    }

    pub fn donor_name(&self) -> &str {
        &self.fields[NAME]
    }

    pub fn zip_code(&self) -> &str {
        &self.fields[ZIP_CODE]
    }

    pub fn transaction_date(&self) -> &str {
        &self.fields[TRANSACTION_DT]
    }

    pub fn transaction_amount(&self) -> &str {
        &self.fields[TRANSACTION_AMT]
    }

    pub fn other_id(&self) -> &str {
        &self.fields[OTHER_ID]
    }
}

/// A `RawRecord` that passed structural validation, with derived fields.
///
/// Immutable after creation; downstream stages only read it.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedTransaction {
    pub committee_id: String,
    /// First five digits of the ZIP code.
    pub zip5: String,
    /// Calendar year, from the last four digits of the transaction date.
    pub year: u16,
    /// Donor identity: name + zip5, leading spaces stripped.
    pub donor_key: String,
    pub amount: f64,
}

//! Structural validation gate over raw contribution records

use super::record::{RawRecord, ValidatedTransaction, FIELD_COUNT};

/// Validate one raw record.
///
/// Returns `None` for records that are structurally uninteresting:
/// routed through an intermediary committee, malformed date/zip/amount,
/// missing donor name. Rejection is silent; invalid records are dropped,
/// never treated as errors.
pub fn validate(raw: &RawRecord) -> Option<ValidatedTransaction> {
    if raw.field_count() < FIELD_COUNT {
        return None;
    }
    // Any entry in OTHER_ID means the contribution was routed through an
    // intermediary or joint committee, not given directly by an individual.
    if !raw.other_id().is_empty() {
        return None;
    }
    let date = raw.transaction_date();
    if date.len() != 8 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let zip = raw.zip_code();
    if zip.len() < 5 || !zip.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let name = raw.donor_name();
    if name.is_empty() {
        return None;
    }
    let committee_id = raw.committee_id();
    if committee_id.len() != 9 {
        return None;
    }
    // Unparseable amounts are rejected rather than defaulted to zero so
    // they cannot pollute bucket statistics.
    let amount = match raw.transaction_amount().parse::<f64>() {
        Ok(amount) if amount.is_finite() => amount,
        _ => return None,
    };

    let zip5 = &zip[..5];
    let year = date[4..].parse::<u16>().ok()?;
    let donor_key = format!("{}{}", name, zip5)
        .trim_start_matches(' ')
        .to_string();

    Some(ValidatedTransaction {
        committee_id: committee_id.to_string(),
        zip5: zip5.to_string(),
        year,
        donor_key,
        amount,
    })
}

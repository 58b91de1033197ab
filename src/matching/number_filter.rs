//! Per-contact phone number selection.

use crate::domain::PhoneLabel;
use crate::models::ContactRecord;

/// Select the numbers of `record` that a search should offer.
///
/// With a label filter only numbers carrying that label are kept, and a
/// contact left with no numbers is dropped (`None`). Without a filter, mobile
/// numbers (normalized prefix `mobile_prefix`) are preferred; a contact with
/// no mobile number keeps all of its numbers and is never dropped.
pub fn select_numbers(
    record: &ContactRecord,
    label: Option<&PhoneLabel>,
    mobile_prefix: &str,
) -> Option<ContactRecord> {
    match label {
        Some(label) => {
            let labeled: Vec<_> = record
                .phone_numbers
                .iter()
                .filter(|entry| entry.label.as_ref() == Some(label))
                .cloned()
                .collect();

            if labeled.is_empty() {
                None
            } else {
                Some(record.with_numbers(labeled))
            }
        }
        None => {
            let mobile: Vec<_> = record
                .phone_numbers
                .iter()
                .filter(|entry| entry.number.has_prefix(mobile_prefix))
                .cloned()
                .collect();

            if mobile.is_empty() {
                Some(record.clone())
            } else {
                Some(record.with_numbers(mobile))
            }
        }
    }
}

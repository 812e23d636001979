// Record validation.
//
// Pure: the same record always yields the same ordered error list. Every
// applicable error is reported, not just the first one.

use crate::form::document::FieldId;
use crate::models::{DonationRecord, Mode};
use crate::utils::validation::{check_postcode_prefix, is_five_digit_postcode};
use thiserror::Error;

/// A single user-input problem. `Display` is the message shown to the donor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("select clothing type.")]
    MissingClothingType,
    #[error("select a crisis region.")]
    MissingCrisis,
    #[error("enter pickup address.")]
    MissingAddress,
    #[error("enter a valid 5-digit postal code.")]
    InvalidPostcode,
    #[error("postal code not near office location (first two digits must match).")]
    PostcodeOutOfArea,
}

impl FieldError {
    /// Field the error belongs to.
    pub fn field(&self) -> FieldId {
        match self {
            FieldError::MissingClothingType => FieldId::ClothingType,
            FieldError::MissingCrisis => FieldId::Crisis,
            FieldError::MissingAddress => FieldId::Address,
            FieldError::InvalidPostcode | FieldError::PostcodeOutOfArea => FieldId::Postcode,
        }
    }
}

/// Validate a collected record against the office prefix.
pub fn validate_record(record: &DonationRecord, office_prefix: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if record.clothing_type.is_empty() {
        errors.push(FieldError::MissingClothingType);
    }
    if record.crisis.is_empty() {
        errors.push(FieldError::MissingCrisis);
    }

    if record.mode == Mode::Pickup {
        if record.address.trim().is_empty() {
            errors.push(FieldError::MissingAddress);
        }

        let postcode = record.postcode.trim();
        if !is_five_digit_postcode(postcode) {
            errors.push(FieldError::InvalidPostcode);
        } else if !check_postcode_prefix(postcode, office_prefix) {
            errors.push(FieldError::PostcodeOutOfArea);
        }
    }

    errors
}

/// Messages joined with a single space, as shown in the message area.
pub fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    const PREFIX: &str = "10";

    fn record(mode: Mode) -> DonationRecord {
        DonationRecord {
            mode,
            name: String::new(),
            email: String::new(),
            clothing_type: "coats".to_string(),
            crisis: "regionA".to_string(),
            address: "Main St 1".to_string(),
            postcode: "10115".to_string(),
            timestamp: Utc::now(),
        }
    }

    // -------------------------------------------------------------------------
    // Required selections
    // -------------------------------------------------------------------------

    #[test]
    fn complete_pickup_record_is_valid() {
        assert!(validate_record(&record(Mode::Pickup), PREFIX).is_empty());
    }

    #[test]
    fn missing_selections_are_reported_in_order() {
        for mode in [Mode::Pickup, Mode::Office] {
            let mut r = record(mode);
            r.clothing_type.clear();
            r.crisis.clear();
            assert_eq!(
                validate_record(&r, PREFIX),
                vec![FieldError::MissingClothingType, FieldError::MissingCrisis],
                "mode={}",
                mode
            );
        }
    }

    #[test]
    fn missing_selection_reported_regardless_of_other_fields() {
        let mut r = record(Mode::Pickup);
        r.crisis.clear();
        r.address.clear();
        r.postcode = "abc".to_string();

        let errors = validate_record(&r, PREFIX);
        assert!(errors.contains(&FieldError::MissingCrisis), "{:?}", errors);
        assert!(!errors.contains(&FieldError::MissingClothingType));
    }

    // -------------------------------------------------------------------------
    // Mode-dependent fields
    // -------------------------------------------------------------------------

    #[test]
    fn office_mode_never_checks_address_or_postcode() {
        let mut r = record(Mode::Office);
        r.address.clear();
        r.postcode.clear();
        assert!(validate_record(&r, PREFIX).is_empty());

        r.postcode = "99999".to_string();
        assert!(validate_record(&r, PREFIX).is_empty());
    }

    #[test]
    fn pickup_requires_non_blank_address() {
        let mut r = record(Mode::Pickup);
        r.address = "   ".to_string();
        assert_eq!(validate_record(&r, PREFIX), vec![FieldError::MissingAddress]);
    }

    #[test]
    fn short_postcode_only_reports_format_error() {
        let mut r = record(Mode::Pickup);
        r.postcode = "1011".to_string();
        assert_eq!(validate_record(&r, PREFIX), vec![FieldError::InvalidPostcode]);
    }

    #[test]
    fn foreign_prefix_only_reports_proximity_error() {
        let mut r = record(Mode::Pickup);
        r.postcode = "20115".to_string();
        assert_eq!(
            validate_record(&r, PREFIX),
            vec![FieldError::PostcodeOutOfArea]
        );
    }

    #[test]
    fn matching_prefix_reports_no_postcode_error() {
        let mut r = record(Mode::Pickup);
        r.postcode = " 10115 ".to_string();
        assert!(validate_record(&r, PREFIX).is_empty());
    }

    #[test]
    fn empty_pickup_form_reports_everything() {
        let mut r = record(Mode::Pickup);
        r.clothing_type.clear();
        r.crisis.clear();
        r.address.clear();
        r.postcode.clear();
        assert_eq!(
            validate_record(&r, PREFIX),
            vec![
                FieldError::MissingClothingType,
                FieldError::MissingCrisis,
                FieldError::MissingAddress,
                FieldError::InvalidPostcode,
            ]
        );
    }

    #[test]
    fn configured_prefix_is_honored() {
        let mut r = record(Mode::Pickup);
        r.postcode = "20115".to_string();
        assert!(validate_record(&r, "20").is_empty());
    }

    #[test]
    fn validation_is_idempotent() {
        let mut r = record(Mode::Pickup);
        r.crisis.clear();
        r.postcode = "2011".to_string();
        assert_eq!(validate_record(&r, PREFIX), validate_record(&r, PREFIX));
    }

    // -------------------------------------------------------------------------
    // Message formatting
    // -------------------------------------------------------------------------

    #[test]
    fn messages_are_joined_with_single_space() {
        let joined = join_messages(&[FieldError::MissingClothingType, FieldError::MissingCrisis]);
        assert_eq!(joined, "select clothing type. select a crisis region.");
        assert_eq!(join_messages(&[]), "");
    }

    #[test]
    fn errors_point_at_their_field() {
        assert_eq!(FieldError::InvalidPostcode.field(), FieldId::Postcode);
        assert_eq!(FieldError::PostcodeOutOfArea.field(), FieldId::Postcode);
        assert_eq!(FieldError::MissingAddress.field(), FieldId::Address);
    }
}

// Form controller
//
// Three handlers, each run to completion on the caller's thread:
// - on_mode_change: toggle the mode-dependent sections
// - on_validate_clicked: check and report, no side effects beyond the message
// - on_submit: check, then persist + navigate, or report and refocus
//
// Collection and validation are free functions so they can be exercised
// without a controller.

use super::document::{Document, FieldId, MessageTone, Navigator, Section, SessionStore};
use super::validation::{join_messages, validate_record, FieldError};
use crate::config::{FormConfig, CONFIRM_LOCATION, STORAGE_KEY};
use crate::models::{DonationRecord, Mode};
use crate::utils::logging::{mask_email, mask_sensitive};
use anyhow::Result;
use chrono::{DateTime, SubsecRound, Utc};
use log::{debug, error, info, warn};
use uuid::Uuid;

pub const VALID_MESSAGE: &str = "All good, the form is valid.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Valid,
    Invalid(Vec<FieldError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was written; the errors are on display.
    Rejected(Vec<FieldError>),
    /// The record is in the session store and navigation has happened.
    Submitted(DonationRecord),
}

/// Mode from the checked radio. Missing or unknown values fall back to pickup,
/// which is the stricter branch (address and postcode are checked).
pub fn read_mode<D: Document + ?Sized>(document: &D) -> Mode {
    match document.selected_mode() {
        Some(raw) => raw.parse::<Mode>().unwrap_or_else(|e| {
            warn!("[PHASE: form] [STEP: read_mode] {}; assuming pickup", e);
            Mode::Pickup
        }),
        None => {
            warn!("[PHASE: form] [STEP: read_mode] No mode selected; assuming pickup");
            Mode::Pickup
        }
    }
}

/// Build a record from the current field values.
///
/// Text inputs are trimmed, select values are taken as-is, and elements missing
/// from the document read as empty strings. The timestamp is cut to milliseconds,
/// the precision it is stored with.
pub fn collect_record<D: Document + ?Sized>(
    document: &D,
    timestamp: DateTime<Utc>,
) -> DonationRecord {
    let text = |field: FieldId| {
        document
            .field_value(field)
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    };
    let select = |field: FieldId| document.field_value(field).unwrap_or_default();

    DonationRecord {
        mode: read_mode(document),
        name: text(FieldId::Name),
        email: text(FieldId::Email),
        clothing_type: select(FieldId::ClothingType),
        crisis: select(FieldId::Crisis),
        address: text(FieldId::Address),
        postcode: text(FieldId::Postcode),
        timestamp: timestamp.trunc_subsecs(3),
    }
}

pub struct FormController<D, S, N> {
    document: D,
    store: S,
    navigator: N,
    office_prefix: String,
}

impl<D, S, N> FormController<D, S, N>
where
    D: Document,
    S: SessionStore,
    N: Navigator,
{
    pub fn new(document: D, store: S, navigator: N, office_prefix: impl Into<String>) -> Self {
        Self {
            document,
            store,
            navigator,
            office_prefix: office_prefix.into(),
        }
    }

    /// Build a controller and apply the initial section visibility, like the
    /// page does on load.
    pub fn attach(document: D, store: S, navigator: N, config: &FormConfig) -> Self {
        let mut controller = Self::new(
            document,
            store,
            navigator,
            config.office_postcode_prefix.clone(),
        );
        controller.on_mode_change();
        controller
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn office_prefix(&self) -> &str {
        &self.office_prefix
    }

    pub fn on_mode_change(&mut self) {
        let mode = read_mode(&self.document);
        let pickup = mode == Mode::Pickup;

        self.document.set_section_visible(Section::PickupFields, pickup);
        self.document.set_section_visible(Section::OfficeInfo, !pickup);
        self.document.clear_message();

        debug!(
            "[PHASE: form] [STEP: mode_change] Mode is now '{}'",
            mode.as_id()
        );
    }

    pub fn on_validate_clicked(&mut self) -> CheckOutcome {
        let record = collect_record(&self.document, Utc::now());
        let errors = validate_record(&record, &self.office_prefix);

        if errors.is_empty() {
            self.document
                .set_message(VALID_MESSAGE, MessageTone::Success);
            info!("[PHASE: form] [STEP: check] Registration check passed");
            CheckOutcome::Valid
        } else {
            self.document
                .set_message(&join_messages(&errors), MessageTone::Warning);
            info!(
                "[PHASE: form] [STEP: check] Registration check found {} problem(s)",
                errors.len()
            );
            CheckOutcome::Invalid(errors)
        }
    }

    pub fn on_submit(&mut self) -> Result<SubmitOutcome> {
        let record = collect_record(&self.document, Utc::now());
        let errors = validate_record(&record, &self.office_prefix);

        if !errors.is_empty() {
            self.document
                .set_message(&join_messages(&errors), MessageTone::Warning);
            self.document.focus_first_field();
            info!(
                "[PHASE: form] [STEP: submit] Submission rejected with {} problem(s)",
                errors.len()
            );
            return Ok(SubmitOutcome::Rejected(errors));
        }

        let correlation_id = Uuid::new_v4().simple().to_string();
        let payload = record.to_json()?;
        if let Err(e) = self.store.set_item(STORAGE_KEY, &payload) {
            error!(
                "[PHASE: form] [STEP: submit] Session store write failed (correlation_id={}): {}",
                correlation_id, e
            );
            return Err(e.context("Failed to save the registration in the session store"));
        }

        info!(
            "[PHASE: form] [STEP: submit] Registration stored (correlation_id={}, mode={}, name={}, email={})",
            correlation_id,
            record.mode,
            mask_sensitive(&record.name),
            mask_email(&record.email)
        );

        self.navigator.navigate(CONFIRM_LOCATION);
        Ok(SubmitOutcome::Submitted(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use crate::form::memory::{MemoryDocument, MemorySessionStore, RecordingNavigator};

    type TestController = FormController<MemoryDocument, MemorySessionStore, RecordingNavigator>;

    fn filled_pickup() -> MemoryDocument {
        MemoryDocument::new()
            .with_mode(Mode::Pickup)
            .with_field(FieldId::Name, "  Erika Mustermann ")
            .with_field(FieldId::Email, "erika@example.org")
            .with_field(FieldId::ClothingType, "coats")
            .with_field(FieldId::Crisis, "regionA")
            .with_field(FieldId::Address, " Main St 1 ")
            .with_field(FieldId::Postcode, " 10999 ")
    }

    fn controller(doc: MemoryDocument) -> TestController {
        FormController::attach(
            doc,
            MemorySessionStore::new(),
            RecordingNavigator::new(),
            &FormConfig::default(),
        )
    }

    // -------------------------------------------------------------------------
    // Collection
    // -------------------------------------------------------------------------

    #[test]
    fn collected_record_survives_storage_unchanged() {
        let now = Utc::now().with_nanosecond(123_456_789).expect("valid nanos");
        let record = collect_record(&filled_pickup(), now);

        assert_eq!(record.timestamp.timestamp_subsec_nanos(), 123_000_000);
        let back = DonationRecord::from_json(&record.to_json().expect("encode")).expect("decode");
        assert_eq!(
            back, record,
            "Stored record differs: {:?} vs {:?}",
            back.timestamp, record.timestamp
        );
    }

    #[test]
    fn collect_trims_text_fields_only() {
        let doc = filled_pickup().with_field(FieldId::Crisis, " regionA ");
        let ts = Utc::now();
        let record = collect_record(&doc, ts);

        assert_eq!(record.name, "Erika Mustermann");
        assert_eq!(record.address, "Main St 1");
        assert_eq!(record.postcode, "10999");
        assert_eq!(record.crisis, " regionA ", "Selections are not trimmed");
        assert_eq!(record.timestamp, ts);
    }

    #[test]
    fn collect_reads_absent_fields_as_empty() {
        let mut doc = filled_pickup().with_mode(Mode::Office);
        doc.remove_field(FieldId::Address);
        doc.remove_field(FieldId::Postcode);

        let record = collect_record(&doc, Utc::now());
        assert_eq!(record.mode, Mode::Office);
        assert_eq!(record.address, "");
        assert_eq!(record.postcode, "");
    }

    #[test]
    fn unknown_or_missing_mode_reads_as_pickup() {
        let mut doc = MemoryDocument::new();
        doc.set_mode_value(Some("courier"));
        assert_eq!(read_mode(&doc), Mode::Pickup);
        doc.set_mode_value(None);
        assert_eq!(read_mode(&doc), Mode::Pickup);
    }

    // -------------------------------------------------------------------------
    // Mode visibility
    // -------------------------------------------------------------------------

    #[test]
    fn attach_applies_initial_visibility() {
        let c = controller(MemoryDocument::new().with_mode(Mode::Office));
        assert_eq!(c.document().is_visible(Section::PickupFields), Some(false));
        assert_eq!(c.document().is_visible(Section::OfficeInfo), Some(true));
    }

    #[test]
    fn mode_change_toggles_sections_and_clears_message() {
        let mut c = controller(MemoryDocument::new());
        assert_eq!(c.document().is_visible(Section::PickupFields), Some(true));
        assert_eq!(c.document().is_visible(Section::OfficeInfo), Some(false));

        c.on_validate_clicked();
        assert!(c.document().message().is_some());

        c.document_mut().check_mode(Mode::Office);
        c.on_mode_change();
        assert_eq!(c.document().is_visible(Section::PickupFields), Some(false));
        assert_eq!(c.document().is_visible(Section::OfficeInfo), Some(true));
        assert!(c.document().message().is_none(), "Message should be cleared");
    }

    // -------------------------------------------------------------------------
    // Check action
    // -------------------------------------------------------------------------

    #[test]
    fn check_reports_joined_errors_in_warning_tone() {
        let mut c = controller(MemoryDocument::new().with_field(FieldId::Postcode, "1011"));
        let outcome = c.on_validate_clicked();

        assert_eq!(
            outcome,
            CheckOutcome::Invalid(vec![
                FieldError::MissingClothingType,
                FieldError::MissingCrisis,
                FieldError::MissingAddress,
                FieldError::InvalidPostcode,
            ])
        );
        let (text, tone) = c.document().message().expect("message");
        assert_eq!(tone, MessageTone::Warning);
        assert_eq!(
            text,
            "select clothing type. select a crisis region. enter pickup address. enter a valid 5-digit postal code."
        );
    }

    #[test]
    fn check_success_has_no_side_effects() {
        let mut c = controller(filled_pickup());
        assert_eq!(c.on_validate_clicked(), CheckOutcome::Valid);

        let (text, tone) = c.document().message().expect("message");
        assert_eq!(text, VALID_MESSAGE);
        assert_eq!(tone, MessageTone::Success);
        assert!(c.store().is_empty(), "Check must not write storage");
        assert!(c.navigator().history().is_empty(), "Check must not navigate");
        assert_eq!(c.document().focus_requests(), 0);
    }

    // -------------------------------------------------------------------------
    // Submit action
    // -------------------------------------------------------------------------

    #[test]
    fn rejected_submit_refocuses_and_writes_nothing() {
        let mut c = controller(filled_pickup().with_field(FieldId::Postcode, "20115"));
        let outcome = c.on_submit().expect("submit");

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(vec![FieldError::PostcodeOutOfArea])
        );
        assert_eq!(c.document().focus_requests(), 1);
        assert!(c.store().is_empty());
        assert!(c.navigator().history().is_empty());
        let (_, tone) = c.document().message().expect("message");
        assert_eq!(tone, MessageTone::Warning);
    }

    #[test]
    fn successful_submit_stores_then_navigates() {
        let mut c = controller(filled_pickup());
        let outcome = c.on_submit().expect("submit");

        let record = match outcome {
            SubmitOutcome::Submitted(record) => record,
            other => panic!("Expected submission, got {:?}", other),
        };
        assert_eq!(c.store().len(), 1);
        let stored = c.store().get_item(STORAGE_KEY).expect("stored entry");
        assert_eq!(DonationRecord::from_json(&stored).unwrap(), record);
        assert_eq!(c.navigator().history(), [CONFIRM_LOCATION.to_string()]);
    }

    #[test]
    fn office_submit_ignores_missing_pickup_fields() {
        let mut doc = MemoryDocument::new()
            .with_mode(Mode::Office)
            .with_field(FieldId::ClothingType, "shoes")
            .with_field(FieldId::Crisis, "regionB");
        doc.remove_field(FieldId::Address);
        doc.remove_field(FieldId::Postcode);

        let mut c = controller(doc);
        assert!(matches!(
            c.on_submit().expect("submit"),
            SubmitOutcome::Submitted(_)
        ));
    }

    #[test]
    fn store_failure_propagates_without_navigation() {
        let mut c = FormController::attach(
            filled_pickup(),
            MemorySessionStore::with_quota(16),
            RecordingNavigator::new(),
            &FormConfig::default(),
        );

        let err = c.on_submit().unwrap_err();
        assert!(
            format!("{:#}", err).contains("quota"),
            "Unexpected error: {:#}",
            err
        );
        assert!(c.navigator().history().is_empty());
    }

    #[test]
    fn controller_uses_configured_prefix() {
        let cfg = FormConfig {
            office_postcode_prefix: "20".to_string(),
            ..FormConfig::default()
        };
        let mut c = FormController::attach(
            filled_pickup().with_field(FieldId::Postcode, "20115"),
            MemorySessionStore::new(),
            RecordingNavigator::new(),
            &cfg,
        );
        assert_eq!(c.office_prefix(), "20");
        assert_eq!(c.on_validate_clicked(), CheckOutcome::Valid);
    }
}

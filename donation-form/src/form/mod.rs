// Donation form core: boundary traits, collection + validation, the controller,
// and the confirmation view.
//
// Never log donor PII in clear text (name, e-mail, address); mask it first.

pub mod confirmation;
pub mod controller;
pub mod document;
pub mod memory;
pub mod validation;

pub use controller::{collect_record, read_mode, CheckOutcome, FormController, SubmitOutcome};
pub use document::{Document, FieldId, MessageTone, Navigator, Section, SessionStore};
pub use validation::{join_messages, validate_record, FieldError};

// Data models shared by the form controller, the confirmation view and the TUI.

pub mod options;
pub mod record;

pub use record::{DonationRecord, Mode};

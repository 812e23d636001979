// Deterministic submit proof runner (no TUI).
//
// Drives the controller through a full pickup registration against in-memory
// fakes and records every observable effect in a transcript.

use crate::config::{FormConfig, CONFIRM_LOCATION, STORAGE_KEY};
use crate::form::memory::{MemoryDocument, MemorySessionStore, RecordingNavigator};
use crate::form::{FieldId, FormController, Section, SessionStore, SubmitOutcome};
use crate::models::{DonationRecord, Mode};
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

pub const TRANSCRIPT_FILE: &str = "submit_smoke_transcript.log";

/// Runs the scenario and writes `submit_smoke_transcript.log` into `log_dir`.
///
/// The transcript is written even when a check fails, so the failing step is on disk.
pub fn submit_smoke(config: &FormConfig, log_dir: &Path) -> Result<PathBuf> {
    let transcript_path = log_dir.join(TRANSCRIPT_FILE);
    let mut transcript = String::new();

    let result = run_scenario(config, &mut |line: String| {
        transcript.push_str(&line);
        transcript.push('\n');
    });

    if let Err(e) = &result {
        transcript.push_str(&format!("SUBMIT_SMOKE failed: {:#}\n", e));
    }
    std::fs::write(&transcript_path, transcript)
        .with_context(|| format!("Failed to write {}", transcript_path.display()))?;

    result.map(|_| transcript_path)
}

fn run_scenario(config: &FormConfig, push_line: &mut dyn FnMut(String)) -> Result<()> {
    push_line("SUBMIT_SMOKE begin".to_string());
    push_line(format!(
        "office_postcode_prefix={}",
        config.office_postcode_prefix
    ));

    let document = MemoryDocument::new()
        .with_mode(Mode::Pickup)
        .with_field(FieldId::Name, "Smoke Test")
        .with_field(FieldId::Email, "smoke@example.org")
        .with_field(FieldId::ClothingType, "coats")
        .with_field(FieldId::Crisis, "regionA")
        .with_field(FieldId::Address, "Main St 1")
        .with_field(FieldId::Postcode, "10999");

    let mut controller = FormController::attach(
        document,
        MemorySessionStore::new(),
        RecordingNavigator::new(),
        config,
    );
    for section in [Section::PickupFields, Section::OfficeInfo] {
        push_line(format!(
            "attach section={} visible={:?}",
            section.element_id(),
            controller.document().is_visible(section)
        ));
    }

    let record = match controller.on_submit()? {
        SubmitOutcome::Submitted(record) => record,
        SubmitOutcome::Rejected(errors) => {
            for e in &errors {
                push_line(format!("rejected field={} message={}", e.field().element_id(), e));
            }
            bail!("Valid pickup registration was rejected");
        }
    };
    push_line(format!("submitted mode={} postcode={}", record.mode, record.postcode));

    let store = controller.store();
    push_line(format!("store entries={}", store.len()));
    if store.len() != 1 {
        bail!("Expected exactly one stored entry, found {}", store.len());
    }

    let raw = store
        .get_item(STORAGE_KEY)
        .with_context(|| format!("No entry stored under '{}'", STORAGE_KEY))?;
    let decoded = DonationRecord::from_json(&raw)?;
    push_line(format!(
        "decoded key={} mode={} postcode={}",
        STORAGE_KEY, decoded.mode, decoded.postcode
    ));
    if decoded.mode != Mode::Pickup || decoded.postcode != "10999" {
        bail!("Stored record does not match the submitted form");
    }

    let history = controller.navigator().history();
    push_line(format!("navigations={:?}", history));
    if history != [CONFIRM_LOCATION.to_string()] {
        bail!("Expected a single navigation to {}", CONFIRM_LOCATION);
    }

    push_line("SUBMIT_SMOKE end".to_string());
    Ok(())
}

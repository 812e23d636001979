// Confirmation view: reads the submitted registration back from the session store.

use super::document::{FieldId, SessionStore};
use crate::config::{FormConfig, STORAGE_KEY};
use crate::models::options::label_for;
use crate::models::{DonationRecord, Mode};
use crate::utils::html::escape_html;
use anyhow::{Context, Result};
use chrono::Local;

/// Decoded registration, or `None` when nothing was submitted in this session.
pub fn load_submission<S: SessionStore + ?Sized>(store: &S) -> Result<Option<DonationRecord>> {
    let Some(raw) = store.get_item(STORAGE_KEY) else {
        return Ok(None);
    };
    let record = DonationRecord::from_json(&raw)
        .with_context(|| format!("Session entry '{}' is corrupt", STORAGE_KEY))?;
    Ok(Some(record))
}

/// Labelled rows for display. Values are raw text; escape them before putting
/// them into markup.
pub fn summary_rows(record: &DonationRecord, config: &FormConfig) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Hand-over", record.mode.as_str().to_string()),
        (FieldId::Name.label(), record.name.clone()),
        (FieldId::Email.label(), record.email.clone()),
        (
            FieldId::ClothingType.label(),
            label_for(&config.clothing_types, &record.clothing_type).to_string(),
        ),
        (
            FieldId::Crisis.label(),
            label_for(&config.crisis_regions, &record.crisis).to_string(),
        ),
    ];

    if record.mode == Mode::Pickup {
        rows.push((FieldId::Address.label(), record.address.clone()));
        rows.push((FieldId::Postcode.label(), record.postcode.clone()));
    }

    rows.push((
        "Registered at",
        record
            .timestamp
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
    ));
    rows
}

/// HTML fragment for the confirmation page; every value is escaped.
pub fn render_html(record: &DonationRecord, config: &FormConfig) -> String {
    let mut html = String::from("<dl class=\"confirmation\">\n");
    for (label, value) in summary_rows(record, config) {
        let shown = if value.is_empty() { "-" } else { value.as_str() };
        html.push_str(&format!(
            "  <dt>{}</dt><dd>{}</dd>\n",
            escape_html(label),
            escape_html(shown)
        ));
    }
    html.push_str("</dl>\n");
    html
}

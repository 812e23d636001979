// In-memory implementations of the boundary traits.
//
// Used by the smoke modes and by tests; the TUI brings its own `Document` but
// reuses the store and the navigator.

use super::document::{Document, FieldId, MessageTone, Navigator, Section, SessionStore};
use crate::models::Mode;
use anyhow::Result;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    mode: Option<String>,
    fields: HashMap<FieldId, String>,
    visibility: HashMap<Section, bool>,
    message: Option<(String, MessageTone)>,
    focus_requests: usize,
}

impl MemoryDocument {
    /// Document with every field present and empty, mode `pickup` checked.
    pub fn new() -> Self {
        let mut doc = Self::default();
        doc.mode = Some(Mode::Pickup.as_id().to_string());
        for field in FieldId::ALL {
            doc.fields.insert(field, String::new());
        }
        doc
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.check_mode(mode);
        self
    }

    pub fn with_field(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set_field(field, value);
        self
    }

    pub fn check_mode(&mut self, mode: Mode) {
        self.mode = Some(mode.as_id().to_string());
    }

    /// Raw radio value, including values the controller does not know.
    pub fn set_mode_value(&mut self, value: Option<&str>) {
        self.mode = value.map(str::to_string);
    }

    pub fn set_field(&mut self, field: FieldId, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }

    /// Drop the element from the document entirely.
    pub fn remove_field(&mut self, field: FieldId) {
        self.fields.remove(&field);
    }

    /// `None` until the controller has set the section's visibility at least once.
    pub fn is_visible(&self, section: Section) -> Option<bool> {
        self.visibility.get(&section).copied()
    }

    pub fn message(&self) -> Option<(&str, MessageTone)> {
        self.message.as_ref().map(|(text, tone)| (text.as_str(), *tone))
    }

    pub fn focus_requests(&self) -> usize {
        self.focus_requests
    }
}

impl Document for MemoryDocument {
    fn selected_mode(&self) -> Option<String> {
        self.mode.clone()
    }

    fn field_value(&self, field: FieldId) -> Option<String> {
        self.fields.get(&field).cloned()
    }

    fn set_section_visible(&mut self, section: Section, visible: bool) {
        self.visibility.insert(section, visible);
    }

    fn set_message(&mut self, text: &str, tone: MessageTone) {
        self.message = Some((text.to_string(), tone));
    }

    fn clear_message(&mut self) {
        self.message = None;
    }

    fn focus_first_field(&mut self) {
        self.focus_requests += 1;
    }
}

/// Session store backed by a map. An optional byte quota makes writes fail the
/// way a full browser storage does.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    items: HashMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            items: HashMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.items
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl SessionStore for MemorySessionStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        if let Some(quota) = self.quota_bytes {
            let needed = self.used_bytes_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(anyhow::anyhow!(
                    "Session storage quota exceeded ({} of {} bytes) writing '{}'",
                    needed,
                    quota,
                    key
                ));
            }
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Records every navigation instead of leaving the page.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    history: Vec<String>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn current(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, location: &str) {
        self.history.push(location.to_string());
    }
}

// Boundary traits between the form controller and whatever renders the page.
//
// The controller never touches a concrete UI. It reads field values and writes
// visibility, messages and focus through `Document`, persists through
// `SessionStore`, and leaves the page through `Navigator`.

use anyhow::Result;

/// Input elements the controller reads, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    ClothingType,
    Crisis,
    Address,
    Postcode,
}

impl FieldId {
    pub const ALL: [FieldId; 6] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::ClothingType,
        FieldId::Crisis,
        FieldId::Address,
        FieldId::Postcode,
    ];

    /// Element id in the page markup.
    pub fn element_id(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::ClothingType => "clothingType",
            FieldId::Crisis => "crisis",
            FieldId::Address => "address",
            FieldId::Postcode => "postcode",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Email => "E-mail",
            FieldId::ClothingType => "Clothing type",
            FieldId::Crisis => "Crisis region",
            FieldId::Address => "Pickup address",
            FieldId::Postcode => "Postal code",
        }
    }
}

/// Containers toggled by the selected mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    PickupFields,
    OfficeInfo,
}

impl Section {
    pub fn element_id(&self) -> &'static str {
        match self {
            Section::PickupFields => "pickup-fields",
            Section::OfficeInfo => "office-info",
        }
    }
}

/// Color of the status message line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageTone {
    Warning,
    Success,
}

impl MessageTone {
    pub fn css_color(&self) -> &'static str {
        match self {
            MessageTone::Warning => "#b45309",
            MessageTone::Success => "#059669",
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            MessageTone::Warning => (0xb4, 0x53, 0x09),
            MessageTone::Success => (0x05, 0x96, 0x69),
        }
    }
}

/// Document-query abstraction: the part of the page the controller depends on.
pub trait Document {
    /// Value of the checked mode radio, if any is checked.
    fn selected_mode(&self) -> Option<String>;

    /// Raw value of an input/select; `None` when the element is not in the document.
    fn field_value(&self, field: FieldId) -> Option<String>;

    fn set_section_visible(&mut self, section: Section, visible: bool);

    fn set_message(&mut self, text: &str, tone: MessageTone);

    fn clear_message(&mut self);

    /// Move input focus to the first focusable element of the form.
    fn focus_first_field(&mut self);
}

/// Tab-scoped key-value store (the browser's session storage).
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Leaves the current page.
pub trait Navigator {
    fn navigate(&mut self, location: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_tones_use_page_colors() {
        assert_eq!(MessageTone::Warning.css_color(), "#b45309");
        assert_eq!(MessageTone::Success.css_color(), "#059669");

        for tone in [MessageTone::Warning, MessageTone::Success] {
            let (r, g, b) = tone.rgb();
            assert_eq!(
                format!("#{:02x}{:02x}{:02x}", r, g, b),
                tone.css_color(),
                "Terminal color drifted from page color for {:?}",
                tone
            );
        }
    }

    #[test]
    fn element_ids_match_page_markup() {
        assert_eq!(Section::PickupFields.element_id(), "pickup-fields");
        assert_eq!(Section::OfficeInfo.element_id(), "office-info");
        assert_eq!(FieldId::ClothingType.element_id(), "clothingType");
    }
}

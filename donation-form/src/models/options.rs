// Predefined option lists for the two select fields.

use serde::{Deserialize, Serialize};

/// One `<option>` of a select field: the stored value and the label shown to the donor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

impl ChoiceOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

pub fn default_clothing_types() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new("coats", "Coats & jackets"),
        ChoiceOption::new("knitwear", "Sweaters & knitwear"),
        ChoiceOption::new("shoes", "Shoes"),
        ChoiceOption::new("children", "Children's clothing"),
        ChoiceOption::new("bedding", "Blankets & bedding"),
    ]
}

pub fn default_crisis_regions() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new("regionA", "Region A"),
        ChoiceOption::new("regionB", "Region B"),
        ChoiceOption::new("regionC", "Region C"),
    ]
}

/// Label for a stored value; falls back to the raw value for unknown entries.
pub fn label_for<'a>(options: &'a [ChoiceOption], value: &'a str) -> &'a str {
    options
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label.as_str())
        .unwrap_or(value)
}

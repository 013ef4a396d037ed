//! Form field value objects

use super::options::{
    FieldOption, BUILD_BUDGETS, BUYER_CATEGORIES, CONSTRUCTION_TIMELINES, FINANCING_PLANS,
    LAND_STATUSES,
};
use serde::{Deserialize, Serialize};

/// Every field the intake form knows about, in declaration order.
///
/// Declaration order is significant: validation errors and the submitted
/// JSON object both follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FullName,
    EmailAddress,
    PhoneNumber,
    CompanyName,
    BuyerCategory,
    FinancingPlan,
    LandStatus,
    LotAddress,
    NeedsHelpFindingLand,
    PreferredAreaDescription,
    BuildBudget,
    ConstructionTimeline,
    ProjectDescription,
}

/// How a field is edited and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    Choice(&'static [FieldOption]),
    Flag,
}

impl Field {
    pub const ALL: [Field; 13] = [
        Field::FullName,
        Field::EmailAddress,
        Field::PhoneNumber,
        Field::CompanyName,
        Field::BuyerCategory,
        Field::FinancingPlan,
        Field::LandStatus,
        Field::LotAddress,
        Field::NeedsHelpFindingLand,
        Field::PreferredAreaDescription,
        Field::BuildBudget,
        Field::ConstructionTimeline,
        Field::ProjectDescription,
    ];

    /// Human-readable label used in prompts and error messages
    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::EmailAddress => "Email Address",
            Field::PhoneNumber => "Phone Number",
            Field::CompanyName => "Company Name",
            Field::BuyerCategory => "Buyer Category",
            Field::FinancingPlan => "Financing Plan",
            Field::LandStatus => "Land Status",
            Field::LotAddress => "Lot Address",
            Field::NeedsHelpFindingLand => "Needs Help Finding Land",
            Field::PreferredAreaDescription => "Preferred Area",
            Field::BuildBudget => "Build Budget",
            Field::ConstructionTimeline => "Construction Timeline",
            Field::ProjectDescription => "Project Description",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::BuyerCategory => FieldKind::Choice(BUYER_CATEGORIES),
            Field::FinancingPlan => FieldKind::Choice(FINANCING_PLANS),
            Field::LandStatus => FieldKind::Choice(LAND_STATUSES),
            Field::BuildBudget => FieldKind::Choice(BUILD_BUDGETS),
            Field::ConstructionTimeline => FieldKind::Choice(CONSTRUCTION_TIMELINES),
            Field::NeedsHelpFindingLand => FieldKind::Flag,
            Field::PreferredAreaDescription | Field::ProjectDescription => FieldKind::Multiline,
            _ => FieldKind::Text,
        }
    }

    /// Option list for choice fields
    pub fn options(&self) -> Option<&'static [FieldOption]> {
        match self.kind() {
            FieldKind::Choice(options) => Some(options),
            _ => None,
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.kind(), FieldKind::Multiline)
    }

    /// Prompt shown next to the field in the form
    pub fn prompt(&self) -> &'static str {
        match self {
            Field::FullName => "Full Name *",
            Field::EmailAddress => "Email Address *",
            Field::PhoneNumber => "Phone Number *",
            Field::CompanyName => "Company Name (optional)",
            Field::BuyerCategory => "Which best describes you? *",
            Field::FinancingPlan => "How do you plan to fund the build? *",
            Field::LandStatus => "Do you already own land? *",
            Field::LotAddress => "Lot Address *",
            Field::NeedsHelpFindingLand => "I would like help finding land",
            Field::PreferredAreaDescription => "Preferred Area *",
            Field::BuildBudget => "Build Budget *",
            Field::ConstructionTimeline => "When do you want to start construction? *",
            Field::ProjectDescription => "Tell us about your project *",
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl FieldValue {
    /// Get the text value (returns empty string for flags)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Flag(_) => "",
        }
    }

    /// Get the flag value (text is never a set flag)
    pub fn as_flag(&self) -> bool {
        match self {
            FieldValue::Flag(b) => *b,
            FieldValue::Text(_) => false,
        }
    }

    /// Whether the value counts as "not filled in".
    ///
    /// Whitespace-only text is blank. An unchecked flag is blank too, so
    /// a required flag would have to be ticked.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Flag(b) => !*b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order_matches_ord() {
        let mut sorted = Field::ALL;
        sorted.sort();
        assert_eq!(sorted, Field::ALL);
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&Field::PreferredAreaDescription).unwrap();
        assert_eq!(json, "\"preferred_area_description\"");
    }

    #[test]
    fn test_choice_fields_expose_options() {
        assert_eq!(Field::LandStatus.options().map(|o| o.len()), Some(2));
        assert_eq!(Field::BuildBudget.options().map(|o| o.len()), Some(5));
        assert!(Field::FullName.options().is_none());
    }

    #[test]
    fn test_multiline_fields() {
        assert!(Field::ProjectDescription.is_multiline());
        assert!(Field::PreferredAreaDescription.is_multiline());
        assert!(!Field::LotAddress.is_multiline());
    }

    #[test]
    fn test_blank_values() {
        assert!(FieldValue::from("").is_blank());
        assert!(FieldValue::from("   ").is_blank());
        assert!(!FieldValue::from("x").is_blank());
        assert!(FieldValue::from(false).is_blank());
        assert!(!FieldValue::from(true).is_blank());
    }

    #[test]
    fn test_values_serialize_untagged() {
        assert_eq!(serde_json::to_string(&FieldValue::from("a")).unwrap(), "\"a\"");
        assert_eq!(serde_json::to_string(&FieldValue::from(true)).unwrap(), "true");
    }
}

//! Review summary shown on the last step

use super::field::Field;
use super::form_state::FormState;
use super::options::option_label;

const NOT_SPECIFIED: &str = "Not specified";

/// One label/value line of the review summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow {
    pub label: &'static str,
    pub value: String,
}

/// A titled group of review rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSection {
    pub title: &'static str,
    pub rows: Vec<ReviewRow>,
}

fn row(label: &'static str, value: impl Into<String>) -> ReviewRow {
    ReviewRow {
        label,
        value: value.into(),
    }
}

/// Display value of a choice field: the option label, or the raw value
fn choice(state: &FormState, field: Field) -> String {
    let value = state.text(field);
    match field.options() {
        Some(options) => option_label(options, value).to_string(),
        None => value.to_string(),
    }
}

/// Where the project will be built, summarised from the land fields
pub fn location_details(state: &FormState) -> String {
    let lot_address = state.text(Field::LotAddress);
    let preferred_area = state.text(Field::PreferredAreaDescription);

    if state.owns_land() && !lot_address.trim().is_empty() {
        lot_address.to_string()
    } else if state.needs_land() {
        if state.needs_help_finding_land() && !preferred_area.trim().is_empty() {
            format!("Help needed finding land in: {preferred_area}")
        } else {
            "Will find land independently".to_string()
        }
    } else {
        NOT_SPECIFIED.to_string()
    }
}

/// Build the review summary from the collected values
pub fn review_summary(state: &FormState) -> Vec<ReviewSection> {
    let company = state.text(Field::CompanyName);
    let company = if company.trim().is_empty() {
        NOT_SPECIFIED
    } else {
        company
    };

    vec![
        ReviewSection {
            title: "Contact",
            rows: vec![
                row("Name", state.text(Field::FullName)),
                row("Email", state.text(Field::EmailAddress)),
                row("Phone", state.text(Field::PhoneNumber)),
                row("Company", company),
            ],
        },
        ReviewSection {
            title: "Project Type",
            rows: vec![
                row("Buyer Category", choice(state, Field::BuyerCategory)),
                row("Financing", choice(state, Field::FinancingPlan)),
            ],
        },
        ReviewSection {
            title: "Land & Location",
            rows: vec![
                row("Land Status", choice(state, Field::LandStatus)),
                row("Location", location_details(state)),
            ],
        },
        ReviewSection {
            title: "Project Details",
            rows: vec![
                row("Budget", choice(state, Field::BuildBudget)),
                row("Timeline", choice(state, Field::ConstructionTimeline)),
                row("Description", state.text(Field::ProjectDescription)),
            ],
        },
    ]
}

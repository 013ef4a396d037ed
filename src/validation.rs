//! Validation rules for the intake form
//!
//! The service is a pure function family over a static rule table: it never
//! mutates form values and keeps no state between calls.

use crate::state::{Field, FieldValue, FormState, Step};
use regex::Regex;
use std::fmt;

/// Loose `local@domain.tld` shape
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// At least ten ASCII digits, spaces, hyphens, parentheses, plus signs or dots
const PHONE_PATTERN: &str = r"^[0-9\s\-\(\)\+\.]{10,}$";

/// Fields that must be filled in regardless of any other answer
pub const REQUIRED_FIELDS: &[Field] = &[
    Field::FullName,
    Field::EmailAddress,
    Field::PhoneNumber,
    Field::BuyerCategory,
    Field::FinancingPlan,
    Field::LandStatus,
    Field::BuildBudget,
    Field::ConstructionTimeline,
    Field::ProjectDescription,
];

/// A single validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Ordered validation errors; empty means valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Error messages in report order
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }

    /// Errors reported against one field
    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &FieldError> {
        self.errors.iter().filter(move |e| e.field == field)
    }

    fn push(&mut self, field: Field, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    fn extend(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }
}

/// Stateless validator for intake form values
#[derive(Debug, Clone)]
pub struct ValidationService {
    email: Regex,
    phone: Regex,
}

impl ValidationService {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            email: Regex::new(EMAIL_PATTERN)?,
            phone: Regex::new(PHONE_PATTERN)?,
        })
    }

    pub fn is_required(field: Field) -> bool {
        REQUIRED_FIELDS.contains(&field)
    }

    /// Whether `field` is required because of other answers in `form`
    pub fn is_conditionally_required(field: Field, form: &FormState) -> bool {
        match field {
            Field::LotAddress => form.owns_land(),
            Field::PreferredAreaDescription => form.needs_land() && form.needs_help_finding_land(),
            _ => false,
        }
    }

    /// Validate one field value against `form`.
    ///
    /// The first failing check wins; later checks for the same field are
    /// skipped.
    pub fn validate_field(
        &self,
        field: Field,
        value: Option<&FieldValue>,
        form: &FormState,
    ) -> ValidationResult {
        let mut result = ValidationResult::default();
        let blank = value.map_or(true, FieldValue::is_blank);

        if blank {
            if Self::is_required(field) {
                result.push(field, format!("{} is required", field.label()));
            } else if Self::is_conditionally_required(field, form) {
                let message = match field {
                    Field::LotAddress => "Lot address is required when you own land",
                    _ => "Preferred area description is required when you need help finding land",
                };
                result.push(field, message);
            }
            return result;
        }

        let text = value.map(FieldValue::as_text).unwrap_or("");
        match field {
            Field::EmailAddress if !self.email.is_match(text) => {
                result.push(field, "Please enter a valid email address");
            }
            Field::PhoneNumber if !self.phone.is_match(text) => {
                result.push(field, "Please enter a valid phone number");
            }
            _ => {}
        }

        result
    }

    /// Validate every field shown on `step`
    pub fn validate_step(&self, step: Step, form: &FormState) -> ValidationResult {
        self.validate_fields(step.fields(), form)
    }

    /// Validate the globally required fields before submission
    pub fn validate_form(&self, form: &FormState) -> ValidationResult {
        self.validate_fields(REQUIRED_FIELDS, form)
    }

    fn validate_fields(&self, fields: &[Field], form: &FormState) -> ValidationResult {
        let mut result = ValidationResult::default();
        for &field in fields {
            result.extend(self.validate_field(field, form.get(field), form));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::options::{NEED_LAND, OWN_LAND};

    fn service() -> ValidationService {
        ValidationService::new().unwrap()
    }

    fn text(value: &str) -> FieldValue {
        FieldValue::from(value)
    }

    /// A form that passes every step
    fn complete_form() -> FormState {
        let mut form = FormState::new();
        form.set(Field::FullName, "Jane Doe");
        form.set(Field::EmailAddress, "jane@example.com");
        form.set(Field::PhoneNumber, "(512) 555-0100");
        form.set(Field::BuyerCategory, "homebuyer");
        form.set(Field::FinancingPlan, "finance_build");
        form.set(Field::LandStatus, OWN_LAND);
        form.set(Field::LotAddress, "12 Elm St");
        form.set(Field::BuildBudget, "350k_400k");
        form.set(Field::ConstructionTimeline, "3_to_6_months");
        form.set(Field::ProjectDescription, "Single storey, four bedrooms");
        form
    }

    mod field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_invalid_email() {
            let result = service().validate_field(
                Field::EmailAddress,
                Some(&text("not-an-email")),
                &FormState::new(),
            );
            assert_eq!(result.messages(), vec!["Please enter a valid email address"]);
        }

        #[test]
        fn test_valid_email() {
            let result =
                service().validate_field(Field::EmailAddress, Some(&text("a@b.co")), &FormState::new());
            assert!(result.is_valid());
        }

        #[test]
        fn test_email_with_whitespace_is_invalid() {
            let result = service().validate_field(
                Field::EmailAddress,
                Some(&text("jane doe@example.com")),
                &FormState::new(),
            );
            assert!(!result.is_valid());
        }

        #[test]
        fn test_required_short_circuits_format_check() {
            let result = service().validate_field(Field::EmailAddress, None, &FormState::new());
            assert_eq!(result.messages(), vec!["Email Address is required"]);
        }

        #[test]
        fn test_whitespace_only_counts_as_empty() {
            let result =
                service().validate_field(Field::FullName, Some(&text("   ")), &FormState::new());
            assert_eq!(result.messages(), vec!["Full Name is required"]);
        }

        #[test]
        fn test_phone_formats() {
            let svc = service();
            let form = FormState::new();
            for ok in ["5125550100", "(512) 555-0100", "+1 512.555.0100"] {
                assert!(
                    svc.validate_field(Field::PhoneNumber, Some(&text(ok)), &form)
                        .is_valid(),
                    "{ok}"
                );
            }
            for bad in ["555-0100", "512-555-01OO", "call me"] {
                assert_eq!(
                    svc.validate_field(Field::PhoneNumber, Some(&text(bad)), &form)
                        .messages(),
                    vec!["Please enter a valid phone number"],
                    "{bad}"
                );
            }
        }

        #[test]
        fn test_phone_rejects_non_ascii_digits() {
            let svc = service();
            let form = FormState::new();
            for bad in ["١٢٣٤٥٦٧٨٩٠", "５１２５５５０１００"] {
                assert_eq!(
                    svc.validate_field(Field::PhoneNumber, Some(&text(bad)), &form)
                        .messages(),
                    vec!["Please enter a valid phone number"],
                    "{bad}"
                );
            }
        }

        #[test]
        fn test_lot_address_required_when_owning_land() {
            let mut form = FormState::new();
            form.set(Field::LandStatus, OWN_LAND);
            let result = service().validate_field(Field::LotAddress, Some(&text("")), &form);
            assert_eq!(
                result.messages(),
                vec!["Lot address is required when you own land"]
            );
        }

        #[test]
        fn test_lot_address_optional_when_needing_land() {
            let mut form = FormState::new();
            form.set(Field::LandStatus, NEED_LAND);
            let result = service().validate_field(Field::LotAddress, Some(&text("")), &form);
            assert!(result.is_valid());
        }

        #[test]
        fn test_preferred_area_required_only_with_help_flag() {
            let svc = service();
            let mut form = FormState::new();
            form.set(Field::LandStatus, NEED_LAND);
            assert!(svc
                .validate_field(Field::PreferredAreaDescription, None, &form)
                .is_valid());

            form.set(Field::NeedsHelpFindingLand, true);
            assert_eq!(
                svc.validate_field(Field::PreferredAreaDescription, None, &form)
                    .messages(),
                vec!["Preferred area description is required when you need help finding land"]
            );
        }

        #[test]
        fn test_optional_field_empty_is_valid() {
            let result = service().validate_field(Field::CompanyName, None, &FormState::new());
            assert!(result.is_valid());
        }

        #[test]
        fn test_unchecked_help_flag_is_valid() {
            let result = service().validate_field(
                Field::NeedsHelpFindingLand,
                Some(&FieldValue::from(false)),
                &FormState::new(),
            );
            assert!(result.is_valid());
        }
    }

    mod step {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_contact_step_reports_in_declaration_order() {
            let result = service().validate_step(Step::Contact, &FormState::new());
            assert_eq!(
                result.messages(),
                vec![
                    "Full Name is required",
                    "Email Address is required",
                    "Phone Number is required",
                ]
            );
        }

        #[test]
        fn test_one_error_per_field() {
            let mut form = FormState::new();
            form.set(Field::FullName, "Jane");
            form.set(Field::EmailAddress, "nope");
            form.set(Field::PhoneNumber, "123");
            let result = service().validate_step(Step::Contact, &form);
            assert_eq!(result.len(), 2);
            assert_eq!(result.for_field(Field::EmailAddress).count(), 1);
            assert_eq!(result.for_field(Field::PhoneNumber).count(), 1);
        }

        #[test]
        fn test_complete_form_passes_every_step() {
            let svc = service();
            let form = complete_form();
            for step in Step::ALL {
                assert!(svc.validate_step(step, &form).is_valid(), "{step:?}");
            }
        }

        #[test]
        fn test_step_valid_iff_every_field_valid() {
            let svc = service();
            let mut form = complete_form();
            form.set(Field::LotAddress, "");
            for step in Step::ALL {
                let step_valid = svc.validate_step(step, &form).is_valid();
                let fields_valid = step
                    .fields()
                    .iter()
                    .all(|&f| svc.validate_field(f, form.get(f), &form).is_valid());
                assert_eq!(step_valid, fields_valid, "{step:?}");
            }
            assert!(!svc.validate_step(Step::LandLocation, &form).is_valid());
        }

        #[test]
        fn test_land_step_switching_to_need_land_drops_lot_requirement() {
            let svc = service();
            let mut form = complete_form();
            form.set(Field::LotAddress, "");
            form.set(Field::LandStatus, NEED_LAND);
            assert!(svc.validate_step(Step::LandLocation, &form).is_valid());
        }

        #[test]
        fn test_review_step_is_always_valid() {
            let result = service().validate_step(Step::ReviewSubmit, &FormState::new());
            assert!(result.is_valid());
        }
    }

    mod form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_form_reports_every_required_field() {
            let result = service().validate_form(&FormState::new());
            assert_eq!(result.len(), REQUIRED_FIELDS.len());
            let fields: Vec<_> = result.errors().iter().map(|e| e.field).collect();
            assert_eq!(fields, REQUIRED_FIELDS.to_vec());
        }

        #[test]
        fn test_complete_form_is_valid() {
            assert!(service().validate_form(&complete_form()).is_valid());
        }

        #[test]
        fn test_format_errors_surface_in_form_validation() {
            let mut form = complete_form();
            form.set(Field::EmailAddress, "jane@example");
            assert_eq!(
                service().validate_form(&form).messages(),
                vec!["Please enter a valid email address"]
            );
        }
    }

    #[test]
    fn test_field_error_displays_message() {
        let error = FieldError {
            field: Field::FullName,
            message: "Full Name is required".to_string(),
        };
        assert_eq!(error.to_string(), "Full Name is required");
    }
}

//! Accumulated form values and the visibility rules derived from them

use super::field::{Field, FieldValue};
use super::options::{NEED_LAND, OWN_LAND};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field values collected across all visited steps.
///
/// Keys are ordered by field declaration, so the serialized JSON object
/// lists fields in the order the form asks for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormState {
    values: BTreeMap<Field, FieldValue>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    /// Text value of a field, empty when unset
    pub fn text(&self, field: Field) -> &str {
        self.get(field).map(FieldValue::as_text).unwrap_or("")
    }

    /// Flag value of a field, false when unset
    pub fn flag(&self, field: Field) -> bool {
        self.get(field).is_some_and(FieldValue::as_flag)
    }

    pub fn set(&mut self, field: Field, value: impl Into<FieldValue>) {
        self.values.insert(field, value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Forget every collected value
    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn owns_land(&self) -> bool {
        self.text(Field::LandStatus) == OWN_LAND
    }

    pub fn needs_land(&self) -> bool {
        self.text(Field::LandStatus) == NEED_LAND
    }

    pub fn needs_help_finding_land(&self) -> bool {
        self.flag(Field::NeedsHelpFindingLand)
    }

    /// Whether a field should be shown given the current values.
    ///
    /// Only the land-location sub-fields are conditional; everything else
    /// is always visible on its step.
    pub fn is_visible(&self, field: Field) -> bool {
        match field {
            Field::LotAddress => self.owns_land(),
            Field::NeedsHelpFindingLand => self.needs_land(),
            Field::PreferredAreaDescription => {
                self.needs_land() && self.needs_help_finding_land()
            }
            _ => true,
        }
    }
}

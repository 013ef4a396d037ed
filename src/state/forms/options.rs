//! Static option lists for the choice fields

/// A selectable value and the label shown for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> FieldOption {
    FieldOption { value, label }
}

pub const BUYER_CATEGORIES: &[FieldOption] = &[
    opt("homebuyer", "I am a homebuyer"),
    opt("developer", "I am a developer"),
];

pub const FINANCING_PLANS: &[FieldOption] = &[
    opt("self_funding", "I will be self-funding the build"),
    opt("finance_build", "I intend to finance the build"),
];

pub const OWN_LAND: &str = "own_land";
pub const NEED_LAND: &str = "need_land";

pub const LAND_STATUSES: &[FieldOption] = &[
    opt(OWN_LAND, "Yes, I own land"),
    opt(NEED_LAND, "No, I need to purchase land"),
];

pub const BUILD_BUDGETS: &[FieldOption] = &[
    opt("200k_250k", "$200,000 – $250,000"),
    opt("250k_350k", "$250,000 – $350,000"),
    opt("350k_400k", "$350,000 – $400,000"),
    opt("400k_500k", "$400,000 – $500,000"),
    opt("500k_plus", "$500,000+"),
];

pub const CONSTRUCTION_TIMELINES: &[FieldOption] = &[
    opt("less_than_3_months", "Less than 3 months"),
    opt("3_to_6_months", "3 to 6 months"),
    opt("6_to_12_months", "6 to 12 months"),
    opt("more_than_12_months", "More than 12 months"),
];

/// Label for `value` in `options`, falling back to the raw value
pub fn option_label<'a>(options: &[FieldOption], value: &'a str) -> &'a str {
    options
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label)
        .unwrap_or(value)
}

/// Step `current` forwards or backwards through `options`, wrapping.
///
/// An unset or unknown value starts at the first (forward) or last
/// (backward) option.
pub fn cycle_option(options: &[FieldOption], current: &str, forward: bool) -> Option<&'static str> {
    if options.is_empty() {
        return None;
    }
    let count = options.len();
    let next = match options.iter().position(|o| o.value == current) {
        Some(i) if forward => (i + 1) % count,
        Some(i) => (i + count - 1) % count,
        None if forward => 0,
        None => count - 1,
    };
    Some(options[next].value)
}

//! Step definitions and the progress indicator

use super::field::Field;

/// One page of the intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    #[default]
    Contact,
    ProjectType,
    LandLocation,
    ProjectDetails,
    ReviewSubmit,
}

impl Step {
    pub const TOTAL: usize = 5;

    pub const ALL: [Step; Step::TOTAL] = [
        Step::Contact,
        Step::ProjectType,
        Step::LandLocation,
        Step::ProjectDetails,
        Step::ReviewSubmit,
    ];

    /// 1-based step number
    pub fn number(&self) -> usize {
        match self {
            Step::Contact => 1,
            Step::ProjectType => 2,
            Step::LandLocation => 3,
            Step::ProjectDetails => 4,
            Step::ReviewSubmit => 5,
        }
    }

    pub fn from_number(number: usize) -> Option<Self> {
        Self::ALL.get(number.checked_sub(1)?).copied()
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn prev(&self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }

    pub fn is_first(&self) -> bool {
        *self == Step::Contact
    }

    pub fn is_last(&self) -> bool {
        *self == Step::ReviewSubmit
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Contact => "Contact Information",
            Step::ProjectType => "Project Type",
            Step::LandLocation => "Land & Location",
            Step::ProjectDetails => "Project Details",
            Step::ReviewSubmit => "Review & Submit",
        }
    }

    /// Fields shown on this step, in declaration order.
    ///
    /// Conditional fields are listed here too; whether they are shown or
    /// required is decided from the current values.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            Step::Contact => &[
                Field::FullName,
                Field::EmailAddress,
                Field::PhoneNumber,
                Field::CompanyName,
            ],
            Step::ProjectType => &[Field::BuyerCategory, Field::FinancingPlan],
            Step::LandLocation => &[
                Field::LandStatus,
                Field::LotAddress,
                Field::NeedsHelpFindingLand,
                Field::PreferredAreaDescription,
            ],
            Step::ProjectDetails => &[
                Field::BuildBudget,
                Field::ConstructionTimeline,
                Field::ProjectDescription,
            ],
            Step::ReviewSubmit => &[],
        }
    }
}

/// State of one dot in the progress indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressDot {
    Completed,
    Active,
    Pending,
}

/// Progress dots for every step, relative to `current`
pub fn progress(current: Step) -> [ProgressDot; Step::TOTAL] {
    Step::ALL.map(|step| match step.number().cmp(&current.number()) {
        std::cmp::Ordering::Less => ProgressDot::Completed,
        std::cmp::Ordering::Equal => ProgressDot::Active,
        std::cmp::Ordering::Greater => ProgressDot::Pending,
    })
}

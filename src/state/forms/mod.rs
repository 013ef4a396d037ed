//! Form domain layer
//!
//! Field definitions, static option lists, step layout and the pure
//! derivations (visibility, progress, review summary) over collected values.

mod field;
mod form_state;
pub mod options;
mod review;
mod step;

pub use field::{Field, FieldKind, FieldValue};
pub use form_state::FormState;
pub use options::FieldOption;
pub use review::{review_summary, ReviewSection};
pub use step::{progress, ProgressDot, Step};

//! Form rendering module
//!
//! - `field_renderer`: one field in a bordered box
//! - `step_form`: the fields of a data-entry step

mod field_renderer;
mod step_form;

pub use step_form::draw_step_form;

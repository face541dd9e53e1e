//! Form rendering module
//!
//! - `field_renderer`: text field rendering utilities
//! - `report_form`: the service report form sections

mod field_renderer;
mod report_form;

pub use report_form::draw_report_form;

//! Form domain layer
//!
//! Type-safe field values and the report form state holder.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{Focus, LaborItemForm, ReportForm};

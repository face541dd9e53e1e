//! Report domain layer
//!
//! Pure data and transforms for a service execution report:
//! - `model`: report, labor items, attachments
//! - `validate`: submission rules
//! - `export`: spreadsheet rows and xlsx writer
//! - `payload`: JSON payload and image encoding

mod export;
mod model;
mod payload;
mod validate;

pub use export::write_xlsx;
pub use model::{ActionType, ImageAttachment, LaborItem, Report, WorkType, IMAGE_EXTENSIONS};
pub use payload::{encode_images, EncodeError, LaborItemPayload, SubmitPayload};
pub use validate::{is_valid, validate};

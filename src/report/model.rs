//! Report data types

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

/// File extensions accepted as image attachments
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "heic", "heif"];

/// Contract classification of the executed work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkType {
    /// Work under contract with the utility
    #[serde(rename = "energisa")]
    Energisa,
    #[serde(rename = "particular")]
    Private,
}

impl WorkType {
    pub const ALL: [WorkType; 2] = [WorkType::Energisa, WorkType::Private];

    /// Human-readable label used in the form and in exports
    pub fn label(&self) -> &'static str {
        match self {
            Self::Energisa => "Contrato com a Energisa",
            Self::Private => "Particular",
        }
    }
}

/// Whether a labor item installed or removed equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActionType {
    #[default]
    #[serde(rename = "instalacao")]
    Installation,
    #[serde(rename = "remocao")]
    Removal,
}

impl ActionType {
    pub const ALL: [ActionType; 2] = [ActionType::Installation, ActionType::Removal];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Installation => "Instalação",
            Self::Removal => "Remoção",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Installation => Self::Removal,
            Self::Removal => Self::Installation,
        }
    }
}

/// One unit of billable work
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaborItem {
    pub id: Uuid,
    pub code: String,
    pub quantity: u32,
    pub action: ActionType,
}

impl LaborItem {
    /// Create a blank item with a fresh id
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            code: String::new(),
            quantity: 1,
            action: ActionType::default(),
        }
    }

    #[cfg(test)]
    pub fn with_code(code: &str, quantity: u32, action: ActionType) -> Self {
        Self {
            code: code.to_string(),
            quantity,
            action,
            ..Self::new()
        }
    }
}

impl Default for LaborItem {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors raised when attaching an image
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttachmentError {
    #[error("Arquivo não encontrado: {0}")]
    NotFound(String),

    #[error("O arquivo não é uma imagem: {0}")]
    NotAnImage(String),
}

/// An image file attached as photographic evidence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub path: PathBuf,
    pub name: String,
}

impl ImageAttachment {
    /// Attach an image from disk, checking it exists and looks like an image
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, AttachmentError> {
        let path = path.into();
        let display = path.display().to_string();

        if image_extension(&path).is_none() {
            return Err(AttachmentError::NotAnImage(display));
        }
        if !path.is_file() {
            return Err(AttachmentError::NotFound(display));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or(display);

        Ok(Self { path, name })
    }

    /// MIME type derived from the file extension
    pub fn mime_type(&self) -> &'static str {
        match image_extension(&self.path).as_deref() {
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            Some("bmp") => "image/bmp",
            Some("heic") => "image/heic",
            Some("heif") => "image/heif",
            _ => "application/octet-stream",
        }
    }
}

fn image_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    IMAGE_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Snapshot of the form contents, handed to the validator and transforms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub work_order: String,
    pub work_type: Option<WorkType>,
    /// Selected collaborators, in selection order
    pub collaborators: Vec<String>,
    pub labor_items: Vec<LaborItem>,
    pub images: Vec<ImageAttachment>,
}

impl Report {
    /// The rest of the form is usable once a work order is typed
    pub fn is_unlocked(&self) -> bool {
        !self.work_order.trim().is_empty()
    }

    pub fn work_type_label(&self) -> &'static str {
        self.work_type.map(|w| w.label()).unwrap_or("")
    }
}

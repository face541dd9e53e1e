//! Error types for report submission

use crate::report::EncodeError;
use thiserror::Error;

const GENERIC_FAILURE: &str = "Erro ao enviar dados. Tente novamente.";
const CONNECTION_FAILURE: &str =
    "Erro ao conectar com a planilha. Verifique sua conexão ou a URL do Script.";
const NOT_CONFIGURED: &str = "Configuração pendente: informe a URL do endpoint de envio.";
const ENCODE_FAILURE: &str = "Erro ao processar as imagens anexadas.";

/// Errors that can occur when submitting a report
#[derive(Debug, Error)]
pub enum SubmitError {
    /// No endpoint configured
    #[error("Endpoint not configured")]
    NotConfigured,

    /// An attached image could not be read
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// Network-level failure
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("Endpoint returned {status}")]
    Rejected { status: u16, message: Option<String> },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SubmitError {
    /// Message shown to the user in the notification toast
    pub fn user_message(&self) -> String {
        match self {
            Self::NotConfigured => NOT_CONFIGURED.to_string(),
            Self::Encode(_) => ENCODE_FAILURE.to_string(),
            Self::Transport(_) => CONNECTION_FAILURE.to_string(),
            Self::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            Self::Rejected { .. } | Self::Serialization(_) => GENERIC_FAILURE.to_string(),
        }
    }
}

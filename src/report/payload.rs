//! Submission payload and image encoding

use super::model::{ActionType, ImageAttachment, Report, WorkType};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use futures::future::try_join_all;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Failed to read image {}: {source}", .path.display())]
pub struct EncodeError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Labor item as sent over the wire (no id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaborItemPayload {
    pub code: String,
    pub quantity: u32,
    pub action_type: ActionType,
}

/// JSON body posted to the report endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPayload {
    pub work_order_number: String,
    pub work_type: Option<WorkType>,
    pub collaborators: Vec<String>,
    pub labor_items: Vec<LaborItemPayload>,
    /// Base64 data URLs, in attachment order
    pub images: Vec<String>,
}

impl SubmitPayload {
    pub fn new(report: &Report, images: Vec<String>) -> Self {
        Self {
            work_order_number: report.work_order.clone(),
            work_type: report.work_type,
            collaborators: report.collaborators.clone(),
            labor_items: report
                .labor_items
                .iter()
                .map(|item| LaborItemPayload {
                    code: item.code.clone(),
                    quantity: item.quantity,
                    action_type: item.action,
                })
                .collect(),
            images,
        }
    }
}

async fn encode_image(image: &ImageAttachment) -> Result<String, EncodeError> {
    let bytes = tokio::fs::read(&image.path)
        .await
        .map_err(|source| EncodeError {
            path: image.path.clone(),
            source,
        })?;
    Ok(format!(
        "data:{};base64,{}",
        image.mime_type(),
        STANDARD.encode(bytes)
    ))
}

/// Encode every image concurrently; the first failure fails the whole batch
pub async fn encode_images(images: &[ImageAttachment]) -> Result<Vec<String>, EncodeError> {
    try_join_all(images.iter().map(encode_image)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::LaborItem;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::fs;

    #[test]
    fn test_payload_shape() {
        let report = Report {
            work_order: "OS-9".to_string(),
            work_type: Some(WorkType::Private),
            collaborators: vec!["Ana".to_string()],
            labor_items: vec![LaborItem::with_code("MO-1", 3, ActionType::Removal)],
            images: vec![],
        };

        let payload = SubmitPayload::new(&report, vec!["data:image/png;base64,AA==".to_string()]);
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value,
            json!({
                "workOrderNumber": "OS-9",
                "workType": "particular",
                "collaborators": ["Ana"],
                "laborItems": [{"code": "MO-1", "quantity": 3, "actionType": "remocao"}],
                "images": ["data:image/png;base64,AA=="]
            })
        );
    }

    #[test]
    fn test_encode_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.jpg");
        fs::write(&a, b"first").unwrap();
        fs::write(&b, b"second").unwrap();

        let images = vec![
            ImageAttachment::from_path(&a).unwrap(),
            ImageAttachment::from_path(&b).unwrap(),
        ];

        let encoded = tokio_test::block_on(encode_images(&images)).unwrap();
        assert_eq!(
            encoded,
            vec![
                format!("data:image/png;base64,{}", STANDARD.encode(b"first")),
                format!("data:image/jpeg;base64,{}", STANDARD.encode(b"second")),
            ]
        );
    }

    #[tokio::test]
    async fn test_encode_fails_when_any_image_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.png");
        fs::write(&a, b"first").unwrap();

        let images = vec![
            ImageAttachment::from_path(&a).unwrap(),
            ImageAttachment {
                path: dir.path().join("gone.png"),
                name: "gone.png".to_string(),
            },
        ];

        let err = encode_images(&images).await.unwrap_err();
        assert_eq!(err.path, dir.path().join("gone.png"));
    }

    #[tokio::test]
    async fn test_encode_no_images() {
        assert!(encode_images(&[]).await.unwrap().is_empty());
    }
}

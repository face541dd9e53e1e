//! Report delivery to the external endpoint

mod client;
mod error;
mod traits;

pub use client::{DeliveryMode, HttpReportSink};
pub use error::SubmitError;
pub use traits::ReportSink;

#[cfg(test)]
pub use traits::MockReportSink;

use crate::report::{encode_images, Report, SubmitPayload};
use tracing::info;

/// Encode the report's images, build the payload and hand it to the sink
pub async fn submit_report(sink: &dyn ReportSink, report: &Report) -> Result<(), SubmitError> {
    let images = encode_images(&report.images).await?;
    let payload = SubmitPayload::new(report, images);

    info!(
        work_order = %payload.work_order_number,
        labor_items = payload.labor_items.len(),
        images = payload.images.len(),
        "Submitting report"
    );

    sink.deliver(&payload).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ActionType, ImageAttachment, LaborItem, WorkType};
    use std::fs;

    fn report_with_images(images: Vec<ImageAttachment>) -> Report {
        Report {
            work_order: "OS-1".to_string(),
            work_type: Some(WorkType::Energisa),
            collaborators: vec!["Ana".to_string()],
            labor_items: vec![LaborItem::with_code("MO-1", 1, ActionType::Installation)],
            images,
        }
    }

    #[tokio::test]
    async fn test_submit_encodes_images_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.png");
        fs::write(&a, b"aaa").unwrap();
        fs::write(&b, b"bbb").unwrap();
        let report = report_with_images(vec![
            ImageAttachment::from_path(&a).unwrap(),
            ImageAttachment::from_path(&b).unwrap(),
        ]);

        let mut sink = MockReportSink::new();
        sink.expect_deliver()
            .withf(|payload| {
                payload.images.len() == 2
                    && payload.images[0] == "data:image/png;base64,YWFh"
                    && payload.images[1] == "data:image/png;base64,YmJi"
            })
            .times(1)
            .returning(|_| Ok(()));

        submit_report(&sink, &report).await.unwrap();
    }

    #[tokio::test]
    async fn test_submit_skips_delivery_when_encoding_fails() {
        let dir = tempfile::tempdir().unwrap();
        let report = report_with_images(vec![ImageAttachment {
            path: dir.path().join("missing.png"),
            name: "missing.png".to_string(),
        }]);

        let mut sink = MockReportSink::new();
        sink.expect_deliver().times(0);

        let err = submit_report(&sink, &report).await.unwrap_err();
        assert!(matches!(err, SubmitError::Encode(_)));
    }

    #[tokio::test]
    async fn test_submit_propagates_sink_error() {
        let mut sink = MockReportSink::new();
        sink.expect_deliver().returning(|_| {
            Err(SubmitError::Rejected {
                status: 400,
                message: Some("Planilha cheia".to_string()),
            })
        });

        let err = submit_report(&sink, &report_with_images(vec![]))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "Planilha cheia");
    }
}

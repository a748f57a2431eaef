//! Document text extraction boundary.

use async_trait::async_trait;

use crate::errors::AppError;

/// Turns an uploaded document into plain text.
///
/// Returns an empty string when the document has no text layer (scanned
/// images). Carried in `AppState` as `Arc<dyn DocumentExtractor>`.
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    async fn extract_text(&self, document: Vec<u8>) -> Result<String, AppError>;
}

/// PDF extractor backed by `pdf-extract`.
pub struct PdfTextExtractor;

#[async_trait]
impl DocumentExtractor for PdfTextExtractor {
    async fn extract_text(&self, document: Vec<u8>) -> Result<String, AppError> {
        // pdf-extract is CPU-bound and can panic on malformed input
        let result =
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&document))
                .await;

        match result {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(AppError::UnreadableDocument(e.to_string())),
            Err(e) => Err(AppError::UnreadableDocument(format!(
                "PDF parser aborted: {e}"
            ))),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_garbage_bytes_are_unreadable() {
        let err = PdfTextExtractor
            .extract_text(b"definitely not a pdf".to_vec())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnreadableDocument(_)));
    }
}

//! Batch generation — runs the pipeline once per request and records every
//! outcome in its input slot. One failed item never aborts its siblings.

use futures::stream::{self, StreamExt};
use tracing::{error, info};

use crate::content::models::{BatchItem, GenerationRequest};
use crate::content::pipeline::ContentService;

impl ContentService {
    /// Returns one `BatchItem` per request, in input order.
    ///
    /// Up to `batch_concurrency` items run at once; `buffered` yields results in
    /// submission order, so slot `i` always holds request `i`.
    pub async fn generate_content_batch(&self, requests: &[GenerationRequest]) -> Vec<BatchItem> {
        info!(
            "Processing batch of {} requests (concurrency={})",
            requests.len(),
            self.batch_concurrency
        );

        // Futures own their request and service handle. Borrowed items here make
        // the handler future fail the `Send` check behind axum's `Handler` bound.
        let items: Vec<BatchItem> = stream::iter(requests.iter().cloned().enumerate())
            .map(|(index, request)| {
                let service = self.clone();
                async move {
                    match service.generate_content(&request).await {
                        Ok(result) => BatchItem::succeeded(index, result),
                        Err(e) => {
                            error!("Error generating content for request {index}: {e}");
                            BatchItem::failed(index, e.to_string())
                        }
                    }
                }
            })
            .buffered(self.batch_concurrency.max(1))
            .collect()
            .await;

        let failed = items.iter().filter(|item| !item.success).count();
        info!(
            "Batch complete: {} succeeded, {} failed",
            items.len() - failed,
            failed
        );

        items
    }
}

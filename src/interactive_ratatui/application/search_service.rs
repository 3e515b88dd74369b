use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use crate::interactive_ratatui::domain::models::{PageRequest, PageResponse};
use crate::search::SearchGateway;

/// Runs gateway calls on the tokio runtime and reports outcomes over a channel.
///
/// Every dispatched request gets its own task, so several calls may be in
/// flight at once. Nothing is cancelled; superseded responses are filtered by
/// the controller when they arrive.
pub struct SearchService {
    gateway: Arc<dyn SearchGateway>,
    runtime: Handle,
    response_tx: UnboundedSender<PageResponse>,
}

impl SearchService {
    pub fn new(
        gateway: Arc<dyn SearchGateway>,
        runtime: Handle,
    ) -> (Self, UnboundedReceiver<PageResponse>) {
        let (response_tx, response_rx) = mpsc::unbounded_channel();
        let service = Self {
            gateway,
            runtime,
            response_tx,
        };
        (service, response_rx)
    }

    pub fn dispatch(&self, page_request: PageRequest) {
        let gateway = Arc::clone(&self.gateway);
        let response_tx = self.response_tx.clone();

        debug!(
            id = page_request.id,
            query = %page_request.request.query,
            page = page_request.request.page_index,
            "dispatching search"
        );

        self.runtime.spawn(async move {
            let PageRequest { id, request } = page_request;
            let outcome = gateway.fetch_page(&request).await;

            match &outcome {
                Ok(page) => info!(
                    id,
                    items = page.items.len(),
                    total = page.total_count,
                    "search completed"
                ),
                Err(e) => warn!(id, error = %e, "search failed"),
            }

            // A closed channel means the UI has exited.
            let _ = response_tx.send(PageResponse {
                id,
                request,
                outcome,
            });
        });
    }
}

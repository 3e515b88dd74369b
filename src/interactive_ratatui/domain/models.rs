use crate::query::SearchRequest;
use crate::search::{GatewayError, ResultPage};

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Mode {
    Search,
    Help,
}

/// Lifecycle of the latest request. Exactly one value at any time.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl FetchStatus {
    pub fn is_loading(self) -> bool {
        self == FetchStatus::Loading
    }
}

// Request and response for async communication with the gateway worker.
// `id` is the generation token: only the response whose id matches the
// controller's current id may touch the result state.
#[derive(Clone, Debug, PartialEq)]
pub struct PageRequest {
    pub id: u64,
    pub request: SearchRequest,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageResponse {
    pub id: u64,
    pub request: SearchRequest,
    pub outcome: Result<ResultPage, GatewayError>,
}

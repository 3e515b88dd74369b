//! Shared fixtures for controller and service tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};
use futures::future::BoxFuture;
use tokio::sync::Notify;

use crate::query::SearchRequest;
use crate::schemas::{License, RepositorySummary};
use crate::search::{GatewayError, ResultPage, SearchGateway};

pub fn test_repo(id: u64, name: &str) -> RepositorySummary {
    RepositorySummary {
        id,
        name: name.to_string(),
        full_name: Some(format!("owner/{name}")),
        html_url: Some(format!("https://github.com/owner/{name}")),
        primary_language: Some("Rust".to_string()),
        fork_count: id * 10,
        star_count: id * 100,
        last_updated: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
        description: Some(format!("Description of {name}")),
        license: Some(License {
            name: "MIT License".to_string(),
        }),
        topics: Some(vec!["cli".to_string(), "search".to_string()]),
    }
}

pub fn test_page(names: &[&str], total_count: u64) -> ResultPage {
    ResultPage {
        items: names
            .iter()
            .enumerate()
            .map(|(i, name)| test_repo(i as u64 + 1, name))
            .collect(),
        total_count,
    }
}

/// In-memory gateway with per-request scripted outcomes and optional gates.
///
/// A gated request does not resolve until its `Notify` is signalled, which
/// lets tests control the order in which responses arrive.
#[derive(Default)]
pub struct ScriptedGateway {
    calls: Mutex<Vec<SearchRequest>>,
    outcomes: Mutex<HashMap<SearchRequest, Result<ResultPage, GatewayError>>>,
    gates: Mutex<HashMap<SearchRequest, Arc<Notify>>>,
}

impl ScriptedGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, request: SearchRequest, outcome: Result<ResultPage, GatewayError>) {
        self.outcomes.lock().unwrap().insert(request, outcome);
    }

    pub fn gate(&self, request: SearchRequest) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates.lock().unwrap().insert(request, Arc::clone(&gate));
        gate
    }

    pub fn calls(&self) -> Vec<SearchRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl SearchGateway for ScriptedGateway {
    fn fetch_page<'a>(
        &'a self,
        request: &'a SearchRequest,
    ) -> BoxFuture<'a, Result<ResultPage, GatewayError>> {
        Box::pin(async move {
            self.calls.lock().unwrap().push(request.clone());

            let gate = self.gates.lock().unwrap().get(request).cloned();
            if let Some(gate) = gate {
                gate.notified().await;
            }

            self.outcomes
                .lock()
                .unwrap()
                .get(request)
                .cloned()
                .unwrap_or_else(|| Ok(ResultPage::empty()))
        })
    }
}

//! Mock implementations of the action runtime for testing

use crate::invoker::{
    ActionRequest, ActionResult, ActionRuntime, ActionSource, InvokerError, InvokerResult,
    SourceRegistry,
};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Runtime that records every request and the sources visible at call time
#[derive(Clone, Default)]
pub struct RecordingRuntime {
    pub requests: Arc<Mutex<Vec<ActionRequest>>>,
    pub seen_sources: Arc<Mutex<Vec<ActionSource>>>,
}

impl RecordingRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_requests(&self) -> Vec<ActionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<ActionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn get_seen_sources(&self) -> Vec<ActionSource> {
        self.seen_sources.lock().unwrap().clone()
    }
}

#[async_trait]
impl ActionRuntime for RecordingRuntime {
    async fn run(
        &self,
        request: ActionRequest,
        sources: &SourceRegistry,
    ) -> InvokerResult<ActionResult> {
        *self.seen_sources.lock().unwrap() = sources.sources();
        self.requests.lock().unwrap().push(request.clone());

        let mut result = ActionResult::new();
        result.insert("action", Value::String(request.name));
        Ok(result)
    }
}

/// Runtime that fails every request
#[derive(Clone, Default)]
pub struct FailingRuntime;

#[async_trait]
impl ActionRuntime for FailingRuntime {
    async fn run(
        &self,
        request: ActionRequest,
        _sources: &SourceRegistry,
    ) -> InvokerResult<ActionResult> {
        Err(InvokerError::execution_failed(request.name, "mock failure"))
    }
}

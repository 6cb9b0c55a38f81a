//! Test doubles shared by the unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;

use crate::api::{ApiRequest, HttpBackend, RawResponse};
use crate::error::{ApiError, ApiResult, StoreError};
use crate::session::KeyValueStore;

/// Replays scripted responses in order and records every request.
#[derive(Default)]
pub struct FakeBackend {
    responses: RefCell<VecDeque<ApiResult<RawResponse>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_json(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Ok(RawResponse::new(status, body)));
    }

    pub fn push_network_error(&self, message: &str) {
        self.responses.borrow_mut().push_back(Err(ApiError::Network(message.to_string())));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl HttpBackend for FakeBackend {
    async fn send(&self, request: ApiRequest) -> ApiResult<RawResponse> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".into())))
    }
}

/// In-memory store; clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

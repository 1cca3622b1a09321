//! Recording fake HTTP client for integration tests.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use linkstash::{HttpClient, LinkstashError, Result};

/// One request the controller issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Delete { url: String },
    Post { url: String, body: String },
}

/// Scriptable [`HttpClient`]: records every request, optionally fails the
/// first N of them, and answers POSTs with a canned body. Clones share the
/// recording, so a clone can go into the controller while the original
/// stays available for assertions.
#[derive(Clone, Default)]
pub struct FakeHttp {
    requests: Arc<Mutex<Vec<Request>>>,
    fail_next: Arc<Mutex<usize>>,
    post_response: String,
}

impl FakeHttp {
    pub fn ok() -> Self {
        FakeHttp::default()
    }

    /// Answer POSTs with `body`.
    pub fn with_post_response(body: impl Into<String>) -> Self {
        FakeHttp {
            post_response: body.into(),
            ..FakeHttp::default()
        }
    }

    /// Fail the next `n` requests with a transport error, then succeed.
    pub fn fail_next(self, n: usize) -> Self {
        *self.fail_next.lock().unwrap() = n;
        self
    }

    pub fn recorded(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    fn should_fail(&self) -> bool {
        let mut remaining = self.fail_next.lock().unwrap();
        if *remaining > 0 {
            *remaining -= 1;
            true
        } else {
            false
        }
    }
}

impl HttpClient for FakeHttp {
    async fn delete(&self, url: &str) -> Result<()> {
        if self.should_fail() {
            return Err(LinkstashError::Other("connection refused".to_string()));
        }
        self.requests.lock().unwrap().push(Request::Delete {
            url: url.to_string(),
        });
        Ok(())
    }

    async fn post_json<B: Serialize + Sync>(&self, url: &str, body: &B) -> Result<String> {
        if self.should_fail() {
            return Err(LinkstashError::Other("connection refused".to_string()));
        }
        self.requests.lock().unwrap().push(Request::Post {
            url: url.to_string(),
            body: serde_json::to_string(body)?,
        });
        Ok(self.post_response.clone())
    }
}

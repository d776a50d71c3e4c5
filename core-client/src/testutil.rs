//! Shared test doubles for the bridge contracts.

use bridge_traits::error::{BridgeError, Result as BridgeResult};
use bridge_traits::http::{HttpClient, HttpRequest, HttpResponse};
use bridge_traits::storage::KeyValueStore;
use bridge_traits::ui::{Navigator, Notifier};
use bytes::Bytes;
use parking_lot::Mutex;
use std::collections::HashMap;

/// In-memory `KeyValueStore`.
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait::async_trait]
impl KeyValueStore for MemoryStore {
    async fn set_string(&self, key: &str, value: &str) -> BridgeResult<()> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get_string(&self, key: &str) -> BridgeResult<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    async fn delete(&self, key: &str) -> BridgeResult<()> {
        self.entries.lock().remove(key);
        Ok(())
    }

    async fn list_keys(&self) -> BridgeResult<Vec<String>> {
        Ok(self.entries.lock().keys().cloned().collect())
    }

    async fn clear_all(&self) -> BridgeResult<()> {
        self.entries.lock().clear();
        Ok(())
    }
}

/// Scripted outcome for one transport call.
pub enum ScriptedOutcome {
    Respond(u16, &'static str),
    Timeout,
    Unsendable(&'static str),
}

/// `HttpClient` that replays scripted outcomes and records every request.
pub struct ScriptedHttpClient {
    script: Mutex<Vec<ScriptedOutcome>>,
    pub requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    pub fn new(outcomes: Vec<ScriptedOutcome>) -> Self {
        let mut script = outcomes;
        script.reverse();
        Self {
            script: Mutex::new(script),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn respond_with(status: u16, body: &'static str) -> Self {
        Self::new(vec![ScriptedOutcome::Respond(status, body)])
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests.lock().last().cloned().expect("no request recorded")
    }
}

#[async_trait::async_trait]
impl HttpClient for ScriptedHttpClient {
    async fn execute(&self, request: HttpRequest) -> BridgeResult<HttpResponse> {
        self.requests.lock().push(request);

        match self.script.lock().pop() {
            Some(ScriptedOutcome::Respond(status, body)) => Ok(HttpResponse {
                status,
                headers: HashMap::new(),
                body: Bytes::from_static(body.as_bytes()),
            }),
            Some(ScriptedOutcome::Timeout) => Err(BridgeError::Timeout),
            Some(ScriptedOutcome::Unsendable(message)) => {
                Err(BridgeError::InvalidRequest(message.to_string()))
            }
            None => Err(BridgeError::Connection("script exhausted".to_string())),
        }
    }
}

/// `Navigator` that records redirects and titles.
pub struct RecordingNavigator {
    pub redirects: Mutex<Vec<String>>,
    pub titles: Mutex<Vec<String>>,
    pub path: Mutex<String>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::at("")
    }

    pub fn at(path: &str) -> Self {
        Self {
            redirects: Mutex::new(Vec::new()),
            titles: Mutex::new(Vec::new()),
            path: Mutex::new(path.to_string()),
        }
    }

    pub fn last_redirect(&self) -> Option<String> {
        self.redirects.lock().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        *self.path.lock() = path.to_string();
        self.redirects.lock().push(path.to_string());
    }

    fn set_title(&self, title: &str) {
        self.titles.lock().push(title.to_string());
    }

    fn current_path(&self) -> String {
        self.path.lock().clone()
    }
}

/// `Notifier` that records every message.
pub struct RecordingNotifier {
    pub errors: Mutex<Vec<String>>,
    pub infos: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            errors: Mutex::new(Vec::new()),
            infos: Mutex::new(Vec::new()),
        }
    }

    pub fn last_error(&self) -> Option<String> {
        self.errors.lock().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_error(&self, message: &str) {
        self.errors.lock().push(message.to_string());
    }

    fn notify_info(&self, message: &str) {
        self.infos.lock().push(message.to_string());
    }
}

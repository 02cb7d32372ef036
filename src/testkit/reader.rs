//! Scripted [`ContractReader`] for tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::call::Call;
use crate::error::{Error, Result};
use crate::port::ContractReader;

/// JSON-RPC code a node returns for an unknown entrypoint.
pub const ENTRYPOINT_NOT_FOUND: i64 = 21;

#[derive(Debug, Clone)]
enum Scripted {
    Felts(Vec<String>),
    Failure(String),
}

/// Answers view calls from a table keyed by entrypoint and records every
/// call it receives.
///
/// Unscripted entrypoints fail with [`ENTRYPOINT_NOT_FOUND`].
#[derive(Default)]
pub struct ScriptedReader {
    responses: Mutex<HashMap<String, Scripted>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `entrypoint` with `felts`.
    pub fn with_response<S: AsRef<str>>(self, entrypoint: &str, felts: &[S]) -> Self {
        let felts = felts.iter().map(|f| f.as_ref().to_string()).collect();
        self.responses
            .lock()
            .insert(entrypoint.to_string(), Scripted::Felts(felts));
        self
    }

    /// Fail `entrypoint` with an RPC error carrying `message`.
    pub fn with_failure(self, entrypoint: &str, message: &str) -> Self {
        self.responses
            .lock()
            .insert(entrypoint.to_string(), Scripted::Failure(message.to_string()));
        self
    }

    /// Wrap in an `Arc` ready for [`Contracts::new`](crate::application::Contracts::new).
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    /// Calls received for `entrypoint`.
    pub fn calls_to(&self, entrypoint: &str) -> Vec<Call> {
        self.calls
            .lock()
            .iter()
            .filter(|c| c.entrypoint == entrypoint)
            .cloned()
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl ContractReader for ScriptedReader {
    async fn call(&self, call: &Call) -> Result<Vec<String>> {
        self.calls.lock().push(call.clone());

        match self.responses.lock().get(&call.entrypoint) {
            Some(Scripted::Felts(felts)) => Ok(felts.clone()),
            Some(Scripted::Failure(message)) => Err(Error::Rpc {
                code: 40,
                message: message.clone(),
            }),
            None => Err(Error::Rpc {
                code: ENTRYPOINT_NOT_FOUND,
                message: format!("entrypoint not scripted: {}", call.entrypoint),
            }),
        }
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

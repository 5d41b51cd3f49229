//! Mock Oracle for deterministic testing
//!
//! Responses are scripted in call order (the pipeline's Oracle calls are
//! strictly sequential, so FIFO scripting maps one-to-one onto batches).
//! Once the script is exhausted the default response is returned.

use async_trait::async_trait;
use attest_domain::{Oracle, OracleError, OracleResponse};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One observed Oracle call, captured for assertions.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// System prompt the caller supplied
    pub system_prompt: String,
    /// User prompt the caller supplied
    pub user_prompt: String,
    /// Token ceiling the caller requested
    pub max_tokens: u32,
}

#[derive(Debug, Clone)]
enum Scripted {
    Text(String),
    Transient(String),
    Permanent(String),
}

/// Scripted Oracle that never touches the network.
///
/// # Examples
///
/// ```
/// use attest_oracle::MockOracle;
/// use attest_domain::Oracle;
///
/// # tokio_test::block_on(async {
/// let oracle = MockOracle::new("[]");
/// oracle.push_response(r#"[{"id": "claim-1"}]"#);
///
/// // Scripted response first, default afterwards.
/// assert_eq!(oracle.call("s", "u", 64).await.unwrap().text, r#"[{"id": "claim-1"}]"#);
/// assert_eq!(oracle.call("s", "u", 64).await.unwrap().text, "[]");
/// assert_eq!(oracle.call_count(), 2);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct MockOracle {
    default_response: String,
    script: Arc<Mutex<VecDeque<Scripted>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockOracle {
    /// Create a mock returning `default_response` for unscripted calls.
    pub fn new(default_response: impl Into<String>) -> Self {
        Self {
            default_response: default_response.into(),
            script: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a response for the next unconsumed call.
    pub fn push_response(&self, text: impl Into<String>) {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Text(text.into()));
    }

    /// Queue a transient failure (rate limit / 5xx) for the next call.
    pub fn push_transient_error(&self, message: impl Into<String>) {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Transient(message.into()));
    }

    /// Queue a permanent failure (bad credentials) for the next call.
    pub fn push_permanent_error(&self, message: impl Into<String>) {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Permanent(message.into()));
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// All calls made so far, in order.
    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockOracle {
    fn default() -> Self {
        Self::new("[]")
    }
}

#[async_trait]
impl Oracle for MockOracle {
    async fn call(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> Result<OracleResponse, OracleError> {
        self.calls.lock().unwrap().push(RecordedCall {
            system_prompt: system_prompt.to_string(),
            user_prompt: user_prompt.to_string(),
            max_tokens,
        });

        let next = self.script.lock().unwrap().pop_front();
        let text = match next {
            Some(Scripted::Text(text)) => text,
            Some(Scripted::Transient(msg)) => return Err(OracleError::Transient(msg)),
            Some(Scripted::Permanent(msg)) => return Err(OracleError::Permanent(msg)),
            None => self.default_response.clone(),
        };

        // Deterministic token accounting: roughly 4 chars per token.
        Ok(OracleResponse {
            input_tokens: ((system_prompt.len() + user_prompt.len()) / 4) as u64,
            output_tokens: (text.len() / 4) as u64,
            text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_response() {
        let oracle = MockOracle::new("fixed");
        let response = oracle.call("s", "u", 128).await.unwrap();
        assert_eq!(response.text, "fixed");
    }

    #[tokio::test]
    async fn test_scripted_responses_fifo() {
        let oracle = MockOracle::default();
        oracle.push_response("first");
        oracle.push_response("second");

        assert_eq!(oracle.call("s", "u", 1).await.unwrap().text, "first");
        assert_eq!(oracle.call("s", "u", 1).await.unwrap().text, "second");
        assert_eq!(oracle.call("s", "u", 1).await.unwrap().text, "[]");
    }

    #[tokio::test]
    async fn test_error_injection() {
        let oracle = MockOracle::default();
        oracle.push_transient_error("rate limited");
        oracle.push_permanent_error("bad key");

        assert!(matches!(
            oracle.call("s", "u", 1).await,
            Err(OracleError::Transient(_))
        ));
        assert!(matches!(
            oracle.call("s", "u", 1).await,
            Err(OracleError::Permanent(_))
        ));
    }

    #[tokio::test]
    async fn test_records_calls() {
        let oracle = MockOracle::default();
        oracle.call("system-a", "user-a", 256).await.unwrap();
        oracle.call("system-b", "user-b", 512).await.unwrap();

        let calls = oracle.recorded_calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].system_prompt, "system-a");
        assert_eq!(calls[1].max_tokens, 512);
    }

    #[tokio::test]
    async fn test_clone_shares_state() {
        let oracle = MockOracle::default();
        let other = oracle.clone();
        oracle.call("s", "u", 1).await.unwrap();
        assert_eq!(other.call_count(), 1);
    }

    #[tokio::test]
    async fn test_token_accounting_is_deterministic() {
        let oracle = MockOracle::new("12345678");
        let response = oracle.call("abcd", "efgh", 1).await.unwrap();
        assert_eq!(response.input_tokens, 2);
        assert_eq!(response.output_tokens, 2);
    }
}

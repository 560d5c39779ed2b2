use crate::config::AssistConfig;
use crate::error::{PlaybookError, Result};
use crate::{io, paths};
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Key storage
//
// The key is cached base64-obscured in .playbook/session/api_key so it
// doesn't sit in plain sight in a dotfile. That is obscurity, not
// encryption — the file is also kept out of version control.
// ---------------------------------------------------------------------------

pub fn store_key(root: &Path, key: &str) -> Result<()> {
    let encoded = base64::engine::general_purpose::STANDARD.encode(key.as_bytes());
    io::atomic_write(&paths::api_key_path(root), encoded.as_bytes())?;
    io::ensure_gitignore_entry(root, paths::API_KEY_FILE)?;
    Ok(())
}

pub fn load_key(root: &Path) -> Result<String> {
    let path = paths::api_key_path(root);
    if !path.exists() {
        return Err(PlaybookError::AssistKeyMissing);
    }
    let encoded = std::fs::read_to_string(&path)?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|_| PlaybookError::AssistKeyMissing)?;
    String::from_utf8(bytes).map_err(|_| PlaybookError::AssistKeyMissing)
}

pub fn clear_key(root: &Path) -> Result<()> {
    let path = paths::api_key_path(root);
    if path.exists() {
        std::fs::remove_file(&path)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Chat-completion client
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// One-shot client for the provider's chat-completion endpoint. The single
/// outbound call this tool ever makes.
pub struct AssistClient {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::blocking::Client,
}

const SYSTEM_PROMPT: &str = "You are a sales-enablement assistant. Answer with concise, \
practical guidance a rep can use on a live call.";

impl AssistClient {
    pub fn new(config: &AssistConfig, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key: api_key.into(),
            client: reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(60))
                .build()
                .unwrap_or_else(|_| reqwest::blocking::Client::new()),
        }
    }

    /// POST one prompt, return the first choice's content. Non-2xx responses
    /// surface as `Assist { status, message }` with the response body as the
    /// message so the caller can show it to the user.
    pub fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(|e| PlaybookError::Assist {
                status: 0,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(PlaybookError::Assist {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = response.json().map_err(|e| PlaybookError::Assist {
            status: status.as_u16(),
            message: format!("unexpected response shape: {e}"),
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| PlaybookError::Assist {
                status: status.as_u16(),
                message: "response contained no choices".to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn key_roundtrip_is_obscured_on_disk() {
        let dir = TempDir::new().unwrap();
        store_key(dir.path(), "sk-secret-123").unwrap();

        let raw = std::fs::read_to_string(dir.path().join(".playbook/session/api_key")).unwrap();
        assert!(!raw.contains("sk-secret-123"));

        assert_eq!(load_key(dir.path()).unwrap(), "sk-secret-123");
    }

    #[test]
    fn store_key_gitignores_the_file() {
        let dir = TempDir::new().unwrap();
        store_key(dir.path(), "sk-x").unwrap();
        let gitignore = std::fs::read_to_string(dir.path().join(".gitignore")).unwrap();
        assert!(gitignore.contains(".playbook/session/api_key"));
    }

    #[test]
    fn missing_key_is_distinct_error() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            load_key(dir.path()),
            Err(PlaybookError::AssistKeyMissing)
        ));
    }

    #[test]
    fn clear_key_removes_file() {
        let dir = TempDir::new().unwrap();
        store_key(dir.path(), "sk-x").unwrap();
        clear_key(dir.path()).unwrap();
        assert!(matches!(
            load_key(dir.path()),
            Err(PlaybookError::AssistKeyMissing)
        ));
        // Clearing again is a no-op
        clear_key(dir.path()).unwrap();
    }

    fn client_for(server: &mockito::ServerGuard) -> AssistClient {
        let config = AssistConfig {
            endpoint: format!("{}/v1/chat/completions", server.url()),
            model: "test-model".to_string(),
        };
        AssistClient::new(&config, "sk-test")
    }

    #[test]
    fn complete_returns_first_choice() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .with_status(200)
            .with_body(
                r#"{"choices":[{"message":{"role":"assistant","content":"Lead with ROI."}}]}"#,
            )
            .create();

        let answer = client_for(&server).complete("How do I open with a CFO?").unwrap();
        assert_eq!(answer, "Lead with ROI.");
        mock.assert();
    }

    #[test]
    fn complete_surfaces_http_failure() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/v1/chat/completions")
            .with_status(401)
            .with_body(r#"{"error":"invalid key"}"#)
            .create();

        let err = client_for(&server).complete("hi").unwrap_err();
        match err {
            PlaybookError::Assist { status, message } => {
                assert_eq!(status, 401);
                assert!(message.contains("invalid key"));
            }
            other => panic!("expected Assist error, got {other:?}"),
        }
    }

    #[test]
    fn complete_rejects_empty_choices() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices":[]}"#)
            .create();

        let err = client_for(&server).complete("hi").unwrap_err();
        assert!(matches!(err, PlaybookError::Assist { status: 200, .. }));
    }
}

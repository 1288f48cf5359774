//! Word-validity predicates
//!
//! Submission asks a [`WordValidator`] whether the typed word is a real word.
//! Every implementation answers with a plain `bool`: failures of any kind
//! count as "not valid" so the engine never sees a transport error.

use crate::wordlists::{ALLOWED, WordCatalog};
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Asynchronous "is this a word?" check
pub trait WordValidator {
    fn is_valid(&self, word: &str) -> impl Future<Output = bool>;
}

/// Answer of the remote check endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    pub word: String,
    pub is_valid: bool,
}

#[derive(Debug, Error)]
pub enum ValidityError {
    #[error("word check request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Local lookup in an in-memory word set
#[derive(Debug, Clone, Default)]
pub struct DictionaryValidator {
    words: FxHashSet<String>,
}

impl DictionaryValidator {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Every catalog word plus the embedded list of extra guessable words
    #[must_use]
    pub fn for_catalog(catalog: &WordCatalog) -> Self {
        Self::from_words(catalog.words().chain(ALLOWED.iter().copied()))
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordValidator for DictionaryValidator {
    async fn is_valid(&self, word: &str) -> bool {
        self.contains(word)
    }
}

/// Remote check: `GET {endpoint}?word=<word>` answering `{ "word", "isValid" }`
#[derive(Debug, Clone)]
pub struct HttpValidator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpValidator {
    pub const TIMEOUT: Duration = Duration::from_secs(5);

    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ValidityError> {
        let client = reqwest::Client::builder().timeout(Self::TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Ask the endpoint about `word` (sent lowercased)
    ///
    /// # Errors
    ///
    /// Returns an error on connection failure, a non-success status, or a
    /// response body that is not a check answer.
    pub async fn check(&self, word: &str) -> Result<CheckResponse, ValidityError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("word", word.to_lowercase())])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<CheckResponse>().await?)
    }
}

impl WordValidator for HttpValidator {
    async fn is_valid(&self, word: &str) -> bool {
        match self.check(word).await {
            Ok(answer) => answer.is_valid,
            Err(e) => {
                log::warn!("Error checking word validity: {e}");
                false
            }
        }
    }
}

/// Validator picked at startup from configuration
#[derive(Debug, Clone)]
pub enum ConfiguredValidator {
    Dictionary(DictionaryValidator),
    Http(HttpValidator),
}

impl WordValidator for ConfiguredValidator {
    async fn is_valid(&self, word: &str) -> bool {
        match self {
            Self::Dictionary(validator) => validator.is_valid(word).await,
            Self::Http(validator) => validator.is_valid(word).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve one canned HTTP response on a local port
    ///
    /// Returns the endpoint URL and a handle yielding the request line.
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request: Vec<u8> = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();

            String::from_utf8_lossy(&request)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });

        (format!("http://{addr}/api/check"), handle)
    }

    #[tokio::test]
    async fn dictionary_lookup_is_case_insensitive() {
        let validator = DictionaryValidator::from_words(["Apple", "grape", "  "]);
        assert_eq!(validator.len(), 2);
        assert!(validator.is_valid("apple").await);
        assert!(validator.is_valid("GRAPE").await);
        assert!(!validator.is_valid("xyzzy").await);
        assert!(!validator.is_valid("").await);
    }

    #[tokio::test]
    async fn catalog_validator_includes_extras() {
        let catalog = WordCatalog::from_words(["spoon"]);
        let validator = DictionaryValidator::for_catalog(&catalog);
        assert!(validator.is_valid("spoon").await);
        assert!(validator.is_valid("opens").await);
        assert!(validator.is_valid("wordles").await);
    }

    #[test]
    fn parses_check_response() {
        let answer: CheckResponse =
            serde_json::from_str(r#"{"word":"Apple","isValid":true}"#).unwrap();
        assert_eq!(
            answer,
            CheckResponse {
                word: "Apple".to_string(),
                is_valid: true
            }
        );

        // The endpoint's error body is not a check answer
        assert!(serde_json::from_str::<CheckResponse>(r#"{"error":"missing"}"#).is_err());
    }

    #[tokio::test]
    async fn http_failure_is_not_valid() {
        // Nothing listens on the discard port
        let validator = HttpValidator::new("http://127.0.0.1:9/api/check").unwrap();
        assert_eq!(validator.endpoint(), "http://127.0.0.1:9/api/check");
        assert!(!validator.is_valid("apple").await);
    }

    #[tokio::test]
    async fn http_sends_lowercased_word_and_reads_answer() {
        let (endpoint, request) =
            serve_once("200 OK", r#"{"word":"apple","isValid":true}"#).await;
        let validator = HttpValidator::new(endpoint).unwrap();

        assert!(validator.is_valid("APPLE").await);
        let request_line = request.await.unwrap();
        assert!(
            request_line.starts_with("GET /api/check?word=apple "),
            "{request_line}"
        );
    }

    #[tokio::test]
    async fn http_negative_answer_is_not_valid() {
        let (endpoint, request) =
            serve_once("200 OK", r#"{"word":"xyzzy","isValid":false}"#).await;
        let validator = HttpValidator::new(endpoint).unwrap();

        assert!(!validator.is_valid("xyzzy").await);
        request.await.unwrap();
    }

    #[tokio::test]
    async fn http_error_status_is_not_valid() {
        let (endpoint, request) = serve_once(
            "400 Bad Request",
            r#"{"error":"Missing word parameter"}"#,
        )
        .await;
        let validator = HttpValidator::new(endpoint).unwrap();

        assert!(!validator.is_valid("apple").await);
        request.await.unwrap();
    }

    #[tokio::test]
    async fn configured_validator_delegates() {
        let validator =
            ConfiguredValidator::Dictionary(DictionaryValidator::from_words(["lemon"]));
        assert!(validator.is_valid("lemon").await);
        assert!(!validator.is_valid("melon").await);
    }
}

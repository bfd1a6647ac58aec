//! Remote document download.
//!
//! Fetches a project's hosted showcase document over HTTP. The body is
//! accumulated fully in memory under a hard byte cap before anything is
//! written to disk. One GET per save, no retries; callers degrade to
//! presenting the reference when this fails.

use reqwest::Client;
use tracing::debug;

use crate::export;

/// Hard cap on downloaded document size.
pub const MAX_DOCUMENT_BYTES: usize = 25_000_000;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid URL: must be HTTP(S)")]
    InvalidScheme,

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("fetch failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("fetch failed: status {0}")]
    Status(u16),

    #[error("response too large (>{} bytes)", MAX_DOCUMENT_BYTES)]
    TooLarge,
}

/// A fully downloaded document.
#[derive(Debug)]
pub struct FetchedDocument {
    pub final_url: String,
    pub bytes: Vec<u8>,
}

pub async fn fetch_document(client: &Client, url: &str) -> Result<FetchedDocument, FetchError> {
    validate_url(url)?;

    let response = client
        .get(url)
        .header("User-Agent", crate::USER_AGENT)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let final_url = response.url().to_string();

    if response
        .content_length()
        .is_some_and(|len| len as usize > MAX_DOCUMENT_BYTES)
    {
        return Err(FetchError::TooLarge);
    }

    let mut bytes = Vec::new();
    let mut stream = response;
    while let Some(chunk) = stream.chunk().await? {
        bytes.extend_from_slice(&chunk);
        if bytes.len() > MAX_DOCUMENT_BYTES {
            return Err(FetchError::TooLarge);
        }
    }

    debug!(url = %final_url, bytes = bytes.len(), "document fetched");
    Ok(FetchedDocument { final_url, bytes })
}

fn validate_url(raw: &str) -> Result<(), FetchError> {
    let parsed = url::Url::parse(raw)?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(FetchError::InvalidScheme),
    }
}

/// File name for a downloaded document: the last path segment of the URL,
/// or `document.pdf` when the URL has no usable one.
pub fn file_name_for(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|parsed| {
            parsed
                .path_segments()
                .and_then(|segments| segments.last())
                .map(|s| s.to_string())
        })
        .and_then(|name| export::sanitize_file_name(&name))
        .unwrap_or_else(|| "document.pdf".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(validate_url("http://example.com/doc.pdf").is_ok());
        assert!(validate_url("https://example.com/doc.pdf").is_ok());
    }

    #[test]
    fn rejects_non_http_url() {
        assert!(matches!(
            validate_url("ftp://example.com/doc.pdf"),
            Err(FetchError::InvalidScheme)
        ));
        assert!(matches!(
            validate_url("file:///tmp/doc.pdf"),
            Err(FetchError::InvalidScheme)
        ));
    }

    #[test]
    fn rejects_invalid_url() {
        assert!(matches!(
            validate_url("not-a-url"),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    #[test]
    fn file_name_taken_from_last_segment() {
        assert_eq!(
            file_name_for("https://example.com/showcase/Window_Rdp_Connection.pdf"),
            "Window_Rdp_Connection.pdf"
        );
    }

    #[test]
    fn file_name_ignores_query_string() {
        assert_eq!(
            file_name_for("https://example.com/a/report.pdf?token=abc"),
            "report.pdf"
        );
    }

    #[test]
    fn file_name_falls_back_for_bare_urls() {
        assert_eq!(file_name_for("https://example.com/"), "document.pdf");
        assert_eq!(file_name_for("https://example.com"), "document.pdf");
        assert_eq!(file_name_for("relative/path.pdf"), "document.pdf");
    }
}

#[cfg(test)]
mod download_tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetch_success_returns_bytes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/doc.pdf"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.7 fake".to_vec()))
            .mount(&server)
            .await;

        let client = Client::new();
        let doc = fetch_document(&client, &format!("{}/doc.pdf", server.uri()))
            .await
            .unwrap();

        assert_eq!(doc.bytes, b"%PDF-1.7 fake");
        assert!(doc.final_url.ends_with("/doc.pdf"));
    }

    #[tokio::test]
    async fn fetch_404_returns_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing.pdf"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = Client::new();
        let result = fetch_document(&client, &format!("{}/missing.pdf", server.uri())).await;
        assert!(matches!(result, Err(FetchError::Status(404))));
    }

    #[tokio::test]
    async fn fetch_500_returns_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/error.pdf"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = Client::new();
        let result = fetch_document(&client, &format!("{}/error.pdf", server.uri())).await;
        assert!(matches!(result, Err(FetchError::Status(500))));
    }

    #[tokio::test]
    async fn fetch_too_large_body_rejected() {
        let oversized = vec![b'x'; MAX_DOCUMENT_BYTES + 1];
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/huge.pdf"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(oversized))
            .mount(&server)
            .await;

        let client = Client::new();
        let result = fetch_document(&client, &format!("{}/huge.pdf", server.uri())).await;
        assert!(matches!(result, Err(FetchError::TooLarge)));
    }

    #[tokio::test]
    async fn fetch_connection_failure_is_http_error() {
        // Port 1 is never listening
        let client = Client::new();
        let result = fetch_document(&client, "http://127.0.0.1:1/doc.pdf").await;
        assert!(matches!(result, Err(FetchError::Http(_))));
    }
}

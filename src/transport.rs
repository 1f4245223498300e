//! Sends the encoded form to the sheet endpoint

use crate::error::TransportError;
use crate::types::ServerResponse;
use reqwest::header::CONTENT_TYPE;
use std::future::Future;
use tracing::debug;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub trait Transport {
    /// POST an already encoded form body and decode the JSON reply
    fn post_form(
        &self,
        body: String,
    ) -> impl Future<Output = Result<ServerResponse, TransportError>> + Send;
}

/// `reqwest`-backed transport; cheap to clone, the client is shared
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    async fn post_form(&self, body: String) -> Result<ServerResponse, TransportError> {
        debug!(url = %self.endpoint, bytes = body.len(), "Posting contact form");

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        // Only the JSON body decides the outcome, not the HTTP status
        debug!(status = %response.status(), "Endpoint responded");
        let payload = response.json::<serde_json::Value>().await?;
        Ok(ServerResponse::from_json(&payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Answers a single request with a canned reply and hands back what it received
    async fn serve_once(status: &str, content_type: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/exec", listener.local_addr().unwrap());
        let reply = format!(
            "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                if n == 0 || request_complete(&request) {
                    break;
                }
            }
            socket.write_all(reply.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (url, handle)
    }

    /// Headers are in and the body has reached its declared length
    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some((head, body)) = text.split_once("\r\n\r\n") else {
            return false;
        };
        let length = header(head, "content-length")
            .and_then(|value| value.parse::<usize>().ok())
            .unwrap_or(0);
        body.len() >= length
    }

    fn header<'a>(request: &'a str, name: &str) -> Option<&'a str> {
        request
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.trim())
    }

    #[tokio::test]
    async fn posts_urlencoded_body() {
        let (url, server) = serve_once("200 OK", "application/json", r#"{"status":"success"}"#).await;
        let transport = HttpTransport::new(url);

        let response = transport.post_form("nombre=Ana&email=ana%40correo.pe".to_string()).await.unwrap();
        let request = server.await.unwrap();

        assert!(response.is_success());
        assert!(request.starts_with("POST /exec HTTP/1.1\r\n"));
        assert_eq!(header(&request, "content-type"), Some(FORM_CONTENT_TYPE));
        assert!(request.ends_with("\r\n\r\nnombre=Ana&email=ana%40correo.pe"));
    }

    #[tokio::test]
    async fn html_body_is_a_transport_error() {
        let (url, server) = serve_once("200 OK", "text/html", "<html>Moved</html>").await;
        let transport = HttpTransport::new(url);

        let err = transport.post_form("nombre=Ana".to_string()).await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, TransportError::Request(_)));
    }

    #[tokio::test]
    async fn http_status_does_not_decide_the_outcome() {
        let (url, server) = serve_once(
            "500 Internal Server Error",
            "application/json",
            r#"{"status":"error","message":"x"}"#,
        )
        .await;
        let transport = HttpTransport::new(url);

        let response = transport.post_form("nombre=Ana".to_string()).await.unwrap();
        server.await.unwrap();

        assert!(!response.is_success());
        assert_eq!(response.status.as_deref(), Some("error"));
        assert_eq!(response.message.as_deref(), Some("x"));
    }
}

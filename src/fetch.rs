// src/fetch.rs

use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use crate::error::ScrapeError;

/// Some result pages refuse clients that do not look like a browser.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

pub fn build_client(cfg: &FetchConfig) -> Result<Client, ScrapeError> {
    Client::builder()
        .timeout(cfg.timeout)
        .user_agent(cfg.user_agent.as_str())
        .build()
        .map_err(ScrapeError::Client)
}

/// GETs `url` once and returns the body decoded with the charset from the
/// `Content-Type` header (UTF-8 when absent). Anything but 200 OK is an
/// error; there is no retry.
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String, ScrapeError> {
    let fetch_err = |source: reqwest::Error| ScrapeError::Fetch {
        url: url.to_string(),
        source,
    };

    info!(%url, "fetching page");
    let resp = client.get(url.clone()).send().await.map_err(fetch_err)?;

    let status = resp.status();
    if status != StatusCode::OK {
        return Err(ScrapeError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("").to_string(),
        });
    }

    let body = resp.text().await.map_err(fetch_err)?;
    debug!(%url, chars = body.len(), "page received");
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    fn page_url(server: &MockServer, p: &str) -> Url {
        Url::parse(&format!("{}{}", server.uri(), p)).unwrap()
    }

    #[tokio::test]
    async fn returns_body_on_200() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/entrylist"))
            .and(|req: &Request| {
                req.headers
                    .get("user-agent")
                    .is_some_and(|ua| ua.as_bytes() == DEFAULT_USER_AGENT.as_bytes())
            })
            .respond_with(ResponseTemplate::new(200).set_body_string("<table></table>"))
            .mount(&server)
            .await;

        let client = build_client(&FetchConfig::default()).unwrap();
        let body = fetch_page(&client, &page_url(&server, "/entrylist"))
            .await
            .unwrap();

        assert_eq!(body, "<table></table>");
    }

    #[tokio::test]
    async fn decodes_declared_latin1_charset() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(b"<td>S\xe3o Paulo</td>".to_vec(), "text/html; charset=iso-8859-1"),
            )
            .mount(&server)
            .await;

        let client = build_client(&FetchConfig::default()).unwrap();
        let body = fetch_page(&client, &page_url(&server, "/"))
            .await
            .unwrap();

        assert_eq!(body, "<td>São Paulo</td>");
    }

    #[test]
    fn invalid_user_agent_is_a_client_error() {
        let cfg = FetchConfig {
            user_agent: "bad\nagent".to_string(),
            ..FetchConfig::default()
        };
        let err = build_client(&cfg).unwrap_err();
        assert!(matches!(err, ScrapeError::Client(_)));
    }

    #[tokio::test]
    async fn non_200_is_a_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = build_client(&FetchConfig::default()).unwrap();
        let err = fetch_page(&client, &page_url(&server, "/gone"))
            .await
            .unwrap_err();

        match err {
            ScrapeError::Status { status, .. } => assert_eq!(status, 404),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn other_success_codes_are_rejected_too() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = build_client(&FetchConfig::default()).unwrap();
        let err = fetch_page(&client, &page_url(&server, "/"))
            .await
            .unwrap_err();

        assert!(matches!(err, ScrapeError::Status { status: 204, .. }));
    }

    #[tokio::test]
    async fn slow_server_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;

        let cfg = FetchConfig {
            timeout: Duration::from_millis(200),
            ..FetchConfig::default()
        };
        let client = build_client(&cfg).unwrap();
        let err = fetch_page(&client, &page_url(&server, "/"))
            .await
            .unwrap_err();

        assert!(matches!(err, ScrapeError::Fetch { .. }));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_fetch_error() {
        let client = build_client(&FetchConfig::default()).unwrap();
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();
        // listener is dropped, nothing accepts on that port any more
        let url = Url::parse(&format!("http://{addr}/")).unwrap();
        let err = fetch_page(&client, &url).await.unwrap_err();

        assert!(matches!(err, ScrapeError::Fetch { .. }));
    }
}

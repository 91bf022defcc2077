//! Listing API client trait and `reqwest`-backed implementation.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::models::{ListMoviesResponse, MoviePage};
use crate::query::ListQuery;

pub const DEFAULT_ENDPOINT: &str = "https://yts.mx/api/v2/list_movies.json";

/// Upper bound for one request, connect to last body byte
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that can answer a [`ListQuery`] with a page of movies.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn list_movies(&self, query: &ListQuery) -> Result<MoviePage, FetchError>;
}

#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    endpoint: String,
    http: reqwest::Client,
}

impl HttpCatalogClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client, requests have no timeout: {e}");
                reqwest::Client::new()
            });
        Self::with_client(http, endpoint)
    }

    /// Reuse an existing [`reqwest::Client`] (and its connection pool).
    pub fn with_client(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpCatalogClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogClient {
    async fn list_movies(&self, query: &ListQuery) -> Result<MoviePage, FetchError> {
        debug!("GET {} {:?}", self.endpoint, query);

        let response = self
            .http
            .get(&self.endpoint)
            .query(&query.query_pairs())
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(FetchError::Transport)?;
        decode_list_response(&body, query.limit)
    }
}

/// Map a successful HTTP body to a page. `limit` is the requested page size,
/// which is what the page count is derived from.
pub fn decode_list_response(body: &[u8], limit: u32) -> Result<MoviePage, FetchError> {
    let response: ListMoviesResponse =
        serde_json::from_slice(body).map_err(FetchError::Decode)?;

    if response.status != "ok" {
        return Err(FetchError::Api(response.status_message));
    }

    let Some(data) = response.data else {
        return Err(FetchError::Api(response.status_message));
    };

    Ok(MoviePage {
        movies: data.movies.unwrap_or_default(),
        total_count: data.movie_count,
        page: data.page_number.max(1),
        limit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    const OK_BODY: &str = r#"{
        "status": "ok",
        "status_message": "Query was successful",
        "data": {
            "movie_count": 45,
            "limit": 20,
            "page_number": 1,
            "movies": [
                {
                    "id": 1,
                    "title": "Alien",
                    "year": 1979,
                    "rating": 8.5,
                    "medium_cover_image": "https://img.example/alien.jpg",
                    "genres": ["Horror", "Sci-Fi"],
                    "runtime": 117
                },
                {
                    "id": 2,
                    "title": "Aliens",
                    "year": 1986,
                    "rating": 8.4,
                    "medium_cover_image": "",
                    "genres": ["Action", "Adventure", "Horror", "Sci-Fi"],
                    "runtime": 0
                }
            ]
        }
    }"#;

    #[test]
    fn test_decode_ok_response() {
        let page = decode_list_response(OK_BODY.as_bytes(), 20).unwrap();
        assert_eq!(page.movies.len(), 2);
        assert_eq!(page.total_count, 45);
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.movies[0].title, "Alien");
        assert_eq!(page.movies[1].displayed_genres().len(), 3);
    }

    #[test]
    fn test_decode_empty_result_without_movies_field() {
        let body = r#"{
            "status": "ok",
            "status_message": "Query was successful",
            "data": { "movie_count": 0, "limit": 20, "page_number": 1 }
        }"#;
        let page = decode_list_response(body.as_bytes(), 20).unwrap();
        assert!(page.movies.is_empty());
        assert_eq!(page.total_pages(), 1);
    }

    #[test]
    fn test_decode_api_error() {
        let body = r#"{ "status": "error", "status_message": "Invalid page" }"#;
        let err = decode_list_response(body.as_bytes(), 20).unwrap_err();
        assert!(matches!(err, FetchError::Api(_)));
        assert_eq!(err.to_string(), "Invalid page");
    }

    #[test]
    fn test_decode_garbage_body() {
        let err = decode_list_response(b"<html>502</html>", 20).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
        assert_eq!(err.to_string(), "Failed to fetch movies");
    }

    /// Serves a single connection with `response` and returns the endpoint
    /// plus a task yielding the request head it received.
    async fn serve_once(response: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!(
            "http://{}/api/v2/list_movies.json",
            listener.local_addr().unwrap()
        );

        let server = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
            String::from_utf8_lossy(&head).into_owned()
        });

        (endpoint, server)
    }

    fn local_client(endpoint: String) -> HttpCatalogClient {
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        HttpCatalogClient::with_client(http, endpoint)
    }

    #[tokio::test]
    async fn test_http_ok_sends_query_and_decodes() {
        let response = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            OK_BODY.len(),
            OK_BODY
        );
        let (endpoint, server) = serve_once(response).await;

        let query = ListQuery::default().with_search_term("alien").with_page(2);
        let page = local_client(endpoint).list_movies(&query).await.unwrap();
        assert_eq!(page.movies.len(), 2);
        assert_eq!(page.total_count, 45);

        let head = server.await.unwrap();
        assert!(
            head.starts_with("GET /api/v2/list_movies.json?limit=20&page=2&query_term=alien HTTP/1.1"),
            "unexpected request: {head}"
        );
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let response = "HTTP/1.1 503 Service Unavailable\r\ncontent-length: 0\r\nconnection: close\r\n\r\n";
        let (endpoint, server) = serve_once(response.to_string()).await;

        let err = local_client(endpoint)
            .list_movies(&ListQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Status(503)));
        assert_eq!(err.user_message(), "API request failed with status 503");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let endpoint = format!("http://{addr}/api/v2/list_movies.json");
        let err = local_client(endpoint)
            .list_movies(&ListQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
        assert_eq!(err.user_message(), "Failed to fetch movies");
    }

    #[test]
    fn test_default_client_endpoint() {
        assert_eq!(HttpCatalogClient::default().endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_page_count_uses_requested_limit() {
        let page = decode_list_response(OK_BODY.as_bytes(), 50).unwrap();
        assert_eq!(page.total_pages(), 1);
    }
}

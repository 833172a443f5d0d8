use reqwest::{Client, Response};
use serde_json::json;
use tracing::debug;

use crate::api::error::ApiError;
use crate::todo::models::{Todo, TodoUpdate};

/// Thin client for the todo backend. The base URL is fixed at construction
/// and never changes for the lifetime of the session; the client is cheap
/// to clone and is handed to each in-flight operation.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(backend_url: &str) -> Result<Self, ApiError> {
        let http = Client::builder().build()?;

        Ok(Self {
            http,
            base_url: format!("{}/api", backend_url.trim_end_matches('/')),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let resp = self.http.get(self.url("/todos")).send().await?;
        let resp = check_status(resp)?;
        Ok(resp.json().await?)
    }

    pub async fn create_todo(&self, title: &str) -> Result<Todo, ApiError> {
        debug!(title, "creating todo");
        let resp = self
            .http
            .post(self.url("/todos"))
            .json(&json!({ "title": title }))
            .send()
            .await?;
        let resp = check_status(resp)?;
        Ok(resp.json().await?)
    }

    pub async fn update_todo(&self, id: &str, update: &TodoUpdate) -> Result<Todo, ApiError> {
        debug!(id, "updating todo");
        let resp = self
            .http
            .put(self.url(&format!("/todos/{}", id)))
            .json(update)
            .send()
            .await?;
        let resp = check_status(resp)?;
        Ok(resp.json().await?)
    }

    pub async fn delete_todo(&self, id: &str) -> Result<(), ApiError> {
        debug!(id, "deleting todo");
        let resp = self.http.delete(self.url(&format!("/todos/{}", id))).send().await?;
        check_status(resp)?;
        Ok(())
    }
}

fn check_status(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(ApiError::Status { status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.url("/todos"), "http://localhost:8000/api/todos");

        let client = ApiClient::new("http://localhost:8000").unwrap();
        assert_eq!(client.url("/todos/42"), "http://localhost:8000/api/todos/42");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_a_request_error() {
        // Nothing listens on this port; the connection is refused
        let client = ApiClient::new("http://127.0.0.1:1").unwrap();
        let result = client.list_todos().await;
        assert!(matches!(result, Err(ApiError::Request(_))));
    }
}

//! HTTP client for network-based API calls

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::client::{
    AssignDepartmentRequest, AssignDepartmentResponse, DepartmentListResponse,
    EmployeeListResponse, ProfileResponse, ScopedEmployeeListResponse,
};

use crate::error::{ClientError, ClientResult};
use crate::gateway::DirectoryGateway;
use crate::ClientConfig;

/// HTTP client for making network requests to the directory API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'));
        let mut request = self.client.get(&url);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'));
        let mut request = self.client.put(&url).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        Self::parse_json(&text)
    }

    /// Decode a success body, mapping decode failures to `InvalidResponse`
    /// rather than a transport error.
    fn parse_json<T: DeserializeOwned>(body: &str) -> ClientResult<T> {
        serde_json::from_str(body).map_err(|err| ClientError::InvalidResponse(err.to_string()))
    }
}

// ========== Directory API ==========

#[async_trait]
impl DirectoryGateway for HttpClient {
    async fn fetch_all_employees(&self) -> ClientResult<EmployeeListResponse> {
        self.get("/api/employees").await
    }

    async fn fetch_department_scoped_employees(&self) -> ClientResult<ScopedEmployeeListResponse> {
        self.get("/api/employees/department").await
    }

    async fn fetch_departments(&self) -> ClientResult<DepartmentListResponse> {
        self.get("/api/departments").await
    }

    async fn fetch_own_profile(&self) -> ClientResult<ProfileResponse> {
        self.get("/api/users/profile").await
    }

    async fn assign_employee_department(
        &self,
        employee_id: &str,
        department_id: &str,
    ) -> ClientResult<AssignDepartmentResponse> {
        let request = AssignDepartmentRequest {
            department_id: department_id.to_string(),
        };
        self.put(&format!("/api/employees/{}/department", employee_id), &request)
            .await
    }
}

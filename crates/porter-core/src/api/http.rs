//! Blocking HTTP implementation of [`ProjectsApi`].

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::api::errors::ApiError;
use crate::api::traits::ProjectsApi;
use crate::api::types::{AuthUser, CreateProjectBody};
use crate::config::ApiConfig;
use crate::types::{Cluster, Project};

/// Maximum number of response body bytes kept in error messages.
const ERROR_BODY_LIMIT: usize = 512;

/// Porter API client over HTTP.
///
/// All routes live under `{host}/api`. When a token is configured it is sent
/// as a bearer token on every request.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    base_url: String,
    token: Option<String>,
    client: Client,
}

impl HttpApiClient {
    /// Build a client from the API section of the config.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidHost` if the host is not an absolute http(s) URL.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let host = config.host();
        let parsed = Url::parse(host).map_err(|e| ApiError::InvalidHost {
            host: host.to_string(),
            message: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidHost {
                host: host.to_string(),
                message: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(
                    event = "core.api.client_build_failed",
                    error = %e,
                    "Falling back to default HTTP client"
                );
                Client::new()
            });

        Ok(Self {
            base_url: format!("{}/api", host.trim_end_matches('/')),
            token: config.token.clone(),
            client,
        })
    }

    /// Base URL including the `/api` prefix.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request and decode a JSON body.
    fn send<T: DeserializeOwned>(&self, request: RequestBuilder, url: String) -> Result<T, ApiError> {
        tracing::debug!(event = "core.api.request_started", url = %url);

        let response = self
            .authorize(request)
            .send()
            .map_err(|source| ApiError::RequestFailed {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response.text().map_err(|source| ApiError::RequestFailed {
            url: url.clone(),
            source,
        })?;

        if !status.is_success() {
            tracing::warn!(
                event = "core.api.request_failed",
                url = %url,
                status = status.as_u16()
            );
            return Err(status_error(status, url, body));
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode {
            url,
            message: e.to_string(),
        })
    }
}

fn status_error(status: StatusCode, url: String, body: String) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized,
        StatusCode::NOT_FOUND => ApiError::NotFound { url },
        _ => ApiError::UnexpectedStatus {
            url,
            status: status.as_u16(),
            body: truncate_body(body),
        },
    }
}

fn truncate_body(body: String) -> String {
    if body.len() <= ERROR_BODY_LIMIT {
        return body;
    }
    let mut end = ERROR_BODY_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

impl ProjectsApi for HttpApiClient {
    fn auth_check(&self) -> Result<AuthUser, ApiError> {
        let url = self.url("/auth/check");
        self.send(self.client.get(&url), url)
    }

    fn list_user_projects(&self, user_id: u64) -> Result<Vec<Project>, ApiError> {
        let url = self.url(&format!("/users/{}/projects", user_id));
        self.send(self.client.get(&url), url)
    }

    fn create_project(&self, name: &str) -> Result<Project, ApiError> {
        let url = self.url("/projects");
        let body = CreateProjectBody {
            name: name.to_string(),
        };
        let project: Project = self.send(self.client.post(&url).json(&body), url)?;

        tracing::info!(
            event = "core.api.project_created",
            project_id = project.id,
            name = %project.name
        );

        Ok(project)
    }

    fn delete_project(&self, project_id: u64) -> Result<Project, ApiError> {
        let url = self.url(&format!("/projects/{}", project_id));
        let project: Project = self.send(self.client.delete(&url), url)?;

        tracing::info!(event = "core.api.project_deleted", project_id = project.id);

        Ok(project)
    }

    fn list_project_clusters(&self, project_id: u64) -> Result<Vec<Cluster>, ApiError> {
        let url = self.url(&format!("/projects/{}/clusters", project_id));
        self.send(self.client.get(&url), url)
    }
}

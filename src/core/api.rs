use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Payload for the create-project call. Built fresh per submission attempt
/// and never mutated after send. Dates are complete ISO-8601 timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
}

/// Project entity as returned by the backend on creation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

// Error-status bodies the backend emits for domain rejections.
#[derive(Debug, Deserialize)]
struct RejectionBody {
    message: String,
}

/// The two outcomes the service can report without the transport failing:
/// it created the project, or it explicitly rejected the request with a
/// user-displayable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateResponse {
    Created(Project),
    Rejected { message: String },
}

impl CreateResponse {
    /// Interprets the body of an error-status response. Only the
    /// `{ "message": ... }` shape is a structured rejection; any other body
    /// is a transport fault.
    pub fn from_error_body(status: u16, body: &str) -> Result<Self, TransportError> {
        match serde_json::from_str::<RejectionBody>(body) {
            Ok(rejection) => Ok(CreateResponse::Rejected {
                message: rejection.message,
            }),
            Err(_) => Err(TransportError::UnexpectedShape { status }),
        }
    }
}

/// The request never completed in a form we recognize. Deliberately carried
/// as a value (not thrown away) so callers can decide how loudly to fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unrecognized response from the creation service (status {status})")]
    UnexpectedShape { status: u16 },
}

/// Capability boundary for the remote creation service. The form controller
/// only needs this one operation; tests substitute an in-memory fake.
pub trait CreateProjectService {
    async fn create_project(
        &self,
        request: &CreateProjectRequest,
    ) -> Result<CreateResponse, TransportError>;
}

/// HTTP-backed creation service.
#[derive(Debug, Clone)]
pub struct ProjectClient {
    http: Client,
    base_url: String,
}

impl ProjectClient {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn projects_url(&self) -> String {
        format!("{}/projects", self.base_url.trim_end_matches('/'))
    }
}

impl CreateProjectService for ProjectClient {
    async fn create_project(
        &self,
        request: &CreateProjectRequest,
    ) -> Result<CreateResponse, TransportError> {
        let url = self.projects_url();
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|err| TransportError::Request(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            let project: Project = response
                .json()
                .await
                .map_err(|err| TransportError::Request(err.to_string()))?;
            return Ok(CreateResponse::Created(project));
        }

        let body = response
            .text()
            .await
            .map_err(|err| TransportError::Request(err.to_string()))?;
        CreateResponse::from_error_body(status.as_u16(), &body)
    }
}

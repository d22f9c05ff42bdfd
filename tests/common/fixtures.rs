use std::sync::{Arc, Mutex};

use projectboard::{
    CreateProjectRequest, CreateProjectService, CreateResponse, Project, ProjectDraft,
    TransportError,
};

/// How the scripted service should answer the next call.
#[derive(Debug, Clone)]
pub enum ServiceScript {
    /// Answer with a created project echoing the request.
    Accept,
    /// Answer with a structured rejection carrying this message.
    Reject(&'static str),
    /// Fail at the transport level before any envelope arrives.
    Fail,
}

/// In-memory stand-in for the remote creation service. Records every
/// request it receives so tests can assert on call counts and payloads.
#[derive(Debug, Clone)]
pub struct ScriptedService {
    script: ServiceScript,
    calls: Arc<Mutex<Vec<CreateProjectRequest>>>,
}

impl ScriptedService {
    pub fn new(script: ServiceScript) -> Self {
        Self {
            script,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn accepting() -> Self {
        Self::new(ServiceScript::Accept)
    }

    pub fn rejecting(message: &'static str) -> Self {
        Self::new(ServiceScript::Reject(message))
    }

    pub fn failing() -> Self {
        Self::new(ServiceScript::Fail)
    }

    pub fn calls(&self) -> Vec<CreateProjectRequest> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }
}

impl CreateProjectService for ScriptedService {
    async fn create_project(
        &self,
        request: &CreateProjectRequest,
    ) -> Result<CreateResponse, TransportError> {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(request.clone());
        match &self.script {
            ServiceScript::Accept => Ok(CreateResponse::Created(Project {
                id: 1,
                name: request.name.clone(),
                description: Some(request.description.clone()),
                start_date: Some(request.start_date.clone()),
                end_date: Some(request.end_date.clone()),
            })),
            ServiceScript::Reject(message) => Ok(CreateResponse::Rejected {
                message: message.to_string(),
            }),
            ServiceScript::Fail => Err(TransportError::Request("connection refused".to_string())),
        }
    }
}

/// A draft passing both validation gates.
pub fn filled_draft() -> ProjectDraft {
    ProjectDraft {
        name: "Alpha".to_string(),
        description: "Desc".to_string(),
        start_date: "2024-01-01".to_string(),
        end_date: "2024-02-01".to_string(),
    }
}

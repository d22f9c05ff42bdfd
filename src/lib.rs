pub mod core;

pub use crate::core::{
    CreateProjectRequest, CreateProjectService, CreateResponse, NewProjectForm, Project,
    ProjectClient, ProjectDraft, SubmissionError, SubmitResolution, TransportError,
};

#[cfg(feature = "gui")]
pub mod gui;

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from projectboard for tests
pub use projectboard::{
    CreateProjectRequest, CreateProjectService, CreateResponse, NewProjectForm, Project,
    ProjectDraft, SubmissionError, SubmitResolution,
};

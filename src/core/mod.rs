mod api;
mod dates;
mod form;
mod submit;

pub use api::{
    CreateProjectRequest, CreateProjectService, CreateResponse, Project, ProjectClient,
    TransportError,
};
pub use dates::{DateParseError, normalize};
pub use form::{NewProjectForm, ProjectDraft, SubmissionError};
pub use submit::SubmitResolution;

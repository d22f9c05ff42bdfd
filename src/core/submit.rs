use crate::core::api::{CreateProjectRequest, CreateResponse, Project, TransportError};
use crate::core::dates;
use crate::core::form::{NewProjectForm, SubmissionError};

/// How a single submission attempt resolved. Exactly one of these is
/// produced per attempt that made it past `begin_submit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResolution {
    /// The backend created the project. The host must be notified exactly
    /// once so it can close the form.
    Created(Project),
    /// The backend rejected the request; the message is now displayed and
    /// the user's input is preserved for editing.
    Rejected,
    /// The request never completed. Not surfaced to the user, only logged;
    /// the form stays exactly as it was so the user can try again.
    TransportFailed,
}

impl NewProjectForm {
    /// Starts a submission attempt: `Idle -> Submitting`.
    ///
    /// Returns `Ok(None)` without touching any state when the action-entry
    /// gate fails or a submission is already outstanding, so both the
    /// button-mash case and programmatic re-entry are inert. Otherwise
    /// normalizes the dates, clears any previous rejection (a retry starts
    /// clean), marks the form in flight, and hands back the request to send.
    ///
    /// Date normalization failing means a caller broke the well-formed-date
    /// precondition; the error propagates and the form stays idle.
    pub fn begin_submit(&mut self) -> anyhow::Result<Option<CreateProjectRequest>> {
        if self.in_flight || !self.draft.has_required() {
            return Ok(None);
        }

        let start_date = dates::normalize(&self.draft.start_date)?;
        let end_date = dates::normalize(&self.draft.end_date)?;

        self.error = None;
        self.in_flight = true;
        tracing::debug!(name = %self.draft.name, "submitting new project");

        Ok(Some(CreateProjectRequest {
            name: self.draft.name.clone(),
            description: self.draft.description.clone(),
            start_date,
            end_date,
        }))
    }

    /// Applies the outcome of the in-flight submission:
    /// `Submitting -> {Reset, ErrorShown, SilentFailure}`.
    ///
    /// The in-flight flag clears on every path, including transport failure.
    pub fn finish_submit(
        &mut self,
        outcome: Result<CreateResponse, TransportError>,
    ) -> SubmitResolution {
        self.in_flight = false;
        match outcome {
            Ok(CreateResponse::Created(project)) => {
                self.reset();
                tracing::debug!(id = project.id, "project created");
                SubmitResolution::Created(project)
            }
            Ok(CreateResponse::Rejected { message }) => {
                self.error = Some(SubmissionError { message });
                SubmitResolution::Rejected
            }
            Err(err) => {
                // The user gets no feedback here (matching the backend
                // contract: only structured rejections are displayable), but
                // the failure is logged rather than dropped.
                tracing::warn!(error = %err, "project submission failed in transit");
                SubmitResolution::TransportFailed
            }
        }
    }
}

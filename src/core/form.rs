/// Draft input for a new project, exactly as the user typed it.
///
/// `start_date` and `end_date` hold date-only `YYYY-MM-DD` strings until
/// submission normalizes them; an empty string means the date has not been
/// chosen yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
}

impl ProjectDraft {
    /// Enablement gate: all four fields must be non-empty before the submit
    /// control lights up. Values are not trimmed; whitespace counts as input.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.description.is_empty()
            && !self.start_date.is_empty()
            && !self.end_date.is_empty()
    }

    /// Action-entry gate: the minimum the backend needs. Description may be
    /// empty here even though the enablement gate requires it.
    ///
    /// Kept separate from [`is_complete`](Self::is_complete) on purpose; do
    /// not unify the two.
    pub fn has_required(&self) -> bool {
        !self.name.is_empty() && !self.start_date.is_empty() && !self.end_date.is_empty()
    }
}

/// Inline-displayable rejection from the creation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionError {
    pub message: String,
}

/// State of the new-project form: the draft, the last structured rejection
/// (if any), and whether a submission is currently outstanding.
#[derive(Debug, Clone, Default)]
pub struct NewProjectForm {
    pub draft: ProjectDraft,
    pub error: Option<SubmissionError>,
    pub(crate) in_flight: bool,
}

impl NewProjectForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a submission is outstanding. At most one submission is in
    /// flight at a time; `begin_submit` is inert while this holds.
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Clears all four fields and any displayed error. Used after a
    /// successful submission and when the host closes the form.
    pub fn reset(&mut self) {
        self.draft = ProjectDraft::default();
        self.error = None;
    }
}

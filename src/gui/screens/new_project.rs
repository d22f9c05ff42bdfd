use iced::{
    Element, Task,
    widget::{button, column, row, text, text_input},
};
use iced_aw::date_picker;
use iced_aw::date_picker::Date;

use crate::{
    core::{
        CreateProjectService, CreateResponse, NewProjectForm, Project, SubmitResolution,
        TransportError,
    },
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::form_card,
    },
};

/// The "Create New Project" form. Field edits land in the headless
/// [`NewProjectForm`]; this screen only adds the date-picker widget state
/// and the task that carries the request to the backend.
#[derive(Debug, Clone)]
pub struct NewProjectScreen {
    form: NewProjectForm,
    start_picker: PickerState,
    end_picker: PickerState,
}

/// Widget-side state for one date picker: the calendar position and whether
/// the overlay is open. The chosen date itself lives in the form draft.
#[derive(Debug, Clone)]
struct PickerState {
    position: Date,
    open: bool,
}

impl Default for PickerState {
    fn default() -> Self {
        Self {
            position: Date::today(),
            open: false,
        }
    }
}

fn date_string(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year, date.month, date.day)
}

#[derive(Debug, Clone)]
pub enum NewProjectMessage {
    NameChanged(String),
    DescriptionChanged(String),
    OpenStartPicker,
    OpenEndPicker,
    CancelStartPicker,
    CancelEndPicker,
    StartDatePicked(Date),
    EndDatePicked(Date),
    Submit,
    Submitted(Result<CreateResponse, TransportError>),
}

#[derive(Debug, Clone)]
pub enum NewProjectParentMessage {
    /// The backend accepted the project; sent exactly once per successful
    /// submission so the host can close the form.
    Created(Project),
    /// The user backed out; the host should close the form and drop the
    /// draft.
    Dismissed,
}

impl NewProjectScreen {
    pub fn new() -> Self {
        Self {
            form: NewProjectForm::new(),
            start_picker: PickerState::default(),
            end_picker: PickerState::default(),
        }
    }
}

impl Default for NewProjectScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for NewProjectScreen {
    type Message = NewProjectMessage;
    type ParentMessage = NewProjectParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let draft = &self.form.draft;

        let name = text_input("Project Name", &draft.name)
            .on_input(|value| ScreenMessage::ScreenMessage(NewProjectMessage::NameChanged(value)))
            .padding(8);

        let description = text_input("Description", &draft.description)
            .on_input(|value| {
                ScreenMessage::ScreenMessage(NewProjectMessage::DescriptionChanged(value))
            })
            .padding(8);

        let start_label = if draft.start_date.is_empty() {
            "Start date".to_string()
        } else {
            draft.start_date.clone()
        };
        let start_button = button(text(start_label)).on_press(ScreenMessage::ScreenMessage(
            NewProjectMessage::OpenStartPicker,
        ));
        let start = date_picker(
            self.start_picker.open,
            self.start_picker.position,
            start_button,
            ScreenMessage::ScreenMessage(NewProjectMessage::CancelStartPicker),
            |date| ScreenMessage::ScreenMessage(NewProjectMessage::StartDatePicked(date)),
        );

        let end_label = if draft.end_date.is_empty() {
            "End date".to_string()
        } else {
            draft.end_date.clone()
        };
        let end_button = button(text(end_label)).on_press(ScreenMessage::ScreenMessage(
            NewProjectMessage::OpenEndPicker,
        ));
        let end = date_picker(
            self.end_picker.open,
            self.end_picker.position,
            end_button,
            ScreenMessage::ScreenMessage(NewProjectMessage::CancelEndPicker),
            |date| ScreenMessage::ScreenMessage(NewProjectMessage::EndDatePicked(date)),
        );

        // Enablement gate plus the in-flight guard: the button is the only
        // way to trigger a submission from the UI, so disabling it while a
        // request is outstanding keeps submissions single-flight.
        let submit_enabled = draft.is_complete() && !self.form.in_flight();
        let submit_label = if self.form.in_flight() {
            "Creating..."
        } else {
            "Create Project"
        };
        let submit = button(text(submit_label)).on_press_maybe(
            submit_enabled.then(|| ScreenMessage::ScreenMessage(NewProjectMessage::Submit)),
        );

        let cancel = button(text("Cancel")).on_press(ScreenMessage::ParentMessage(
            NewProjectParentMessage::Dismissed,
        ));

        let content = column![
            text("Create New Project").size(24),
            name,
            description,
            row![start, end].spacing(10),
        ]
        .extend(
            self.form
                .error
                .as_ref()
                .map(|error| text(error.message.clone()).style(text::danger).into()),
        )
        .push(row![submit, cancel].spacing(10))
        .spacing(16)
        .padding(24);

        form_card(content)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            NewProjectMessage::NameChanged(value) => {
                self.form.draft.name = value;
                Task::none()
            }
            NewProjectMessage::DescriptionChanged(value) => {
                self.form.draft.description = value;
                Task::none()
            }
            NewProjectMessage::OpenStartPicker => {
                self.start_picker.open = true;
                Task::none()
            }
            NewProjectMessage::OpenEndPicker => {
                self.end_picker.open = true;
                Task::none()
            }
            NewProjectMessage::CancelStartPicker => {
                self.start_picker.open = false;
                Task::none()
            }
            NewProjectMessage::CancelEndPicker => {
                self.end_picker.open = false;
                Task::none()
            }
            NewProjectMessage::StartDatePicked(date) => {
                self.start_picker.position = date;
                self.start_picker.open = false;
                self.form.draft.start_date = date_string(date);
                Task::none()
            }
            NewProjectMessage::EndDatePicked(date) => {
                self.end_picker.position = date;
                self.end_picker.open = false;
                self.form.draft.end_date = date_string(date);
                Task::none()
            }
            NewProjectMessage::Submit => match self.form.begin_submit() {
                Ok(Some(request)) => {
                    let client = state.client.clone();
                    Task::perform(
                        async move { client.create_project(&request).await },
                        |outcome| {
                            ScreenMessage::ScreenMessage(NewProjectMessage::Submitted(outcome))
                        },
                    )
                }
                Ok(None) => Task::none(),
                Err(err) => {
                    // Only reachable if a date picker handed us a malformed
                    // date, which violates the widget contract.
                    tracing::error!(error = %err, "submission aborted before send");
                    Task::none()
                }
            },
            NewProjectMessage::Submitted(outcome) => match self.form.finish_submit(outcome) {
                SubmitResolution::Created(project) => Task::done(ScreenMessage::ParentMessage(
                    NewProjectParentMessage::Created(project),
                )),
                SubmitResolution::Rejected | SubmitResolution::TransportFailed => Task::none(),
            },
        }
    }
}

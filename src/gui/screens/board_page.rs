use iced::{
    Element, Length, Task,
    widget::{button, column, container, row, text},
};

use crate::{
    core::Project,
    gui::{
        AppState,
        screens::{
            Screen, ScreenMessage,
            new_project::{NewProjectParentMessage, NewProjectScreen},
        },
        widgets::modal_overlay,
    },
};

/// The project board. Acts as the host for the new-project form: it owns
/// whether the form is open and closes it when the form reports a created
/// project or a dismissal.
#[derive(Debug, Clone, Default)]
pub struct BoardPageScreen {
    projects: Vec<Project>,
    new_project: Option<NewProjectScreen>,
}

#[derive(Debug, Clone)]
pub enum BoardPageMessage {
    OpenNewProject,
    DismissNewProject,
    NewProject(ScreenMessage<NewProjectScreen>),
}

impl Screen for BoardPageScreen {
    type Message = BoardPageMessage;
    type ParentMessage = std::convert::Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let header = row![
            text("Projects").size(32),
            button("New Project").on_press(ScreenMessage::ScreenMessage(
                BoardPageMessage::OpenNewProject
            )),
        ]
        .spacing(20);

        let listing: Element<'_, ScreenMessage<Self>> = if self.projects.is_empty() {
            text("No projects yet.").into()
        } else {
            column(self.projects.iter().map(project_row)).spacing(8).into()
        };

        let base = container(column![header, listing].spacing(20).padding(20))
            .width(Length::Fill)
            .height(Length::Fill);

        match &self.new_project {
            Some(form) => {
                let form_view = form
                    .view()
                    .map(|msg| ScreenMessage::ScreenMessage(BoardPageMessage::NewProject(msg)));
                modal_overlay(
                    base,
                    form_view,
                    ScreenMessage::ScreenMessage(BoardPageMessage::DismissNewProject),
                )
            }
            None => base.into(),
        }
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            BoardPageMessage::OpenNewProject => {
                self.new_project = Some(NewProjectScreen::new());
                Task::none()
            }
            // Dropping the screen discards the draft, which is the
            // reset-on-close behavior the form promises.
            BoardPageMessage::DismissNewProject => {
                self.new_project = None;
                Task::none()
            }
            BoardPageMessage::NewProject(msg) => match msg {
                ScreenMessage::ScreenMessage(msg) => match &mut self.new_project {
                    Some(form) => form.update(msg, state).map(|msg| {
                        ScreenMessage::ScreenMessage(BoardPageMessage::NewProject(msg))
                    }),
                    None => Task::none(),
                },
                ScreenMessage::ParentMessage(parent_msg) => {
                    match parent_msg {
                        NewProjectParentMessage::Created(project) => {
                            self.projects.push(project);
                        }
                        NewProjectParentMessage::Dismissed => {}
                    }
                    self.new_project = None;
                    Task::none()
                }
            },
        }
    }
}

fn project_row(project: &Project) -> Element<'_, ScreenMessage<BoardPageScreen>> {
    let dates = match (&project.start_date, &project.end_date) {
        (Some(start), Some(end)) => format!("{start} - {end}"),
        _ => String::new(),
    };
    row![text(project.name.clone()).size(18), text(dates).size(14)]
        .spacing(16)
        .into()
}

use iced::{Element, Task, Theme};

use crate::core::ProjectClient;
use crate::gui::{
    AppState, Message,
    screens::{Screen, ScreenMessage, board_page::BoardPageScreen},
};

pub struct ProjectboardApp {
    state: AppState,
    board: BoardPageScreen,
}

impl ProjectboardApp {
    pub fn new(client: ProjectClient) -> (Self, Task<Message>) {
        (
            Self {
                state: AppState::new(client),
                board: BoardPageScreen::default(),
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        "Projectboard".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BoardPage(msg) => match msg {
                ScreenMessage::ScreenMessage(msg) => self
                    .board
                    .update(msg, &mut self.state)
                    .map(Message::BoardPage),
                ScreenMessage::ParentMessage(never) => match never {},
            },
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.board.view().map(Message::BoardPage)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

pub fn run(client: ProjectClient) -> iced::Result {
    iced::application(
        move || ProjectboardApp::new(client.clone()),
        ProjectboardApp::update,
        ProjectboardApp::view,
    )
    .title(ProjectboardApp::title)
    .theme(ProjectboardApp::theme)
    .run()
}

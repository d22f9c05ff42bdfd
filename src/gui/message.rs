use crate::gui::screens::{ScreenMessage, board_page::BoardPageScreen};

#[derive(Debug, Clone)]
pub enum Message {
    BoardPage(ScreenMessage<BoardPageScreen>),
}

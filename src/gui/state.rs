use crate::core::ProjectClient;

/// State shared across screens: the handle to the remote creation service.
#[derive(Debug)]
pub struct AppState {
    pub client: ProjectClient,
}

impl AppState {
    pub fn new(client: ProjectClient) -> Self {
        Self { client }
    }
}

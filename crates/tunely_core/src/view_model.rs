use crate::PlaylistLink;

pub const BUTTON_LABEL_IDLE: &str = "Generate Playlist";
pub const BUTTON_LABEL_PENDING: &str = "Loading...";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub query: String,
    /// False while a request is pending; front ends disable Generate.
    pub generate_enabled: bool,
    pub button_label: &'static str,
    pub playlist: Option<PlaylistLink>,
}

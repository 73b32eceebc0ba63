//! Tunely core: pure request-lifecycle state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, PlaylistLink, RequestId};
pub use update::update;
pub use view_model::{AppViewModel, BUTTON_LABEL_IDLE, BUTTON_LABEL_PENDING};

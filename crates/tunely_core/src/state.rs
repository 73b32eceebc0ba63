use crate::view_model::{AppViewModel, BUTTON_LABEL_IDLE, BUTTON_LABEL_PENDING};

pub type RequestId = u64;

/// A generated playlist as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistLink {
    pub url: String,
    pub name: Option<String>,
}

impl PlaylistLink {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    query: String,
    playlist: Option<PlaylistLink>,
    pending: bool,
    last_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            query: self.query.clone(),
            generate_enabled: !self.pending,
            button_label: if self.pending {
                BUTTON_LABEL_PENDING
            } else {
                BUTTON_LABEL_IDLE
            },
            playlist: self.playlist.clone(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn playlist(&self) -> Option<&PlaylistLink> {
        self.playlist.as_ref()
    }

    /// Returns whether the state changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_query(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            self.mark_dirty();
        }
    }

    /// Enters pending, drops the previous result and allocates a request id.
    pub(crate) fn begin_request(&mut self) -> RequestId {
        self.pending = true;
        self.playlist = None;
        self.last_request_id += 1;
        self.mark_dirty();
        self.last_request_id
    }

    pub(crate) fn set_playlist(&mut self, link: PlaylistLink) {
        self.playlist = Some(link);
        self.mark_dirty();
    }

    pub(crate) fn finish_pending(&mut self) {
        if self.pending {
            self.pending = false;
            self.mark_dirty();
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the query input.
    InputChanged(String),
    /// User pressed Generate Playlist.
    ///
    /// Not guarded here: front ends must only send this while
    /// `AppViewModel::generate_enabled` is true.
    GenerateClicked,
    /// The service returned a playlist for the request.
    GenerationSucceeded {
        request_id: crate::RequestId,
        link: crate::PlaylistLink,
    },
    /// The request failed. The cause has already been logged by the engine.
    GenerationFailed { request_id: crate::RequestId },
    /// The display delay after a settled request has passed.
    IdleDelayElapsed { request_id: crate::RequestId },
    /// UI/render tick.
    Tick,
}

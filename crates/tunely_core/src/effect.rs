use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the query to the playlist service.
    GeneratePlaylist { request_id: RequestId, query: String },
    /// Wait the settle delay, then report `Msg::IdleDelayElapsed`.
    ScheduleIdle { request_id: RequestId },
}

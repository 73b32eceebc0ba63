use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_query(text);
            Vec::new()
        }
        Msg::GenerateClicked => {
            // Re-entrancy is left to the caller: a second click while pending
            // starts another request and the last one to settle wins.
            let request_id = state.begin_request();
            vec![Effect::GeneratePlaylist {
                request_id,
                query: state.query().to_owned(),
            }]
        }
        Msg::GenerationSucceeded { request_id, link } => {
            state.set_playlist(link);
            vec![Effect::ScheduleIdle { request_id }]
        }
        Msg::GenerationFailed { request_id } => vec![Effect::ScheduleIdle { request_id }],
        Msg::IdleDelayElapsed { .. } => {
            state.finish_pending();
            Vec::new()
        }
        Msg::Tick => Vec::new(),
    };

    (state, effects)
}

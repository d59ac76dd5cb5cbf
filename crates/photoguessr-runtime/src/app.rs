use photoguessr_engine::SessionState;

use crate::Dispatcher;

/// Front end driven by [`Runtime::run`](crate::Runtime::run).
pub trait App {
    /// Called once before the first action is processed.
    ///
    /// Keep `dispatcher` to feed player intents into the session.
    fn init(&mut self, dispatcher: Dispatcher);

    /// Presents the session. Called with the initial state and after every
    /// processed action.
    fn draw(&mut self, state: &SessionState);
}

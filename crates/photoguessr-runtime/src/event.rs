use photoguessr_engine::Action;

/// Items on the runtime's queue.
#[derive(Debug, Clone, derive_more::IsVariant)]
pub(super) enum RuntimeEvent {
    /// A player intent or the completion of a spawned effect.
    Action(Action),
    /// Stop [`Runtime::run`](crate::Runtime::run) without closing the session.
    Shutdown,
}

impl From<Action> for RuntimeEvent {
    fn from(action: Action) -> Self {
        Self::Action(action)
    }
}

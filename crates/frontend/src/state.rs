//! Global application state.
//!
//! The search toggle and backend connectivity are explicit reducer
//! state provided through a context, not ad-hoc booleans inside the
//! shell component. Toggle commands call the API first and dispatch a
//! state change only once the backend confirmed the operation.

use std::rc::Rc;

use yew::prelude::*;

/// Result of the most recent health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    /// No probe has completed yet.
    #[default]
    Unknown,
    Connected,
    Disconnected,
}

/// Shared UI state for the whole application.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    /// Whether the automatic job search is running for this user.
    pub searching: bool,
    /// Backend reachability, fed by the periodic health probe.
    pub connection: ConnectionStatus,
}

/// State transitions. Search transitions are dispatched only after the
/// corresponding API call succeeded.
pub enum AppAction {
    SearchStarted,
    SearchStopped,
    ConnectionProbed(ConnectionStatus),
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            AppAction::SearchStarted => Self {
                searching: true,
                ..(*self).clone()
            },
            AppAction::SearchStopped => Self {
                searching: false,
                ..(*self).clone()
            },
            AppAction::ConnectionProbed(connection) => Self {
                connection,
                ..(*self).clone()
            },
        };
        Rc::new(next)
    }
}

/// Handle passed down through a `ContextProvider`.
pub type AppStateContext = UseReducerHandle<AppState>;

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: AppState, action: AppAction) -> AppState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn initial_state_is_idle_and_unknown() {
        let state = AppState::default();
        assert!(!state.searching);
        assert_eq!(state.connection, ConnectionStatus::Unknown);
    }

    #[test]
    fn search_toggles_only_touch_the_search_flag() {
        let state = apply(
            AppState {
                searching: false,
                connection: ConnectionStatus::Connected,
            },
            AppAction::SearchStarted,
        );
        assert!(state.searching);
        assert_eq!(state.connection, ConnectionStatus::Connected);

        let state = apply(state, AppAction::SearchStopped);
        assert!(!state.searching);
        assert_eq!(state.connection, ConnectionStatus::Connected);
    }

    #[test]
    fn connection_probe_preserves_search_flag() {
        let state = apply(
            AppState {
                searching: true,
                connection: ConnectionStatus::Unknown,
            },
            AppAction::ConnectionProbed(ConnectionStatus::Disconnected),
        );
        assert!(state.searching);
        assert_eq!(state.connection, ConnectionStatus::Disconnected);
    }
}

//! Main application component with routing and global state wiring.

use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::pages::DashboardPage;
use crate::state::{AppAction, AppState, AppStateContext, ConnectionStatus};

/// How often the shell re-probes `GET /health`.
const HEALTH_POLL_INTERVAL_MS: u32 = 30_000;

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::NotFound => html! {
            <div class="card">
                <h1>{"404 - Page Not Found"}</h1>
                <p>{"The page you're looking for doesn't exist."}</p>
            </div>
        },
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let config = AppConfig::from_env();
    let api = ApiClient::new(&config.backend_url);
    let state = use_reducer(AppState::default);

    // Periodic connectivity probe feeding the sidebar indicator.
    {
        let state = state.clone();
        let api = api.clone();

        use_effect_with((), move |_| {
            let probe = move || {
                let state = state.clone();
                let api = api.clone();
                spawn_local(async move {
                    let status = match api.health().await {
                        Ok(_) => ConnectionStatus::Connected,
                        Err(_) => ConnectionStatus::Disconnected,
                    };
                    state.dispatch(AppAction::ConnectionProbed(status));
                });
            };

            probe();
            let interval = Interval::new(HEALTH_POLL_INTERVAL_MS, probe);
            move || drop(interval)
        });
    }

    html! {
        <BrowserRouter>
            <ContextProvider<AppConfig> context={config}>
                <ContextProvider<ApiClient> context={api}>
                    <ContextProvider<AppStateContext> context={state}>
                        <div class="app-container">
                            <Sidebar />
                            <main class="main-content">
                                <Switch<Route> render={switch} />
                            </main>
                        </div>
                    </ContextProvider<AppStateContext>>
                </ContextProvider<ApiClient>>
            </ContextProvider<AppConfig>>
        </BrowserRouter>
    }
}

/// Sidebar navigation with connectivity indicator and search controls.
#[function_component(Sidebar)]
fn sidebar() -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let state = use_context::<AppStateContext>();
    let api = use_context::<ApiClient>();

    let (Some(state), Some(api)) = (state, api) else {
        return Html::default();
    };

    let searching = state.searching;
    let on_toggle_search = {
        let state = state.clone();
        let api = api.clone();
        let user_id = config.user_id.clone();

        Callback::from(move |_: MouseEvent| {
            let state = state.clone();
            let api = api.clone();
            let user_id = user_id.clone();

            spawn_local(async move {
                // State changes only on confirmed success; failures are
                // already logged by the API client.
                if searching {
                    if api.stop_search(&user_id).await.is_ok() {
                        state.dispatch(AppAction::SearchStopped);
                    }
                } else if api.start_search(&user_id).await.is_ok() {
                    state.dispatch(AppAction::SearchStarted);
                }
            });
        })
    };

    let (dot_class, dot_label) = match state.connection {
        ConnectionStatus::Connected => ("status-dot connected", "Connected"),
        ConnectionStatus::Disconnected => ("status-dot disconnected", "Disconnected"),
        ConnectionStatus::Unknown => ("status-dot unknown", "Checking..."),
    };

    html! {
        <aside class="sidebar">
            <Link<Route> to={Route::Dashboard} classes="nav-brand">
                {"Job Autopilot"}
            </Link<Route>>
            <nav>
                <ul class="nav-links">
                    <li>
                        <Link<Route> to={Route::Dashboard}>
                            {"Dashboard"}
                        </Link<Route>>
                    </li>
                </ul>
            </nav>
            <div class="sidebar-footer">
                <div class="connection-status">
                    <span class={dot_class}></span>
                    <span>{ dot_label }</span>
                </div>
                <button
                    class={if searching { "btn btn-secondary" } else { "btn btn-primary" }}
                    onclick={on_toggle_search}
                >
                    { if searching { "Stop Search" } else { "Start Search" } }
                </button>
            </div>
        </aside>
    }
}

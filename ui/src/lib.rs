// The client-side Dioxus application logic.

use dioxus::prelude::*;
use dioxus_logger::tracing::info;

mod app_state;
mod components;
pub mod hooks;
mod screens;

use api::BackendConfig;
use app_state::AppState;
use components::alert_modal::AlertModal;
use components::pico::Card;
use components::pico::Container;
use hooks::use_alert::AlertHandle;
use screens::client_directory::ClientDirectoryScreen;
use screens::deposit_history::DepositHistoryScreen;
use screens::pending_deposits::PendingDepositsScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AdminLayout)]
        #[nest("/nimda21")]
            #[route("/recharge-requests")]
            PendingDepositsScreen {},
            #[route("/recharge-status")]
            ClientDirectoryScreen {},
            #[route("/recharge-status/:user_id")]
            DepositHistoryScreen { user_id: String },
        #[end_nest]
    #[end_layout]
    #[redirect("/", || Route::PendingDepositsScreen {})]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// The navigation tabs in the admin header.
#[derive(Clone, Copy, PartialEq)]
enum Tab {
    RechargeRequests,
    RechargeStatus,
}

const ALL_TABS: [Tab; 2] = [Tab::RechargeRequests, Tab::RechargeStatus];

impl Tab {
    fn name(&self) -> &'static str {
        match self {
            Tab::RechargeRequests => "Recharge Requests",
            Tab::RechargeStatus => "Recharge Status",
        }
    }

    fn route(&self) -> Route {
        match self {
            Tab::RechargeRequests => Route::PendingDepositsScreen {},
            Tab::RechargeStatus => Route::ClientDirectoryScreen {},
        }
    }

    /// A user's history page belongs under the directory tab.
    fn is_active(&self, route: &Route) -> bool {
        matches!(
            (self, route),
            (Tab::RechargeRequests, Route::PendingDepositsScreen {})
                | (Tab::RechargeStatus, Route::ClientDirectoryScreen {})
                | (Tab::RechargeStatus, Route::DepositHistoryScreen { .. })
        )
    }
}

#[component]
fn Tabs() -> Element {
    let route = use_route::<Route>();

    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for tab in ALL_TABS {
                    li {
                        Link {
                            class: if tab.is_active(&route) { "active-tab".to_string() } else { String::new() },
                            to: tab.route(),
                            "{tab.name()}"
                        }
                    }
                }
            }
        }
    }
}

/// Header and tabs around every admin screen, plus the shared alert.
#[component]
fn AdminLayout() -> Element {
    let app_state = use_context::<AppState>();

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    nav {
                        ul {
                            li { strong { "Recharge Admin" } }
                            li { small { "{app_state.config.base_url}" } }
                        }
                        ul {
                            li { Tabs {} }
                        }
                    }
                }
                div {
                    class: "content",
                    Outlet::<Route> {}
                }
            }
        }
        AlertModal {}
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        Container {
            Card {
                h3 { "Page not found" }
                p { "Nothing lives at /{path}." }
                Link { to: Route::PendingDepositsScreen {}, "Go to recharge requests" }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    * { box-sizing: border-box; }

    html, body {
        height: 100%;
        width: 100%;
        margin: 0;
        padding: 0;
    }

    .app-main-container {
        display: flex;
        flex-direction: column;
        min-height: 100vh;
        padding: 10px;
    }

    .app-main-container > main {
        max-width: 100% !important;
        width: 100% !important;
    }

    .app-main-container header {
        padding: 0 1rem;
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        text-decoration: none;
        border-radius: 10px 10px 0 0;
        border-top: 3px solid color-mix(in srgb, var(--pico-primary), transparent 90%);
        background: linear-gradient(
            to bottom,
            color-mix(in srgb, var(--pico-primary), transparent 97%),
            transparent
        );
    }

    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }

    .app-main-container .content {
        padding: 0 1rem;
    }

    .table-scroll {
        overflow-x: auto;
    }

    .table-scroll td [role="group"] {
        margin-bottom: 0;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "{PICO_CSS}",
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    let app_state = use_hook(|| {
        let config = BackendConfig::from_env();
        info!("recharge admin using backend {}", config.base_url);
        AppState::new(config).map_err(|e| e.to_string())
    });

    match app_state {
        Ok(app_state) => rsx! {
            LoadedApp { app_state }
        },
        Err(e) => rsx! {
            Container {
                Card {
                    h3 { "Configuration error" }
                    p { "{e}" }
                }
            }
        },
    }
}

/// Provides the shared state and renders the router once the backend client
/// is configured.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    use_context_provider(|| app_state.clone());
    use_context_provider(AlertHandle::new);

    rsx! {
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_render_admin_paths() {
        assert_eq!(
            Route::PendingDepositsScreen {}.to_string(),
            "/nimda21/recharge-requests"
        );
        assert_eq!(
            Route::DepositHistoryScreen {
                user_id: "65f0c1".to_string()
            }
            .to_string(),
            "/nimda21/recharge-status/65f0c1"
        );
    }

    #[test]
    fn user_id_is_parsed_from_path() {
        let route = "/nimda21/recharge-status/65f0c1".parse::<Route>().ok();
        assert_eq!(
            route,
            Some(Route::DepositHistoryScreen {
                user_id: "65f0c1".to_string()
            })
        );
    }

    #[test]
    fn history_page_highlights_directory_tab() {
        let route = Route::DepositHistoryScreen {
            user_id: "c1".to_string(),
        };
        assert!(Tab::RechargeStatus.is_active(&route));
        assert!(!Tab::RechargeRequests.is_active(&route));
    }
}

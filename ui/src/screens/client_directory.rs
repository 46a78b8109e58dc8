use crate::app_state::AppState;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::search_bar::SearchBar;
use crate::Route;
use api::models::Client;
use api::workflow::ClientDirectory;
use dioxus::prelude::*;

#[component]
fn ClientRow(client: Client) -> Element {
    let navigator = use_navigator();
    let id = client.id.clone();

    rsx! {
        tr {
            td { "{client.user_id}" }
            td { "{client.email}" }
            td {
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| {
                        navigator.push(Route::DepositHistoryScreen {
                            user_id: id.to_string(),
                        });
                    },
                    "View Recharge Status"
                }
            }
        }
    }
}

/// All registered users, each linking to their recharge history.
#[component]
pub fn ClientDirectoryScreen() -> Element {
    let app_state = use_context::<AppState>();
    let mut directory = use_signal(ClientDirectory::default);

    let mut loader = use_resource(move || {
        let backend = app_state.backend.clone();
        async move {
            let fresh = ClientDirectory::fetch(&backend).await;
            directory.write().reload(fresh);
        }
    });

    let state = directory.read();
    let rows = state.visible();

    let body = if loader.read().is_none() {
        rsx! {
            p { "Loading..." }
            progress {}
        }
    } else if let Some(e) = state.load_error() {
        rsx! {
            p { "Failed to load users: {e}" }
            Button { on_click: move |_| loader.restart(), "Retry" }
        }
    } else if rows.is_empty() {
        let title = if state.all().is_empty() {
            "No users yet"
        } else {
            "No users match your search"
        };
        rsx! {
            EmptyState { title: "{title}" }
        }
    } else {
        let query = state.query();
        let total = state.all().len();
        let shown = rows.len();
        rsx! {
            if !query.is_empty() {
                small { "{shown} of {total} users match \"{query}\"" }
            }
            div {
                class: "table-scroll",
                table {
                    thead {
                        tr {
                            th { "User ID" }
                            th { "Email" }
                            th { "Action" }
                        }
                    }
                    tbody {
                        for client in rows {
                            ClientRow { key: "{client.id}", client: client.clone() }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        Card {
            h3 { "Recharge Status" }
            SearchBar {
                placeholder: "Search by User ID",
                on_search: move |query: String| directory.write().search(&query),
            }
            {body}
        }
    }
}

use crate::app_state::AppState;
use crate::components::deposit_cells::DateCell;
use crate::components::deposit_cells::DateStyle;
use crate::components::deposit_cells::ProofCell;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Modal;
use crate::hooks::use_alert::use_alert;
use crate::Route;
use api::models::Deposit;
use api::models::DepositId;
use api::workflow::delete_deposit;
use api::workflow::DepositHistory;
use api::DepositBackend;
use dioxus::prelude::*;

#[component]
fn HistoryRow(deposit: Deposit, deleting: bool, on_delete: EventHandler<DepositId>) -> Element {
    let code = deposit.symbol.code();
    let id = deposit.id.clone();

    rsx! {
        tr {
            td { "{deposit.uid}" }
            td { strong { "{deposit.amount}" } }
            td { "{code}" }
            td { "{deposit.status}" }
            ProofCell { proof: deposit.proof.clone() }
            DateCell { at: deposit.created_at, format: DateStyle::Short }
            td {
                Button {
                    button_type: ButtonType::Contrast,
                    outline: true,
                    busy: deleting,
                    on_click: move |_| on_delete.call(id.clone()),
                    "Delete"
                }
            }
        }
    }
}

/// One user's deposits.
///
/// Keyed on `user_id`, so navigating to another user mounts a fresh view and
/// drops any fetch still running for the previous one.
#[component]
pub fn DepositHistoryScreen(user_id: String) -> Element {
    rsx! {
        DepositHistoryView { key: "{user_id}", user_id: user_id.clone() }
    }
}

#[component]
fn DepositHistoryView(user_id: String) -> Element {
    let app_state = use_context::<AppState>();
    let mut alert = use_alert();
    let navigator = use_navigator();
    let mut history = use_signal(|| DepositHistory::new(user_id.clone()));

    let fetch_state = app_state.clone();
    let mut loader = use_resource(move || {
        let backend = fetch_state.backend.clone();
        async move {
            // peek: reading here would re-run the resource on every write.
            let user_id = history.peek().user_id().to_string();
            let result = backend.user_deposits(&user_id).await;
            history.write().apply_fetch(&user_id, result);
        }
    });

    let confirm_delete = move |_: MouseEvent| {
        let Some(request) = history.write().confirm_delete() else {
            return;
        };
        let backend = app_state.backend.clone();
        spawn(async move {
            let result = delete_deposit(&backend, request).await;
            history.write().finish_delete(&result);
            match result {
                Ok(id) => alert.success("Deposit deleted", format!("Deposit {id} was deleted.")),
                Err(e) => alert.failure("Failed to delete deposit", &e),
            }
        });
    };

    let state = history.read();
    let deposits = state.deposits();

    let body = if !state.is_loaded() {
        rsx! {
            p { "Loading..." }
            progress {}
        }
    } else if let Some(e) = state.load_error() {
        rsx! {
            p { "Failed to load deposits: {e}" }
            Button { on_click: move |_| loader.restart(), "Retry" }
        }
    } else if deposits.is_empty() {
        rsx! {
            EmptyState {
                title: "No deposits",
                description: "This user has not made any recharge requests.",
            }
        }
    } else {
        rsx! {
            div {
                class: "table-scroll",
                table {
                    thead {
                        tr {
                            th { "User ID" }
                            th { "Amount" }
                            th { "Coin" }
                            th { "Status" }
                            th { "Proof" }
                            th { "Date" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for deposit in deposits {
                            HistoryRow {
                                key: "{deposit.id}",
                                deposit: deposit.clone(),
                                deleting: state.is_deleting(&deposit.id),
                                on_delete: move |id: DepositId| {
                                    history.write().request_delete(&id);
                                },
                            }
                        }
                    }
                }
            }
        }
    };

    let pending = state.pending_delete().map(|d| format!("{} {}", d.amount, d.symbol.code()));

    rsx! {
        if let Some(summary) = pending {
            Modal {
                title: "Delete deposit?",
                on_close: move |_| history.write().cancel_delete(),
                p { "Are you sure you want to delete this deposit of {summary}? This cannot be undone." }
                footer {
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        on_click: move |_| history.write().cancel_delete(),
                        "Cancel"
                    }
                    Button {
                        button_type: ButtonType::Contrast,
                        on_click: confirm_delete,
                        "Delete"
                    }
                }
            }
        }
        Card {
            nav {
                ul {
                    li { h3 { style: "margin-bottom: 0;", "Recharge Status for User" } }
                }
                ul {
                    li {
                        Button {
                            button_type: ButtonType::Secondary,
                            outline: true,
                            on_click: move |_| {
                                navigator.push(Route::ClientDirectoryScreen {});
                            },
                            "Back to Users"
                        }
                    }
                }
            }
            {body}
        }
    }
}

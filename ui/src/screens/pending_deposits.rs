use crate::app_state::AppState;
use crate::components::approval_modal::ApprovalModal;
use crate::components::deposit_cells::DateCell;
use crate::components::deposit_cells::ProofCell;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::search_bar::SearchBar;
use crate::hooks::use_alert::use_alert;
use api::models::Deposit;
use api::models::DepositId;
use api::workflow::decline;
use api::workflow::ApprovalDialog;
use api::workflow::PendingQueue;
use dioxus::prelude::*;

#[component]
fn PendingRow(
    deposit: Deposit,
    on_approve: EventHandler<Deposit>,
    on_decline: EventHandler<DepositId>,
) -> Element {
    let agent = deposit.agent_uid().unwrap_or("-").to_string();
    let code = deposit.symbol.code();
    let approve_target = deposit.clone();
    let decline_target = deposit.id.clone();

    rsx! {
        tr {
            td { "{agent}" }
            td { "{deposit.uid}" }
            td { strong { "{deposit.amount} {deposit.symbol}" } }
            td { "{code}" }
            ProofCell { proof: deposit.proof.clone() }
            DateCell { at: deposit.created_at }
            td {
                div {
                    role: "group",
                    Button {
                        on_click: move |_| on_approve.call(approve_target.clone()),
                        "Approve"
                    }
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        on_click: move |_| on_decline.call(decline_target.clone()),
                        "Decline"
                    }
                }
            }
        }
    }
}

/// The queue of deposits awaiting an operator decision.
#[component]
pub fn PendingDepositsScreen() -> Element {
    let app_state = use_context::<AppState>();
    let mut alert = use_alert();
    let mut queue = use_signal(PendingQueue::default);
    let mut dialog = use_signal(ApprovalDialog::default);

    // Only writes `queue`, so the resource never re-runs on its own.
    let mut loader = use_resource(move || {
        let backend = app_state.backend.clone();
        async move {
            let fresh = PendingQueue::fetch(&backend).await;
            queue.write().reload(fresh);
        }
    });

    let state = queue.read();
    let rows = state.visible();

    let body = if loader.read().is_none() {
        rsx! {
            p { "Loading..." }
            progress {}
        }
    } else if let Some(e) = state.load_error() {
        rsx! {
            p { "Failed to load pending deposits: {e}" }
            Button { on_click: move |_| loader.restart(), "Retry" }
        }
    } else if rows.is_empty() {
        let title = if state.all().is_empty() {
            "No pending recharge requests"
        } else {
            "No requests match your search"
        };
        rsx! {
            EmptyState {
                title: "{title}",
                description: "Requests appear here once users upload a payment proof.",
            }
        }
    } else {
        let query = state.query();
        let total = state.all().len();
        let shown = rows.len();
        rsx! {
            if !query.is_empty() {
                small { "{shown} of {total} requests match \"{query}\"" }
            }
            div {
                class: "table-scroll",
                table {
                    thead {
                        tr {
                            th { "Agent ID" }
                            th { "User ID" }
                            th { "Amount" }
                            th { "Coin" }
                            th { "Proof" }
                            th { "Date and Time" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for deposit in rows {
                            PendingRow {
                                key: "{deposit.id}",
                                deposit: deposit.clone(),
                                on_approve: move |selected: Deposit| {
                                    if let Err(e) = dialog.write().open(&selected) {
                                        alert.failure("Cannot open approval", &e);
                                    }
                                },
                                on_decline: move |id: DepositId| {
                                    if let Err(e) = decline(&id) {
                                        alert.warning("Decline unavailable", e.to_string());
                                    }
                                },
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        ApprovalModal { dialog, queue }
        Card {
            h3 { "Recharge Requests" }
            SearchBar {
                placeholder: "Search by User ID or Agent ID",
                on_search: move |query: String| queue.write().search(&query),
            }
            {body}
        }
    }
}

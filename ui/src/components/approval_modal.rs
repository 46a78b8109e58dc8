use crate::app_state::AppState;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Modal;
use crate::hooks::use_alert::use_alert;
use api::workflow::approve_and_complete;
use api::workflow::ApprovalDialog;
use api::workflow::Completion;
use api::workflow::PendingQueue;
use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;

/// The "{COIN} Recharge" dialog. Renders nothing while `dialog` is closed.
///
/// A successful approve removes the deposit from `queue` immediately, even
/// if the follow-up `complete` call then fails. The approve/complete pair runs
/// outside this scope, so leaving the screen mid-call still completes the
/// deposit; only the local state updates are skipped.
#[component]
pub fn ApprovalModal(
    mut dialog: Signal<ApprovalDialog>,
    mut queue: Signal<PendingQueue>,
) -> Element {
    let app_state = use_context::<AppState>();
    let mut alert = use_alert();

    let Some(draft) = dialog.read().draft().cloned() else {
        return rsx! {};
    };
    let busy = dialog.read().is_submitting();
    let coin = draft.symbol().code();
    let amount_error = draft.amount().err();

    let submitted_coin = coin.clone();
    let submit = move |_: MouseEvent| {
        let Some(request) = alert.check("Cannot approve deposit", dialog.write().begin_submit())
        else {
            return;
        };
        let backend = app_state.backend.clone();
        let coin = submitted_coin.clone();

        spawn_forever(async move {
            let outcome = approve_and_complete(&backend, &request, |id| match queue.try_write() {
                Ok(mut queue) => {
                    queue.remove(id);
                }
                Err(_) => info!("pending queue closed before deposit {id} was removed"),
            })
            .await;

            match &outcome {
                Ok(receipt) => match &receipt.completion {
                    Completion::Completed => alert.success(
                        "Deposit approved",
                        format!("Approved {} {coin}.", receipt.amount),
                    ),
                    Completion::Failed(reason) => alert.warning(
                        "Approved, but not completed",
                        format!(
                            "Deposit {} was approved, but marking it completed failed: {reason}",
                            receipt.deposit_id
                        ),
                    ),
                },
                Err(e) => alert.failure("Failed to approve deposit", e),
            }
            if let Ok(mut dialog) = dialog.try_write() {
                dialog.finish(&outcome);
            }
        });
    };

    rsx! {
        Modal {
            title: "{coin} Recharge",
            on_close: move |_| {
                if let Err(e) = dialog.write().cancel() {
                    warn!("cannot close approval dialog: {e}");
                }
            },
            label {
                "Currency"
                input {
                    r#type: "text",
                    value: "{coin}",
                    readonly: true,
                }
            }
            label {
                "Amount"
                input {
                    r#type: "number",
                    step: "any",
                    min: "0",
                    value: "{draft.amount_input()}",
                    disabled: busy,
                    "aria-invalid": if amount_error.is_some() { "true" } else { "false" },
                    oninput: move |evt: FormEvent| {
                        if let Err(e) = dialog.write().edit_amount(&evt.value()) {
                            warn!("ignoring amount edit: {e}");
                        }
                    },
                }
                if let Some(e) = amount_error {
                    small { "{e}" }
                }
            }
            footer {
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    disabled: busy,
                    on_click: move |_| {
                        if let Err(e) = dialog.write().cancel() {
                            warn!("cannot cancel approval: {e}");
                        }
                    },
                    "Cancel"
                }
                Button {
                    busy,
                    disabled: amount_error.is_some(),
                    on_click: submit,
                    "Approve"
                }
            }
        }
    }
}

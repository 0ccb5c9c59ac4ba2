use leptos::prelude::*;
use leptos::html::Dialog;
use crate::features::kanban::services::ModalAction;

#[component]
pub fn ConfirmModal(
    #[prop(into)] show: Signal<bool>,
    #[prop(into)] title: String,
    on_action: Callback<ModalAction>,
    children: Children,
) -> impl IntoView {
    let dialog_ref: NodeRef<Dialog> = NodeRef::new();

    Effect::new(move |_| {
        let visible = show.get();
        if let Some(dialog) = dialog_ref.get() {
            if visible && !dialog.open() {
                let _ = dialog.show_modal();
            } else if !visible && dialog.open() {
                dialog.close();
            }
        }
    });

    view! {
        <dialog
            node_ref=dialog_ref
            class="modal confirm-modal"
            // Escape key
            on:cancel=move |ev: leptos::ev::Event| {
                ev.prevent_default();
                on_action.run(ModalAction::Close);
            }
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h3 class="h5">{title}</h3>
                    <button type="button" class="modal-close" on:click=move |_| on_action.run(ModalAction::Close)>"×"</button>
                </div>
                <div class="modal-body">{children()}</div>
                <div class="modal-actions">
                    <button type="button" class="btn-secondary" on:click=move |_| on_action.run(ModalAction::Close)>"Close"</button>
                    <button type="button" class="btn-primary" on:click=move |_| on_action.run(ModalAction::Confirm)>"Confirm"</button>
                </div>
            </div>
        </dialog>
    }
}

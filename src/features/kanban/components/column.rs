use std::sync::Arc;

use leptos::ev::{DragEvent, KeyboardEvent};
use leptos::html::Textarea;
use leptos::prelude::*;

use crate::core::models::{Card, Column};
use crate::core::services::{DropResult, IdProvider};
use crate::features::kanban::components::{BoardCard, ConfirmModal};
use crate::features::kanban::services::{
    add_new_card, confirm_modal_action, ordered_cards, rename_column, resolve_card_drop,
    CardDropTarget, DragSource, ModalAction,
};
use crate::util::content_editable::{save_content_press_enter, select_all_inline_text};

#[component]
pub fn BoardColumn(
    #[prop(into)] column: Signal<Column>,
    /// Position of this column on the board, used as its drag source index.
    #[prop(into)] index: Signal<usize>,
    on_card_drop: Callback<Vec<(String, DropResult<Card>)>>,
    on_update_column: Callback<Column>,
) -> impl IntoView {
    let drag = expect_context::<RwSignal<Option<DragSource>>>();
    let ids = expect_context::<Arc<dyn IdProvider>>();

    // Cards and title only re-render when they themselves change
    let cards = Memo::new(move |_| column.with(ordered_cards));
    let title = Memo::new(move |_| column.with(|c| c.title.clone()));
    let column_title = RwSignal::new(title.get_untracked());
    Effect::new(move |_| column_title.set(title.get()));

    let show_menu = RwSignal::new(false);
    let show_confirm_modal = RwSignal::new(false);
    let open_new_card_form = RwSignal::new(false);
    let new_card_title = RwSignal::new(String::new());
    let new_card_ref: NodeRef<Textarea> = NodeRef::new();

    Effect::new(move |_| {
        if open_new_card_form.get() {
            if let Some(textarea) = new_card_ref.get() {
                let _ = textarea.focus();
                textarea.select();
            }
        }
    });

    let handle_column_title_blur = move |_| {
        let updated = column.with_untracked(|c| rename_column(c, &column_title.get_untracked()));
        on_update_column.run(updated);
    };

    let add_card = Callback::new(move |()| {
        let title = new_card_title.get_untracked();
        match column.with_untracked(|c| add_new_card(c, &title, ids.as_ref())) {
            Ok(updated) => {
                new_card_title.set(String::new());
                open_new_card_form.set(false);
                on_update_column.run(updated);
            }
            Err(e) => {
                log::debug!("new card rejected: {}", e);
                if let Some(textarea) = new_card_ref.get_untracked() {
                    let _ = textarea.focus();
                }
            }
        }
    });

    let on_new_card_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            add_card.run(());
        }
    };

    let on_confirm_modal_action = Callback::new(move |action: ModalAction| {
        if let Some(removed) = column.with_untracked(|c| confirm_modal_action(c, action)) {
            on_update_column.run(removed);
        }
        show_confirm_modal.set(false);
    });

    // Card drops only; column drags bubble through to the board
    let on_card_dragover = move |ev: DragEvent| {
        if matches!(drag.get_untracked(), Some(DragSource::Card { .. })) {
            ev.prevent_default();
            ev.stop_propagation();
        }
    };

    let drop_card = move |ev: DragEvent, target_index: Option<usize>| {
        let Some(DragSource::Card { column_id: source_column, index: source_index, card }) =
            drag.get_untracked()
        else {
            return;
        };
        ev.prevent_default();
        ev.stop_propagation();
        drag.set(None);

        let target = column.with_untracked(|c| CardDropTarget {
            column_id: c.id.clone(),
            index: target_index,
            len: c.cards.len(),
        });
        on_card_drop.run(resolve_card_drop(&source_column, source_index, &target, card));
    };

    let card_views = move || {
        cards
            .get()
            .into_iter()
            .enumerate()
            .map(|(card_index, card)| {
                let dragged = card.clone();
                view! {
                    <div
                        class="card-draggable"
                        draggable="true"
                        on:dragstart=move |ev: DragEvent| {
                            ev.stop_propagation();
                            if let Some(transfer) = ev.data_transfer() {
                                transfer.set_effect_allowed("move");
                                let _ = transfer.set_data("text/plain", &dragged.id);
                            }
                            drag.set(Some(DragSource::Card {
                                column_id: column.with_untracked(|c| c.id.clone()),
                                index: card_index,
                                card: dragged.clone(),
                            }));
                        }
                        on:dragend=move |_| drag.set(None)
                        on:dragover=on_card_dragover
                        on:drop=move |ev| drop_card(ev, Some(card_index))
                    >
                        <BoardCard card=card />
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="column">
            <header
                class="column-drag-handle"
                draggable="true"
                on:dragstart=move |ev: DragEvent| {
                    if let Some(transfer) = ev.data_transfer() {
                        transfer.set_effect_allowed("move");
                        let _ = transfer.set_data("text/plain", &column.with_untracked(|c| c.id.clone()));
                    }
                    drag.set(Some(DragSource::Column { index: index.get_untracked() }));
                }
                on:dragend=move |_| drag.set(None)
            >
                <div class="column-title">
                    <input
                        type="text"
                        class="trello-content-editable"
                        spellcheck="false"
                        prop:value=move || column_title.get()
                        on:input=move |ev| column_title.set(event_target_value(&ev))
                        on:click=select_all_inline_text
                        on:blur=handle_column_title_blur
                        on:keydown=save_content_press_enter
                        on:mousedown=|ev| ev.prevent_default()
                    />
                </div>
                <div class="column-dropdown-actions">
                    <button
                        class="dropdown-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            show_menu.update(|open| *open = !*open);
                        }
                    >"⋯"</button>
                    <div class="column-dropdown" class:show=move || show_menu.get()>
                        <button class="dropdown-item" on:click=move |_| {
                            show_menu.set(false);
                            open_new_card_form.set(true);
                        }>"Add card"</button>
                        <button class="dropdown-item" on:click=move |_| {
                            show_menu.set(false);
                            show_confirm_modal.set(true);
                        }>"Remove column"</button>
                    </div>
                </div>
            </header>

            <div
                class="card-list"
                on:dragover=on_card_dragover
                on:drop=move |ev| drop_card(ev, None)
            >
                {card_views}
                <Show when=move || open_new_card_form.get()>
                    <div class="add-new-card-area">
                        <textarea
                            rows="3"
                            placeholder="Enter a title for this card..."
                            class="textarea-enter-new-card"
                            node_ref=new_card_ref
                            prop:value=move || new_card_title.get()
                            on:input=move |ev| new_card_title.set(event_target_value(&ev))
                            on:keydown=on_new_card_keydown
                        ></textarea>
                    </div>
                </Show>
            </div>

            <footer>
                <Show
                    when=move || open_new_card_form.get()
                    fallback=move || view! {
                        <div class="footer-actions" on:click=move |_| open_new_card_form.set(true)>
                            <span class="icon">"+"</span>
                            "Add another card"
                        </div>
                    }
                >
                    <div class="add-item-control">
                        <button class="btn-success" on:click=move |_| add_card.run(())>"Add card"</button>
                        <span class="cancel-icon" on:click=move |_| {
                            new_card_title.set(String::new());
                            open_new_card_form.set(false);
                        }>"×"</span>
                    </div>
                </Show>
            </footer>

            <ConfirmModal
                show=show_confirm_modal
                title="Remove column"
                on_action=on_confirm_modal_action
            >
                "Are you sure you want to remove "
                <strong>{move || title.get()}</strong>
                "?"
                <br />
                " All related cards will also be removed!"
            </ConfirmModal>
        </div>
    }
}

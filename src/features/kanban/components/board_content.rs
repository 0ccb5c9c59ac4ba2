use std::sync::Arc;

use leptos::ev::{DragEvent, KeyboardEvent};
use leptos::html::Input;
use leptos::prelude::*;

use crate::core::services::IdProvider;
use crate::features::kanban::components::{BoardBar, BoardColumn};
use crate::features::kanban::hooks::{use_board, use_column, BoardHook, ColumnHook};
use crate::features::kanban::services::{resolve_column_drop, DragSource};

#[component]
pub fn BoardContent(#[prop(into)] board_id: String) -> impl IntoView {
    let ids = expect_context::<Arc<dyn IdProvider>>();
    let BoardHook {
        board,
        drag,
        on_column_drop,
        on_card_drop,
        add_new_column,
        on_update_column,
    } = use_board(&board_id, ids);

    if board.with_untracked(Option::is_none) {
        return view! {
            <div class="not-found" style="padding: 10px; color: white;">"Board not found"</div>
        }
        .into_any();
    }

    // Columns and cards read the current drag from context
    provide_context(drag);

    let open_new_column_form = RwSignal::new(false);
    let new_column_title = RwSignal::new(String::new());
    let new_column_input_ref: NodeRef<Input> = NodeRef::new();

    Effect::new(move |_| {
        if open_new_column_form.get() {
            if let Some(input) = new_column_input_ref.get() {
                let _ = input.focus();
                input.select();
            }
        }
    });

    let add_column = move || {
        if add_new_column.run(new_column_title.get_untracked()) {
            new_column_title.set(String::new());
            open_new_column_form.set(false);
        } else if let Some(input) = new_column_input_ref.get_untracked() {
            let _ = input.focus();
        }
    };

    let board_title = Signal::derive(move || {
        board.with(|b| b.as_ref().map(|b| b.title.clone()).unwrap_or_default())
    });

    let column_ids = move || {
        board.with(|b| b.as_ref().map(|b| b.column_order.clone()).unwrap_or_default())
    };

    // Keyed by id so each column keeps its own form and menu state
    let render_column = move |column_id: String| {
        let ColumnHook { column, index } = use_column(board, column_id);
        view! {
            <div
                class="column-draggable"
                on:dragover=move |ev: DragEvent| {
                    if matches!(drag.get_untracked(), Some(DragSource::Column { .. })) {
                        ev.prevent_default();
                    }
                }
                on:drop=move |ev: DragEvent| {
                    if let Some(DragSource::Column { index: from }) = drag.get_untracked() {
                        ev.prevent_default();
                        drag.set(None);
                        on_column_drop.run(resolve_column_drop(from, index.get_untracked()));
                    }
                }
            >
                <BoardColumn
                    column=column
                    index=index
                    on_card_drop=on_card_drop
                    on_update_column=on_update_column
                />
            </div>
        }
    };

    view! {
        <BoardBar title=board_title />
        <div class="board-content">
            <div class="board-columns">
                <For each=column_ids key=|column_id: &String| column_id.clone() children=render_column />
            </div>

            <div class="trello-container">
                <Show
                    when=move || open_new_column_form.get()
                    fallback=move || view! {
                        <div class="add-new-column" on:click=move |_| open_new_column_form.set(true)>
                            <span class="icon">"+"</span>
                            <span>"Add another column"</span>
                        </div>
                    }
                >
                    <div class="enter-new-column">
                        <input
                            type="text"
                            placeholder="Enter column title..."
                            class="input-enter-new-column"
                            node_ref=new_column_input_ref
                            prop:value=move || new_column_title.get()
                            on:input=move |ev| new_column_title.set(event_target_value(&ev))
                            on:keydown=move |ev: KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    add_column();
                                }
                            }
                        />
                        <div class="add-item-control">
                            <button class="btn-success" on:click=move |_| add_column()>"Add Column"</button>
                            <span class="cancel-icon" on:click=move |_| open_new_column_form.set(false)>"×"</span>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
    .into_any()
}

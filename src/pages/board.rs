use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::config::AppConfig;
use crate::features::kanban::components::BoardContent;

// Board for `/boards/:id`, or the configured default board at `/`
#[component]
pub fn BoardPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let params = use_params_map();

    let board_id = move || {
        params
            .with(|p| p.get("id"))
            .unwrap_or_else(|| config.default_board_id.clone())
    };

    view! {
        <div class="trello-master">
            {move || view! { <BoardContent board_id=board_id() /> }}
        </div>
    }
}

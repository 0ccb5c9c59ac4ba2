use leptos::prelude::*;

#[component]
pub fn BoardBar(#[prop(into)] title: Signal<String>) -> impl IntoView {
    view! {
        <nav class="navbar-board">
            <div class="board-info">
                <span class="board-title">{move || title.get()}</span>
            </div>
        </nav>
    }
}

use leptos::prelude::*;
use crate::core::models::Card;

// Visual body of a card: optional cover image above the title
#[component]
pub fn BoardCard(card: Card) -> impl IntoView {
    view! {
        <div class="card-item">
            {card.cover.map(|cover| view! {
                <img
                    class="card-cover"
                    src=cover
                    alt="card cover img"
                    // Keep the browser from dragging the image instead of the card
                    on:mousedown=|ev| ev.prevent_default()
                />
            })}
            {card.title}
        </div>
    }
}

//! Behaviour for inline-editable inputs such as the column title.

use leptos::ev::{KeyboardEvent, MouseEvent};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};

/// Focuses the clicked input and selects its whole value.
pub fn select_all_inline_text(ev: MouseEvent) {
    if let Some(input) = ev
        .target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
    {
        let _ = input.focus();
        input.select();
    }
}

/// Commits an inline edit on Enter by blurring the element.
pub fn save_content_press_enter(ev: KeyboardEvent) {
    if ev.key() != "Enter" {
        return;
    }
    ev.prevent_default();
    if let Some(element) = ev
        .target()
        .and_then(|target| target.dyn_into::<HtmlElement>().ok())
    {
        let _ = element.blur();
    }
}

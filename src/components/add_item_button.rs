//! Add Item Button Component
//!
//! Placeholder action control. Adding items is not implemented.

use leptos::prelude::*;

/// Notice shown when the button is clicked
pub const ADD_ITEM_NOTICE: &str = "Add Item Clicked!";

/// Button that only shows a browser alert
#[component]
pub fn AddItemButton() -> impl IntoView {
    view! {
        <button type="button" class="add-item-btn" on:click=move |_| notify(ADD_ITEM_NOTICE)>
            "Add Item"
        </button>
    }
}

/// Blocking browser alert
fn notify(message: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window to show {:?}", message);
        return;
    };
    if let Err(err) = window.alert_with_message(message) {
        log::warn!("alert failed: {:?}", err);
    }
}

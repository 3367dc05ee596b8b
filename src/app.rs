//! Shelf Frontend App
//!
//! Item list page: heading, item table and the add button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpItemSource;
use crate::components::{AddItemButton, ItemTable};
use crate::config::use_api_config;
use crate::loader::{load_once, Lifetime, LoadStatus};

#[component]
pub fn App() -> impl IntoView {
    let config = use_api_config();

    // State
    let (status, set_status) = signal(LoadStatus::NotStarted);

    // Late results must not land in a disposed view
    let lifetime = Lifetime::new();
    on_cleanup({
        let lifetime = lifetime.clone();
        move || lifetime.cancel()
    });

    // Load items once on mount (nothing tracked, so the effect never re-runs)
    Effect::new(move |_| {
        let source = HttpItemSource::new(config.clone());
        let lifetime = lifetime.clone();
        set_status.set(LoadStatus::Loading);
        spawn_local(async move {
            load_once(&source, &lifetime, move |done| set_status.set(done)).await;
        });
    });

    view! {
        <main class="container">
            <h1>"Item List"</h1>

            <ItemTable status=status />

            <AddItemButton />
        </main>
    }
}

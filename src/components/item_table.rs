//! Item Table Component
//!
//! Renders the loaded items as a `Name | Quantity` table.

use leptos::prelude::*;

use crate::loader::LoadStatus;
use crate::table::{table_rows, COLUMNS};

/// Item table. Anything but a finished load shows the header alone.
#[component]
pub fn ItemTable(status: ReadSignal<LoadStatus>) -> impl IntoView {
    // The list is replaced wholesale, so rows are rebuilt rather than keyed
    let rows = move || status.with(|s| table_rows(s.items()));

    view! {
        <table
            class="item-table"
            data-load-status=move || status.with(|s| s.label())
            aria-busy=move || (!status.with(LoadStatus::is_settled)).to_string()
        >
            <thead>
                <tr>
                    {COLUMNS.iter().map(|col| view! { <th>{*col}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                {move || rows().into_iter().map(|row| view! {
                    <tr data-index=row.index.to_string()>
                        <td>{row.name}</td>
                        <td>{row.quantity}</td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}

//! Note List Component
//!
//! Wrapped card list of all notes in insertion order.

use leptos::prelude::*;

use crate::components::NoteCard;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// Card list over the note store
#[component]
pub fn NoteList() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    // Spread cards out once there are more than two
    let list_class = move || {
        if store.notes().read().len() > 2 {
            "note-list spread"
        } else {
            "note-list"
        }
    };

    let indexed_notes = move || {
        store
            .notes()
            .get()
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <div class=list_class>
            <For
                each=indexed_notes
                key=|(index, note)| {
                    // Notes have no id; key on position plus content so
                    // in-place edits re-render
                    (*index, note.title.clone(), note.description.clone())
                }
                children=move |(index, note)| {
                    view! { <NoteCard index=index note=note /> }
                }
            />
        </div>
    }
}

//! Notewall App
//!
//! Top-level component: the note form over the card list, sharing the
//! store and form controller via context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NoteForm, NoteList};
use crate::context::AppContext;
use crate::form::FormController;
use crate::store::{AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::default());
    let (form, set_form) = signal(FormController::new());

    // Provide context to all children
    provide_context(AppContext::new(store, (form, set_form)));

    view! {
        <div class="page">
            <NoteForm />
            <NoteList />
        </div>
    }
}

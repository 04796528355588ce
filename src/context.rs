//! Application Context
//!
//! Shared state provided via Leptos Context API. The context carries the
//! note store plus the form-controller signal and exposes the operations
//! the components invoke.

use leptos::prelude::*;

use crate::form::FormController;
use crate::store::{store_dispatch, AppStateStoreFields, AppStore, NoteCommand};

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The note store
    pub store: AppStore,
    /// The form controller - read
    pub form: ReadSignal<FormController>,
    /// The form controller - write
    set_form: WriteSignal<FormController>,
}

impl AppContext {
    pub fn new(
        store: AppStore,
        form: (ReadSignal<FormController>, WriteSignal<FormController>),
    ) -> Self {
        Self {
            store,
            form: form.0,
            set_form: form.1,
        }
    }

    /// Buffer a title edit
    pub fn set_title(&self, text: String) {
        self.set_form.update(|form| form.set_title(text));
    }

    /// Buffer a description edit
    pub fn set_description(&self, text: String) {
        self.set_form.update(|form| form.set_description(text));
    }

    /// Commit the form buffer: append in Create mode, replace in Edit mode
    ///
    /// A buffer with an empty field commits nothing and keeps its text.
    pub fn submit(&self) {
        let mut command = None;
        self.set_form.update(|form| command = form.submit());
        if let Some(command) = command {
            store_dispatch(&self.store, command);
        }
    }

    /// Load the note at `index` into the form and enter Edit mode
    pub fn begin_edit(&self, index: usize) {
        let note = self.store.notes().read().get(index).cloned();
        if let Some(note) = note {
            self.set_form.update(|form| form.begin_edit(index, &note));
        }
    }

    /// Remove the note at `index`; out-of-range is a no-op
    pub fn delete(&self, index: usize) {
        store_dispatch(&self.store, NoteCommand::RemoveAt { index });
        self.set_form.update(|form| form.note_deleted(index));
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

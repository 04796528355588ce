//! Note Store
//!
//! The in-memory note list: a closed command set, a pure reducer over it,
//! and the Leptos reactive_stores wiring for the UI.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Note;

/// The mutations the note list accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteCommand {
    /// Add a note at the end of the list
    Append(Note),
    /// Overwrite the note at `index`
    ReplaceAt { index: usize, note: Note },
    /// Remove the note at `index`, shifting later notes down
    RemoveAt { index: usize },
}

/// Store-level failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// `ReplaceAt` addressed a position outside the list
    IndexOutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for note list of length {}", index, len)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Apply a command to a note list, producing a new list
///
/// The input list is never mutated. `RemoveAt` with an out-of-range index
/// returns the list unchanged; `ReplaceAt` with one is an error, the list
/// is never silently extended.
pub fn reduce(notes: &[Note], command: NoteCommand) -> Result<Vec<Note>, StoreError> {
    match command {
        NoteCommand::Append(note) => {
            let mut next = notes.to_vec();
            next.push(note);
            Ok(next)
        }
        NoteCommand::ReplaceAt { index, note } => {
            if index >= notes.len() {
                return Err(StoreError::IndexOutOfRange {
                    index,
                    len: notes.len(),
                });
            }
            let mut next = notes.to_vec();
            next[index] = note;
            Ok(next)
        }
        NoteCommand::RemoveAt { index } => Ok(notes
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, note)| note.clone())
            .collect()),
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All notes, insertion order = display order
    pub notes: Vec<Note>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Run a command against the current notes and write the result back
///
/// A rejected command leaves the store untouched and goes to the console;
/// the UI stays silent.
pub fn store_dispatch(store: &AppStore, command: NoteCommand) {
    web_sys::console::log_1(&format!("[STORE] dispatch {:?}", command).into());
    let result = {
        let notes = store.notes().read();
        reduce(&notes, command)
    };
    match result {
        Ok(next) => *store.notes().write() = next,
        Err(err) => {
            web_sys::console::log_1(&format!("[STORE] command rejected: {}", err).into());
        }
    }
}

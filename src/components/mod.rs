//! UI Components
//!
//! Reusable Leptos components.

mod icons;
mod note_card;
mod note_form;
mod note_list;

pub use icons::{EditIcon, TrashIcon};
pub use note_card::NoteCard;
pub use note_form::NoteForm;
pub use note_list::NoteList;

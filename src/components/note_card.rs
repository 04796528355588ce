//! Note Card Component
//!
//! One note in the list: title row with edit/delete icons, and either the
//! description or inline buffer-bound fields when this card is under edit.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::{EditIcon, TrashIcon};
use crate::context::use_app_context;
use crate::models::Note;

/// A single note card with per-row actions
#[component]
pub fn NoteCard(index: usize, note: Note) -> impl IntoView {
    let ctx = use_app_context();

    let title = note.title.clone();
    let description = note.description.clone();

    let is_editing = move || ctx.form.get().is_editing(index);

    view! {
        <div class="note-card">
            <div class="note-card-header">
                <h2>{title}</h2>
                <div class="note-card-icons">
                    <span class="icon-btn" on:click=move |_| ctx.begin_edit(index)>
                        <EditIcon />
                    </span>
                    <span class="icon-btn" on:click=move |_| ctx.delete(index)>
                        <TrashIcon />
                    </span>
                </div>
            </div>
            <Show
                when=is_editing
                fallback=move || view! { <p class="note-description">{description.clone()}</p> }
            >
                <InlineNoteEditor />
            </Show>
        </div>
    }
}

/// Buffer-bound fields shown inside the card being edited
///
/// Shares the edit buffer with the top form, so typing in either keeps the
/// two in sync, matching the single-buffer design.
#[component]
fn InlineNoteEditor() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <input
            type="text"
            placeholder="Title"
            prop:value=move || ctx.form.get().title
            on:input=move |ev| {
                let target = ev.target().unwrap();
                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                ctx.set_title(input.value());
            }
        />
        <textarea
            placeholder="Take a note..."
            rows="4"
            prop:value=move || ctx.form.get().description
            on:input=move |ev| {
                let target = ev.target().unwrap();
                let textarea = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                ctx.set_description(textarea.value());
            }
        ></textarea>
        <button type="button" class="update-btn" on:click=move |_| ctx.submit()>
            "Update Note"
        </button>
    }
}

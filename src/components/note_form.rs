//! Note Form Component
//!
//! Create/edit form at the top of the page. The heading and submit label
//! follow the controller mode, and the title input grabs focus on mount.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::form::FormMode;

/// Form for composing a new note or editing an existing one
#[component]
pub fn NoteForm() -> impl IntoView {
    let ctx = use_app_context();

    let title_input: NodeRef<html::Input> = NodeRef::new();

    // Focus the title field once the form is in the DOM
    Effect::new(move |_| {
        if let Some(input) = title_input.get() {
            let _ = input.focus();
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    let heading = move || match ctx.form.get().mode() {
        FormMode::Edit(_) => "Edit Note",
        FormMode::Create => "Add a Note",
    };
    let button_label = move || match ctx.form.get().mode() {
        FormMode::Edit(_) => "Update Note",
        FormMode::Create => "Add Note",
    };

    view! {
        <form class="note-form" on:submit=on_submit>
            <h1>{heading}</h1>
            <input
                type="text"
                placeholder="Title"
                node_ref=title_input
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
            <button type="submit" class="submit-btn">{button_label}</button>
        </form>
    }
}

//! Form Controller
//!
//! The edit-buffer state machine behind the note form: Create mode appends
//! on submit, Edit mode replaces the note it was entered from.

use crate::models::Note;
use crate::store::NoteCommand;

/// Which commit the next submit will issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(usize),
}

/// Transient working copy of the note being composed or edited
///
/// Owned by the top-level app as a signal; discarded (reset to empty) after
/// every successful submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormController {
    pub title: String,
    pub description: String,
    editing: Option<usize>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        match self.editing {
            Some(index) => FormMode::Edit(index),
            None => FormMode::Create,
        }
    }

    /// Whether the note at `index` is the one under edit
    pub fn is_editing(&self, index: usize) -> bool {
        self.editing == Some(index)
    }

    pub fn set_title(&mut self, text: impl Into<String>) {
        self.title = text.into();
    }

    pub fn set_description(&mut self, text: impl Into<String>) {
        self.description = text.into();
    }

    /// Copy `note` into the buffer and switch to Edit mode
    pub fn begin_edit(&mut self, index: usize, note: &Note) {
        self.title = note.title.clone();
        self.description = note.description.clone();
        self.editing = Some(index);
    }

    /// Validate and commit the buffer
    ///
    /// An empty title or description rejects the submit and changes
    /// nothing, so typed text stays in the fields. Fields are not trimmed:
    /// whitespace counts as content. On success the buffer empties and the
    /// mode returns to Create.
    pub fn submit(&mut self) -> Option<NoteCommand> {
        if self.title.is_empty() || self.description.is_empty() {
            return None;
        }
        let note = Note {
            title: std::mem::take(&mut self.title),
            description: std::mem::take(&mut self.description),
        };
        Some(match self.editing.take() {
            Some(index) => NoteCommand::ReplaceAt { index, note },
            None => NoteCommand::Append(note),
        })
    }

    /// Keep the edit target consistent after the note at `index` was removed
    ///
    /// Deleting the note under edit abandons the edit and returns to Create
    /// mode. Deleting an earlier note shifts the target down so it still
    /// points at the same note. Deletes past the target leave it alone.
    pub fn note_deleted(&mut self, index: usize) {
        match self.editing {
            Some(editing) if editing == index => {
                self.title.clear();
                self.description.clear();
                self.editing = None;
            }
            Some(editing) if index < editing => {
                self.editing = Some(editing - 1);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::reduce;

    fn make_note(title: &str, description: &str) -> Note {
        Note::new(title, description)
    }

    fn make_editing(index: usize, note: &Note) -> FormController {
        let mut form = FormController::new();
        form.begin_edit(index, note);
        form
    }

    #[test]
    fn test_submit_rejects_empty_fields() {
        let mut form = FormController::new();
        form.set_title("A");
        assert_eq!(form.submit(), None);
        // Typed text stays put
        assert_eq!(form.title, "A");
        assert_eq!(form.mode(), FormMode::Create);

        let mut form = FormController::new();
        form.set_description("B");
        assert_eq!(form.submit(), None);

        let mut form = FormController::new();
        assert_eq!(form.submit(), None);
    }

    #[test]
    fn test_whitespace_counts_as_content() {
        let mut form = FormController::new();
        form.set_title("   ");
        form.set_description(" ");
        assert_eq!(
            form.submit(),
            Some(NoteCommand::Append(make_note("   ", " ")))
        );
    }

    #[test]
    fn test_create_submit_appends_and_resets() {
        let mut form = FormController::new();
        form.set_title("A");
        form.set_description("B");

        let command = form.submit().unwrap();
        assert_eq!(command, NoteCommand::Append(make_note("A", "B")));
        assert!(form.title.is_empty());
        assert!(form.description.is_empty());
        assert_eq!(form.mode(), FormMode::Create);
    }

    #[test]
    fn test_edit_submit_replaces_and_returns_to_create() {
        let mut form = make_editing(0, &make_note("A", "B"));
        assert_eq!(form.mode(), FormMode::Edit(0));
        assert_eq!(form.title, "A");
        assert_eq!(form.description, "B");

        form.set_title("A2");
        form.set_description("B2");
        let command = form.submit().unwrap();
        assert_eq!(
            command,
            NoteCommand::ReplaceAt {
                index: 0,
                note: make_note("A2", "B2"),
            }
        );
        assert_eq!(form.mode(), FormMode::Create);
        assert!(form.title.is_empty());
    }

    #[test]
    fn test_rejected_submit_keeps_edit_mode() {
        let mut form = make_editing(1, &make_note("A", "B"));
        form.set_description("");
        assert_eq!(form.submit(), None);
        assert_eq!(form.mode(), FormMode::Edit(1));
    }

    #[test]
    fn test_delete_of_edited_note_returns_to_create() {
        let mut form = make_editing(1, &make_note("A", "B"));
        form.note_deleted(1);
        assert_eq!(form.mode(), FormMode::Create);
        assert!(form.title.is_empty());
        assert!(form.description.is_empty());
    }

    #[test]
    fn test_delete_before_edited_note_shifts_target() {
        let mut form = make_editing(2, &make_note("A", "B"));
        form.note_deleted(0);
        assert_eq!(form.mode(), FormMode::Edit(1));
        // Buffer untouched
        assert_eq!(form.title, "A");
    }

    #[test]
    fn test_delete_past_edited_note_is_ignored() {
        let mut form = make_editing(0, &make_note("A", "B"));
        form.note_deleted(2);
        assert_eq!(form.mode(), FormMode::Edit(0));
    }

    #[test]
    fn test_delete_in_create_mode_is_ignored() {
        let mut form = FormController::new();
        form.set_title("draft");
        form.note_deleted(0);
        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.title, "draft");
    }

    // Full create -> edit -> resubmit flow against the reducer
    #[test]
    fn test_create_then_edit_scenario() {
        let mut notes: Vec<Note> = Vec::new();
        let mut form = FormController::new();

        form.set_title("A");
        form.set_description("B");
        notes = reduce(&notes, form.submit().unwrap()).unwrap();
        assert_eq!(notes, vec![make_note("A", "B")]);

        form.begin_edit(0, &notes[0]);
        form.set_title("A2");
        form.set_description("B2");
        notes = reduce(&notes, form.submit().unwrap()).unwrap();
        assert_eq!(notes, vec![make_note("A2", "B2")]);
        assert_eq!(form.mode(), FormMode::Create);
    }
}

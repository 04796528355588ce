//! Frontend Models
//!
//! Data structures for the note list.

use serde::{Deserialize, Serialize};

/// A note: title plus free-form description
///
/// Notes carry no identity field. A note is addressed by its position in
/// the list, and insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub description: String,
}

impl Note {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

//! Transient UI selection state.
//!
//! The view state is not persisted and is owned by the embedding UI;
//! it is passed explicitly into the query functions rather than held
//! globally. After a delete, [`ViewState::reconcile`] enforces the
//! selection-consistency rule: a deleted active folder resets the
//! selection to [`ActiveFolder::All`] and clears the active note.

use crate::DeleteResult;

/// The folder filter currently applied in the UI.
///
/// `All` is the sentinel meaning "no filter"; `Folder` narrows the
/// visible notes to one folder and its descendants.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveFolder {
    #[default]
    All,
    Folder(String),
}

impl ActiveFolder {
    /// Returns the selected folder id, if any.
    pub fn folder_id(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Folder(id) => Some(id),
        }
    }
}

/// Transient selection fields passed alongside the stores into the
/// query engine.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// The folder filter, or the all-notes sentinel.
    pub active_folder: ActiveFolder,
    /// The note currently open in the editor, if any.
    pub active_note_id: Option<String>,
    /// Live search text; empty matches everything.
    pub search_text: String,
    /// The folder whose name is mid-rename in the UI, if any.
    pub renaming_folder_id: Option<String>,
}

impl ViewState {
    /// Clears any selection that a delete operation just invalidated.
    ///
    /// If the active folder was removed (directly or as part of a
    /// cascade) the filter resets to [`ActiveFolder::All`] and the
    /// active note is cleared. An active note or in-progress rename
    /// pointing at a removed record is cleared as well.
    pub fn reconcile(&mut self, deleted: &DeleteResult) {
        if let ActiveFolder::Folder(id) = &self.active_folder {
            if deleted.folder_ids.contains(id) {
                self.active_folder = ActiveFolder::All;
                self.active_note_id = None;
            }
        }
        if let Some(note_id) = &self.active_note_id {
            if deleted.note_ids.contains(note_id) {
                self.active_note_id = None;
            }
        }
        if let Some(folder_id) = &self.renaming_folder_id {
            if deleted.folder_ids.contains(folder_id) {
                self.renaming_folder_id = None;
            }
        }
    }
}

//! High-level operations over the in-memory folder and note stores.

use crate::core::query;
use crate::{
    new_id, DeleteResult, Folder, Note, NotePatch, Result, Storage, ViewState, NEW_FOLDER_NAME,
    UNTITLED_FOLDER_NAME,
};
use std::collections::HashSet;
use std::path::Path;

/// An open Clientnotes workspace.
///
/// `Workspace` is the primary interface for all mutations. It holds the
/// two in-memory stores — folders in creation order, notes in prepend
/// order — and mirrors the changed store to [`Storage`] after every
/// mutation. Derived views are delegated to the pure functions in
/// [`crate::core::query`].
///
/// Everything runs on one logical thread: each operation completes
/// before the next UI event is processed, so no locking is needed.
pub struct Workspace {
    storage: Storage,
    folders: Vec<Folder>,
    notes: Vec<Note>,
}

impl Workspace {
    /// Opens the workspace backed by the snapshot store at `path`,
    /// creating the store on first use.
    ///
    /// Missing or unreadable snapshots degrade to empty stores (cold
    /// start); only a store that cannot be opened at all is an error.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientnotesError::Database`] if the file cannot
    /// be opened as a SQLite database, or
    /// [`crate::ClientnotesError::InvalidStore`] if it exists but has
    /// the wrong shape.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let storage = Storage::open(path)?;
        let folders = storage.load_folders().unwrap_or_default();
        let notes = storage.load_notes().unwrap_or_default();
        log::debug!(
            "opened workspace with {} folders, {} notes",
            folders.len(),
            notes.len()
        );
        Ok(Self {
            storage,
            folders,
            notes,
        })
    }

    /// Returns all folders in creation order.
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// Returns all notes, most recently created first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Looks up a folder by id.
    pub fn get_folder(&self, folder_id: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == folder_id)
    }

    /// Looks up a note by id.
    pub fn get_note(&self, note_id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == note_id)
    }

    /// Returns the top-level ("customer") folders in creation order.
    pub fn customer_folders(&self) -> Vec<&Folder> {
        self.folders.iter().filter(|f| f.is_customer()).collect()
    }

    /// Returns the direct children of `parent_id` in creation order.
    pub fn subfolders_of(&self, parent_id: &str) -> Vec<&Folder> {
        self.folders
            .iter()
            .filter(|f| f.parent_id.as_deref() == Some(parent_id))
            .collect()
    }

    /// Creates a top-level customer folder with the placeholder name
    /// and returns a copy of it.
    pub fn create_customer_folder(&mut self) -> Folder {
        self.create_folder(None)
    }

    /// Creates a subfolder under `parent_id` and returns a copy of it.
    ///
    /// The parent id is not validated: a missing parent produces an
    /// orphaned record, matching the original application's behavior.
    /// The condition is logged so it can be spotted in the field.
    pub fn create_subfolder(&mut self, parent_id: &str) -> Folder {
        if self.get_folder(parent_id).is_none() {
            log::warn!("creating subfolder under unknown parent {parent_id}");
        }
        self.create_folder(Some(parent_id.to_string()))
    }

    fn create_folder(&mut self, parent_id: Option<String>) -> Folder {
        let folder = Folder {
            id: new_id(),
            parent_id,
            name: NEW_FOLDER_NAME.to_string(),
            created_at: chrono::Utc::now().timestamp(),
        };
        self.folders.push(folder.clone());
        self.persist_folders();
        folder
    }

    /// Renames `folder_id` to the trimmed `new_name`, falling back to
    /// `"Untitled"` when the trimmed value is empty.
    ///
    /// An unknown id is a silent no-op. Idempotent.
    pub fn rename_folder(&mut self, folder_id: &str, new_name: &str) {
        let Some(folder) = self.folders.iter_mut().find(|f| f.id == folder_id) else {
            return;
        };

        let trimmed = new_name.trim();
        folder.name = if trimmed.is_empty() {
            UNTITLED_FOLDER_NAME.to_string()
        } else {
            trimmed.to_string()
        };
        self.persist_folders();
    }

    /// Deletes `folder_id` together with every descendant folder and
    /// every note owned by any folder in that closure.
    ///
    /// The closure is computed first as an explicit depth-first
    /// traversal, then both stores are filtered in a single pass each,
    /// so the cascade is exact at any depth. An unknown id removes
    /// nothing and returns an empty result.
    pub fn delete_folder(&mut self, folder_id: &str) -> DeleteResult {
        if self.get_folder(folder_id).is_none() {
            return DeleteResult::default();
        }

        let closure: HashSet<String> = query::descendants_of(&self.folders, folder_id)
            .into_iter()
            .collect();

        let mut folder_ids = Vec::new();
        self.folders.retain(|f| {
            if closure.contains(&f.id) {
                folder_ids.push(f.id.clone());
                false
            } else {
                true
            }
        });

        let mut note_ids = Vec::new();
        self.notes.retain(|n| {
            if closure.contains(&n.folder_id) {
                note_ids.push(n.id.clone());
                false
            } else {
                true
            }
        });

        self.persist_folders();
        self.persist_notes();

        DeleteResult {
            deleted_count: folder_ids.len() + note_ids.len(),
            folder_ids,
            note_ids,
        }
    }

    /// Creates an empty note in `folder_id` and returns a copy of it.
    ///
    /// The note is prepended so that default ordering favours recency
    /// before any explicit sort. Like [`Self::create_subfolder`], the
    /// folder id is not validated.
    pub fn create_note(&mut self, folder_id: &str) -> Note {
        if self.get_folder(folder_id).is_none() {
            log::warn!("creating note in unknown folder {folder_id}");
        }

        let now = chrono::Utc::now().timestamp();
        let note = Note {
            id: new_id(),
            folder_id: folder_id.to_string(),
            title: String::new(),
            content: String::new(),
            created_at: now,
            updated_at: now,
        };
        self.notes.insert(0, note.clone());
        self.persist_notes();
        note
    }

    /// Merges `patch` into `note_id` and refreshes `updated_at`.
    ///
    /// An unknown id is a silent no-op.
    pub fn update_note(&mut self, note_id: &str, patch: NotePatch) {
        let Some(note) = self.notes.iter_mut().find(|n| n.id == note_id) else {
            return;
        };

        if let Some(title) = patch.title {
            note.title = title;
        }
        if let Some(content) = patch.content {
            note.content = content;
        }
        note.updated_at = chrono::Utc::now().timestamp();
        self.persist_notes();
    }

    /// Removes `note_id`. An unknown id is a no-op with an empty result.
    pub fn delete_note(&mut self, note_id: &str) -> DeleteResult {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != note_id);
        if self.notes.len() == before {
            return DeleteResult::default();
        }

        self.persist_notes();
        DeleteResult {
            deleted_count: 1,
            folder_ids: vec![],
            note_ids: vec![note_id.to_string()],
        }
    }

    /// Returns the notes visible under `view`. See [`query::visible_notes`].
    pub fn visible_notes(&self, view: &ViewState) -> Vec<&Note> {
        query::visible_notes(&self.notes, &self.folders, view)
    }

    /// Returns the note count badge for `folder_id`. See [`query::note_count`].
    pub fn note_count(&self, folder_id: &str) -> usize {
        query::note_count(&self.notes, &self.folders, folder_id)
    }

    /// Returns the breadcrumb for `folder_id`. See [`query::folder_path`].
    pub fn folder_path(&self, folder_id: &str) -> String {
        query::folder_path(&self.folders, folder_id)
    }

    /// Returns `folder_id` plus all its descendants. See [`query::descendants_of`].
    pub fn descendants_of(&self, folder_id: &str) -> Vec<String> {
        query::descendants_of(&self.folders, folder_id)
    }

    // Snapshot writes are fire-and-forget: a failure must not surface
    // from an otherwise-total mutation, so it is logged and dropped.
    fn persist_folders(&self) {
        if let Err(e) = self.storage.save_folders(&self.folders) {
            log::warn!("failed to persist folders snapshot: {e}");
        }
    }

    fn persist_notes(&self) {
        if let Err(e) = self.storage.save_notes(&self.notes) {
            log::warn!("failed to persist notes snapshot: {e}");
        }
    }
}

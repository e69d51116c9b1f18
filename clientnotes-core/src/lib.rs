//! Core library for Clientnotes — a local-first organiser for customer
//! folders and free-text notes.
//!
//! The primary entry point is [`Workspace`], which holds the in-memory
//! folder and note stores and mirrors them to a local snapshot database
//! after every mutation. Derived views (visible notes, breadcrumbs,
//! note counts) are pure functions in the [`core::query`] module.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    delete::DeleteResult,
    error::{ClientnotesError, Result},
    folder::{Folder, NEW_FOLDER_NAME, UNTITLED_FOLDER_NAME},
    id::new_id,
    note::{Note, NotePatch},
    query::{descendants_of, folder_path, note_count, visible_notes, UNKNOWN_FOLDER_PATH},
    storage::Storage,
    view_state::{ActiveFolder, ViewState},
    workspace::Workspace,
};

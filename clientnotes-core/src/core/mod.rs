//! Internal domain modules for the Clientnotes core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod delete;
pub mod error;
pub mod folder;
pub mod id;
pub mod note;
pub mod query;
pub mod storage;
pub mod view_state;
pub mod workspace;

#[doc(inline)]
pub use delete::DeleteResult;
#[doc(inline)]
pub use error::{ClientnotesError, Result};
#[doc(inline)]
pub use folder::{Folder, NEW_FOLDER_NAME, UNTITLED_FOLDER_NAME};
#[doc(inline)]
pub use id::new_id;
#[doc(inline)]
pub use note::{Note, NotePatch};
#[doc(inline)]
pub use query::{descendants_of, folder_path, note_count, visible_notes, UNKNOWN_FOLDER_PATH};
#[doc(inline)]
pub use storage::Storage;
#[doc(inline)]
pub use view_state::{ActiveFolder, ViewState};
#[doc(inline)]
pub use workspace::Workspace;

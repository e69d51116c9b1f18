//! Pure derivations over the folder and note stores.
//!
//! Every function here is a total function of its inputs: the two
//! stores plus the transient [`ViewState`]. Nothing is cached — counts
//! and paths are recomputed on demand, which is cheap at the scale of
//! a local notes collection.

use crate::{Folder, Note, ViewState};
use std::collections::{HashMap, HashSet};

/// Breadcrumb shown when a folder id does not resolve.
pub const UNKNOWN_FOLDER_PATH: &str = "Unknown";

/// Returns `folder_id` plus the ids of all folders transitively
/// reachable from it via `parent_id` links, depth-first.
///
/// The result always includes `folder_id` itself, whether or not a
/// folder with that id exists. The parent relation is acyclic by
/// construction; the seen-set guards termination against a corrupt
/// snapshot loaded from disk.
pub fn descendants_of(folders: &[Folder], folder_id: &str) -> Vec<String> {
    let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
    for folder in folders {
        if let Some(parent_id) = folder.parent_id.as_deref() {
            children.entry(parent_id).or_default().push(&folder.id);
        }
    }

    let mut ids = Vec::new();
    let mut seen = HashSet::new();
    let mut stack = vec![folder_id];
    while let Some(id) = stack.pop() {
        if !seen.insert(id) {
            continue;
        }
        ids.push(id.to_string());
        if let Some(child_ids) = children.get(id) {
            stack.extend(child_ids.iter().copied());
        }
    }
    ids
}

/// Returns the notes visible under the current selection and search.
///
/// Candidates are all notes when the active folder is
/// [`ActiveFolder::All`], otherwise the notes owned by the active
/// folder's descendant closure. Candidates are then filtered by a
/// case-insensitive substring match of the search text against title
/// or content (empty search matches everything) and sorted descending
/// by `updated_at`. The sort is stable, so ties keep their original
/// relative order.
pub fn visible_notes<'a>(notes: &'a [Note], folders: &[Folder], view: &ViewState) -> Vec<&'a Note> {
    let scope: Option<HashSet<String>> = view
        .active_folder
        .folder_id()
        .map(|id| descendants_of(folders, id).into_iter().collect());

    let needle = view.search_text.to_lowercase();
    let mut visible: Vec<&Note> = notes
        .iter()
        .filter(|note| match &scope {
            Some(folder_ids) => folder_ids.contains(&note.folder_id),
            None => true,
        })
        .filter(|note| {
            needle.is_empty()
                || note.title.to_lowercase().contains(&needle)
                || note.content.to_lowercase().contains(&needle)
        })
        .collect();

    visible.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    visible
}

/// Returns the number of notes owned by `folder_id` or any of its
/// descendants. Used for the per-folder count badges.
pub fn note_count(notes: &[Note], folders: &[Folder], folder_id: &str) -> usize {
    let scope: HashSet<String> = descendants_of(folders, folder_id).into_iter().collect();
    notes
        .iter()
        .filter(|note| scope.contains(&note.folder_id))
        .count()
}

/// Returns the breadcrumb for `folder_id`.
///
/// Top-level folders render as `"{name}"`, subfolders as
/// `"{parentName} / {name}"` (only one level of nesting is rendered,
/// consistent with the enforced depth limit). An unresolvable id
/// yields [`UNKNOWN_FOLDER_PATH`].
pub fn folder_path(folders: &[Folder], folder_id: &str) -> String {
    let Some(folder) = folders.iter().find(|f| f.id == folder_id) else {
        return UNKNOWN_FOLDER_PATH.to_string();
    };

    match folder
        .parent_id
        .as_deref()
        .and_then(|parent_id| folders.iter().find(|f| f.id == parent_id))
    {
        Some(parent) => format!("{} / {}", parent.name, folder.name),
        None => folder.name.clone(),
    }
}

use serde::{Deserialize, Serialize};

/// Placeholder name given to every newly created folder.
pub const NEW_FOLDER_NAME: &str = "New Folder";

/// Fallback name applied when a rename commits with an empty value.
pub const UNTITLED_FOLDER_NAME: &str = "Untitled";

/// A customer folder or one of its subfolders.
///
/// Folders form a forest: `parent_id` is `None` for top-level customer
/// folders and points at the parent for subfolders. The UI only ever
/// creates two levels, but nothing in the record itself limits depth.
///
/// Snapshots persisted by an older format lack the `parentId` field;
/// `#[serde(default)]` migrates those records to top-level on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    pub name: String,
    pub created_at: i64,
}

impl Folder {
    /// Returns true for top-level ("customer") folders.
    pub fn is_customer(&self) -> bool {
        self.parent_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let folder = Folder {
            id: "f-1".to_string(),
            parent_id: Some("f-0".to_string()),
            name: "Billing".to_string(),
            created_at: 1_700_000_000,
        };

        let json = serde_json::to_string(&folder).unwrap();
        assert!(json.contains("\"parentId\""));
        assert!(json.contains("\"createdAt\""));
    }

    #[test]
    fn test_legacy_record_without_parent_id_migrates_to_top_level() {
        let json = r#"{"id":"f-1","name":"Acme","createdAt":100}"#;
        let folder: Folder = serde_json::from_str(json).unwrap();

        assert_eq!(folder.parent_id, None);
        assert!(folder.is_customer());
    }

    #[test]
    fn test_round_trip_preserves_parent() {
        let folder = Folder {
            id: "f-2".to_string(),
            parent_id: Some("f-1".to_string()),
            name: "Invoices".to_string(),
            created_at: 100,
        };

        let json = serde_json::to_string(&folder).unwrap();
        let back: Folder = serde_json::from_str(&json).unwrap();
        assert_eq!(back, folder);
    }
}

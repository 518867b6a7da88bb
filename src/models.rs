//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Todo data structure (matches backend wire format)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: String,
    pub title: String,
    pub done: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_server_list() {
        let json = r#"[{"id":"X","title":"buy milk","done":false},{"id":"Y","title":"","done":true}]"#;
        let items: Vec<TodoItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "X");
        assert_eq!(items[0].title, "buy milk");
        assert!(!items[0].done);
        assert!(items[1].done);
    }
}

//! Repository Integration Tests
//!
//! Tests for TodoRepository with in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::domain::{TodoId, TodoItem};
    use crate::repository::{init_db, Repository, TodoRepository};
    use std::path::PathBuf;

    fn setup_test_db() -> TodoRepository {
        // Use in-memory database for tests
        let db_path = PathBuf::from(":memory:");
        let db_state = init_db(&db_path).expect("Failed to init test DB");
        TodoRepository::new(db_state.connection())
    }

    #[tokio::test]
    async fn test_create_todo() {
        let repo = setup_test_db();

        let created = repo.create(&TodoItem::new("Test todo")).await.expect("Failed to create");

        assert_eq!(created.title, "Test todo");
        assert!(!created.done);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = setup_test_db();

        let created = repo.create(&TodoItem::new("Find me")).await.unwrap();

        let found = repo.find_by_id(&created.id).await.expect("Find failed");
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_list_empty() {
        let repo = setup_test_db();

        let todos = repo.list().await.expect("List failed");
        assert!(todos.is_empty());
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repo = setup_test_db();

        let first = repo.create(&TodoItem::new("First")).await.unwrap();
        let second = repo.create(&TodoItem::new("Second")).await.unwrap();
        let third = repo.create(&TodoItem::new("Third")).await.unwrap();

        let todos = repo.list().await.unwrap();
        assert_eq!(todos, vec![first, second, third]);
    }

    #[tokio::test]
    async fn test_empty_and_duplicate_titles_accepted() {
        let repo = setup_test_db();

        repo.create(&TodoItem::new("")).await.unwrap();
        repo.create(&TodoItem::new("dup")).await.unwrap();
        repo.create(&TodoItem::new("dup")).await.unwrap();

        let titles: Vec<String> = repo.list().await.unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["", "dup", "dup"]);
    }

    #[tokio::test]
    async fn test_set_done_persists() {
        let repo = setup_test_db();

        let created = repo.create(&TodoItem::new("Toggle me")).await.unwrap();

        repo.set_done(&created.id, true).await.expect("Update failed");
        assert!(repo.find_by_id(&created.id).await.unwrap().unwrap().done);

        repo.set_done(&created.id, false).await.expect("Update failed");
        assert!(!repo.find_by_id(&created.id).await.unwrap().unwrap().done);
    }

    #[tokio::test]
    async fn test_set_done_unknown_id_is_noop() {
        let repo = setup_test_db();

        let created = repo.create(&TodoItem::new("Untouched")).await.unwrap();

        repo.set_done(&TodoId::from("missing"), true).await.expect("Should succeed");

        assert_eq!(repo.list().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_delete_todo() {
        let repo = setup_test_db();

        let created = repo.create(&TodoItem::new("To delete")).await.unwrap();

        repo.delete(&created.id).await.expect("Delete failed");

        let found = repo.find_by_id(&created.id).await.expect("Find failed");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_noop() {
        let repo = setup_test_db();

        let kept = repo.create(&TodoItem::new("Keep")).await.unwrap();

        repo.delete(&TodoId::from("missing")).await.expect("Should succeed");

        assert_eq!(repo.list().await.unwrap(), vec![kept]);
    }

    #[tokio::test]
    async fn test_null_columns_read_as_defaults() {
        let db_state = init_db(&PathBuf::from(":memory:")).unwrap();
        db_state
            .connection()
            .lock()
            .await
            .execute("INSERT INTO todos (id, title, done) VALUES ('raw', NULL, NULL)", ())
            .unwrap();

        let repo = TodoRepository::new(db_state.connection());
        let found = repo.find_by_id(&TodoId::from("raw")).await.unwrap().unwrap();
        assert_eq!(found.title, "");
        assert!(!found.done);
    }

    #[tokio::test]
    async fn test_file_database_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("db.sqlite");

        let created = {
            let repo = TodoRepository::new(init_db(&db_path).unwrap().connection());
            let created = repo.create(&TodoItem::new("persisted")).await.unwrap();
            repo.set_done(&created.id, true).await.unwrap();
            created
        };

        let repo = TodoRepository::new(init_db(&db_path).unwrap().connection());
        let todos = repo.list().await.unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, created.id);
        assert!(todos[0].done);
    }
}

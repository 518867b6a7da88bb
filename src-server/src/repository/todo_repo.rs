//! Todo Repository Implementation
//!
//! SQLite-backed implementation of Repository<TodoItem>.
//! Every operation is a single statement; nothing runs in a transaction.

use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainResult, TodoId, TodoItem};
use super::traits::Repository;

/// SQLite implementation of Todo repository
pub struct TodoRepository {
    conn: Arc<Mutex<Connection>>,
}

impl TodoRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// Overwrite the done flag. Unknown ids are a silent no-op.
    pub async fn set_done(&self, id: &TodoId, done: bool) -> DomainResult<()> {
        let conn = self.conn.lock().await;

        conn.execute(
            "UPDATE todos SET done = ?1 WHERE id = ?2",
            rusqlite::params![i32::from(done), id.as_str()],
        )?;

        Ok(())
    }
}

#[async_trait]
impl Repository<TodoItem> for TodoRepository {
    async fn create(&self, entity: &TodoItem) -> DomainResult<TodoItem> {
        let conn = self.conn.lock().await;

        conn.execute(
            "INSERT INTO todos (id, title, done) VALUES (?1, ?2, ?3)",
            rusqlite::params![entity.id.as_str(), entity.title, i32::from(entity.done)],
        )?;

        Ok(entity.clone())
    }

    async fn find_by_id(&self, id: &TodoId) -> DomainResult<Option<TodoItem>> {
        let conn = self.conn.lock().await;

        let found = conn
            .query_row(
                "SELECT id, title, done FROM todos WHERE id = ?1",
                rusqlite::params![id.as_str()],
                row_to_todo,
            )
            .optional()?;

        Ok(found)
    }

    async fn list(&self) -> DomainResult<Vec<TodoItem>> {
        let conn = self.conn.lock().await;

        let mut stmt = conn.prepare("SELECT id, title, done FROM todos ORDER BY rowid")?;
        let todos = stmt
            .query_map((), row_to_todo)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(todos)
    }

    async fn delete(&self, id: &TodoId) -> DomainResult<()> {
        let conn = self.conn.lock().await;

        conn.execute(
            "DELETE FROM todos WHERE id = ?1",
            rusqlite::params![id.as_str()],
        )?;

        Ok(())
    }
}

/// Convert a database row to TodoItem
///
/// The table has no constraints, so NULL title/done are tolerated.
fn row_to_todo(row: &rusqlite::Row<'_>) -> rusqlite::Result<TodoItem> {
    Ok(TodoItem {
        id: TodoId::from(row.get::<_, String>(0)?),
        title: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        done: row.get::<_, Option<i64>>(2)?.unwrap_or(0) != 0,
    })
}

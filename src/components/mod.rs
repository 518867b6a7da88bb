//! UI Components
//!
//! Stateless Leptos components; all persistence goes through callbacks.

mod todo_list;
mod todo_row;
mod new_todo_form;

pub use todo_list::TodoList;
pub use todo_row::TodoRow;
pub use new_todo_form::NewTodoForm;

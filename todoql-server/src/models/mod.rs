//! Domain models with validation at construction
//!
//! User input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod todo;
pub mod validation;

pub use todo::{NewTodo, Todo, TodoChanges, TodoText, MAX_TODO_TEXT_LEN};
pub use validation::ValidationError;

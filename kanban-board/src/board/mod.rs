//! Board commands

mod create;
mod delete;
mod rename;
mod select;

pub use create::CreateBoard;
pub use delete::DeleteBoard;
pub use rename::RenameBoard;
pub use select::SelectBoard;

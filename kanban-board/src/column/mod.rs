//! Column commands

mod create;
mod delete;
mod rename;

pub use create::CreateColumn;
pub use delete::DeleteColumn;
pub use rename::RenameColumn;

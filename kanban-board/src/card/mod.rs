//! Card commands

mod create;
mod delete;
mod mv;
mod update;

pub use create::CreateCard;
pub use delete::DeleteCard;
pub use mv::MoveCard;
pub use update::{CardPatch, UpdateCard};

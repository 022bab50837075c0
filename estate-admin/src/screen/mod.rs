//! List screens of the dashboard.

mod action;
mod any_screen;
mod kind;
mod list;

pub use action::{Action, Outcome};
pub use any_screen::AnyScreen;
pub use kind::ScreenKind;
pub use list::ListScreen;

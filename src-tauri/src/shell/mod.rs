//! Form handling behind the five buttons, independent of the window toolkit.

pub mod actions;
pub mod form;
pub mod table;

pub use actions::{Notice, NoticeKind, Outcome};
pub use form::BouquetForm;

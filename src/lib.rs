//! Core crate for the `envlens` terminal viewer.
//!
//! The list model, masking and session state machine are plain data types
//! with no terminal dependency; [`ui`] draws them with ratatui and owns the
//! event loop.

pub mod app_dirs;
pub mod clipboard;
pub mod list;
pub mod logging;
pub mod session;
pub mod sources;
pub mod ui;

pub use clipboard::{Clipboard, ClipboardError, SystemClipboard};
pub use list::{Entry, SelectionList, SensitivityRule};
pub use session::{Flow, Session, SessionOptions};
pub use sources::Sources;
pub use ui::{Theme, run};

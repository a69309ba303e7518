//! Terminal front end: styles, drawing and the event loop.

pub mod render;
mod runtime;
mod theme;

pub use runtime::run;
pub use theme::Theme;

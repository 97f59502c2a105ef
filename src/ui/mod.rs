//! Terminal player built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: player state, keyboard event loop, pane focus, tree input prompt
//! - **[`panes`]**: render functions for each visible pane (pseudocode, visual,
//!   details, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a recorded
//! [`Trace`] and call [`App::run`] to start the event loop.
//!
//! [`Trace`]: crate::trace::Trace
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;

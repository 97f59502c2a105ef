//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`pseudocode`]: pseudocode listing with the active lines highlighted
//! - [`visual`]: the current frame (bars, search cursors, graph frontier, tree outline)
//! - [`details`]: complexity table, notes, and the quick sort partition log
//! - [`status`]: status bar with keybindings and playback state
//!
//! Each pane module exports a primary `render_*` function. Panes that scroll
//! take their offset by `&mut` and clamp it while rendering.

pub mod details;
pub mod pseudocode;
pub mod status;
pub mod visual;

pub use details::render_details_pane;
pub use pseudocode::{render_pseudocode_pane, PseudocodeScrollState};
pub use status::{render_status_bar, StatusRenderData};
pub use visual::render_visual_pane;

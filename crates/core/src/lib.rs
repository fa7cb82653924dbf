//! # gamewise
//!
//! Content and view model behind "Game Theory for Your Future": a small
//! guide that shows a list of key principles and a set of real-world
//! scenarios, one of which can be expanded into a detail panel.
//!
//! The crate is front-end agnostic. The browser app (`gamewise_web`) and the
//! terminal viewer (`gamewise_cli`) both drive the same [`state::ViewState`]
//! and draw the same [`render::PageView`].
//!
//! ## Quick Start
//!
//! ```
//! use gamewise::prelude::*;
//!
//! let mut state = ViewState::new();
//! state.select_section(Section::Scenarios);
//! state.select_scenario(ScenarioId::Salary);
//!
//! let page = render(&state);
//! let panel = page.detail().unwrap();
//! assert_eq!(panel.title, "Salary Negotiation");
//! assert_eq!(panel.strategy.len(), 3);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): serialization of view state and rendered pages,
//!   plus JSON output in [`output`]
//!
//! ## Modules
//!
//! - [`content`]: static principle, scenario and toolkit tables
//! - [`state`]: the two-field view state and its update function
//! - [`render`]: pure view-state to page projection
//! - [`output`]: text, Markdown, HTML and JSON renderings of a page
//! - [`error`]: failures of the string-keyed entry points

#[path = "core/content.rs"]
pub mod content;

#[path = "core/error.rs"]
pub mod error;

#[path = "core/output.rs"]
pub mod output;

#[path = "core/render.rs"]
pub mod render;

#[path = "core/state.rs"]
pub mod state;

/// Prelude module for convenient imports.
///
/// ```
/// use gamewise::prelude::*;
/// ```
pub mod prelude {
    pub use crate::content::{PrincipleEntry, ScenarioEntry, ScenarioId, ToolkitTip};
    pub use crate::error::GuideError;
    pub use crate::output::Format;
    pub use crate::render::{render, DetailPanel, PageView, SectionView};
    pub use crate::state::{Msg, Section, ViewState};
}

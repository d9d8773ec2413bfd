// SPDX-License-Identifier: MPL-2.0
//! The full-screen photo reel: component orchestration, the paginated pane,
//! the per-photo overlay, and the sub-components backing them.

pub mod component;
pub mod overlay;
pub mod pane;
pub mod subcomponents;

pub use component::{Effect, Message, State, ViewEnv, SCROLLABLE_ID};
pub use subcomponents::delete_menu::Stage as DeleteStage;

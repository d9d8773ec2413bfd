// SPDX-License-Identifier: MPL-2.0
//! Viewer sub-components, each owning one slice of the screen's state with
//! its own `State`/`Message`/`Effect` triple.

pub mod delete_menu;
pub mod fade;
pub mod pager;

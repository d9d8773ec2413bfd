// SPDX-License-Identifier: MPL-2.0
//! Delete-menu sub-component: the three-state delete flow.
//!
//! The screen state is two flags, menu visibility and an in-flight guard,
//! read as three stages: **idle** (overflow control showing),
//! **confirm-pending** (delete button revealed), and **in-flight** (request
//! outstanding, delete disabled). Every outcome of a delete attempt funnels
//! through [`Message::Completed`], which unconditionally resets both flags.

/// Stage of the delete flow, derived from the two flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    /// Nothing pending; the overflow control is shown.
    #[default]
    Idle,
    /// The delete button is revealed, awaiting a tap.
    ConfirmPending,
    /// A deletion request is outstanding.
    InFlight,
}

/// Delete-menu sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    menu_visible: bool,
    in_flight: bool,
}

/// Messages for the delete-menu sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// The overflow control was tapped (toggles the delete button).
    OverflowPressed,
    /// The delete button was tapped.
    DeletePressed,
    /// The confirmation dialog was dismissed with Cancel.
    DialogCancelled,
    /// The confirmation dialog was confirmed.
    DialogConfirmed,
    /// The deletion request finished (success or failure alike).
    Completed,
    /// The visible page changed; any open menu collapses.
    PageChanged,
}

/// Effects produced by delete-menu transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Show the native confirmation dialog.
    OpenConfirmDialog,
    /// Confirmation given; issue the deletion request.
    BeginDelete,
}

impl State {
    /// Handle a delete-menu message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::OverflowPressed => {
                if !self.in_flight {
                    self.menu_visible = !self.menu_visible;
                }
                Effect::None
            }
            Message::DeletePressed => {
                if self.menu_visible && !self.in_flight {
                    Effect::OpenConfirmDialog
                } else {
                    Effect::None
                }
            }
            Message::DialogCancelled => {
                self.menu_visible = false;
                Effect::None
            }
            Message::DialogConfirmed => {
                if self.in_flight {
                    Effect::None
                } else {
                    self.in_flight = true;
                    Effect::BeginDelete
                }
            }
            Message::Completed => {
                // Guaranteed cleanup on every exit path.
                self.menu_visible = false;
                self.in_flight = false;
                Effect::None
            }
            Message::PageChanged => {
                self.menu_visible = false;
                Effect::None
            }
        }
    }

    /// Current stage of the delete flow.
    #[must_use]
    pub fn stage(&self) -> Stage {
        if self.in_flight {
            Stage::InFlight
        } else if self.menu_visible {
            Stage::ConfirmPending
        } else {
            Stage::Idle
        }
    }

    /// Whether the delete button is revealed.
    #[must_use]
    pub fn is_menu_visible(&self) -> bool {
        self.menu_visible
    }

    /// Whether a deletion request is outstanding.
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}

//! Scroll surface capability.
//!
//! A widget never scrolls itself. It asks the host's scrollable viewport to
//! move through [`ScrollSurface`] and learns about the result through
//! [`crate::Event`]s. Keeping the command side behind a trait lets the
//! scroll logic run without a real UI surface.

use serde::{Deserialize, Serialize};

/// A programmatic scroll request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollCommand {
    /// Target horizontal content offset
    pub offset_x: f32,
    /// Whether the host should animate to the target
    pub animated: bool,
}

impl ScrollCommand {
    /// Jump to an offset without animation.
    #[must_use]
    pub const fn jump(offset_x: f32) -> Self {
        Self {
            offset_x,
            animated: false,
        }
    }

    /// Animate to an offset.
    #[must_use]
    pub const fn animate(offset_x: f32) -> Self {
        Self {
            offset_x,
            animated: true,
        }
    }
}

/// Imperative handle on a host scroll view.
pub trait ScrollSurface: Send + Sync {
    /// Scroll the content to `command.offset_x`.
    fn scroll_to(&mut self, command: ScrollCommand);
}

/// Surface that records every command it receives.
///
/// Used when no host surface is attached and in tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    commands: Vec<ScrollCommand>,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands received so far.
    #[must_use]
    pub fn commands(&self) -> &[ScrollCommand] {
        &self.commands
    }

    /// Most recent command.
    #[must_use]
    pub fn last(&self) -> Option<ScrollCommand> {
        self.commands.last().copied()
    }

    /// Drain the recorded commands.
    pub fn take(&mut self) -> Vec<ScrollCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl ScrollSurface for RecordingSurface {
    fn scroll_to(&mut self, command: ScrollCommand) {
        self.commands.push(command);
    }
}

//! Global actions - not tied to any specific screen

use ratatui::crossterm::event::KeyEvent;
use std::time::Instant;

use crate::views::View;

/// Global actions that affect the entire application
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Left mouse button pressed at a terminal cell
    MouseClicked { column: u16, row: u16 },
    /// Terminal was resized (also sent once at startup)
    Resized { width: u16, height: u16 },
    /// Close the current view (pop from stack)
    Close,
    /// Quit the application
    Quit,
    /// Push a floating view onto the stack
    PushView(Box<dyn View>),
    /// Periodic tick driving toast expiry and the loading spinner
    Tick(Instant),
}

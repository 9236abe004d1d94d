pub use crate::{
    command_id::CommandId,
    keybindings::{KeyBinding, Keymap},
};

/// Get the default keymap
pub fn default_keymap() -> Keymap {
    use CommandId::*;

    let bindings = vec![
        // Navigation
        KeyBinding::new("j", "j", NavigateNext),
        KeyBinding::new("down", "↓", NavigateNext),
        KeyBinding::new("k", "k", NavigatePrevious),
        KeyBinding::new("up", "↑", NavigatePrevious),
        // Projects
        KeyBinding::new("n", "n", ProjectCreate),
        KeyBinding::new("d", "d", ProjectDelete),
        KeyBinding::new("ctrl+r", "Ctrl+R", ProjectRefresh),
        KeyBinding::new("enter", "Enter", ProjectOpenDetail),
        // Confirmation; shared keys fall through to these when the popup is on top
        KeyBinding::new("y", "y", ConfirmationAccept),
        KeyBinding::new("enter", "Enter", ConfirmationAccept),
        KeyBinding::new("n", "n", ConfirmationDecline),
        // AI tools
        KeyBinding::new("i", "i", ExpandIdea),
        KeyBinding::new("c", "c", DevelopConcept),
        KeyBinding::new("r", "r", Research),
        KeyBinding::new("C", "C", ContinuityCheck),
        // Exports
        KeyBinding::new("Q", "Q", ExportQueryLetter),
        KeyBinding::new("S", "S", ExportSynopsis),
        KeyBinding::new("P", "P", ExportSubmissionPacket),
        // Appearance
        KeyBinding::new("t", "t", ThemeToggle),
        // Help
        KeyBinding::new("?", "?", HelpToggle),
        // General
        KeyBinding::new("q", "q", GlobalClose),
        KeyBinding::new("ctrl+c", "Ctrl+C", GlobalQuit),
    ];

    Keymap::new(bindings)
}

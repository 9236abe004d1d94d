//! View capability system
//!
//! Views declare what kind of input they take so the keyboard middleware can
//! route keys without knowing concrete view types.

use bitflags::bitflags;

bitflags! {
    /// Capabilities that a view can declare
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PanelCapabilities: u32 {
        /// View has a text field; printable keys are typed, not looked up
        const TEXT_INPUT = 1 << 0;

        /// View can navigate to next/previous items
        const ITEM_NAVIGATION = 1 << 1;

        /// View supports vim-style navigation keybindings (j, k)
        const VIM_NAVIGATION_BINDINGS = 1 << 2;
    }
}

impl PanelCapabilities {
    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }

    pub fn supports_item_navigation(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION)
    }
}

impl Default for PanelCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}

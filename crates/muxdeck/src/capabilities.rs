//! View capability system
//!
//! Views declare capabilities so keyboard handling can route keys without
//! knowing concrete view types. A view with `TEXT_INPUT` is an editable
//! surface: global shortcuts never fire while it is on top.

use bitflags::bitflags;

bitflags! {
    /// Capabilities that a view can declare
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PanelCapabilities: u32 {
        /// View owns a text field; printable keys are typed into it
        const TEXT_INPUT = 1 << 0;

        /// View can navigate to next/previous items
        const ITEM_NAVIGATION = 1 << 1;
    }
}

impl PanelCapabilities {
    /// Check if the view is an editable surface
    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }

    /// Check if the view supports item navigation
    pub fn supports_item_navigation(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let caps = PanelCapabilities::default();
        assert!(!caps.accepts_text_input());
        assert!(!caps.supports_item_navigation());
    }

    #[test]
    fn test_flags_are_independent() {
        let caps = PanelCapabilities::TEXT_INPUT | PanelCapabilities::ITEM_NAVIGATION;
        assert!(caps.accepts_text_input());
        assert!(caps.supports_item_navigation());
        assert!(!PanelCapabilities::ITEM_NAVIGATION.accepts_text_input());
    }
}

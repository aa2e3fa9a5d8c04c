/// Viewport width above which the desktop navigation takes over
pub const DESKTOP_BREAKPOINT: u32 = 768;
pub const NAV_ELEMENT_ID: &str = "site-nav";
pub const MENU_BUTTON_LABEL: &str = "Toggle navigation menu";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    ButtonClicked,
    LinkClicked,
    EscapePressed,
    Resized { width: u32 },
    ClickedOutside,
}

/// Hamburger menu state. Closed until the button is pressed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Feed one event through the menu. Returns true when the open state changed.
    pub fn handle(&mut self, event: MenuEvent) -> bool {
        let next = match event {
            MenuEvent::ButtonClicked => !self.open,
            MenuEvent::LinkClicked => false,
            MenuEvent::EscapePressed | MenuEvent::ClickedOutside => false,
            MenuEvent::Resized { width } if width > DESKTOP_BREAKPOINT => false,
            MenuEvent::Resized { .. } => self.open,
        };

        let changed = next != self.open;
        if changed {
            tracing::debug!(open = next, ?event, "mobile menu");
        }
        self.open = next;
        changed
    }

    /// Value for the button's `aria-expanded` attribute
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    /// Attributes the menu button carries: `aria-controls`, `aria-expanded`
    /// and `aria-label`
    pub fn aria_attributes(&self) -> [(&'static str, &'static str); 3] {
        [
            ("aria-controls", NAV_ELEMENT_ID),
            ("aria-expanded", self.aria_expanded()),
            ("aria-label", MENU_BUTTON_LABEL),
        ]
    }

    /// Page scrolling is locked while the menu covers it
    pub fn body_scroll_locked(&self) -> bool {
        self.open
    }
}

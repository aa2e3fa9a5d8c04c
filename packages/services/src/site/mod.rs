//! Page behaviours that sit around the contact form: active navigation links,
//! the dark theme flag, the mobile menu, button ripples, scroll progress, CDN
//! image lookups and small text helpers.

pub mod counter;
pub mod footer;
pub mod images;
pub mod menu;
pub mod navigation;
pub mod ripple;
pub mod scroll;
pub mod theme;

pub use counter::character_counter;
pub use footer::copyright_year;
pub use images::CdnImages;
pub use menu::{MenuEvent, MobileMenu};
pub use navigation::{active_links, is_active_link};
pub use ripple::{ripple_at, ButtonRect, Ripple};
pub use scroll::scroll_progress;
pub use theme::{MemoryPreferenceStore, PreferenceStore, Theme, ThemeToggle};

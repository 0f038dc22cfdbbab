//! The portfolio page around the hero: layout, hero visibility, the hero's
//! scroll-bound views, section reveals, the header, and the [`App`] that
//! mounts them in order.

pub mod app;
pub mod content;
pub mod error;
pub mod hero;
pub mod layout;
pub mod loading;
pub mod navigation;
pub mod reveal;
pub mod visibility;

pub use app::{App, Fallback, Page};
pub use content::{PageContent, ids};
pub use error::MountError;
pub use hero::{HeroView, HeroViewKind};
pub use layout::{Layout, PageLayout, Rect};
pub use loading::LoadingScreen;
pub use navigation::{NAV_LINKS, NavLink, Navigation, ScrollRequest};
pub use reveal::{SectionKind, SectionReveal};
pub use visibility::VisibilitySensor;

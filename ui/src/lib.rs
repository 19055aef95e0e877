//! Shared UI crate for CoinTrek: the site navigation bar, the loading
//! placeholder and the theme/session state they read.

use dioxus::prelude::*;

pub mod config;
pub mod core;
pub mod i18n;
pub mod session;
pub mod theme;
pub mod views;

pub mod components {
    mod avatar;
    pub use avatar::{Avatar, AvatarFace};

    // Site header with the theme toggle and user menu (components/navbar.rs)
    pub mod navbar;
    pub use navbar::{NavBuilder, Navbar};

    mod profile;
    pub use profile::ProfileBadge;

    mod skeleton;
    pub use skeleton::Skeleton;
}

pub use session::{use_session, use_session_provider, SessionContext, User};
pub use theme::{use_theme, use_theme_provider, ThemeContext, ThemeMode};

/// Shared stylesheet: header, menu, placeholder and page layout.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

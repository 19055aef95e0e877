//! Application configuration.
//!
//! Centralizes the constants shared by the navigation bar, the placeholder
//! widget and the persistence helpers.

// =============================================================================
// Application Metadata
// =============================================================================

/// Title shown next to the logo in the header.
pub const APP_TITLE: &str = "CoinTrek";

// =============================================================================
// Routes
// =============================================================================

/// Listing page for all tracked coins.
pub const CRYPTOS_PATH: &str = "/cryptos";

/// Headlines page.
pub const NEWS_PATH: &str = "/news";

/// Root page, doubles as the about page.
pub const ABOUT_PATH: &str = "/";

/// Sign-in page.
pub const LOGIN_PATH: &str = "/login";

// =============================================================================
// Storage Keys
// =============================================================================

/// localStorage key for the persisted theme mode.
pub const THEME_STORAGE_KEY: &str = "cointrek-theme";

/// localStorage key for the signed-in user (JSON).
pub const USER_STORAGE_KEY: &str = "cointrek-user";

/// localStorage key for the authentication token.
pub const TOKEN_STORAGE_KEY: &str = "cointrek-token";

// =============================================================================
// Element Ids
// =============================================================================

/// Header element id.
pub const NAVBAR_ID: &str = "navbar";

/// The avatar button; the dropdown is anchored to it.
pub const AVATAR_BUTTON_ID: &str = "navbar-avatar";

/// Dropdown menu id, referenced by `aria-controls`.
pub const MENU_ID: &str = "menu-appbar";

// =============================================================================
// Presentation
// =============================================================================

/// Avatar edge length in pixels.
pub const AVATAR_SIZE_PX: u32 = 35;

/// Theme toggle icon edge length in pixels.
pub const ICON_SIZE_PX: u32 = 22;

/// Classes every loading placeholder carries.
pub const SKELETON_CLASSES: &str = "skeleton animate-pulse rounded-md bg-muted";

//! User menu composition and open/closed state.
//!
//! Kept free of Dioxus types so the rules can be checked without rendering.

use super::route::Section;

/// Pages the menu can link to. Hosts map these onto their own router.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Cryptos,
    News,
    About,
    Login,
}

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Self::Cryptos => crate::config::CRYPTOS_PATH,
            Self::News => crate::config::NEWS_PATH,
            Self::About => crate::config::ABOUT_PATH,
            Self::Login => crate::config::LOGIN_PATH,
        }
    }
}

/// One row of the user menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEntry {
    Profile,
    BrowseCryptos,
    News,
    About,
    LogOut,
    LogIn,
}

impl MenuEntry {
    /// Where the entry navigates, if it is a link.
    pub fn destination(self) -> Option<Destination> {
        match self {
            Self::BrowseCryptos => Some(Destination::Cryptos),
            Self::News => Some(Destination::News),
            Self::About => Some(Destination::About),
            Self::LogIn => Some(Destination::Login),
            Self::Profile | Self::LogOut => None,
        }
    }
}

type Rule = (fn(bool, &Section) -> bool, MenuEntry);

/// Menu rows in display order, each shown when its predicate holds for
/// (user signed in, current section).
const MENU_RULES: [Rule; 6] = [
    (|signed_in, _| signed_in, MenuEntry::Profile),
    (|_, section| *section != Section::Cryptos, MenuEntry::BrowseCryptos),
    (|_, section| *section != Section::News, MenuEntry::News),
    (|_, section| *section != Section::About, MenuEntry::About),
    (
        |signed_in, section| signed_in && *section != Section::Login,
        MenuEntry::LogOut,
    ),
    (
        |signed_in, section| !signed_in && *section != Section::Login,
        MenuEntry::LogIn,
    ),
];

/// Entries to show for the given sign-in state and section.
pub fn menu_entries(signed_in: bool, section: &Section) -> Vec<MenuEntry> {
    MENU_RULES
        .iter()
        .filter(|(visible, _)| visible(signed_in, section))
        .map(|(_, entry)| *entry)
        .collect()
}

/// Interactions that change the dropdown state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// The avatar (or another anchor element) was clicked.
    AnchorClicked(String),
    /// A menu row was clicked.
    ItemSelected(MenuEntry),
    /// The theme toggle was activated.
    ThemeToggled,
    /// Click outside the menu, or Escape.
    Dismissed,
}

/// Dropdown state. The anchor is the id of the element the menu hangs from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open {
        anchor: String,
    },
}

impl MenuState {
    pub fn open(anchor: impl Into<String>) -> Self {
        Self::Open {
            anchor: anchor.into(),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn anchor(&self) -> Option<&str> {
        match self {
            Self::Open { anchor } => Some(anchor),
            Self::Closed => None,
        }
    }

    /// Drop the anchor, whatever the current state.
    pub fn close(&mut self) {
        if self.is_open() {
            tracing::debug!("user menu closed");
        }
        *self = Self::Closed;
    }

    pub fn apply(&mut self, event: MenuEvent) {
        match event {
            MenuEvent::AnchorClicked(anchor) => {
                tracing::debug!(%anchor, "user menu opened");
                *self = Self::Open { anchor };
            }
            MenuEvent::ItemSelected(_) | MenuEvent::ThemeToggled | MenuEvent::Dismissed => {
                self.close()
            }
        }
    }
}

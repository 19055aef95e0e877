//! Current-section detection for the navigation menu.

/// Logical page derived from a URL path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Section {
    /// Root path, which is the about page.
    About,
    Cryptos,
    News,
    Login,
    /// Any other path, leading `/` removed.
    Other(String),
}

impl Section {
    /// Derive the section by removing the first `/` of `path`.
    ///
    /// Only one slash is dropped, so nested or trailing-slash paths such as
    /// `/news/` are never mistaken for a top-level section.
    pub fn from_path(path: &str) -> Self {
        let stripped = path.replacen('/', "", 1);
        match stripped.as_str() {
            "" => Self::About,
            "cryptos" => Self::Cryptos,
            "news" => Self::News,
            "login" => Self::Login,
            _ => Self::Other(stripped),
        }
    }
}

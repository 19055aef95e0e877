//! Thin pages the host routes to. Real data loading lives elsewhere; until
//! then the listing pages show placeholders.

mod about;
pub use about::About;

mod cryptos;
pub use cryptos::Cryptos;

mod news;
pub use news::News;

mod login;
pub use login::Login;

mod not_found;
pub use not_found::NotFound;

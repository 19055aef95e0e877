//! Framework-free building blocks: menu rules, route sections, class merging
//! and storage.

pub mod classes;
pub mod error;
pub mod menu;
pub mod route;
pub mod storage;

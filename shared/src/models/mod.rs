//! Data models shared by the catalog client and the storefront server

pub mod product;
pub mod theme;

pub use product::{Product, Rating};
pub use theme::{THEME_COOKIE, THEME_COOKIE_MAX_AGE_SECS, Theme, UnknownTheme};

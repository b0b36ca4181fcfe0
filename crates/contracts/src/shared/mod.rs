pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod mega_menu;

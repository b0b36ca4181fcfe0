pub mod aggregate;

pub use aggregate::{MenuItem, NavEntry, NavigationTree};

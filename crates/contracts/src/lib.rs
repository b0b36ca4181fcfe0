//! Shared storefront types and client-side logic.
//!
//! Everything here is platform independent: the frontend crate wires these
//! types to the DOM, while the tests in this crate run natively.

pub mod domain;
pub mod enums;
pub mod shared;

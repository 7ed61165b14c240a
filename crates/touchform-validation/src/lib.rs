//! touchform validation primitives
//!
//! Pure Rust checks compatible with both std and no_std environments.
//! Each check returns either a boolean or a `Result<(), String>` carrying the
//! user-facing error label, so callers can surface it as display state.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod email;
pub mod numeric;
pub mod string;

pub use email::*;
pub use numeric::*;
pub use string::*;

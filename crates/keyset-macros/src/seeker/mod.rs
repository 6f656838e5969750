//! Implementation of the `#[derive(Seekable)]` macro.
//!
//! This module provides derive macro support for keyset reference records,
//! generating the field accessor from struct fields.

mod attrs;
mod derive;

pub use derive::seekable_derive_impl;

//! Corner Market Core - Shared types library.
//!
//! This crate provides common types used across all Corner Market components:
//! - `shop` - The interactive shopping binary
//! - `integration-tests` - Scripted end-to-end sessions
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no file
//! access, no prompting. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - `Username` wrapper, money helpers, and the password policy

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

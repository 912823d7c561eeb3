//! Core types for Corner Market.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod money;
pub mod password;
pub mod username;

pub use money::{display_amount, line_total};
pub use password::{PasswordPolicyError, is_valid, validate};
pub use username::Username;

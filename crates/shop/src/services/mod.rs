//! Application services: authentication, the login flow, and the checkout
//! loop.

pub mod auth;
pub mod checkout;
pub mod login;

//! File-backed external collaborators: the user store and the catalog source.

pub mod catalog;
pub mod users;

pub use catalog::{CatalogError, load_products};
pub use users::{StoreError, UserStore};

//! Infrastructure layer: user store implementations backing the auth core.

pub mod user_store;


pub use user_store::InMemoryUserStore;

//! Backend REST client and view loaders.

pub mod client;
pub mod error;
pub mod loaders;
#[cfg(test)]
pub(crate) mod mock;

pub use client::{ActionAck, DashboardClient};
pub use error::ApiError;

//! Schema module - Image specifications and corpus settings.

mod config;
mod corpus;

pub use config::*;
pub use corpus::*;

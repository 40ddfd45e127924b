//! Pocket DNS Infrastructure Layer
pub mod dns;

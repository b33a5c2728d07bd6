//! # Pathlens Application Library
//!
//! The binary's modules, exposed as a library so integration tests can drive
//! them directly.

pub mod cli;
pub mod client;
pub mod driver;
pub mod error;
pub mod graphfile;

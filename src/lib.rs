//! Strato: Cloud Platform Label Queries
//!
//! A command-line client for the platform controller API that reads the
//! key/value labels attached to platform resources and renders them as a
//! deterministically ordered table.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod labels;
pub mod logging;
pub mod output;
pub mod resource;
pub mod session;

//! Core library components.
//!
//! This module contains the injection logic independent of the command line:
//! settings, secret retrieval, substitution and file rewriting.

pub mod ci;
pub mod config;
pub mod constants;
pub mod env;
pub mod inject;
pub mod rewrite;
pub mod store;
pub mod template;

//! CLI subcommand modules.
//!
//! This module contains the implementations for all salescast CLI subcommands.

pub(crate) mod aggregate;
pub(crate) mod enrich;
pub(crate) mod evaluate;
pub(crate) mod features;
pub(crate) mod list_features;

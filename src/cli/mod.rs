//! CLI operation mode handlers.
//!
//! This module contains the implementations for different operation modes:
//! - [`check`]: Check one repository for a funding manifest
//! - [`leaderboard`]: Check every repository in a reference list
//! - [`propose`]: Print a link that creates a manifest for a repository
//!
//! Output formatting utilities are in [`output`].

pub mod check;
pub mod leaderboard;
pub mod output;
pub mod propose;

#[cfg(test)]
pub mod test_utils;

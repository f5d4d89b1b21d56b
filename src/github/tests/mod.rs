//! Unit tests for the GitHub resolution module.

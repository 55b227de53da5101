//! Unit tests for the posts module.

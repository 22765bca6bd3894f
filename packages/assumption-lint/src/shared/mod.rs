//! Shared models
//!
//! The program model is produced by an external front-end (source parser)
//! and consumed read-only by every feature.

pub mod models;

//! Shared types and utilities for the hauntyard diorama.

pub mod types;

pub use types::{Color, LightId, NodeId, Transform};

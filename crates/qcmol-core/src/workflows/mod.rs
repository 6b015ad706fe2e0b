//! # Workflows Module
//!
//! Top-level entry points that tie the [`crate::core`] and [`crate::engine`] layers
//! together for complete procedures on coordinate text.
//!
//! - **Conversion Workflow** ([`convert`]) - Parse a coordinate string with a configurable
//!   default unit and mass table, then convert it to the requested units.
//! - **Normalization Workflow** ([`normalize`]) - Send a geometry through an external
//!   engine and read back the geometry the engine settled on.

pub mod convert;
pub mod normalize;

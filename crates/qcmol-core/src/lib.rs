//! # qcmol Core Library
//!
//! Molecular geometries as small, strongly typed value objects, together with the textual
//! coordinate convention used to exchange them with quantum-chemistry engines.
//!
//! ## Layout
//!
//! - **[`core`]: Data and parsing.** The [`core::models::molecule::Molecule`] value object,
//!   the [`core::models::units::Units`] enum, the coordinate-string parser in [`core::io`],
//!   and static atomic data (masses, physical constants) in [`core::utils`].
//!
//! - **[`engine`]: The external engine seam.** The [`engine::native::NativeEngine`] trait
//!   describes what an external chemistry engine must provide, [`engine::native::EngineSession`]
//!   guards its process-wide initialization, and [`engine::reference::ReferenceEngine`] is a
//!   pure-Rust implementation of the trait.
//!
//! - **[`workflows`]: The Public API.** Complete procedures (unit conversion of coordinate
//!   text, normalization through an engine) built from the two layers above.

pub mod core;
pub mod engine;
pub mod workflows;

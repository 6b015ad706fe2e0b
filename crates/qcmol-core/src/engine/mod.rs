//! # Engine Module
//!
//! The seam between qcmol and an external quantum-chemistry engine.
//!
//! ## Overview
//!
//! qcmol performs no chemistry itself. Everything an engine has to offer is reduced to four
//! capabilities, collected in the [`native::NativeEngine`] trait: a process-wide initializer,
//! building a native molecule from a coordinate string, normalizing its geometry in place,
//! and exporting it back to a coordinate string.
//!
//! - **Engine Contract** ([`native`]) - The trait and the [`native::EngineSession`] that makes
//!   initialization idempotent
//! - **Molecule Bridge** ([`bridge`]) - `Molecule::make_native_handle` / `Molecule::from_native_handle`
//! - **Reference Engine** ([`reference`]) - A self-contained engine used for tests and the CLI
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod bridge;
pub mod error;
pub mod native;
pub mod reference;

//! Barsong Spec Library
//!
//! Data contracts for turning a scanned barcode string into a short phrase:
//! configuration, scale tables, hash-derived musical parameters and config
//! validation. The engine that consumes these lives in
//! `barsong-backend-midi`.
//!
//! # Example
//!
//! ```
//! use barsong_spec::{derive_parameters, validate_config, SonifyConfig};
//!
//! let config = SonifyConfig::default();
//! assert!(validate_config(&config).is_ok());
//!
//! let params = derive_parameters("XXXXJ102800309");
//! assert_eq!(params.scale, "major");
//! assert_eq!(params.bpm, 176);
//! ```
//!
//! # Modules
//!
//! - [`config`]: `SonifyConfig`, parameter source and emission strategy
//! - [`error`]: Validation codes, `SpecError`, the `BackendError` trait
//! - [`hash`]: SHA-256 text digests and BLAKE3 output hashes
//! - [`params`]: Hash-derived parameter tuple
//! - [`scale`]: Named scale tables
//! - [`text`]: Scan text normalization
//! - [`validation`]: Config range checks

pub mod config;
pub mod error;
pub mod hash;
pub mod params;
pub mod scale;
pub mod text;
pub mod validation;

pub use config::{EmissionStrategy, ParameterSource, SonifyConfig};
pub use error::{BackendError, ErrorCode, SpecError, ValidationError, ValidationResult};
pub use hash::{blake3_hash, text_digest, text_digest_hex};
pub use params::{derive_parameters, DerivedParameters};
pub use scale::{ScaleTable, DERIVED_SCALE_NAMES};
pub use text::{decode_scan_bytes, normalize_text};
pub use validation::validate_config;

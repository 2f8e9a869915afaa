// NRT - nrt-error
// Module: NRT Error Handling
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2026 The NRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! NRT Error handling library
//!
//! Error types and codes shared by the Nanoapp Runtime support crates.
//!
//! # Error Categories
//!
//! ## Contract violations (1000-1999)
//! - Insertion into a full container
//! - Indexed access at or beyond the container size
//! - Removal from an empty container
//!
//! Contract violations are programmer errors. The container APIs panic with
//! these values instead of returning them; they exist as constants so that
//! panic messages and logs share one taxonomy.
//!
//! ## Foundation runtime errors (26000-26999)
//! - Checked insertion that does not fit
//! - Checked access outside the live range
//!
//! ## Platform errors (8000-8999)
//! - Nanoapp entry point not loaded
//! - Nanoapp start entry point reported failure
//!
//! # Usage
//!
//! ```
//! use nrt_error::{codes, Error, ErrorCategory};
//!
//! let error = Error::new(
//!     ErrorCategory::FoundationRuntime,
//!     codes::FIXED_VECTOR_CAPACITY_EXCEEDED,
//!     "event queue full",
//! );
//! assert_eq!(error.code, Error::FIXED_VECTOR_CAPACITY_EXCEEDED.code);
//! assert_eq!(
//!     Error::CONTRACT_PUSH_WHILE_FULL.category,
//!     ErrorCategory::ContractViolation
//! );
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "std")]
extern crate std;

/// Error codes for nrt
pub mod codes;
/// Error and error handling types
pub mod errors;

// Re-export key types
pub use errors::{Error, ErrorCategory, ErrorSource};

/// A specialized `Result` type for NRT operations.
pub type Result<T> = core::result::Result<T, Error>;

// NRT - nrt-foundation
// Module: NRT Foundation Library
// SW-REQ-ID: REQ_RESOURCE_001, REQ_MEM_SAFETY_001
//
// Copyright (c) 2026 The NRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Foundation library for the Nanoapp Runtime (NRT).
//!
//! Provides [`FixedSizeVector`], a vector whose capacity is fixed at compile
//! time and whose storage lives inline, along with the contract checks its
//! caller-validated operations rely on.
//!
//! # Features
//!
//! - `std`: implement `std::error::Error` for the shared error type
//! - `tracing`: structured logging of contract violations and checked failures
//! - `runtime-bounds-checking`: keep the checks of `unsafe` unchecked
//!   operations in release builds
//! - `asil-b`, `asil-c`, `asil-d`: safety levels, each implying the previous
//!
//! # Example
//!
//! ```
//! use nrt_foundation::{FixedSizeVector, Error};
//!
//! let mut events = FixedSizeVector::<u16, 2>::new();
//! if !events.full() {
//!     events.push_back(0x0101);
//! }
//! events.try_push_back(0x0102)?;
//! assert_eq!(events.try_push_back(0x0103), Err(Error::FIXED_VECTOR_CAPACITY_EXCEEDED));
//! assert_eq!(events.as_slice(), &[0x0101, 0x0102]);
//! # Ok::<(), nrt_foundation::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

/// Fixed-capacity collections
pub mod collections;
/// Contract checks for caller-validated operations
pub mod contract;
/// Structured tracing helpers
#[cfg(feature = "tracing")]
pub mod tracing;

pub use collections::FixedSizeVector;
pub use contract::{contract_violation, unchecked_operations_are_verified};
pub use nrt_error::{codes, Error, ErrorCategory};

/// Result type for foundation operations
pub type Result<T> = nrt_error::Result<T>;

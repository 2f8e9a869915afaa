// NRT - nrt-platform
// Module: NRT Platform Library
// SW-REQ-ID: REQ_PLATFORM_001
//
// Copyright (c) 2026 The NRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Platform-side nanoapp descriptor for the Nanoapp Runtime (NRT).
//!
//! A loader resolves the three entry symbols of a nanoapp and stores them in
//! a [`PlatformNanoapp`]; a dispatcher invokes them through the same value.
//!
//! ```
//! use nrt_platform::PlatformNanoapp;
//!
//! let nanoapp = PlatformNanoapp::default();
//! assert!(!nanoapp.is_loaded());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

/// Entry point signatures
pub mod entry_points;
/// Nanoapp descriptor
pub mod nanoapp;
/// Structured tracing helpers
#[cfg(feature = "tracing")]
pub mod tracing;

pub use entry_points::{EntryPoints, NanoappHandleEventFn, NanoappStartFn, NanoappStopFn};
pub use nanoapp::PlatformNanoapp;
pub use nrt_error::{Error, Result};

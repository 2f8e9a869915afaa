// NRT - nrt-error
// Module: NRT Error Types
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2026 The NRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Categorized error type shared by all NRT crates.
//!
//! [`Error`] is `Copy` and carries only a `&'static str` message, so it can
//! be created and returned without allocation in `no_std` builds.

use core::fmt;

use crate::codes;

/// `Error` categories for NRT operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Caller broke an operation precondition
    ContractViolation = 1,
    /// Platform-specific errors (loader, dispatcher)
    Platform          = 28,
    /// Foundation runtime constraint violations (bounded collections)
    FoundationRuntime = 26,
}

/// Base trait for all error types
pub trait ErrorSource: fmt::Debug + Send + Sync {
    /// Get the error code
    fn code(&self) -> u16;

    /// Get the error message
    fn message(&self) -> &'static str;

    /// Get the error category
    fn category(&self) -> ErrorCategory;
}

/// NRT `Error` type
///
/// Categorized error with a numeric code and a static message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Unsafe unchecked removal from an empty container
    pub const CONTRACT_POP_WHILE_EMPTY: Self = Self::new(
        ErrorCategory::ContractViolation,
        codes::CONTRACT_POP_WHILE_EMPTY,
        "Element removed from an empty fixed-size vector",
    );
    /// Indexed access at or beyond the current size
    pub const CONTRACT_INDEX_OUT_OF_BOUNDS: Self = Self::new(
        ErrorCategory::ContractViolation,
        codes::CONTRACT_INDEX_OUT_OF_BOUNDS,
        "Index at or beyond the size of a fixed-size vector",
    );
    /// Insertion while the container is full
    pub const CONTRACT_PUSH_WHILE_FULL: Self = Self::new(
        ErrorCategory::ContractViolation,
        codes::CONTRACT_PUSH_WHILE_FULL,
        "Element inserted into a full fixed-size vector",
    );
    /// Nanoapp entry point slot is empty
    pub const ENTRY_POINT_NOT_LOADED: Self = Self::new(
        ErrorCategory::Platform,
        codes::ENTRY_POINT_NOT_LOADED,
        "Nanoapp entry point not loaded",
    );
    /// Checked insertion that does not fit
    pub const FIXED_VECTOR_CAPACITY_EXCEEDED: Self = Self::new(
        ErrorCategory::FoundationRuntime,
        codes::FIXED_VECTOR_CAPACITY_EXCEEDED,
        "Fixed-size vector capacity exceeded",
    );
    /// Checked access outside the live range
    pub const FIXED_VECTOR_INDEX_OUT_OF_BOUNDS: Self = Self::new(
        ErrorCategory::FoundationRuntime,
        codes::FIXED_VECTOR_INDEX_OUT_OF_BOUNDS,
        "Fixed-size vector index out of bounds",
    );
    /// Nanoapp start entry point returned `false`
    pub const NANOAPP_START_FAILED: Self = Self::new(
        ErrorCategory::Platform,
        codes::NANOAPP_START_FAILED,
        "Nanoapp start entry point reported failure",
    );

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Get the ASIL level of this error (ASIL-B and above)
    #[cfg(any(feature = "asil-b", feature = "asil-c", feature = "asil-d"))]
    #[must_use]
    pub const fn asil_level(&self) -> &'static str {
        match self.category {
            ErrorCategory::ContractViolation | ErrorCategory::FoundationRuntime => "ASIL-D",
            ErrorCategory::Platform => "ASIL-C",
        }
    }

    /// Check if error requires immediate safe state transition (ASIL-C and
    /// above)
    #[cfg(any(feature = "asil-c", feature = "asil-d"))]
    #[must_use]
    pub const fn requires_safe_state(&self) -> bool {
        matches!(
            self.category,
            ErrorCategory::ContractViolation | ErrorCategory::FoundationRuntime
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // ASIL-C and above: Include ASIL level in error display
        #[cfg(any(feature = "asil-c", feature = "asil-d"))]
        {
            write!(
                f,
                "[{:?}][E{:04X}][{}] {}",
                self.category,
                self.code,
                self.asil_level(),
                self.message
            )
        }
        #[cfg(not(any(feature = "asil-c", feature = "asil-d")))]
        {
            write!(
                f,
                "[{:?}][E{:04X}] {}",
                self.category, self.code, self.message
            )
        }
    }
}

impl ErrorSource for Error {
    fn code(&self) -> u16 {
        self.code
    }

    fn message(&self) -> &'static str {
        self.message
    }

    fn category(&self) -> ErrorCategory {
        self.category
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

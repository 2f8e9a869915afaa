// NRT - nrt-foundation
// Module: Structured tracing helpers
//
// Copyright (c) 2026 The NRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Tracing support for NRT
//!
//! Structured tracing that works in both std and no_std environments. It
//! wraps the `tracing` crate; no subscriber is installed here, the embedding
//! runtime chooses one.

#![cfg(feature = "tracing")]

pub use tracing::{Level, Span, event};
pub use tracing::{debug, error, info, trace, warn};
pub use tracing::{span, trace_span};

/// Trace spans for fixed-capacity container operations
#[derive(Debug, Clone)]
pub struct ContainerTrace;

impl ContainerTrace {
    /// Create a span for dropping every element of a container
    #[inline]
    pub fn clearing(len: usize, capacity: usize) -> Span {
        trace_span!("container_clear", len = %len, capacity = %capacity)
    }

    /// Create a span for a bulk insertion
    #[inline]
    pub fn extending(additional: usize, remaining: usize) -> Span {
        trace_span!("container_extend", additional = %additional, remaining = %remaining)
    }
}

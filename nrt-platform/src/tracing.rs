// NRT - nrt-platform
// Module: Nanoapp tracing spans
//
// Copyright (c) 2026 The NRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Spans around nanoapp entry point invocations.

#![cfg(feature = "tracing")]

use tracing::{Span, debug_span, info_span};

/// Trace spans for nanoapp entry point invocations
#[derive(Debug, Clone)]
pub struct NanoappTrace;

impl NanoappTrace {
    /// Create a span for the start entry point
    #[inline]
    pub fn starting() -> Span {
        info_span!("nanoapp_start")
    }

    /// Create a span for event delivery
    #[inline]
    pub fn handling_event(sender_instance_id: u32, event_type: u16) -> Span {
        debug_span!(
            "nanoapp_handle_event",
            sender = %sender_instance_id,
            event_type = %event_type
        )
    }

    /// Create a span for the stop entry point
    #[inline]
    pub fn stopping() -> Span {
        info_span!("nanoapp_stop")
    }
}

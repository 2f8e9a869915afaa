// NRT - nrt-platform
// Module: Platform nanoapp descriptor
// SW-REQ-ID: REQ_PLATFORM_001
//
// Copyright (c) 2026 The NRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

// Invoking entry points calls into foreign code.
#![allow(unsafe_code)]

//! Per-nanoapp descriptor holding its entry points.
//!
//! A loader fills the descriptor once it has located the nanoapp's symbols; a
//! dispatcher later calls through it. The descriptor itself manages no
//! lifecycle state.

use core::ffi::c_void;

use nrt_error::{Error, Result};

use crate::entry_points::{EntryPoints, NanoappHandleEventFn, NanoappStartFn, NanoappStopFn};

/// Entry points of one loaded nanoapp.
///
/// `Default` yields a descriptor with every slot empty.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformNanoapp {
    /// Start entry point
    pub start: Option<NanoappStartFn>,
    /// Event delivery entry point
    pub handle_event: Option<NanoappHandleEventFn>,
    /// Stop entry point
    pub stop: Option<NanoappStopFn>,
}

impl PlatformNanoapp {
    /// Creates a descriptor with every slot empty.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            start: None,
            handle_event: None,
            stop: None,
        }
    }

    /// Creates a descriptor with every slot assigned.
    #[must_use]
    pub const fn with_entry_points(entry_points: EntryPoints) -> Self {
        Self {
            start: Some(entry_points.start),
            handle_event: Some(entry_points.handle_event),
            stop: Some(entry_points.stop),
        }
    }

    /// Assigns all three slots, replacing any previous entry points.
    pub fn assign(&mut self, entry_points: EntryPoints) {
        *self = Self::with_entry_points(entry_points);
    }

    /// Returns the descriptor to its empty state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns `true` when every slot is assigned.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.start.is_some() && self.handle_event.is_some() && self.stop.is_some()
    }

    /// Calls the start entry point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ENTRY_POINT_NOT_LOADED`] if the slot is empty and
    /// [`Error::NANOAPP_START_FAILED`] if the nanoapp reports failure.
    ///
    /// # Safety
    ///
    /// The assigned function must be a live nanoapp entry point honoring the
    /// [`NanoappStartFn`] signature.
    pub unsafe fn invoke_start(&self) -> Result<()> {
        let start = self.start.ok_or_else(|| not_loaded("start"))?;

        #[cfg(feature = "tracing")]
        let _span = crate::tracing::NanoappTrace::starting().entered();

        // SAFETY: upheld by the caller.
        if unsafe { start() } {
            Ok(())
        } else {
            #[cfg(feature = "tracing")]
            tracing::warn!("nanoapp start reported failure");
            Err(Error::NANOAPP_START_FAILED)
        }
    }

    /// Delivers one event to the nanoapp.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ENTRY_POINT_NOT_LOADED`] if the slot is empty.
    ///
    /// # Safety
    ///
    /// The assigned function must be a live nanoapp entry point, and
    /// `event_data` must be valid for whatever the nanoapp reads for
    /// `event_type` during the call.
    pub unsafe fn invoke_handle_event(
        &self,
        sender_instance_id: u32,
        event_type: u16,
        event_data: *const c_void,
    ) -> Result<()> {
        let handle_event = self.handle_event.ok_or_else(|| not_loaded("handle_event"))?;

        #[cfg(feature = "tracing")]
        let _span =
            crate::tracing::NanoappTrace::handling_event(sender_instance_id, event_type)
                .entered();

        // SAFETY: upheld by the caller.
        unsafe { handle_event(sender_instance_id, event_type, event_data) };
        Ok(())
    }

    /// Calls the stop entry point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ENTRY_POINT_NOT_LOADED`] if the slot is empty.
    ///
    /// # Safety
    ///
    /// The assigned function must be a live nanoapp entry point honoring the
    /// [`NanoappStopFn`] signature.
    pub unsafe fn invoke_stop(&self) -> Result<()> {
        let stop = self.stop.ok_or_else(|| not_loaded("stop"))?;

        #[cfg(feature = "tracing")]
        let _span = crate::tracing::NanoappTrace::stopping().entered();

        // SAFETY: upheld by the caller.
        unsafe { stop() };
        Ok(())
    }
}

impl From<EntryPoints> for PlatformNanoapp {
    fn from(entry_points: EntryPoints) -> Self {
        Self::with_entry_points(entry_points)
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn not_loaded(slot: &'static str) -> Error {
    #[cfg(feature = "tracing")]
    tracing::warn!(slot, "nanoapp entry point not loaded");
    Error::ENTRY_POINT_NOT_LOADED
}

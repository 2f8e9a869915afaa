// NRT - nrt-platform
// Module: Nanoapp entry point signatures
// SW-REQ-ID: REQ_PLATFORM_001
//
// Copyright (c) 2026 The NRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! C ABI signatures of the symbols every nanoapp exports.

use core::ffi::c_void;

/// `nanoappStart`: initializes the nanoapp, returning `false` on failure.
pub type NanoappStartFn = unsafe extern "C" fn() -> bool;

/// `nanoappHandleEvent`: delivers one event to the nanoapp.
///
/// `event_data` is owned by the sender and only valid for the duration of
/// the call.
pub type NanoappHandleEventFn =
    unsafe extern "C" fn(sender_instance_id: u32, event_type: u16, event_data: *const c_void);

/// `nanoappEnd`: tears the nanoapp down.
pub type NanoappStopFn = unsafe extern "C" fn();

/// The three entry points resolved by a loader for one nanoapp.
#[derive(Debug, Clone, Copy)]
pub struct EntryPoints {
    /// Start entry point
    pub start: NanoappStartFn,
    /// Event delivery entry point
    pub handle_event: NanoappHandleEventFn,
    /// Stop entry point
    pub stop: NanoappStopFn,
}

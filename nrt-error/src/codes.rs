// NRT - nrt-error
// Module: NRT Error Codes
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2026 The NRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for NRT
//!
//! Codes are grouped in ranges by [`crate::ErrorCategory`]:
//!
//! - `1000-1999`: contract violations (caller misuse, never recoverable)
//! - `8000-8999`: platform errors (nanoapp descriptor)
//! - `26000-26999`: foundation runtime errors (checked collection operations)

// Contract violations (1000-1999)
/// Element inserted into a container that is already full
pub const CONTRACT_PUSH_WHILE_FULL: u16 = 1000;
/// Element accessed at an index at or beyond the container size
pub const CONTRACT_INDEX_OUT_OF_BOUNDS: u16 = 1001;
/// Element removed from an empty container
pub const CONTRACT_POP_WHILE_EMPTY: u16 = 1002;

// Platform errors (8000-8999)
/// Nanoapp entry point was never assigned by the loader
pub const ENTRY_POINT_NOT_LOADED: u16 = 8001;
/// Nanoapp start entry point reported failure
pub const NANOAPP_START_FAILED: u16 = 8002;

// Foundation runtime errors (26000-26999)
/// Checked insertion into a full fixed-capacity vector
pub const FIXED_VECTOR_CAPACITY_EXCEEDED: u16 = 26000;
/// Checked access beyond the live range of a fixed-capacity vector
pub const FIXED_VECTOR_INDEX_OUT_OF_BOUNDS: u16 = 26001;

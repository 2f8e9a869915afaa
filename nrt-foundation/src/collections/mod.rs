// NRT - nrt-foundation
// Module: Fixed-capacity collections
//
// Copyright (c) 2026 The NRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity collections with inline storage.
//!
//! Capacities are const generic parameters, so every container is sized at
//! compile time and never touches a heap.

mod fixed_vec;

pub use fixed_vec::{FixedSizeVector, IntoIter};

// NRT - nrt-foundation
// Module: Caller contract checks
// SW-REQ-ID: REQ_MEM_SAFETY_001
//
// Copyright (c) 2026 The NRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Contract checks for caller-validated operations.
//!
//! Contract violations are programmer errors. They never travel as `Result`
//! values: the offending call site halts with a panic whose message is the
//! display form of the matching [`Error`] constant.
//!
//! Two levels exist:
//!
//! - `check_contract!` is always compiled in. The safe operations
//!   (`push_back`, indexing) use it, since safe code must not reach undefined
//!   behaviour.
//! - `debug_contract!` is compiled in under `debug_assertions` or the
//!   `runtime-bounds-checking` feature. The `unsafe` unchecked operations use
//!   it; in other builds a violation of their `# Safety` contract is
//!   undefined behaviour.

use nrt_error::Error;

/// Reports a contract violation and halts the current thread of execution.
///
/// With the `tracing` feature the violation is logged at error level first.
#[cold]
#[inline(never)]
#[track_caller]
#[allow(clippy::panic)]
pub fn contract_violation(error: Error) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(
        code = error.code,
        category = ?error.category,
        "contract violation: {}",
        error.message
    );

    panic!("contract violation: {error}")
}

/// Halts with `contract_violation` when `$cond` is false, in every build.
macro_rules! check_contract {
    ($cond:expr, $error:expr) => {
        if !$cond {
            $crate::contract::contract_violation($error);
        }
    };
}

/// Like `check_contract!`, compiled out of release builds unless
/// `runtime-bounds-checking` is enabled.
macro_rules! debug_contract {
    ($cond:expr, $error:expr) => {
        #[cfg(any(debug_assertions, feature = "runtime-bounds-checking"))]
        {
            if !$cond {
                $crate::contract::contract_violation($error);
            }
        }
    };
}

pub(crate) use check_contract;
pub(crate) use debug_contract;

/// Returns `true` when `debug_contract!` checks are compiled into this build.
#[must_use]
pub const fn unchecked_operations_are_verified() -> bool {
    cfg!(any(debug_assertions, feature = "runtime-bounds-checking"))
}

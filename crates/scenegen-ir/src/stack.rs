//! Stack safety utilities for deep tree recursion.
//!
//! IR trees may be up to [`MAX_DEPTH`](crate::MAX_DEPTH) levels deep, and
//! serde recursion costs several frames per level. Recursive walks wrap
//! each level in [`ensure_sufficient_stack`]; whole-tree serde passes run
//! inside [`with_deep_stack`].

/// Minimum stack space to keep available (128KB red zone).
const RED_ZONE: usize = 128 * 1024;

/// Stack space to allocate when growing during a walk (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Dedicated stack for a whole-tree serde pass (16MB).
const DEEP_STACK: usize = 16 * 1024 * 1024;

/// Grow the stack before executing `f` if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Run `f` on a freshly allocated stack large enough for a full-depth tree.
#[cfg(not(target_arch = "wasm32"))]
pub fn with_deep_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::grow(DEEP_STACK, f)
}

#[cfg(target_arch = "wasm32")]
pub fn with_deep_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

//! Stack safety for deeply nested source.
//!
//! The parser and the evaluator both recurse once per nesting level, so an
//! input like `((((...1...))))` or `!!!!...x` can run past the native stack.
//! Wrapping the recursive entry points in [`ensure_sufficient_stack`] grows
//! the stack on demand instead.
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: direct call.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
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

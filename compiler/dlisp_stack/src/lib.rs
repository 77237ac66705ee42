//! Stack growth for recursive reading and evaluation.
//!
//! The reader descends once per bracket and the evaluator once per nested
//! S-Expression and closure call. Neither carries a depth limit, so a long
//! chain like `(((((...)))))` or a deeply recursive user function would
//! otherwise run off the end of the thread's native stack.
//!
//! [`ensure_sufficient_stack`] checks the remaining space before each
//! descent and switches to a freshly allocated segment when it runs low.
//! This moves the failure point out to available memory; it is not a
//! recursion limit and it reports nothing to the language.
//!
//! On `wasm32` the wrapper is a passthrough.

/// Remaining stack below which a new segment is allocated (100KB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated segment (1MB).
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// pub fn eval(env: &Environment, value: Value) -> Value {
///     ensure_sufficient_stack(|| match value {
///         Value::SExpr(items) => eval_sexpr(env, items),
///         other => other,
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// Passthrough on `wasm32`.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;

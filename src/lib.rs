//! Currying for binary functions.
//!
//! Two renditions of the same transformation:
//!
//! - [`curry`](fn@curry), a runtime combinator turning any `Fn(A, B) -> R`
//!   into its two-stage form, with `curry(f)(a)(b) == f(a, b)`;
//! - [`curry`](macro@curry), an attribute macro doing the rewrite at compile
//!   time on an `fn` item (n-ary functions, `self` receivers and generics
//!   included), with no boxing for the outermost stage.
//!
//! The [`component`] module names the contract a consumer of a two-stage
//! callable expects, so the shape is checked at compile time instead of
//! being implied by a call site.

pub use curried_macros::curry;

pub mod component;

/// Turns a binary function into its two-stage form.
///
/// The partial application `curry(f)(a)` owns clones of `f` and `a`, so it
/// is a stable unary function: invoke it any number of times with different
/// `b` values, each call yields `f(a, b)`.
///
/// ```
/// let add = |a: i32, b: i32| a + b;
/// assert_eq!(curried::curry(add)(2)(3), 5);
/// ```
pub fn curry<A, B, R, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> R>
where
    F: Fn(A, B) -> R + Clone + 'static,
    A: Clone + 'static,
{
    move |a| {
        let f = f.clone();
        Box::new(move |b| f(a.clone(), b))
    }
}

/// Inverse of [`curry`](fn@curry): `uncurry(g)(a, b) == g(a)(b)`.
pub fn uncurry<A, B, R, G, H>(g: G) -> impl Fn(A, B) -> R
where
    G: Fn(A) -> H,
    H: Fn(B) -> R,
{
    move |a, b| g(a)(b)
}

//! The invocation-site contract.
//!
//! The original call site handed a component an open-ended bag of fields
//! and trusted it to pick out the curried function. Here the shape is
//! explicit: [`TwoStage`] names what the component calls, [`Config`]
//! enumerates exactly the fields the component accepts, and the compiler
//! checks both.

/// A callable applied in two stages: `first(a)` yields the unary remainder,
/// which maps `b` to the final output.
///
/// Anything produced by [`curry`](fn@crate::curry) satisfies this via the
/// blanket impl.
pub trait TwoStage<A, B> {
    type Output;

    /// Applies the first stage, returning the partially applied remainder.
    fn first(&self, a: A) -> Box<dyn Fn(B) -> Self::Output>;

    /// Applies both stages at once.
    fn apply(&self, a: A, b: B) -> Self::Output {
        self.first(a)(b)
    }
}

impl<A, B, R, F> TwoStage<A, B> for F
where
    F: Fn(A) -> Box<dyn Fn(B) -> R>,
{
    type Output = R;

    fn first(&self, a: A) -> Box<dyn Fn(B) -> R> {
        self(a)
    }
}

/// Configuration accepted by [`Component::new`].
///
/// Exactly two fields are recognized. `stage` is the callable the component
/// invokes; `note` is carried for the caller's bookkeeping and is never
/// read by the component, so its value cannot affect any call result.
pub struct Config<S> {
    pub stage: S,
    pub note: Option<String>,
}

/// Owns a two-stage callable and applies it on demand.
pub struct Component<S> {
    stage: S,
}

impl<S> Component<S> {
    /// Builds the component from its configuration. The note is dropped
    /// unread.
    pub fn new(cfg: Config<S>) -> Self {
        Self { stage: cfg.stage }
    }

    /// Applies both stages of the configured callable.
    pub fn call<A, B>(&self, a: A, b: B) -> S::Output
    where
        S: TwoStage<A, B>,
    {
        self.stage.apply(a, b)
    }
}

/// Builds the component and immediately discards it, for callers that only
/// care about the construction side effects (there are none here beyond
/// dropping the configuration).
pub fn mount<S>(cfg: Config<S>) {
    let _ = Component::new(cfg);
}

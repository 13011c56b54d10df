//! # Stages and Zero-Cost Tracing
//!
//! A pipeline over containers is a chain of [`Stage`]s: named, synchronous
//! functions from one container to another. Stages compose with
//! [`StageExt::then`] and can be wrapped for tracing.
//!
//! ## Compile-Time Tracing
//!
//! Tracing behavior is chosen with a const generic:
//!
//! - `Traced<C, false>`: no tracing code is generated; output is unchanged.
//! - `Traced<C, true>`: output becomes `(output, TraceNode)`, recording the
//!   stage name, its duration and whether it produced a failure. A `debug`
//!   event is also emitted through the `tracing` facade.
//!
//! [`AutoTraced`] picks `true` in debug builds and `false` in release builds.
//!
//! ```rust
//! use maybe_core::tracing::{stage, StageExt, Stage};
//! use maybe_core::{Maybe, Seq};
//!
//! let parse = stage("parse", |s: Seq<&str>| s.convert_to(|t| Maybe::new(t.parse::<i64>())));
//! let (out, trace) = parse.traced().run(Seq::just(vec!["1", "x"]));
//! assert!(out.is_err());
//! assert!(trace.failed);
//! assert_eq!(trace.name, "parse");
//! ```

use std::marker::PhantomData;
use std::time::{Duration, Instant};

use crate::container::Container;
use crate::dim::Dim;

/// A synchronous step of a pipeline.
pub trait Stage {
    /// The input type for this stage.
    type Input;

    /// The output type produced by this stage.
    type Output;

    /// Execute the stage.
    fn run(&self, input: Self::Input) -> Self::Output;

    /// Get the name of this stage for tracing.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Anything whose success or failure can be reported in a trace.
pub trait Outcome {
    fn is_failure(&self) -> bool;
}

impl<T, D: Dim> Outcome for Container<T, D> {
    fn is_failure(&self) -> bool {
        self.is_err()
    }
}

impl<O: Outcome> Outcome for (O, TraceNode) {
    fn is_failure(&self) -> bool {
        self.0.is_failure()
    }
}

// ============================================================================
// Closure Stages
// ============================================================================

/// A named closure used as a stage. Build one with [`stage`].
#[derive(Clone)]
pub struct FnStage<F, I, O> {
    name: &'static str,
    f: F,
    _io: PhantomData<fn(I) -> O>,
}

/// Wrap a closure as a named stage.
pub fn stage<F, I, O>(name: &'static str, f: F) -> FnStage<F, I, O>
where
    F: Fn(I) -> O,
{
    FnStage {
        name,
        f,
        _io: PhantomData,
    }
}

impl<F, I, O> Stage for FnStage<F, I, O>
where
    F: Fn(I) -> O,
{
    type Input = I;
    type Output = O;

    fn run(&self, input: I) -> O {
        (self.f)(input)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

// ============================================================================
// Sequential Composition
// ============================================================================

/// `first ; second`: feed the output of `first` into `second`.
#[derive(Clone)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<A, B> Stage for Then<A, B>
where
    A: Stage,
    B: Stage<Input = A::Output>,
{
    type Input = A::Input;
    type Output = B::Output;

    fn run(&self, input: Self::Input) -> Self::Output {
        self.second.run(self.first.run(input))
    }

    fn name(&self) -> &'static str {
        "Then"
    }
}

// ============================================================================
// Trace Tree
// ============================================================================

/// A node in the trace tree, recording timing, outcome and hierarchy.
#[derive(Debug, Clone)]
pub struct TraceNode {
    /// The name of the stage
    pub name: String,
    /// How long the stage took
    pub duration: Duration,
    /// Whether the stage produced a failure
    pub failed: bool,
    /// Child traces (for nested stages)
    pub children: Vec<TraceNode>,
}

impl TraceNode {
    /// Create a new trace node for a successful stage.
    pub fn new(name: impl Into<String>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            duration,
            failed: false,
            children: Vec::new(),
        }
    }

    /// Mark the outcome.
    pub fn with_failed(mut self, failed: bool) -> Self {
        self.failed = failed;
        self
    }

    /// Add a child trace.
    pub fn with_child(mut self, child: TraceNode) -> Self {
        self.children.push(child);
        self
    }

    /// Add multiple children.
    pub fn with_children(mut self, children: Vec<TraceNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Names of every node that failed, depth first.
    pub fn failures(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_failures(&mut out);
        out
    }

    fn collect_failures<'a>(&'a self, out: &mut Vec<&'a str>) {
        if self.failed {
            out.push(&self.name);
        }
        for child in &self.children {
            child.collect_failures(out);
        }
    }

    /// Pretty-print the trace tree.
    pub fn display(&self) -> String {
        self.display_indent(0)
    }

    fn display_indent(&self, indent: usize) -> String {
        let status = if self.failed { " (failed)" } else { "" };
        let mut out = format!(
            "{}[{:?}] {}{}\n",
            "  ".repeat(indent),
            self.duration,
            self.name,
            status
        );
        for child in &self.children {
            out.push_str(&child.display_indent(indent + 1));
        }
        out
    }
}

impl std::fmt::Display for TraceNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

// ============================================================================
// Traced Wrapper
// ============================================================================

/// A traced wrapper around a stage.
///
/// The const generic `ENABLED` determines whether tracing is active.
#[derive(Clone)]
pub struct Traced<C, const ENABLED: bool> {
    inner: C,
}

impl<C, const ENABLED: bool> Traced<C, ENABLED> {
    /// Create a new traced wrapper.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Get a reference to the inner stage.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Unwrap and return the inner stage.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Stage> Stage for Traced<C, false> {
    type Input = C::Input;
    type Output = C::Output;

    fn run(&self, input: Self::Input) -> Self::Output {
        self.inner.run(input)
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}

impl<C> Stage for Traced<C, true>
where
    C: Stage,
    C::Output: Outcome,
{
    type Input = C::Input;
    type Output = (C::Output, TraceNode);

    fn run(&self, input: Self::Input) -> Self::Output {
        let name = self.inner.name();
        let start = Instant::now();
        let output = self.inner.run(input);
        let elapsed = start.elapsed();
        let failed = output.is_failure();

        ::tracing::debug!(
            stage = name,
            failed,
            elapsed_us = elapsed.as_micros() as u64,
            "stage finished"
        );

        (output, TraceNode::new(name, elapsed).with_failed(failed))
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}

/// Type alias for a traced stage in debug builds.
#[cfg(debug_assertions)]
pub type AutoTraced<C> = Traced<C, true>;

/// Type alias for a traced stage in release builds.
#[cfg(not(debug_assertions))]
pub type AutoTraced<C> = Traced<C, false>;

/// Extension methods available on every stage.
pub trait StageExt: Stage + Sized {
    /// Run `next` on this stage's output.
    fn then<B>(self, next: B) -> Then<Self, B>
    where
        B: Stage<Input = Self::Output>,
    {
        Then {
            first: self,
            second: next,
        }
    }

    /// Wrap this stage with tracing enabled.
    fn traced(self) -> Traced<Self, true> {
        Traced::new(self)
    }

    /// Wrap this stage with tracing disabled.
    fn untraced(self) -> Traced<Self, false> {
        Traced::new(self)
    }

    /// Wrap with auto-selected tracing (debug = on, release = off).
    fn auto_traced(self) -> AutoTraced<Self> {
        Traced::new(self)
    }
}

impl<S: Stage + Sized> StageExt for S {}

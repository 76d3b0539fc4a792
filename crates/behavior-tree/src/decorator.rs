//! Decorator behavior nodes.
//!
//! Decorators wrap a single child node and modify its result or execution.
//! The child is supplied at construction, so a decorator can never be ticked
//! without one. This module provides [`Inverter`] (NOT logic), [`Succeeder`]
//! and [`Failer`] (result overrides), [`Repeater`] (bounded repetition across
//! ticks) and [`BernoulliGate`] (random gating).

use rand::Rng;

use crate::{
    Behavior, BuildError, Node, Status, TreeConfig,
    stochastic::{BoxedRng, entropy_rng, seeded_rng},
};

/// Inverts the result of its child.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - `Running` passes through unchanged
///
/// This is analogous to a logical NOT (!) operation.
pub struct Inverter<C> {
    child: Node<C>,
}

impl<C> Inverter<C> {
    /// Creates a new inverter that wraps the given child.
    pub fn new(child: Node<C>) -> Self {
        Self { child }
    }

    /// Replaces the wrapped child.
    pub fn set_child(&mut self, child: Node<C>) {
        self.child = child;
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn evaluate(&mut self, ctx: &mut C, config: &TreeConfig) -> Status {
        self.child.tick(ctx, config).invert()
    }

    fn validate(&self) -> Result<(), BuildError> {
        self.child.validate()
    }

    fn kind(&self) -> &'static str {
        "Inverter"
    }
}

/// Always returns `Success`, regardless of the child's result.
///
/// Useful for optional behaviors that shouldn't cause a sequence to fail.
pub struct Succeeder<C> {
    child: Node<C>,
}

impl<C> Succeeder<C> {
    pub fn new(child: Node<C>) -> Self {
        Self { child }
    }

    pub fn set_child(&mut self, child: Node<C>) {
        self.child = child;
    }
}

impl<C> Behavior<C> for Succeeder<C> {
    fn evaluate(&mut self, ctx: &mut C, config: &TreeConfig) -> Status {
        // Execute child but ignore the result
        let _ = self.child.tick(ctx, config);
        Status::Success
    }

    fn validate(&self) -> Result<(), BuildError> {
        self.child.validate()
    }

    fn kind(&self) -> &'static str {
        "Succeeder"
    }
}

/// Always returns `Failure`, regardless of the child's result.
pub struct Failer<C> {
    child: Node<C>,
}

impl<C> Failer<C> {
    pub fn new(child: Node<C>) -> Self {
        Self { child }
    }

    pub fn set_child(&mut self, child: Node<C>) {
        self.child = child;
    }
}

impl<C> Behavior<C> for Failer<C> {
    fn evaluate(&mut self, ctx: &mut C, config: &TreeConfig) -> Status {
        let _ = self.child.tick(ctx, config);
        Status::Failure
    }

    fn validate(&self) -> Result<(), BuildError> {
        self.child.validate()
    }

    fn kind(&self) -> &'static str {
        "Failer"
    }
}

/// Ticks its child once per tick until the child has completed a fixed
/// number of times.
///
/// # Semantics
///
/// - Each tick ticks the child exactly once
/// - While fewer than `iterations` child ticks have completed, returns `Running`
/// - The tick that completes the last iteration returns `Success`
/// - A child tick that reports `Running` does not count as an iteration
/// - The child's own `Success`/`Failure` is otherwise ignored
///
/// The iteration counter survives between ticks because the repeater reports
/// `Running`, and is cleared by [`Behavior::reset`] as soon as a fresh run
/// starts. `iterations == 0` repeats forever.
pub struct Repeater<C> {
    child: Node<C>,
    iterations: u32,
    completed: u32,
}

impl<C> Repeater<C> {
    pub fn new(iterations: u32, child: Node<C>) -> Self {
        Self {
            child,
            iterations,
            completed: 0,
        }
    }

    /// Repeats the child on every tick without ever finishing.
    pub fn forever(child: Node<C>) -> Self {
        Self::new(0, child)
    }

    pub fn set_child(&mut self, child: Node<C>) {
        self.child = child;
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Child ticks completed in the current run.
    pub fn completed(&self) -> u32 {
        self.completed
    }
}

impl<C> Behavior<C> for Repeater<C> {
    fn evaluate(&mut self, ctx: &mut C, config: &TreeConfig) -> Status {
        if self.child.tick(ctx, config).is_running() {
            return Status::Running;
        }

        self.completed = self.completed.saturating_add(1);
        if self.iterations != 0 && self.completed >= self.iterations {
            Status::Success
        } else {
            Status::Running
        }
    }

    fn reset(&mut self) {
        self.completed = 0;
    }

    fn validate(&self) -> Result<(), BuildError> {
        self.child.validate()
    }

    fn kind(&self) -> &'static str {
        "Repeater"
    }
}

/// Ticks its child with a fixed probability.
///
/// # Semantics
///
/// Each tick draws one independent Bernoulli sample:
/// - On `true`, ticks the child and returns `Success` (the child's result is ignored)
/// - On `false`, leaves the child alone and returns `Failure`
pub struct BernoulliGate<C> {
    child: Node<C>,
    probability: f64,
    rng: BoxedRng,
}

impl<C> BernoulliGate<C> {
    /// Creates a gate that passes with `probability`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::ProbabilityOutOfRange`] unless
    /// `0.0 <= probability <= 1.0`.
    pub fn new(probability: f64, child: Node<C>) -> Result<Self, BuildError> {
        check_probability(probability)?;
        Ok(Self {
            child,
            probability,
            rng: entropy_rng(),
        })
    }

    /// Creates a fair gate (`p = 0.5`).
    pub fn even(child: Node<C>) -> Self {
        Self {
            child,
            probability: 0.5,
            rng: entropy_rng(),
        }
    }

    /// Replaces the random source.
    pub fn with_rng(mut self, rng: impl rand::RngCore + Send + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Replaces the random source with a deterministic one.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = seeded_rng(seed);
        self
    }

    pub fn set_child(&mut self, child: Node<C>) {
        self.child = child;
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// # Errors
    ///
    /// Returns [`BuildError::ProbabilityOutOfRange`] and keeps the old
    /// probability when `probability` is outside `[0, 1]`.
    pub fn set_probability(&mut self, probability: f64) -> Result<(), BuildError> {
        check_probability(probability)?;
        self.probability = probability;
        Ok(())
    }
}

fn check_probability(probability: f64) -> Result<(), BuildError> {
    // NaN fails the range check as well
    if (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(BuildError::ProbabilityOutOfRange(probability))
    }
}

impl<C> Behavior<C> for BernoulliGate<C> {
    fn evaluate(&mut self, ctx: &mut C, config: &TreeConfig) -> Status {
        if self.rng.gen_bool(self.probability) {
            let _ = self.child.tick(ctx, config);
            Status::Success
        } else {
            Status::Failure
        }
    }

    fn validate(&self) -> Result<(), BuildError> {
        self.child.validate()
    }

    fn kind(&self) -> &'static str {
        "BernoulliGate"
    }
}

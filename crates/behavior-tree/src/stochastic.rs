//! Stochastic composite nodes.
//!
//! Both selectors tick exactly one child per tick, picked at random:
//! [`UniformRandomSelector`] gives every child the same chance while
//! [`WeightedRandomSelector`] follows a categorical distribution supplied
//! alongside the children.
//!
//! Every random node owns a private generator. It is seeded from the OS by
//! default and can be replaced with `with_rng`/`with_seed` for repeatable
//! runs.

use rand::{
    Rng, RngCore, SeedableRng,
    distributions::{Distribution, WeightedIndex},
    rngs::StdRng,
};

use crate::{Behavior, BuildError, Node, Status, TreeConfig, WEIGHT_TOLERANCE};

/// Random source owned by a stochastic node.
pub type BoxedRng = Box<dyn RngCore + Send>;

pub(crate) fn entropy_rng() -> BoxedRng {
    Box::new(StdRng::from_entropy())
}

pub(crate) fn seeded_rng(seed: u64) -> BoxedRng {
    Box::new(StdRng::seed_from_u64(seed))
}

/// Ticks one child chosen uniformly at random.
///
/// # Semantics
///
/// The selector is configured with the number of children it expects. Each
/// tick draws an index in `[0, count)` and returns the status of that child.
/// Ticking before `count` children were added is a fatal error; use
/// [`Behavior::validate`] (or [`Tree::try_new`](crate::Tree::try_new)) to
/// catch it before the first tick.
pub struct UniformRandomSelector<C> {
    children: Vec<Node<C>>,
    count: usize,
    rng: BoxedRng,
}

impl<C> UniformRandomSelector<C> {
    /// Creates an empty selector that expects `count` children.
    pub fn new(count: usize) -> Self {
        Self {
            children: Vec::with_capacity(count),
            count,
            rng: entropy_rng(),
        }
    }

    /// Creates a selector over exactly these children.
    pub fn with_children(children: Vec<Node<C>>) -> Self {
        Self {
            count: children.len(),
            children,
            rng: entropy_rng(),
        }
    }

    pub fn with_rng(mut self, rng: impl RngCore + Send + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = seeded_rng(seed);
        self
    }

    pub fn add_child(&mut self, child: Node<C>) -> &mut Self {
        self.children.push(child);
        self
    }

    pub fn with_child(mut self, child: Node<C>) -> Self {
        self.add_child(child);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Number of children the draw ranges over.
    pub fn count(&self) -> usize {
        self.count
    }

    fn check_arity(&self) -> Result<(), BuildError> {
        if self.count == 0 {
            return Err(BuildError::NoChildren {
                kind: "UniformRandomSelector",
            });
        }
        if self.children.len() < self.count {
            return Err(BuildError::MissingChildren {
                kind: "UniformRandomSelector",
                expected: self.count,
                actual: self.children.len(),
            });
        }
        Ok(())
    }
}

impl<C> Behavior<C> for UniformRandomSelector<C> {
    fn evaluate(&mut self, ctx: &mut C, config: &TreeConfig) -> Status {
        let index = self.rng.gen_range(0..self.count);
        self.children[index].tick(ctx, config)
    }

    fn check_tick(&self) -> Result<(), BuildError> {
        self.check_arity()
    }

    fn validate(&self) -> Result<(), BuildError> {
        self.check_arity()?;
        self.children.iter().try_for_each(Node::validate)
    }

    fn kind(&self) -> &'static str {
        "UniformRandomSelector"
    }
}

/// Ticks one child chosen from a weighted categorical distribution.
///
/// # Semantics
///
/// Children and weights are index-aligned and only ever appended together
/// through [`add_child`](Self::add_child), which rebuilds the distribution.
/// Weights must be finite and non-negative, and by the first tick they must
/// sum to `1.0` within [`WEIGHT_TOLERANCE`]. Ticking with weights that do not
/// is a fatal error.
///
/// # Example
///
/// ```rust
/// use behavior_tree::{Action, Node, Status, WeightedRandomSelector};
///
/// let wander = WeightedRandomSelector::from_weighted(vec![
///     (Node::new(Action::new(|_: &mut ()| Status::Success)), 0.9),
///     (Node::new(Action::new(|_: &mut ()| Status::Failure)), 0.1),
/// ])
/// .unwrap();
/// assert_eq!(wander.len(), 2);
///
/// let lopsided = WeightedRandomSelector::from_weighted(vec![
///     (Node::new(Action::new(|_: &mut ()| Status::Success)), 0.8),
/// ]);
/// assert!(lopsided.is_err());
/// ```
pub struct WeightedRandomSelector<C> {
    children: Vec<Node<C>>,
    weights: Vec<f64>,
    distribution: Option<WeightedIndex<f64>>,
    rng: BoxedRng,
}

impl<C> WeightedRandomSelector<C> {
    /// Creates an empty selector. Add children with [`add_child`](Self::add_child).
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            weights: Vec::new(),
            distribution: None,
            rng: entropy_rng(),
        }
    }

    /// Creates a selector from `(child, weight)` pairs.
    ///
    /// # Errors
    ///
    /// Fails on the first invalid weight, or when the weights do not sum to
    /// `1.0` within [`WEIGHT_TOLERANCE`].
    pub fn from_weighted(children: Vec<(Node<C>, f64)>) -> Result<Self, BuildError> {
        let mut selector = Self::new();
        for (child, weight) in children {
            selector.add_child(child, weight)?;
        }
        selector.check_normalized()?;
        Ok(selector)
    }

    pub fn with_rng(mut self, rng: impl RngCore + Send + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = seeded_rng(seed);
        self
    }

    /// Appends a child together with its weight and rebuilds the distribution.
    ///
    /// The running sum may be below `1.0` while children are still being
    /// added; it is checked by [`validate`](Behavior::validate) and on tick.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidWeight`] for a negative or non-finite
    /// weight. Nothing is appended in that case.
    pub fn add_child(&mut self, child: Node<C>, weight: f64) -> Result<&mut Self, BuildError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(BuildError::InvalidWeight(weight));
        }

        self.children.push(child);
        self.weights.push(weight);
        // An all-zero prefix has no distribution yet
        self.distribution = WeightedIndex::new(&self.weights).ok();
        Ok(self)
    }

    pub fn with_child(mut self, child: Node<C>, weight: f64) -> Result<Self, BuildError> {
        self.add_child(child, weight)?;
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn weight_sum(&self) -> f64 {
        self.weights.iter().sum()
    }

    pub fn is_normalized(&self) -> bool {
        (self.weight_sum() - 1.0).abs() < WEIGHT_TOLERANCE
    }

    fn check_normalized(&self) -> Result<(), BuildError> {
        if self.children.is_empty() {
            return Err(BuildError::NoChildren {
                kind: "WeightedRandomSelector",
            });
        }
        if !self.is_normalized() {
            return Err(BuildError::WeightsNotNormalized {
                sum: self.weight_sum(),
            });
        }
        Ok(())
    }
}

impl<C> Default for WeightedRandomSelector<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Behavior<C> for WeightedRandomSelector<C> {
    fn evaluate(&mut self, ctx: &mut C, config: &TreeConfig) -> Status {
        let Some(distribution) = &self.distribution else {
            unreachable!("check_tick rejects a selector without a distribution");
        };
        let index = distribution.sample(&mut self.rng);
        self.children[index].tick(ctx, config)
    }

    fn check_tick(&self) -> Result<(), BuildError> {
        self.check_normalized()?;
        if self.distribution.is_none() {
            return Err(BuildError::NoPositiveWeight);
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), BuildError> {
        self.check_normalized()?;
        self.children.iter().try_for_each(Node::validate)
    }

    fn kind(&self) -> &'static str {
        "WeightedRandomSelector"
    }
}

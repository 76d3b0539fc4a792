//! Leaf behavior nodes.
//!
//! Leaves terminate the recursion: [`Action`] runs host-supplied logic and
//! [`Condition`] reports a boolean the host set from the outside.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use crate::{Behavior, Status, TreeConfig};

/// Shared boolean that the host flips while the tree owns the node.
///
/// Cloning yields another handle to the same flag. Used by [`Condition`] and
/// [`Switch`](crate::Switch).
#[derive(Debug, Clone, Default)]
pub struct ConditionFlag(Arc<AtomicBool>);

impl ConditionFlag {
    pub fn new(value: bool) -> Self {
        Self(Arc::new(AtomicBool::new(value)))
    }

    #[inline]
    pub fn get(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    #[inline]
    pub fn set(&self, value: bool) {
        self.0.store(value, Ordering::Release);
    }
}

/// Runs a host closure and reports whatever it returns.
///
/// # Example
///
/// ```rust
/// use behavior_tree::{Action, Node, Status, TreeConfig};
///
/// let mut attack = Node::named("attack", Action::new(|hits: &mut u32| {
///     *hits += 1;
///     Status::Success
/// }));
///
/// let mut hits = 0;
/// assert_eq!(attack.tick(&mut hits, &TreeConfig::default()), Status::Success);
/// assert_eq!(hits, 1);
/// ```
pub struct Action<C> {
    run: Box<dyn FnMut(&mut C) -> Status + Send>,
}

impl<C> Action<C> {
    pub fn new(run: impl FnMut(&mut C) -> Status + Send + 'static) -> Self {
        Self { run: Box::new(run) }
    }
}

impl<C> Behavior<C> for Action<C> {
    fn evaluate(&mut self, ctx: &mut C, _config: &TreeConfig) -> Status {
        (self.run)(ctx)
    }

    fn kind(&self) -> &'static str {
        "Action"
    }
}

/// Reports `Success` while its test flag is set and `Failure` otherwise.
///
/// The node does not compute the test itself: the host evaluates whatever
/// predicate it needs and stores the answer through [`Condition::flag`].
#[derive(Debug, Clone, Default)]
pub struct Condition {
    test: ConditionFlag,
}

impl Condition {
    pub fn new(test: bool) -> Self {
        Self::with_flag(ConditionFlag::new(test))
    }

    /// Builds a condition that reads an existing shared flag.
    pub fn with_flag(test: ConditionFlag) -> Self {
        Self { test }
    }

    /// Handle for updating the test after the node is wired into a tree.
    pub fn flag(&self) -> ConditionFlag {
        self.test.clone()
    }

    pub fn set_test(&self, value: bool) {
        self.test.set(value);
    }

    pub fn test(&self) -> bool {
        self.test.get()
    }
}

impl<C> Behavior<C> for Condition {
    fn evaluate(&mut self, _ctx: &mut C, _config: &TreeConfig) -> Status {
        if self.test.get() {
            Status::Success
        } else {
            Status::Failure
        }
    }

    fn kind(&self) -> &'static str {
        "Condition"
    }
}

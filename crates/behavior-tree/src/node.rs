//! Tick lifecycle shared by every node.

use std::borrow::Cow;

use crate::{Behavior, BuildError, Status, TreeConfig};

/// A positioned node in a behavior tree.
///
/// `Node` owns exactly one behavior plus the bookkeeping the tick contract
/// needs: the last recorded status and an optional diagnostic name. Parents
/// own their children as `Node`s, so [`Node::tick`] is the only way into a
/// behavior once it is wired.
pub struct Node<C> {
    name: Option<Cow<'static, str>>,
    status: Status,
    behavior: Box<dyn Behavior<C>>,
}

impl<C> Node<C> {
    /// Wraps a behavior in an unnamed node with status `Ready`.
    pub fn new(behavior: impl Behavior<C> + 'static) -> Self {
        Self {
            name: None,
            status: Status::Ready,
            behavior: Box::new(behavior),
        }
    }

    /// Wraps a behavior in a named node.
    ///
    /// Named nodes show up in debug diagnostics and validation errors.
    pub fn named(
        name: impl Into<Cow<'static, str>>,
        behavior: impl Behavior<C> + 'static,
    ) -> Self {
        Self::new(behavior).with_name(name)
    }

    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.set_name(name);
        self
    }

    pub fn set_name(&mut self, name: impl Into<Cow<'static, str>>) {
        let name = name.into();
        self.name = (!name.is_empty()).then_some(name);
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Status recorded by the most recent tick, `Ready` before the first.
    pub fn status(&self) -> Status {
        self.status
    }

    pub fn kind(&self) -> &'static str {
        self.behavior.kind()
    }

    /// Ticks the node once.
    ///
    /// A node whose previous status was not `Running` is reset before it is
    /// evaluated; a `Running` node keeps its progress. The evaluated status is
    /// recorded before it is returned.
    ///
    /// # Panics
    ///
    /// Panics when the behavior's tick preconditions do not hold, for example
    /// a weighted selector whose weights do not sum to one. The message names
    /// the node kind, the node's name and the violated precondition.
    pub fn tick(&mut self, ctx: &mut C, config: &TreeConfig) -> Status {
        if let Err(err) = self.behavior.check_tick() {
            panic!("cannot tick {}: {}", self.behavior.kind(), self.attribute(err));
        }

        if self.status != Status::Running {
            self.behavior.reset();
        }

        self.status = self.behavior.evaluate(ctx, config);

        if config.debug
            && let Some(name) = &self.name
        {
            tracing::debug!(
                target: "behavior_tree",
                node = %name,
                status = %self.status,
                "{}: {}",
                name,
                self.status
            );
        }

        self.status
    }

    /// Checks the construction-time contracts of this node and its subtree.
    pub fn validate(&self) -> Result<(), BuildError> {
        self.behavior.validate().map_err(|err| self.attribute(err))
    }

    fn attribute(&self, err: BuildError) -> BuildError {
        match &self.name {
            Some(name) => err.in_node(name.to_string()),
            None => err,
        }
    }
}

impl<C> std::fmt::Debug for Node<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("kind", &self.behavior.kind())
            .field("name", &self.name)
            .field("status", &self.status)
            .finish()
    }
}

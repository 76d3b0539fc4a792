//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, the node-specific logic behind
//! every [`Node`](crate::Node). The trait is generic over a host context type
//! `C`, handed unchanged to every leaf so actions can read and mutate game
//! state.

use crate::{BuildError, Status, TreeConfig};

/// Node-specific logic evaluated by [`Node::tick`](crate::Node::tick).
///
/// Implementors never call `evaluate` on each other directly. Composite and
/// decorator behaviors own their children as [`Node`](crate::Node)s and tick
/// them, so the reset rule applies at every level of the tree.
pub trait Behavior<C>: Send {
    /// Run this node's logic once and report the outcome.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Host context, passed through to leaves untouched.
    /// * `config` - Configuration of the tree being ticked. Forward it when
    ///   ticking children.
    fn evaluate(&mut self, ctx: &mut C, config: &TreeConfig) -> Status;

    /// Clear per-run progress.
    ///
    /// Called before `evaluate` whenever the previous status was not
    /// `Running`. Must be idempotent.
    fn reset(&mut self) {}

    /// Check construction-time contracts, recursing into children.
    fn validate(&self) -> Result<(), BuildError> {
        Ok(())
    }

    /// Check the preconditions `evaluate` relies on.
    ///
    /// [`Node::tick`](crate::Node::tick) calls this before every evaluation
    /// and aborts with the node's name attached when it fails. Unlike
    /// `validate`, it does not recurse: each child checks itself when ticked.
    fn check_tick(&self) -> Result<(), BuildError> {
        Ok(())
    }

    /// Short kind name used in diagnostics and panic messages.
    fn kind(&self) -> &'static str {
        "Behavior"
    }
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn evaluate(&mut self, ctx: &mut C, config: &TreeConfig) -> Status {
        (**self).evaluate(ctx, config)
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }

    #[inline]
    fn validate(&self) -> Result<(), BuildError> {
        (**self).validate()
    }

    #[inline]
    fn check_tick(&self) -> Result<(), BuildError> {
        (**self).check_tick()
    }

    #[inline]
    fn kind(&self) -> &'static str {
        (**self).kind()
    }
}

//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose `Node::new(Sequence::new(vec![...]))`,
//! you can use shorter functions like `sequence(vec![...])`.

use crate::{Action, Failer, Inverter, Node, Repeater, Selector, Sequence, Status, Succeeder};

/// Creates a sequence node.
///
/// Shorthand for `Node::new(Sequence::new(children))`.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Node<C>>) -> Node<C> {
    Node::new(Sequence::new(children))
}

/// Creates a selector node.
///
/// Shorthand for `Node::new(Selector::new(children))`.
#[inline]
pub fn selector<C: 'static>(children: Vec<Node<C>>) -> Node<C> {
    Node::new(Selector::new(children))
}

/// Creates an inverter node.
///
/// Shorthand for `Node::new(Inverter::new(child))`.
#[inline]
pub fn inverter<C: 'static>(child: Node<C>) -> Node<C> {
    Node::new(Inverter::new(child))
}

/// Creates an always-succeed node.
///
/// Shorthand for `Node::new(Succeeder::new(child))`.
#[inline]
pub fn succeeder<C: 'static>(child: Node<C>) -> Node<C> {
    Node::new(Succeeder::new(child))
}

/// Creates an always-fail node.
///
/// Shorthand for `Node::new(Failer::new(child))`.
#[inline]
pub fn failer<C: 'static>(child: Node<C>) -> Node<C> {
    Node::new(Failer::new(child))
}

/// Creates a repeater node.
///
/// Shorthand for `Node::new(Repeater::new(iterations, child))`.
#[inline]
pub fn repeat<C: 'static>(iterations: u32, child: Node<C>) -> Node<C> {
    Node::new(Repeater::new(iterations, child))
}

/// Creates a named action leaf from a closure.
#[inline]
pub fn action<C: 'static>(
    name: &'static str,
    run: impl FnMut(&mut C) -> Status + Send + 'static,
) -> Node<C> {
    Node::named(name, Action::new(run))
}

//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child nodes.
//! This module provides the fundamental building blocks for creating complex
//! decision trees: [`Sequence`] (AND logic) and [`Selector`] (OR logic).
//!
//! Both are reactive: a child reporting `Running` ends the pass with
//! `Running`, and the next tick starts again from the first child.

use crate::{Behavior, BuildError, Node, Status, TreeConfig};

/// Executes child nodes in order until one fails.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Running`, the sequence **stops immediately** and returns `Running`
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation. An
/// empty sequence succeeds.
pub struct Sequence<C> {
    children: Vec<Node<C>>,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given children, in evaluation order.
    pub fn new(children: Vec<Node<C>>) -> Self {
        Self { children }
    }

    /// Appends a child after the existing ones.
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

    pub fn children(&self) -> &[Node<C>] {
        &self.children
    }
}

impl<C> Default for Sequence<C> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn evaluate(&mut self, ctx: &mut C, config: &TreeConfig) -> Status {
        // Execute children in order until one does not succeed
        for child in &mut self.children {
            match child.tick(ctx, config) {
                Status::Success => continue,
                other => return other,
            }
        }
        // All children succeeded (vacuously when empty)
        Status::Success
    }

    fn validate(&self) -> Result<(), BuildError> {
        self.children.iter().try_for_each(Node::validate)
    }

    fn kind(&self) -> &'static str {
        "Sequence"
    }
}

/// Executes child nodes in order until one succeeds.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success`, the selector **stops immediately** and returns `Success`
/// - If a child returns `Running`, the selector **stops immediately** and returns `Running`
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation. An
/// empty selector fails.
pub struct Selector<C> {
    children: Vec<Node<C>>,
}

impl<C> Selector<C> {
    /// Creates a new selector with the given children, in evaluation order.
    pub fn new(children: Vec<Node<C>>) -> Self {
        Self { children }
    }

    /// Appends a child after the existing ones.
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

    pub fn children(&self) -> &[Node<C>] {
        &self.children
    }
}

impl<C> Default for Selector<C> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn evaluate(&mut self, ctx: &mut C, config: &TreeConfig) -> Status {
        // Try children in order until one does not fail
        for child in &mut self.children {
            match child.tick(ctx, config) {
                Status::Failure => continue,
                other => return other,
            }
        }
        // All children failed (vacuously when empty)
        Status::Failure
    }

    fn validate(&self) -> Result<(), BuildError> {
        self.children.iter().try_for_each(Node::validate)
    }

    fn kind(&self) -> &'static str {
        "Selector"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Action;

    struct TestContext {
        value: i32,
        ticked: Vec<&'static str>,
    }

    impl TestContext {
        fn new() -> Self {
            Self {
                value: 0,
                ticked: Vec::new(),
            }
        }
    }

    fn leaf(label: &'static str, status: Status) -> Node<TestContext> {
        Node::named(
            label,
            Action::new(move |ctx: &mut TestContext| {
                ctx.ticked.push(label);
                status
            }),
        )
    }

    fn increment() -> Node<TestContext> {
        Node::new(Action::new(|ctx: &mut TestContext| {
            ctx.value += 1;
            Status::Success
        }))
    }

    fn tick(node: &mut impl Behavior<TestContext>, ctx: &mut TestContext) -> Status {
        node.evaluate(ctx, &TreeConfig::default())
    }

    #[test]
    fn sequence_all_success() {
        let mut seq = Sequence::new(vec![
            leaf("a", Status::Success),
            leaf("b", Status::Success),
            leaf("c", Status::Success),
        ]);

        let mut ctx = TestContext::new();
        assert_eq!(tick(&mut seq, &mut ctx), Status::Success);
        assert_eq!(ctx.ticked, ["a", "b", "c"]);
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let mut seq = Sequence::new(vec![
            leaf("a", Status::Success),
            leaf("b", Status::Failure),
            leaf("c", Status::Success), // Should not execute
        ]);

        let mut ctx = TestContext::new();
        assert_eq!(tick(&mut seq, &mut ctx), Status::Failure);
        assert_eq!(ctx.ticked, ["a", "b"]);
    }

    #[test]
    fn sequence_suspends_on_running_and_restarts_next_tick() {
        let mut seq = Sequence::new(vec![increment(), leaf("wait", Status::Running), increment()]);

        let mut ctx = TestContext::new();
        assert_eq!(tick(&mut seq, &mut ctx), Status::Running);
        assert_eq!(ctx.value, 1);
        assert_eq!(tick(&mut seq, &mut ctx), Status::Running);
        assert_eq!(ctx.value, 2);
    }

    #[test]
    fn empty_sequence_succeeds() {
        let mut seq = Sequence::<TestContext>::default();
        assert!(seq.is_empty());
        assert_eq!(tick(&mut seq, &mut TestContext::new()), Status::Success);
    }

    #[test]
    fn add_child_preserves_insertion_order() {
        let mut seq = Sequence::default();
        seq.add_child(leaf("first", Status::Success))
            .add_child(leaf("second", Status::Success));
        let mut seq = seq.with_child(leaf("third", Status::Success));

        let mut ctx = TestContext::new();
        tick(&mut seq, &mut ctx);
        assert_eq!(seq.len(), 3);
        assert_eq!(ctx.ticked, ["first", "second", "third"]);
    }

    #[test]
    fn selector_succeeds_on_first_success() {
        let mut sel = Selector::new(vec![
            leaf("a", Status::Failure),
            leaf("b", Status::Failure),
            leaf("c", Status::Success),
            leaf("d", Status::Success), // Should not execute
        ]);

        let mut ctx = TestContext::new();
        assert_eq!(tick(&mut sel, &mut ctx), Status::Success);
        assert_eq!(ctx.ticked, ["a", "b", "c"]);
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let mut sel = Selector::new(vec![leaf("a", Status::Failure), leaf("b", Status::Failure)]);

        let mut ctx = TestContext::new();
        assert_eq!(tick(&mut sel, &mut ctx), Status::Failure);
        assert_eq!(ctx.ticked, ["a", "b"]);
    }

    #[test]
    fn selector_stops_on_running() {
        let mut sel = Selector::new(vec![
            leaf("a", Status::Failure),
            leaf("b", Status::Running),
            leaf("c", Status::Success),
        ]);

        let mut ctx = TestContext::new();
        assert_eq!(tick(&mut sel, &mut ctx), Status::Running);
        assert_eq!(ctx.ticked, ["a", "b"]);
    }

    #[test]
    fn empty_selector_fails() {
        let mut sel = Selector::<TestContext>::default();
        assert_eq!(tick(&mut sel, &mut TestContext::new()), Status::Failure);
    }

    #[test]
    fn children_record_their_own_status() {
        let mut seq = Sequence::new(vec![leaf("a", Status::Success), leaf("b", Status::Failure)]);
        tick(&mut seq, &mut TestContext::new());

        let statuses: Vec<Status> = seq.children().iter().map(Node::status).collect();
        assert_eq!(statuses, [Status::Success, Status::Failure]);
    }
}

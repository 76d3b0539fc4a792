//! Binary router over an externally set flag.

use crate::{Behavior, BuildError, ConditionFlag, Node, Status, TreeConfig};

/// Routes each tick to one of two fixed children.
///
/// # Semantics
///
/// - Flag set: ticks the true-branch child and returns its status
/// - Flag clear: ticks the false-branch child and returns its status
/// - The branch not chosen is not ticked
///
/// The flag lives outside the tree so host logic ("is health low?") can flip
/// it between ticks without encoding the test as a leaf.
pub struct Switch<C> {
    condition: ConditionFlag,
    on_true: Node<C>,
    on_false: Node<C>,
}

impl<C> Switch<C> {
    /// Creates a switch whose flag starts out `false`.
    pub fn new(on_true: Node<C>, on_false: Node<C>) -> Self {
        Self::with_flag(ConditionFlag::default(), on_true, on_false)
    }

    /// Creates a switch that reads an existing shared flag.
    pub fn with_flag(condition: ConditionFlag, on_true: Node<C>, on_false: Node<C>) -> Self {
        Self {
            condition,
            on_true,
            on_false,
        }
    }

    /// Handle for flipping the condition after the switch is wired.
    pub fn flag(&self) -> ConditionFlag {
        self.condition.clone()
    }

    pub fn set_condition(&self, condition: bool) {
        self.condition.set(condition);
    }

    pub fn condition(&self) -> bool {
        self.condition.get()
    }
}

impl<C> Behavior<C> for Switch<C> {
    fn evaluate(&mut self, ctx: &mut C, config: &TreeConfig) -> Status {
        let (branch, label) = if self.condition.get() {
            (&mut self.on_true, "true")
        } else {
            (&mut self.on_false, "false")
        };

        let status = branch.tick(ctx, config);
        if config.debug {
            tracing::debug!(target: "behavior_tree", branch = label, "{} branch selected", label);
        }
        status
    }

    fn validate(&self) -> Result<(), BuildError> {
        self.on_true.validate()?;
        self.on_false.validate()
    }

    fn kind(&self) -> &'static str {
        "Switch"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Action;

    #[derive(Default)]
    struct TestContext {
        ticked: Vec<&'static str>,
    }

    fn branch(label: &'static str, status: Status) -> Node<TestContext> {
        Node::named(
            label,
            Action::new(move |ctx: &mut TestContext| {
                ctx.ticked.push(label);
                status
            }),
        )
    }

    #[test]
    fn routes_to_false_branch_by_default() {
        let switch = Switch::new(branch("flee", Status::Success), branch("patrol", Status::Running));
        assert!(!switch.condition());

        let mut node = Node::new(switch);
        let mut ctx = TestContext::default();
        assert_eq!(node.tick(&mut ctx, &TreeConfig::default()), Status::Running);
        assert_eq!(ctx.ticked, ["patrol"]);
    }

    #[test]
    fn follows_flag_between_ticks() {
        let switch = Switch::new(branch("flee", Status::Success), branch("patrol", Status::Failure));
        let health_low = switch.flag();
        let mut node = Node::new(switch);
        let mut ctx = TestContext::default();
        let config = TreeConfig::default().with_debug(true);

        assert_eq!(node.tick(&mut ctx, &config), Status::Failure);
        health_low.set(true);
        assert_eq!(node.tick(&mut ctx, &config), Status::Success);
        health_low.set(false);
        assert_eq!(node.tick(&mut ctx, &config), Status::Failure);

        assert_eq!(ctx.ticked, ["patrol", "flee", "patrol"]);
    }

    #[test]
    fn set_condition_updates_shared_flag() {
        let flag = ConditionFlag::new(false);
        let switch = Switch::with_flag(
            flag.clone(),
            branch("a", Status::Success),
            branch("b", Status::Success),
        );

        switch.set_condition(true);
        assert!(flag.get());
    }
}

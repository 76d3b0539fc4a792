//! Hand-wired guard tree.
//!
//! ```text
//! guard
//!   └─ Switch (health low?)
//!       ├─ true:  Sequence [flee, heal]
//!       └─ false: Selector
//!           ├─ Sequence [Condition (enemy visible?), attack, Succeeder(BernoulliGate 0.25 taunt)]
//!           ├─ Sequence [Condition (searches pending?), Repeater(3, search)]
//!           └─ WeightedRandomSelector { patrol: 0.7, idle: 0.3 }
//! ```

use anyhow::Result;
use behavior_tree::{
    BernoulliGate, Condition, ConditionFlag, Node, Repeater, Sequence, Succeeder, Switch,
    WeightedRandomSelector, builder,
};

use crate::actions::{self, Agent};

/// Flags the host refreshes from [`Agent`] state before each tick.
pub struct GuardFlags {
    pub health_low: ConditionFlag,
    pub enemy_visible: ConditionFlag,
    pub enemy_lost: ConditionFlag,
}

impl GuardFlags {
    pub fn update(&self, agent: &Agent) {
        self.health_low.set(agent.is_health_low());
        self.enemy_visible.set(agent.enemy_visible);
        self.enemy_lost.set(agent.pending_searches > 0);
    }
}

/// Builds the guard tree. A seed makes every random node repeatable.
pub fn guard(seed: Option<u64>) -> Result<(Node<Agent>, GuardFlags)> {
    let enemy_visible = Condition::new(false);
    let enemy_lost = Condition::new(false);
    let flags = GuardFlags {
        health_low: ConditionFlag::default(),
        enemy_visible: enemy_visible.flag(),
        enemy_lost: enemy_lost.flag(),
    };

    let mut taunt = BernoulliGate::new(0.25, actions::taunt())?;
    let mut wander = WeightedRandomSelector::from_weighted(vec![
        (actions::patrol(), 0.7),
        (actions::idle(), 0.3),
    ])?;
    if let Some(seed) = seed {
        taunt = taunt.with_seed(seed);
        wander = wander.with_seed(seed.wrapping_add(1));
    }

    let engage = Sequence::new(vec![
        Node::named("enemy visible", enemy_visible),
        actions::attack(),
        Node::new(Succeeder::new(Node::named("maybe taunt", taunt))),
    ]);

    let search = Sequence::new(vec![
        Node::named("enemy lost", enemy_lost),
        Node::named("search loop", Repeater::new(3, actions::search())),
    ]);

    let on_duty = builder::selector(vec![
        Node::named("engage", engage),
        Node::named("search area", search),
        Node::named("wander", wander),
    ]);

    let recover = builder::sequence(vec![actions::flee(), actions::heal()]);

    let root = Node::named(
        "guard",
        Switch::with_flag(flags.health_low.clone(), recover, on_duty),
    );
    Ok((root, flags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use behavior_tree::{Status, Tree, TreeConfig};

    #[test]
    fn guard_tree_validates() {
        let (root, _) = guard(Some(1)).unwrap();
        assert!(Tree::try_new(root).is_ok());
    }

    #[test]
    fn low_health_routes_to_recovery() {
        let (root, flags) = guard(Some(1)).unwrap();
        let mut tree = Tree::new(root).with_config(TreeConfig::default());
        let mut agent = Agent::new(100);
        agent.health = 20;
        agent.enemy_visible = true;

        flags.update(&agent);
        assert_eq!(tree.tick(&mut agent), Status::Running);
        assert!(!agent.enemy_visible);
        assert_eq!(agent.health, 40);
    }

    #[test]
    fn visible_enemy_gets_attacked() {
        let (root, flags) = guard(Some(1)).unwrap();
        let mut tree = Tree::new(root);
        let mut agent = Agent::new(100);
        agent.enemy_visible = true;

        flags.update(&agent);
        assert_eq!(tree.tick(&mut agent), Status::Success);
        assert_eq!(agent.health, 85);
    }

    #[test]
    fn search_repeats_across_ticks_after_losing_enemy() {
        let (root, flags) = guard(Some(1)).unwrap();
        let mut tree = Tree::new(root);
        let mut agent = Agent::new(100);
        agent.observe_enemy(true, 3);
        agent.observe_enemy(false, 3);

        let mut statuses = Vec::new();
        for _ in 0..3 {
            flags.update(&agent);
            statuses.push(tree.tick(&mut agent));
        }

        assert_eq!(statuses, [Status::Running, Status::Running, Status::Success]);
        assert_eq!(agent.searches, 3);
        assert_eq!(agent.pending_searches, 0);
    }
}

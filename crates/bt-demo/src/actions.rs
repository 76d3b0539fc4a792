//! Sample action leaves for a single guard agent.
//!
//! Every action logs what it does and updates the [`Agent`] it is handed.

use behavior_tree::{Action, Node, Status};

/// Host state the guard's tree acts on.
#[derive(Debug, Clone)]
pub struct Agent {
    pub health: u32,
    pub max_health: u32,
    pub enemy_visible: bool,
    /// Searches left after losing sight of the enemy.
    pub pending_searches: u32,
    pub searches: u32,
}

impl Agent {
    pub fn new(max_health: u32) -> Self {
        Self {
            health: max_health,
            max_health,
            enemy_visible: false,
            pending_searches: 0,
            searches: 0,
        }
    }

    /// Health below 30% of maximum.
    pub fn is_health_low(&self) -> bool {
        u64::from(self.health) * 10 < u64::from(self.max_health) * 3
    }

    /// Sets the enemy's visibility, queueing `searches` when it is lost.
    pub fn observe_enemy(&mut self, visible: bool, searches: u32) {
        if self.enemy_visible && !visible {
            self.pending_searches = searches;
        }
        self.enemy_visible = visible;
    }
}

pub fn attack() -> Node<Agent> {
    Node::named(
        "attack",
        Action::new(|agent: &mut Agent| {
            agent.health = agent.health.saturating_sub(15);
            tracing::info!(health = agent.health, "attacking, took a hit");
            Status::Success
        }),
    )
}

pub fn flee() -> Node<Agent> {
    Node::named(
        "flee",
        Action::new(|agent: &mut Agent| {
            agent.enemy_visible = false;
            tracing::info!("fleeing");
            Status::Success
        }),
    )
}

/// Recovers health over several ticks, `Running` until full.
pub fn heal() -> Node<Agent> {
    Node::named(
        "heal",
        Action::new(|agent: &mut Agent| {
            agent.health = agent.health.saturating_add(20).min(agent.max_health);
            tracing::info!(health = agent.health, "healing");
            if agent.health == agent.max_health {
                Status::Success
            } else {
                Status::Running
            }
        }),
    )
}

pub fn patrol() -> Node<Agent> {
    Node::named(
        "patrol",
        Action::new(|_agent: &mut Agent| {
            tracing::info!("patrolling");
            Status::Success
        }),
    )
}

pub fn idle() -> Node<Agent> {
    Node::named(
        "idle",
        Action::new(|_agent: &mut Agent| {
            tracing::info!("idling");
            Status::Success
        }),
    )
}

pub fn search() -> Node<Agent> {
    Node::named(
        "search",
        Action::new(|agent: &mut Agent| {
            agent.searches += 1;
            agent.pending_searches = agent.pending_searches.saturating_sub(1);
            tracing::info!(searches = agent.searches, "searching");
            Status::Success
        }),
    )
}

pub fn taunt() -> Node<Agent> {
    Node::named(
        "taunt",
        Action::new(|_agent: &mut Agent| {
            tracing::info!("taunting");
            Status::Success
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use behavior_tree::TreeConfig;

    #[test]
    fn low_health_threshold_is_thirty_percent() {
        let mut agent = Agent::new(100);
        assert!(!agent.is_health_low());

        agent.health = 30;
        assert!(!agent.is_health_low());

        agent.health = 29;
        assert!(agent.is_health_low());
    }

    #[test]
    fn low_health_threshold_holds_for_huge_maximums() {
        let mut agent = Agent::new(2_000_000_000);
        assert!(!agent.is_health_low());

        agent.health = 600_000_000;
        assert!(!agent.is_health_low());

        agent.health = 599_999_999;
        assert!(agent.is_health_low());
    }

    #[test]
    fn heal_caps_at_maximum_without_overflow() {
        let mut agent = Agent::new(u32::MAX);
        agent.health = u32::MAX - 5;
        let mut heal = heal();

        assert_eq!(heal.tick(&mut agent, &TreeConfig::default()), Status::Success);
        assert_eq!(agent.health, u32::MAX);
    }

    #[test]
    fn losing_the_enemy_queues_searches() {
        let mut agent = Agent::new(100);
        agent.observe_enemy(false, 3);
        assert_eq!(agent.pending_searches, 0);

        agent.observe_enemy(true, 3);
        agent.observe_enemy(false, 3);
        assert_eq!(agent.pending_searches, 3);
    }
}

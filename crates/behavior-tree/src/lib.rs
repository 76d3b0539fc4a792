//! Lightweight behavior tree execution engine.
//!
//! This library composes reusable decision-making nodes into a tree and
//! evaluates that tree once per tick to drive agent behavior.
//!
//! - **Synchronous ticks**: Every tick returns within the call; long actions
//!   report `Running` and are ticked again on the next step
//! - **Running preserves progress**: A node is reset before evaluation unless
//!   its previous status was `Running`
//! - **Exclusive ownership**: Every node has exactly one parent
//! - **Injectable randomness**: Stochastic nodes accept a seeded generator
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for node logic
//! - [`Node`]: Tick lifecycle (reset rule, recorded status, diagnostics)
//! - [`Status`]: Ready, Success, Failure or Running
//! - Leaf nodes: [`Action`], [`Condition`]
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - Decorator nodes: [`Inverter`], [`Succeeder`], [`Failer`], [`Repeater`], [`BernoulliGate`]
//! - Stochastic nodes: [`UniformRandomSelector`], [`WeightedRandomSelector`]
//! - Routing: [`Switch`]
//! - [`Tree`]: Root owner, itself nestable as a node

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod config;
pub mod decorator;
pub mod error;
pub mod leaf;
pub mod node;
pub mod status;
pub mod stochastic;
pub mod switch;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::{Selector, Sequence};
pub use config::TreeConfig;
pub use decorator::{BernoulliGate, Failer, Inverter, Repeater, Succeeder};
pub use error::{BuildError, WEIGHT_TOLERANCE};
pub use leaf::{Action, Condition, ConditionFlag};
pub use node::Node;
pub use status::Status;
pub use stochastic::{BoxedRng, UniformRandomSelector, WeightedRandomSelector};
pub use switch::Switch;
pub use tree::Tree;

//! Tree: the owner of a root node.

use crate::{Behavior, BuildError, Node, Status, TreeConfig};

/// Owns a root node and the configuration it is ticked with.
///
/// A host calls [`Tree::tick`] once per simulation step. `Tree` also
/// implements [`Behavior`], so a whole tree can be wrapped in a [`Node`] and
/// nested as a sub-tree; a nested tree keeps ticking with its own config.
///
/// # Example
///
/// ```rust
/// use behavior_tree::{Action, Node, Status, Tree};
///
/// let mut tree = Tree::new(Node::named("idle", Action::new(|_: &mut ()| Status::Success)));
/// assert_eq!(tree.tick(&mut ()), Status::Success);
/// assert_eq!(tree.status(), Status::Success);
/// ```
pub struct Tree<C> {
    root: Node<C>,
    config: TreeConfig,
    status: Status,
}

impl<C> Tree<C> {
    pub fn new(root: Node<C>) -> Self {
        Self {
            root,
            config: TreeConfig::default(),
            status: Status::Ready,
        }
    }

    /// Creates a tree after checking every construction-time contract.
    ///
    /// # Errors
    ///
    /// Returns the first [`BuildError`] found in the tree, attributed to the
    /// named nodes above it.
    pub fn try_new(root: Node<C>) -> Result<Self, BuildError> {
        root.validate()?;
        Ok(Self::new(root))
    }

    pub fn with_config(mut self, config: TreeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: TreeConfig) {
        self.config = config;
    }

    /// Ticks the root once and returns its status.
    pub fn tick(&mut self, ctx: &mut C) -> Status {
        self.status = self.root.tick(ctx, &self.config);
        self.status
    }

    /// Alias for [`Tree::tick`].
    pub fn run(&mut self, ctx: &mut C) -> Status {
        self.tick(ctx)
    }

    /// Replaces the root. Any `Running` progress of the old root is dropped.
    pub fn set_root(&mut self, root: Node<C>) {
        self.root = root;
        self.status = Status::Ready;
    }

    pub fn root(&self) -> &Node<C> {
        &self.root
    }

    /// Status of the most recent tick, `Ready` before the first.
    pub fn status(&self) -> Status {
        self.status
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        self.root.validate()
    }
}

impl<C> Behavior<C> for Tree<C> {
    fn evaluate(&mut self, ctx: &mut C, _config: &TreeConfig) -> Status {
        self.tick(ctx)
    }

    fn validate(&self) -> Result<(), BuildError> {
        Tree::validate(self)
    }

    fn kind(&self) -> &'static str {
        "Tree"
    }
}

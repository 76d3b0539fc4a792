//! Per-tree configuration threaded through every tick.

/// Environment variable read by [`TreeConfig::from_env`].
pub const DEBUG_ENV_VAR: &str = "BEHAVIOR_TREE_DEBUG";

/// Settings that apply to a whole tree.
///
/// Each [`Tree`](crate::Tree) owns one of these and hands it to every node it
/// ticks, so two trees in the same process can be configured independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TreeConfig {
    /// Emit a `"<name>: <Status>"` debug event for every named node per tick.
    pub debug: bool,
}

impl TreeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Reads `BEHAVIOR_TREE_DEBUG` (`1` or `true`, case-insensitive).
    pub fn from_env() -> Self {
        let debug = std::env::var(DEBUG_ENV_VAR)
            .map(|value| parse_flag(&value))
            .unwrap_or(false);
        Self { debug }
    }
}

fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true")
}

//! Session configuration.

use algoviz_steps::demo;
use algoviz_structures::{LIST_CAPACITY, QUEUE_CAPACITY, STACK_CAPACITY, TREE_CAPACITY};

use crate::catalog::Category;
use crate::timeline::Speed;

/// Default step interval per catalog section, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Speeds {
    pub sorting: Speed,
    pub searching: Speed,
    pub arrays: Speed,
    pub graphs: Speed,
    pub trees: Speed,
    pub containers: Speed,
}

impl Default for Speeds {
    fn default() -> Self {
        Self {
            sorting: Speed::saturating_from_millis(250),
            searching: Speed::saturating_from_millis(500),
            arrays: Speed::saturating_from_millis(200),
            graphs: Speed::saturating_from_millis(700),
            trees: Speed::saturating_from_millis(600),
            containers: Speed::saturating_from_millis(300),
        }
    }
}

impl Speeds {
    /// Default interval for a catalog section.
    pub fn for_category(&self, category: Category) -> Speed {
        match category {
            Category::Arrays => self.arrays,
            Category::Sorting => self.sorting,
            Category::Searching => self.searching,
            Category::Graphs => self.graphs,
            Category::Trees => self.trees,
            Category::LinkedLists | Category::StacksAndQueues => self.containers,
        }
    }

    /// Same interval for every section.
    pub fn uniform(speed: Speed) -> Self {
        Self {
            sorting: speed,
            searching: speed,
            arrays: speed,
            graphs: speed,
            trees: speed,
            containers: speed,
        }
    }
}

/// Configuration for a visualization session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Seed for the demo arrays
    pub seed: u64,
    /// Length of the sorting and searching arrays
    pub array_len: usize,
    /// Value the searching demo looks for
    pub search_target: i64,
    /// Node cap of the tree demos
    pub tree_capacity: usize,
    pub stack_capacity: usize,
    pub queue_capacity: usize,
    pub list_capacity: usize,
    /// Starting step interval per section
    pub speeds: Speeds,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            array_len: demo::ARRAY_LEN,
            search_target: demo::SEARCH_TARGET,
            tree_capacity: TREE_CAPACITY,
            stack_capacity: STACK_CAPACITY,
            queue_capacity: QUEUE_CAPACITY,
            list_capacity: LIST_CAPACITY,
            speeds: Speeds::default(),
        }
    }
}

impl SessionConfig {
    /// Defaults overridden by `ALGOVIZ_SEED`, `ALGOVIZ_SPEED_MS` and
    /// `ALGOVIZ_ARRAY_LEN`. Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(seed) = parse_var(&lookup, "ALGOVIZ_SEED") {
            config.seed = seed;
        }

        if let Some(ms) = parse_var::<u64>(&lookup, "ALGOVIZ_SPEED_MS") {
            match Speed::from_millis(ms) {
                Ok(speed) => config.speeds = Speeds::uniform(speed),
                Err(e) => tracing::warn!("Ignoring ALGOVIZ_SPEED_MS: {}", e),
            }
        }

        if let Some(len) = parse_var::<usize>(&lookup, "ALGOVIZ_ARRAY_LEN") {
            if len == 0 {
                tracing::warn!("Ignoring ALGOVIZ_ARRAY_LEN: must be positive");
            } else {
                config.array_len = len;
            }
        }

        config
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Option<T> {
    let raw = lookup(name)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(var = name, value = %raw, "Ignoring unparseable environment variable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.array_len, 15);
        assert_eq!(config.search_target, 42);
        assert_eq!(config.tree_capacity, 15);
        assert_eq!(config.speeds.for_category(Category::Sorting).as_millis(), 250);
        assert_eq!(config.speeds.for_category(Category::Searching).as_millis(), 500);
        assert_eq!(config.speeds.for_category(Category::Graphs).as_millis(), 700);
        assert_eq!(config.speeds.for_category(Category::Trees).as_millis(), 600);
    }

    #[test]
    fn env_overrides() {
        let config = SessionConfig::from_lookup(lookup(&[
            ("ALGOVIZ_SEED", "7"),
            ("ALGOVIZ_SPEED_MS", "50"),
            ("ALGOVIZ_ARRAY_LEN", "8"),
        ]));
        assert_eq!(config.seed, 7);
        assert_eq!(config.array_len, 8);
        assert_eq!(config.speeds, Speeds::uniform(Speed::from_millis(50).unwrap()));
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let config = SessionConfig::from_lookup(lookup(&[
            ("ALGOVIZ_SEED", "soon"),
            ("ALGOVIZ_SPEED_MS", "0"),
            ("ALGOVIZ_ARRAY_LEN", "0"),
        ]));
        assert_eq!(config, SessionConfig::default());
    }
}

use std::{collections::VecDeque, ops::Index, time::Instant};

use fxhash::FxHashSet;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{command::Command, cube::Cube, working};

pub const DEFAULT_NODE_LIMIT: usize = 100_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("No solution was found within {limit} search states ({expanded} were recorded)")]
    Exhausted { limit: usize, expanded: usize },
    #[error("Search node {index} cannot have parent {parent}; parents must come first")]
    ParentOutOfRange { parent: usize, index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// The most states a single search may record before giving up.
    pub node_limit: usize,
    /// Skip states that were already recorded during the same search.
    pub deduplicate: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            node_limit: DEFAULT_NODE_LIMIT,
            deduplicate: true,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn with_node_limit(mut self, node_limit: usize) -> Self {
        self.node_limit = node_limit;
        self
    }

    #[must_use]
    pub fn with_deduplicate(mut self, deduplicate: bool) -> Self {
        self.deduplicate = deduplicate;
        self
    }
}

/// A recorded state together with the node and command it came from.
#[derive(Debug, Clone)]
pub struct SearchItem<'a> {
    state: Cube,
    parent: usize,
    command: Option<&'a Command>,
}

impl<'a> SearchItem<'a> {
    #[must_use]
    pub fn state(&self) -> &Cube {
        &self.state
    }

    #[must_use]
    pub fn parent(&self) -> usize {
        self.parent
    }

    #[must_use]
    pub fn command(&self) -> Option<&'a Command> {
        self.command
    }
}

/// Every state recorded by a search, in discovery order. The root is its
/// own parent.
#[derive(Debug, Clone)]
pub struct SearchTree<'a> {
    items: Vec<SearchItem<'a>>,
}

impl<'a> SearchTree<'a> {
    #[must_use]
    pub fn new(root: Cube) -> Self {
        SearchTree {
            items: vec![SearchItem {
                state: root,
                parent: 0,
                command: None,
            }],
        }
    }

    /// Records a state reached from `parent` and returns its index.
    pub fn push(
        &mut self,
        state: Cube,
        parent: usize,
        command: &'a Command,
    ) -> Result<usize, SearchError> {
        let index = self.items.len();
        if parent >= index {
            return Err(SearchError::ParentOutOfRange { parent, index });
        }
        self.items.push(SearchItem {
            state,
            parent,
            command: Some(command),
        });
        Ok(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The commands leading from the root to `index`.
    #[must_use]
    pub fn path_to(&self, mut index: usize) -> Vec<Command> {
        let mut path = vec![];
        while index != 0 {
            let item = &self.items[index];
            if let Some(command) = item.command {
                path.push(command.clone());
            }
            index = item.parent;
        }
        path.reverse();
        path
    }
}

impl<'a> Index<usize> for SearchTree<'a> {
    type Output = SearchItem<'a>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub path: Vec<Command>,
    pub goal_state: Cube,
    /// How many states were recorded, the start included.
    pub expanded: usize,
}

/// Breadth-first search over the states reachable with a palette of
/// commands. Commands are tried in palette order, so the first goal state
/// discovered wins among paths of equal length.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathSearcher {
    config: SearchConfig,
}

impl PathSearcher {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        PathSearcher { config }
    }

    #[must_use]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Finds the shortest sequence of `commands` that takes `start` to a
    /// state satisfying `goal`.
    ///
    /// # Errors
    ///
    /// Fails with [`SearchError::Exhausted`] once the node limit is reached
    /// or every reachable state has been seen without satisfying the goal.
    pub fn search(
        &self,
        start: &Cube,
        commands: &[Command],
        goal: impl Fn(&Cube) -> bool,
    ) -> Result<SearchResult, SearchError> {
        if goal(start) {
            trace!("Start state already satisfies the goal");
            return Ok(SearchResult {
                path: vec![],
                goal_state: *start,
                expanded: 1,
            });
        }

        let search_start = Instant::now();
        let mut tree = SearchTree::new(*start);
        let mut frontier = VecDeque::from([0]);
        let mut visited = FxHashSet::default();
        if self.config.deduplicate {
            visited.insert(*start);
        }

        let found = 'search: loop {
            let exhausted = SearchError::Exhausted {
                limit: self.config.node_limit,
                expanded: tree.len(),
            };
            if tree.len() >= self.config.node_limit {
                return Err(exhausted);
            }
            let Some(current) = frontier.pop_front() else {
                return Err(exhausted);
            };

            let state = tree[current].state;
            for command in commands {
                let next = command.execute(&state);
                if self.config.deduplicate && !visited.insert(next) {
                    continue;
                }
                let index = tree.push(next, current, command)?;
                if goal(&next) {
                    break 'search index;
                }
                frontier.push_back(index);
            }
        };

        let path = tree.path_to(found);
        debug!(
            working!("Traversed {} states in {:.3}s, path length {}"),
            tree.len(),
            search_start.elapsed().as_secs_f64(),
            path.len()
        );
        Ok(SearchResult {
            path,
            goal_state: tree[found].state,
            expanded: tree.len(),
        })
    }
}

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::{self, Debug, Display, Formatter};
use std::time::Instant;

use fnv::FnvHashSet;
use prettytable::{format, Table};
use separator::Separatable;
use typed_arena::Arena;

use crate::config::SearchConfig;
use crate::state::State;

#[derive(Clone, PartialEq, Eq, Default)]
pub struct Stats {
    created_states: Vec<u64>,
    visited_states: Vec<u64>,
    duplicate_states: Vec<u64>,
}

impl Stats {
    pub fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> u64 {
        self.created_states.iter().sum()
    }

    pub fn total_unique_visited(&self) -> u64 {
        self.visited_states.iter().sum()
    }

    pub fn total_reached_duplicates(&self) -> u64 {
        self.duplicate_states.iter().sum()
    }

    pub fn created_by_depth(&self) -> &[u64] {
        &self.created_states
    }

    pub fn visited_by_depth(&self) -> &[u64] {
        &self.visited_states
    }

    pub fn duplicates_by_depth(&self) -> &[u64] {
        &self.duplicate_states
    }

    pub(crate) fn add_created(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.created_states, node)
    }

    pub(crate) fn add_unique_visited(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.visited_states, node)
    }

    pub(crate) fn add_reached_duplicate(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.duplicate_states, node)
    }

    fn add(counts: &mut Vec<u64>, node: &SearchNode<'_>) -> bool {
        let mut ret = false;

        // while because some depths might be skipped - e.g. duplicates
        while node.dist as usize >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[node.dist as usize] += 1;
        ret
    }

    fn depth_table(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);
        table.set_titles(row![
            "Depth",
            "Created",
            "Unique",
            "Duplicates",
            "Unknown (not reached)"
        ]);
        // created_states should be the longest vec
        for (depth, &created) in self.created_states.iter().enumerate() {
            let visited = self.visited_states.get(depth).cloned().unwrap_or(0);
            let duplicates = self.duplicate_states.get(depth).cloned().unwrap_or(0);
            table.add_row(row![
                format!("{}:", depth),
                created.separated_string(),
                visited.separated_string(),
                duplicates.separated_string(),
                (created - visited - duplicates).separated_string()
            ]);
        }
        table
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_unique_visited();
        let duplicates = self.total_reached_duplicates();
        let left = created - visited - duplicates;
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique visited total: {}", visited.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(f, "Created but not reached total: {}", left.separated_string())
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self)?;
        write!(f, "{}", self.depth_table())
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode<'a> {
    pub(crate) state: &'a State,
    /// Index of the parent in the node pool, `None` for the start.
    pub(crate) prev: Option<usize>,
    pub(crate) dist: u32,
    pub(crate) h: u32,
}

impl<'a> SearchNode<'a> {
    pub(crate) fn new(state: &'a State, prev: Option<usize>, dist: u32, h: u32) -> Self {
        Self {
            state,
            prev,
            dist,
            h,
        }
    }

    pub(crate) fn cost(&self) -> u32 {
        self.dist + self.h
    }
}

/// Frontier ordering - lower cost first, ties go to the lower heuristic
/// and then to the node created first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct FrontierKey {
    cost: u32,
    h: u32,
    index: usize,
}

impl FrontierKey {
    fn new(node: &SearchNode<'_>, index: usize) -> Self {
        Self {
            cost: node.cost(),
            h: node.h,
            index,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchEnd {
    /// Index of the goal node.
    Found(usize),
    Exhausted,
    LimitReached,
}

pub(crate) struct Search<'a> {
    goal: &'a State,
    config: SearchConfig,
    arena: &'a Arena<State>,
    pub(crate) nodes: Vec<SearchNode<'a>>,
    to_visit: BinaryHeap<Reverse<FrontierKey>>,
    pub(crate) visited: FnvHashSet<&'a State>,
    pub(crate) stats: Stats,
}

impl<'a> Search<'a> {
    pub(crate) fn new(
        arena: &'a Arena<State>,
        start: &State,
        goal: &'a State,
        config: SearchConfig,
    ) -> Self {
        let mut search = Self {
            goal,
            config,
            arena,
            nodes: Vec::new(),
            to_visit: BinaryHeap::new(),
            visited: FnvHashSet::default(),
            stats: Stats::new(),
        };

        let start: &'a State = arena.alloc(start.clone());
        let h = config.heuristic.estimate(start, goal);
        search.push(SearchNode::new(start, None, 0, h));
        search
    }

    fn push(&mut self, node: SearchNode<'a>) {
        let index = self.nodes.len();
        self.stats.add_created(&node);
        self.to_visit.push(Reverse(FrontierKey::new(&node, index)));
        self.nodes.push(node);
    }

    fn limit_reached(&self, deadline: Option<Instant>) -> bool {
        if let Some(limit) = self.config.max_expanded {
            if self.visited.len() >= limit {
                return true;
            }
        }
        deadline.map_or(false, |deadline| Instant::now() >= deadline)
    }

    pub(crate) fn run(&mut self, print_status: bool) -> SearchEnd {
        debug!("Search called");

        let arena = self.arena;
        let deadline = self.config.timeout.map(|timeout| Instant::now() + timeout);

        while let Some(Reverse(key)) = self.to_visit.pop() {
            let cur_node = self.nodes[key.index];

            // a state can be queued several times before it's expanded,
            // only the first copy popped gets expanded
            if self.visited.contains(cur_node.state) {
                self.stats.add_reached_duplicate(&cur_node);
                continue;
            }
            if self.stats.add_unique_visited(&cur_node) && print_status {
                println!("Visited new depth: {}", cur_node.dist);
                println!("{}", self.stats);
            }

            if cur_node.state == self.goal {
                debug!("Solved, backtracking path");
                return SearchEnd::Found(key.index);
            }

            if self.limit_reached(deadline) {
                debug!(
                    "Search limit reached after expanding {} states",
                    self.visited.len()
                );
                return SearchEnd::LimitReached;
            }

            // mark visited only when expanding
            // otherwise we could close a state before its shortest path is found
            self.visited.insert(cur_node.state);

            for (dir, new_state) in cur_node.state.successors() {
                if self.visited.contains(&new_state) {
                    continue;
                }
                trace!("Expanding {} from depth {}", dir, cur_node.dist);

                let h = self.config.heuristic.estimate(&new_state, self.goal);
                let new_state: &'a State = arena.alloc(new_state);
                self.push(SearchNode::new(
                    new_state,
                    Some(key.index),
                    cur_node.dist + 1,
                    h,
                ));
            }
        }

        debug!("Frontier empty, no solution");
        SearchEnd::Exhausted
    }

    /// States from the start to the node at `index`, both inclusive.
    pub(crate) fn backtrack_path(&self, index: usize) -> Vec<State> {
        let mut ret = Vec::new();
        let mut cur = Some(index);
        while let Some(index) = cur {
            let node = &self.nodes[index];
            ret.push(node.state.clone());
            cur = node.prev;
        }
        ret.reverse();
        ret
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Heuristic;

    use super::*;

    fn state(rows: &[&[u32]]) -> State {
        State::new(rows.iter().map(|row| row.to_vec()).collect()).unwrap()
    }

    #[test]
    fn frontier_ordering() {
        let s = State::ordered(2);
        let mut heap = BinaryHeap::new();
        let nodes = [
            SearchNode::new(&s, None, 3, 2),
            SearchNode::new(&s, None, 1, 4),
            SearchNode::new(&s, None, 2, 3),
            SearchNode::new(&s, None, 5, 0),
            SearchNode::new(&s, None, 2, 3),
        ];
        for (i, node) in nodes.iter().enumerate() {
            heap.push(Reverse(FrontierKey::new(node, i)));
        }
        let order: Vec<_> = ::std::iter::from_fn(|| heap.pop().map(|Reverse(key)| key.index))
            .collect();
        // all have cost 5 - lower h wins, then creation order
        assert_eq!(order, vec![3, 0, 2, 4, 1]);
    }

    #[test]
    fn exhausted_never_visits_goal() {
        // two tiles swapped - odd permutation, only half the states are reachable
        let start = state(&[&[2, 1], &[3, 0]]);
        let goal = state(&[&[1, 2], &[3, 0]]);

        let arena = Arena::new();
        let mut search = Search::new(&arena, &start, &goal, SearchConfig::default());
        assert_eq!(search.run(false), SearchEnd::Exhausted);

        assert_eq!(search.visited.len(), 12);
        assert!(!search.visited.contains(&goal));
        assert_eq!(search.stats.total_created(), 13);
        assert_eq!(search.stats.total_unique_visited(), 12);
        assert_eq!(search.stats.total_reached_duplicates(), 1);
        assert_eq!(search.stats.duplicates_by_depth(), &[0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn found_node_links_back_to_start() {
        let start = state(&[&[0, 1], &[3, 2]]);
        let goal = state(&[&[1, 2], &[3, 0]]);

        let arena = Arena::new();
        let mut search = Search::new(&arena, &start, &goal, SearchConfig::default());
        let index = match search.run(false) {
            SearchEnd::Found(index) => index,
            end => panic!("unexpected end: {:?}", end),
        };

        let node = search.nodes[index];
        assert_eq!(node.state, &goal);
        assert_eq!(node.dist, 2);
        assert_eq!(node.h, 0);

        let path = search.backtrack_path(index);
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], start);
        assert_eq!(path[1], state(&[&[1, 0], &[3, 2]]));
        assert_eq!(path[2], goal);
        assert_eq!(search.stats.created_by_depth(), &[1, 2, 1]);
        assert_eq!(search.stats.visited_by_depth(), &[1, 1, 1]);
    }

    #[test]
    fn stats_depth_table() {
        let start = state(&[&[0, 1], &[3, 2]]);
        let goal = state(&[&[1, 2], &[3, 0]]);

        let arena = Arena::new();
        let mut search = Search::new(&arena, &start, &goal, SearchConfig::default());
        search.run(false);

        let debug = format!("{:?}", search.stats);
        assert!(debug.starts_with(&search.stats.to_string()));
        assert!(debug.contains("Depth"));
        assert!(debug.contains("Unknown (not reached)"));
        // one row per depth
        assert!(debug.contains("0:"));
        assert!(debug.contains("2:"));
        assert!(!debug.contains("3:"));
    }

    #[test]
    fn expansion_limit() {
        let start = state(&[&[0, 1, 3], &[4, 2, 5], &[7, 8, 6]]);
        let goal = State::ordered(3);

        let arena = Arena::new();
        let config = SearchConfig::new(Heuristic::Mismatched).max_expanded(2);
        let mut search = Search::new(&arena, &start, &goal, config);
        assert_eq!(search.run(false), SearchEnd::LimitReached);
        assert_eq!(search.visited.len(), 2);
        assert_eq!(search.stats.total_created(), 5);
        assert_eq!(search.stats.total_unique_visited(), 3);

        // the start is still checked against the goal
        let arena = Arena::new();
        let config = SearchConfig::default().max_expanded(0);
        let mut search = Search::new(&arena, &goal, &goal, config);
        assert_eq!(search.run(false), SearchEnd::Found(0));
    }
}

//! Uniform-cost search over an implicit graph, modelled on
//! [pathfinding's dijkstra function](https://docs.rs/pathfinding/latest/pathfinding/directed/dijkstra/index.html)
//! but recording the order in which nodes are finalized so the exploration can be replayed.
//! Ties between equal-cost nodes are broken by the [Ord] of the node itself, not by the order in
//! which they were discovered.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Marks the start node in the parent table.
const NO_PARENT: usize = usize::MAX;

struct SmallestCostHolder<N, C> {
    cost: C,
    node: N,
    index: usize,
}

impl<N: PartialEq, C: PartialEq> Eq for SmallestCostHolder<N, C> {}

impl<N: PartialEq, C: PartialEq> PartialEq for SmallestCostHolder<N, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cost.eq(&other.cost) && self.node.eq(&other.node)
    }
}

impl<N: Ord, C: Ord> PartialOrd for SmallestCostHolder<N, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord, C: Ord> Ord for SmallestCostHolder<N, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys so the max-heap pops the cheapest node, and among those the
        // smallest one.
        match other.cost.cmp(&self.cost) {
            Ordering::Equal => other.node.cmp(&self.node),
            s => s,
        }
    }
}

/// What the search knows about a discovered node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Discovered<C> {
    pub(crate) parent: usize,
    pub cost: C,
    pub settled: bool,
}

/// Frontier and parent table of a search, kept around so repeated runs reuse their allocations.
pub struct SearchContext<N, C> {
    to_see: BinaryHeap<SmallestCostHolder<N, C>>,
    pub(crate) parents: FxIndexMap<N, Discovered<C>>,
}

impl<N, C> Default for SearchContext<N, C> {
    fn default() -> Self {
        SearchContext {
            to_see: BinaryHeap::new(),
            parents: FxIndexMap::default(),
        }
    }
}

impl<N, C> SearchContext<N, C>
where
    N: Eq + Hash + Clone + Ord,
    C: Zero + Ord + Copy,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a uniform-cost search from `start` and returns the nodes in the order their cost was
    /// finalized. The search stops after finalizing a node for which `success` holds, or once
    /// every reachable node is finalized. Costs returned by `successors` must be non-negative.
    pub fn uniform_cost_trace<FN, IN, FS>(
        &mut self,
        start: &N,
        mut successors: FN,
        mut success: FS,
    ) -> Vec<N>
    where
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = (N, C)>,
        FS: FnMut(&N) -> bool,
    {
        self.to_see.clear();
        self.parents.clear();
        self.parents.insert(
            start.clone(),
            Discovered {
                parent: NO_PARENT,
                cost: Zero::zero(),
                settled: false,
            },
        );
        self.to_see.push(SmallestCostHolder {
            cost: Zero::zero(),
            node: start.clone(),
            index: 0,
        });
        let mut visited = Vec::new();
        while let Some(SmallestCostHolder { cost, index, .. }) = self.to_see.pop() {
            let node = {
                let Some((node, discovered)) = self.parents.get_index_mut(index) else {
                    continue;
                };
                // A node may sit in the heap several times if a cheaper way to it was found
                // later; only the entry matching the recorded cost is live.
                if discovered.settled || cost > discovered.cost {
                    continue;
                }
                discovered.settled = true;
                node.clone()
            };
            visited.push(node.clone());
            if success(&node) {
                return visited;
            }
            for (successor, move_cost) in successors(&node) {
                let new_cost = cost + move_cost;
                let n; // index for successor
                let key; // heap tie-break copy of successor
                match self.parents.entry(successor) {
                    Vacant(e) => {
                        n = e.index();
                        key = e.key().clone();
                        e.insert(Discovered {
                            parent: index,
                            cost: new_cost,
                            settled: false,
                        });
                    }
                    Occupied(mut e) => {
                        let known = e.get();
                        if known.settled || known.cost <= new_cost {
                            continue;
                        }
                        n = e.index();
                        key = e.key().clone();
                        e.insert(Discovered {
                            parent: index,
                            cost: new_cost,
                            settled: false,
                        });
                    }
                }
                self.to_see.push(SmallestCostHolder {
                    cost: new_cost,
                    node: key,
                    index: n,
                });
            }
        }
        visited
    }

    /// Cost recorded for `node` by the last run, settled or tentative.
    pub fn cost(&self, node: &N) -> Option<C> {
        self.parents.get(node).map(|d| d.cost)
    }

    /// Predecessor of `node` recorded by the last run.
    pub fn parent(&self, node: &N) -> Option<&N> {
        self.parents
            .get(node)
            .and_then(|d| self.parents.get_index(d.parent))
            .map(|(p, _)| p)
    }

    /// Iterates over every node discovered by the last run together with its predecessor.
    pub fn discovered(&self) -> impl Iterator<Item = (&N, Option<&N>, &Discovered<C>)> {
        self.parents.iter().map(move |(node, d)| {
            let parent = self.parents.get_index(d.parent).map(|(p, _)| p);
            (node, parent, d)
        })
    }
}

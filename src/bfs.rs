use fxhash::FxBuildHasher;
/// This module implements a labelled variant of
/// [pathfinding's bfs function](https://docs.rs/pathfinding/latest/pathfinding/directed/bfs/index.html)
/// which records the label of the edge taken into every discovered node so
/// that the move sequence can be rebuilt along with the path itself.
use indexmap::map::Entry::Vacant;
use indexmap::IndexMap;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use log::warn;
use std::collections::VecDeque;

use std::hash::Hash;

fn reverse_path<N, D>(parents: &FxIndexMap<N, (usize, Option<D>)>, start: usize) -> (Vec<N>, Vec<D>)
where
    N: Eq + Hash + Clone,
    D: Copy,
{
    let mut steps: Vec<(N, Option<D>)> = itertools::unfold(start, |i| {
        parents.get_index(*i).map(|(node, &(parent, label))| {
            *i = parent;
            (node.clone(), label)
        })
    })
    .collect();
    steps.reverse();
    let moves = steps.iter().filter_map(|&(_, label)| label).collect();
    let path = steps.into_iter().map(|(node, _)| node).collect();
    (path, moves)
}

/// Breadth-first search over unit-cost edges labelled with values of type `D`.
/// Successors are (node, label) pairs. On success both the node path from
/// `start` to the matched node and the labels taken along it are returned;
/// the label sequence is always one shorter than the path.
pub fn bfs_labelled<N, D, FN, IN, FS>(
    start: &N,
    mut successors: FN,
    mut success: FS,
) -> Option<(Vec<N>, Vec<D>)>
where
    N: Eq + Hash + Clone,
    D: Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, D)>,
    FS: FnMut(&N) -> bool,
{
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut parents: FxIndexMap<N, (usize, Option<D>)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, None));
    queue.push_back(0);
    while let Some(index) = queue.pop_front() {
        let successors = {
            let (node, _) = parents.get_index(index).unwrap();
            if success(node) {
                return Some(reverse_path(&parents, index));
            }
            successors(node)
        };
        for (successor, label) in successors {
            // First discovery wins: under FIFO processing of unit-cost edges
            // a node that already has a parent was reached by a path at
            // least as short, so occupied entries are never revisited.
            if let Vacant(e) = parents.entry(successor) {
                let n = e.index();
                e.insert((index, Some(label)));
                queue.push_back(n);
            }
        }
    }
    warn!("Reachable goal could not be pathed to, is reachable graph correct?");
    None
}

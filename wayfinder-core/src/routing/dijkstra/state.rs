use std::cmp::Ordering;

use petgraph::graph::NodeIndex;

use crate::Meters;

/// Frontier entry of the shortest-path search
#[derive(Copy, Clone, Debug)]
pub(super) struct State<'a> {
    pub(super) cost: Meters,
    pub(super) node: NodeIndex,
    pub(super) id: &'a str,
}

// Min-heap by cost, then by location id so equal costs settle in ascending id order
impl Ord for State<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.id.cmp(self.id))
    }
}

impl PartialOrd for State<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State<'_> {}

use grid_2d::Coord;
use num_traits::Zero;
use std::ops::Add;

pub const DEFAULT_POOL_CAPACITY: usize = 1000;

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode<Cost> {
    pub(crate) coord: Coord,
    pub(crate) hash: u32,
    pub(crate) g: Cost,
    pub(crate) h: Cost,
    pub(crate) priority: Cost,
    pub(crate) parent: Option<usize>,
}

impl<Cost: Zero> SearchNode<Cost> {
    fn new() -> Self {
        Self {
            coord: Coord::new(0, 0),
            hash: 0,
            g: Zero::zero(),
            h: Zero::zero(),
            priority: Zero::zero(),
            parent: None,
        }
    }
}

impl<Cost> SearchNode<Cost>
where
    Cost: Copy + Add<Cost> + Zero,
{
    fn overwrite(&mut self, coord: Coord, hash: u32, g: Cost, h: Cost, parent: Option<usize>) {
        self.coord = coord;
        self.hash = hash;
        self.g = g;
        self.h = h;
        self.priority = g + h;
        self.parent = parent;
    }

    fn reset(&mut self) {
        self.coord = Coord::new(0, 0);
        self.hash = 0;
        self.g = Zero::zero();
        self.h = Zero::zero();
        self.priority = Zero::zero();
        self.parent = None;
    }
}

/// Bounded free list of retired search nodes. Nodes handed out by `get` are
/// fully overwritten, so stale state never leaks between searches.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub(crate) struct NodePool<Cost> {
    free: Vec<Box<SearchNode<Cost>>>,
    capacity: usize,
}

impl<Cost> NodePool<Cost>
where
    Cost: Copy + Add<Cost> + Zero,
{
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            free: Vec::new(),
            capacity,
        }
    }

    pub(crate) fn get(
        &mut self,
        coord: Coord,
        hash: u32,
        g: Cost,
        h: Cost,
        parent: Option<usize>,
    ) -> Box<SearchNode<Cost>> {
        match self.free.pop() {
            Some(mut node) => {
                node.overwrite(coord, hash, g, h, parent);
                node
            }
            None => {
                let mut node = Box::new(SearchNode::new());
                node.overwrite(coord, hash, g, h, parent);
                node
            }
        }
    }

    pub(crate) fn recycle(&mut self, mut node: Box<SearchNode<Cost>>) {
        node.reset();
        if self.free.len() < self.capacity {
            self.free.push(node);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.free.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn clear(&mut self) {
        self.free.clear();
    }
}

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    pub size: usize,
    pub capacity: usize,
}

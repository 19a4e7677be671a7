use std::cmp::Ordering;

pub trait PriorityItem {
    type Priority: Copy + PartialOrd;
    fn priority(&self) -> Self::Priority;
}

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
struct Slot<T> {
    item: T,
    insertion: u64,
}

/// Binary min-heap. Items with equal priority dequeue in insertion order.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: Vec<Slot<T>>,
    insertion_counter: u64,
}

impl<T: PriorityItem> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            insertion_counter: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.insertion_counter = 0;
    }

    pub fn enqueue(&mut self, item: T) {
        let insertion = self.insertion_counter;
        self.insertion_counter += 1;
        self.heap.push(Slot { item, insertion });
        self.bubble_up(self.heap.len() - 1);
    }

    pub fn dequeue(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let slot = self.heap.pop();
        if !self.heap.is_empty() {
            self.bubble_down(0);
        }
        slot.map(|slot| slot.item)
    }

    pub fn peek(&self) -> Option<&T> {
        self.heap.first().map(|slot| &slot.item)
    }

    fn precedes(&self, a: usize, b: usize) -> bool {
        let (a, b) = (&self.heap[a], &self.heap[b]);
        match a.item.priority().partial_cmp(&b.item.priority()) {
            Some(Ordering::Less) => true,
            Some(Ordering::Equal) => a.insertion < b.insertion,
            _ => false,
        }
    }

    fn bubble_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.precedes(index, parent) {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    fn bubble_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;
            if left < self.heap.len() && self.precedes(left, smallest) {
                smallest = left;
            }
            if right < self.heap.len() && self.precedes(right, smallest) {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.heap.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T: PriorityItem> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

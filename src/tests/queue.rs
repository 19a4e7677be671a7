use queue::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Item {
    label: u32,
    priority: u32,
}

impl PriorityItem for Item {
    type Priority = u32;
    fn priority(&self) -> u32 {
        self.priority
    }
}

fn item(label: u32, priority: u32) -> Item {
    Item { label, priority }
}

#[test]
fn dequeues_in_priority_order() {
    let mut queue = PriorityQueue::new();
    for &priority in [5, 1, 9, 3, 7, 2, 8, 0, 6, 4].iter() {
        queue.enqueue(item(priority, priority));
    }
    let mut drained = Vec::new();
    while let Some(item) = queue.dequeue() {
        drained.push(item.priority);
    }
    assert_eq!(drained, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn equal_priorities_dequeue_in_insertion_order() {
    let mut queue = PriorityQueue::new();
    for label in 0..8 {
        queue.enqueue(item(label, 1));
    }
    for label in 0..8 {
        assert_eq!(queue.dequeue().unwrap().label, label);
    }
}

#[test]
fn peek_does_not_remove() {
    let mut queue = PriorityQueue::new();
    queue.enqueue(item(0, 3));
    queue.enqueue(item(1, 1));
    queue.enqueue(item(2, 2));
    assert_eq!(queue.peek().unwrap().label, 1);
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.dequeue().unwrap().label, 1);
    assert_eq!(queue.len(), 2);
}

#[test]
fn dequeue_empty() {
    let mut queue: PriorityQueue<Item> = PriorityQueue::new();
    assert_eq!(queue.dequeue(), None);
    assert!(queue.is_empty());
}

#[test]
fn clear() {
    let mut queue = PriorityQueue::new();
    queue.enqueue(item(0, 1));
    queue.enqueue(item(1, 2));
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.dequeue(), None);
}

#[test]
fn interleaved_operations() {
    let mut queue = PriorityQueue::new();
    for &priority in [4, 8, 1, 9, 2].iter() {
        queue.enqueue(item(priority, priority));
    }
    assert_eq!(queue.dequeue().unwrap().priority, 1);
    assert_eq!(queue.dequeue().unwrap().priority, 2);
    for &priority in [3, 0, 7].iter() {
        queue.enqueue(item(priority, priority));
    }
    let mut drained = Vec::new();
    while let Some(item) = queue.dequeue() {
        drained.push(item.priority);
    }
    assert_eq!(drained, vec![0, 3, 4, 7, 8, 9]);
}

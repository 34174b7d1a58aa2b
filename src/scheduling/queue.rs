//! Insertion-sorted priority queue with the tail as highest priority.

/// A priority queue backed by an insertion-sorted `Vec`.
///
/// `precedes(a, b)` returns `true` when `a` must be served before `b`. New
/// items are placed by scanning backward from the tail past every item they
/// do not precede, so the tail always holds the next item to serve and items
/// with equal keys are served in insertion order.
///
/// # Examples
///
/// ```
/// use u_dispatch::scheduling::PriorityQueue;
///
/// let mut q = PriorityQueue::new(|a: &u32, b: &u32| a < b);
/// for v in [5, 1, 3] {
///     q.push(v);
/// }
/// assert_eq!(q.pop(), Some(1));
/// assert_eq!(q.pop(), Some(3));
/// assert_eq!(q.pop(), Some(5));
/// assert_eq!(q.pop(), None);
/// ```
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    items: Vec<T>,
    precedes: fn(&T, &T) -> bool,
}

impl<T> PriorityQueue<T> {
    /// Creates an empty queue ordered by `precedes`.
    pub fn new(precedes: fn(&T, &T) -> bool) -> Self {
        Self {
            items: Vec::new(),
            precedes,
        }
    }

    /// Inserts an item at its priority position.
    pub fn push(&mut self, item: T) {
        let mut pos = self.items.len();
        while pos > 0 && !(self.precedes)(&item, &self.items[pos - 1]) {
            pos -= 1;
        }
        self.items.insert(pos, item);
    }

    /// Removes and returns the highest-priority item.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// The highest-priority item, if any.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_priority_order() {
        let mut q = PriorityQueue::new(|a: &i32, b: &i32| a < b);
        q.extend([4, 9, 1, 7, 3]);
        let order: Vec<_> = std::iter::from_fn(|| q.pop()).collect();
        assert_eq!(order, vec![1, 3, 4, 7, 9]);
    }

    #[test]
    fn test_ties_served_in_insertion_order() {
        let mut q = PriorityQueue::new(|a: &(u32, char), b: &(u32, char)| a.0 < b.0);
        q.extend([(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (2, 'e')]);
        let order: Vec<char> = std::iter::from_fn(|| q.pop()).map(|(_, c)| c).collect();
        assert_eq!(order, vec!['b', 'd', 'a', 'c', 'e']);
    }

    #[test]
    fn test_descending_order() {
        let mut q = PriorityQueue::new(|a: &u64, b: &u64| a > b);
        q.extend([50, 200, 100]);
        assert_eq!(q.peek(), Some(&200));
        assert_eq!(q.len(), 3);
        assert_eq!(q.pop(), Some(200));
        assert_eq!(q.pop(), Some(100));
    }

    #[test]
    fn test_empty() {
        let mut q: PriorityQueue<u8> = PriorityQueue::new(|a, b| a < b);
        assert!(q.is_empty());
        assert_eq!(q.peek(), None);
        assert_eq!(q.pop(), None);
    }
}

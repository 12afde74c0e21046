/// Array-backed binary min-heap. The smallest element by `Ord` sits at index 0.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    pub elements: Vec<T>,
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap { elements: vec![] }
    }

    pub fn heap_size(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn parent(&self, i: usize) -> usize {
        (i - 1) / 2
    }

    pub fn left(&self, i: usize) -> usize {
        2 * i + 1
    }

    pub fn right(&self, i: usize) -> usize {
        2 * i + 2
    }
}

impl<T: Ord> MinHeap<T> {
    pub fn build(source: Vec<T>) -> Self {
        let mut heap = MinHeap { elements: source };
        let n = heap.heap_size();
        for i in (0..n / 2).rev() {
            heap.min_heapify(i);
        }
        heap
    }

    pub fn valid_min_heap(&self) -> bool {
        (1..self.heap_size()).all(|i| self.elements[self.parent(i)] <= self.elements[i])
    }

    /// Sifts the element at `i` down until both children are no smaller.
    pub fn min_heapify(&mut self, mut i: usize) {
        let n = self.heap_size();
        loop {
            let l = self.left(i);
            let r = self.right(i);
            let mut smallest = i;

            if l < n && self.elements[l] < self.elements[smallest] {
                smallest = l;
            }
            if r < n && self.elements[r] < self.elements[smallest] {
                smallest = r;
            }
            if smallest == i {
                return;
            }
            self.elements.swap(i, smallest);
            i = smallest;
        }
    }

    pub fn insert(&mut self, value: T) {
        self.elements.push(value);
        let mut i = self.heap_size() - 1;
        while i > 0 {
            let p = self.parent(i);
            if self.elements[p] <= self.elements[i] {
                break;
            }
            self.elements.swap(i, p);
            i = p;
        }
    }

    pub fn extract_min(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let last = self.heap_size() - 1;
        self.elements.swap(0, last);
        let result = self.elements.pop();
        self.min_heapify(0);
        result
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

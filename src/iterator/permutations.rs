/// Lazily yields every ordering of a fixed-size array.
///
/// Orderings are emitted in lexicographic order of the original indices, so
/// `[x, y, z]` yields `[x, y, z]`, `[x, z, y]`, `[y, x, z]`, ... Equal values
/// are not deduplicated: an array of length `N` always yields `N!` items.
#[derive(Debug, Clone)]
pub struct Permutations<T, const N: usize> {
    items: [T; N],
    indices: [usize; N],
    exhausted: bool,
}

impl<T: Copy, const N: usize> Permutations<T, N> {
    pub fn new(items: [T; N]) -> Self {
        Self {
            items,
            indices: std::array::from_fn(|i| i),
            exhausted: false,
        }
    }

    fn current(&self) -> [T; N] {
        std::array::from_fn(|i| self.items[self.indices[i]])
    }

    /// Step `indices` to the next permutation in lexicographic order
    fn advance(&mut self) {
        let Some(pivot) = self.indices.windows(2).rposition(|pair| pair[0] < pair[1]) else {
            self.exhausted = true;
            return;
        };

        let pivot_value = self.indices[pivot];
        if let Some(successor) = self.indices.iter().rposition(|&i| i > pivot_value) {
            self.indices.swap(pivot, successor);
        }
        self.indices[pivot + 1..].reverse();
    }
}

impl<T: Copy, const N: usize> Iterator for Permutations<T, N> {
    type Item = [T; N];

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let permutation = self.current();
        self.advance();
        Some(permutation)
    }
}

impl<T: Copy, const N: usize> std::iter::FusedIterator for Permutations<T, N> {}

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

use crate::deque::block::{Block, Slot};
use crate::deque::Deque;

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T: PartialOrd> PartialOrd for Deque<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for Deque<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for Deque<T> {
    /// Deep-clones every block and slot of the source, preserving the
    /// block boundaries. The clone has its own identity and keys: nothing
    /// is shared, and cursors from the source are foreign to it.
    fn clone(&self) -> Self {
        let mut clone = Self::with_chunk_size(self.chunk);
        clone.adopt_blocks(self);
        clone
    }

    /// Releases the target's structure first, then clones, keeping the
    /// target's identity. Cursors into the previous contents go stale.
    fn clone_from(&mut self, source: &Self) {
        self.chunk = source.chunk;
        self.adopt_blocks(source);
    }
}

impl<T: Clone> Deque<T> {
    /// Replace own contents with a block-for-block copy of `source`, under
    /// fresh keys.
    fn adopt_blocks(&mut self, source: &Self) {
        self.blocks.clear();
        for block in &source.blocks {
            let key = self.fresh_key();
            let mut slots = VecDeque::with_capacity(block.len());
            for slot in &block.slots {
                let slot_key = self.fresh_key();
                slots.push_back(Slot {
                    key: slot_key,
                    value: slot.value.clone(),
                });
            }
            self.blocks.push_back(Block { key, slots });
        }
        self.len = source.len;
    }
}

/// The hash covers the element sequence and its length only, so two deques
/// that compare equal hash equally regardless of how their blocks happen
/// to be cut.
impl<T: Hash> Hash for Deque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T> Deque<T> {
    /// Returns `true` if the deque contains an element equal to the given
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// use chunked_deque::Deque;
    ///
    /// let deque = Deque::from([0, 1, 2]);
    /// assert_eq!(deque.contains(&0), true);
    /// assert_eq!(deque.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Copies the elements into a `Vec` in order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Moves the elements into a `Vec` in order.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::Deque;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equality_ignores_block_layout() {
        let mut fine = Deque::with_chunk_size(4);
        fine.extend(0..20);
        let mut coarse = Deque::with_chunk_size(512);
        coarse.extend(0..20);

        assert_eq!(fine, coarse);
        assert_eq!(hash_of(&fine), hash_of(&coarse));

        coarse.push_back(20);
        assert_ne!(fine, coarse);
        assert!(fine < coarse);
    }

    #[test]
    fn clone_is_deep() {
        let mut original: Deque<i32> = (0..100).collect();
        let mut copy = original.clone();
        assert_eq!(original, copy);

        copy.push_back(100);
        *copy.at_mut(0).unwrap() = -1;
        assert_eq!(original.at(0), Ok(&0));
        assert_eq!(original.len(), 100);

        original.pop_front().unwrap();
        assert_eq!(copy.at(0), Ok(&-1));
        assert_eq!(copy.len(), 101);
    }

    #[test]
    fn clone_preserves_block_boundaries() {
        let mut original = Deque::with_chunk_size(8);
        original.extend(0..30);
        let copy = original.clone();
        assert_eq!(original.block_lengths(), copy.block_lengths());
        copy.assert_invariants();
    }

    #[test]
    fn cursors_do_not_cross_into_clones() {
        let original: Deque<i32> = (0..10).collect();
        let copy = original.clone();
        let cursor = original.cursor(3).unwrap();
        assert!(copy.get(cursor).is_err());
        assert_ne!(cursor, copy.cursor(3).unwrap());
    }

    #[test]
    fn clone_from_releases_target() {
        let source: Deque<i32> = (0..5).collect();
        let mut target: Deque<i32> = (10..40).collect();
        let stale = target.cursor(0).unwrap();
        target.clone_from(&source);
        assert_eq!(target, source);
        assert!(target.get(stale).is_err());
    }

    #[test]
    fn contains_and_vec_conversions() {
        let deque = Deque::from([1, 2, 3]);
        assert!(deque.contains(&2));
        assert!(!deque.contains(&9));
        assert_eq!(deque.to_vec(), vec![1, 2, 3]);
        assert_eq!(deque.into_vec(), vec![1, 2, 3]);
    }
}

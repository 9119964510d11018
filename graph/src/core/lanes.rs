use smallvec::SmallVec;

/// A lane represents a vertical column in the graph
pub type Lane = usize;

const WORD_BITS: usize = u64::BITS as usize;

/// Set of lanes backed by a bitset.
///
/// Most rows touch only a handful of lanes, so two inline words cover 128
/// lanes before the set spills to the heap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaneSet {
    words: SmallVec<[u64; 2]>,
}

impl LaneSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, lane: Lane) {
        let word = lane / WORD_BITS;
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        self.words[word] |= 1 << (lane % WORD_BITS);
    }

    /// Insert every lane between `a` and `b`, inclusive, in either order
    pub fn insert_span(&mut self, a: Lane, b: Lane) {
        for lane in a.min(b)..=a.max(b) {
            self.insert(lane);
        }
    }

    pub fn contains(&self, lane: Lane) -> bool {
        self.words
            .get(lane / WORD_BITS)
            .map(|word| word & (1 << (lane % WORD_BITS)) != 0)
            .unwrap_or(false)
    }

    /// Smallest lane not in the set
    pub fn first_vacant(&self) -> Lane {
        for (idx, word) in self.words.iter().enumerate() {
            if *word != u64::MAX {
                return idx * WORD_BITS + word.trailing_ones() as usize;
            }
        }
        self.words.len() * WORD_BITS
    }

    /// Smallest lane in neither `self` nor `other`
    pub fn first_vacant_in_both(&self, other: &LaneSet) -> Lane {
        let len = self.words.len().max(other.words.len());
        for idx in 0..len {
            let word = self.words.get(idx).copied().unwrap_or(0)
                | other.words.get(idx).copied().unwrap_or(0);
            if word != u64::MAX {
                return idx * WORD_BITS + word.trailing_ones() as usize;
            }
        }
        len * WORD_BITS
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|word| *word == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let mut set = LaneSet::new();
        assert!(set.is_empty());
        assert!(!set.contains(3));

        set.insert(3);
        set.insert(200);
        assert!(set.contains(3));
        assert!(set.contains(200));
        assert!(!set.contains(4));
        assert!(!set.contains(199));
        assert!(!set.is_empty());
    }

    #[test]
    fn span_is_inclusive_in_either_direction() {
        let mut set = LaneSet::new();
        set.insert_span(4, 2);
        assert!(set.contains(2));
        assert!(set.contains(3));
        assert!(set.contains(4));
        assert!(!set.contains(1));
        assert!(!set.contains(5));
    }

    #[test]
    fn first_vacant_skips_filled_words() {
        let mut set = LaneSet::new();
        assert_eq!(set.first_vacant(), 0);

        set.insert_span(0, 63);
        assert_eq!(set.first_vacant(), 64);

        set.insert(64);
        set.insert(66);
        assert_eq!(set.first_vacant(), 65);
    }

    #[test]
    fn first_vacant_in_both_unions_sets() {
        let mut taken = LaneSet::new();
        let mut occupied = LaneSet::new();
        taken.insert(0);
        occupied.insert(1);
        taken.insert(3);
        assert_eq!(taken.first_vacant_in_both(&occupied), 2);

        occupied.insert(2);
        assert_eq!(taken.first_vacant_in_both(&occupied), 4);
        assert_eq!(occupied.first_vacant_in_both(&taken), 4);
    }
}

//! Fixed-universe bit set
//!
//! Bit positions live in `[0, universe)`. Storage is a word vector sized once
//! at construction.

const WORD_BITS: usize = u64::BITS as usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitSet {
    words: Vec<u64>,
    universe: usize,
}

impl BitSet {
    /// Create an empty set able to hold positions `0..universe`
    pub fn new(universe: usize) -> Self {
        Self {
            words: vec![0; universe.div_ceil(WORD_BITS)],
            universe,
        }
    }

    /// Number of addressable positions
    pub fn universe(&self) -> usize {
        self.universe
    }

    /// Set `pos`. Returns true if it was not already set.
    ///
    /// Positions outside the universe are rejected.
    pub fn insert(&mut self, pos: usize) -> bool {
        if pos >= self.universe {
            return false;
        }
        let (word, mask) = Self::locate(pos);
        let was_set = self.words[word] & mask != 0;
        self.words[word] |= mask;
        !was_set
    }

    /// Clear `pos`. Returns true if it was set.
    pub fn remove(&mut self, pos: usize) -> bool {
        if !self.contains(pos) {
            return false;
        }
        let (word, mask) = Self::locate(pos);
        self.words[word] &= !mask;
        true
    }

    pub fn contains(&self, pos: usize) -> bool {
        if pos >= self.universe {
            return false;
        }
        let (word, mask) = Self::locate(pos);
        self.words[word] & mask != 0
    }

    /// Number of set positions
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Iterate set positions in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &word)| {
            let mut bits = word;
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let offset = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(i * WORD_BITS + offset)
            })
        })
    }

    fn locate(pos: usize) -> (usize, u64) {
        (pos / WORD_BITS, 1u64 << (pos % WORD_BITS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insert_remove() {
        let mut set = BitSet::new(10);
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert!(set.contains(3));
        assert_eq!(set.len(), 1);
        assert!(set.remove(3));
        assert!(!set.remove(3));
        assert!(set.is_empty());
    }

    #[test]
    fn test_out_of_universe() {
        let mut set = BitSet::new(10);
        assert!(!set.insert(10));
        assert!(!set.contains(10));
        assert!(!set.remove(42));
        assert!(set.is_empty());
    }

    #[test]
    fn test_iter_ascending_across_words() {
        let mut set = BitSet::new(200);
        for pos in [130, 1, 64, 63, 0, 199] {
            set.insert(pos);
        }
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 1, 63, 64, 130, 199]);
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn test_zero_universe() {
        let mut set = BitSet::new(0);
        assert!(!set.insert(0));
        assert!(set.is_empty());
    }
}

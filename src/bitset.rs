//! Fixed-width bit set used as the exponent vector of a monomial.
//!
//! Bit `i` is set iff variable `i` occurs in the monomial. The width is fixed
//! at construction (the ring size) and two sets are only combined when their
//! widths agree; callers check that before reaching this module.

use std::cmp::Ordering;

/// A fixed-width bit set backed by a vector of u64 words.
///
/// Unused high bits of the last word are always clear, so derived equality
/// and hashing agree with set equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitSet {
    /// Storage: each u64 holds 64 bits.
    words: Vec<u64>,
    /// Number of addressable bits.
    width: usize,
}

impl BitSet {
    /// Number of bits per word.
    const BITS_PER_WORD: usize = 64;

    /// Creates an empty bit set able to hold `width` bits.
    pub fn new(width: usize) -> Self {
        let num_words = width.div_ceil(Self::BITS_PER_WORD);
        Self {
            words: vec![0; num_words],
            width,
        }
    }

    /// Returns the number of addressable bits.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of set bits.
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    #[inline]
    fn word_and_bit(index: usize) -> (usize, usize) {
        (index / Self::BITS_PER_WORD, index % Self::BITS_PER_WORD)
    }

    /// Returns true if the bit at the given index is set.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        if index >= self.width {
            return false;
        }
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        (self.words[word_idx] >> bit_idx) & 1 != 0
    }

    /// Sets the bit at the given index. Returns true if the bit was not previously set.
    ///
    /// # Panics
    ///
    /// Panics if `index >= width`.
    #[inline]
    pub fn insert(&mut self, index: usize) -> bool {
        assert!(
            index < self.width,
            "bit index {} is out of range for width {}",
            index,
            self.width
        );
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        let mask = 1u64 << bit_idx;
        let was_clear = self.words[word_idx] & mask == 0;
        self.words[word_idx] |= mask;
        was_clear
    }

    /// Clears the bit at the given index. Returns true if the bit was previously set.
    #[inline]
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.width {
            return false;
        }
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        let mask = 1u64 << bit_idx;
        let was_set = self.words[word_idx] & mask != 0;
        self.words[word_idx] &= !mask;
        was_set
    }

    /// Returns `self ∪ other`.
    pub fn union(&self, other: &BitSet) -> BitSet {
        debug_assert_eq!(self.width, other.width);
        let words = self.words.iter().zip(&other.words).map(|(a, b)| a | b).collect();
        BitSet { words, width: self.width }
    }

    /// Returns `self ∖ other`.
    pub fn difference(&self, other: &BitSet) -> BitSet {
        debug_assert_eq!(self.width, other.width);
        let words = self.words.iter().zip(&other.words).map(|(a, b)| a & !b).collect();
        BitSet { words, width: self.width }
    }

    /// Returns true if every bit of `self` is also set in `other`.
    pub fn is_subset(&self, other: &BitSet) -> bool {
        debug_assert_eq!(self.width, other.width);
        self.words.iter().zip(&other.words).all(|(a, b)| a & !b == 0)
    }

    /// Returns true if `self` and `other` have no bit in common.
    pub fn is_disjoint(&self, other: &BitSet) -> bool {
        debug_assert_eq!(self.width, other.width);
        self.words.iter().zip(&other.words).all(|(a, b)| a & b == 0)
    }

    /// Returns the lowest index at which `self` and `other` differ.
    pub fn first_difference(&self, other: &BitSet) -> Option<usize> {
        debug_assert_eq!(self.width, other.width);
        self.words
            .iter()
            .zip(&other.words)
            .enumerate()
            .find(|(_, (a, b))| a != b)
            .map(|(i, (a, b))| i * Self::BITS_PER_WORD + (a ^ b).trailing_zeros() as usize)
    }

    /// Compares two sets lexicographically with bit 0 most significant:
    /// at the lowest differing bit, the set that holds it is greater.
    pub fn lex_cmp(&self, other: &BitSet) -> Ordering {
        match self.first_difference(other) {
            None => Ordering::Equal,
            Some(i) if self.contains(i) => Ordering::Greater,
            Some(_) => Ordering::Less,
        }
    }

    /// Extends the bit set by setting all bits from an iterator.
    pub fn extend(&mut self, iter: impl IntoIterator<Item = usize>) {
        for index in iter {
            self.insert(index);
        }
    }

    /// Returns an iterator over all set bit indices, in ascending order.
    pub fn iter(&self) -> BitSetIter<'_> {
        BitSetIter {
            bitset: self,
            word_idx: 0,
            current_word: self.words.first().copied().unwrap_or(0),
        }
    }
}

/// Iterator over set bits in a BitSet.
pub struct BitSetIter<'a> {
    bitset: &'a BitSet,
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitSetIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word != 0 {
                let bit_idx = self.current_word.trailing_zeros() as usize;
                self.current_word &= self.current_word - 1; // Clear lowest set bit
                return Some(self.word_idx * BitSet::BITS_PER_WORD + bit_idx);
            }

            self.word_idx += 1;
            if self.word_idx >= self.bitset.words.len() {
                return None;
            }
            self.current_word = self.bitset.words[self.word_idx];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(width: usize, bits: &[usize]) -> BitSet {
        let mut bs = BitSet::new(width);
        bs.extend(bits.iter().copied());
        bs
    }

    #[test]
    fn test_empty() {
        let bs = BitSet::new(100);
        assert!(bs.is_empty());
        assert_eq!(bs.len(), 0);
        assert!(!bs.contains(0));
        assert!(!bs.contains(100));
    }

    #[test]
    fn test_insert_remove() {
        let mut bs = BitSet::new(100);
        assert!(bs.insert(42));
        assert!(bs.contains(42));
        assert!(!bs.insert(42));
        assert_eq!(bs.len(), 1);
        assert!(bs.remove(42));
        assert!(!bs.remove(42));
        assert!(bs.is_empty());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_insert_out_of_range() {
        let mut bs = BitSet::new(4);
        bs.insert(4);
    }

    #[test]
    fn test_iter_across_words() {
        let bs = set(130, &[5, 10, 3, 64, 65, 129]);
        let indices: Vec<_> = bs.iter().collect();
        assert_eq!(indices, vec![3, 5, 10, 64, 65, 129]);
    }

    #[test]
    fn test_set_algebra() {
        let ab = set(4, &[0, 1]);
        let bc = set(4, &[1, 2]);
        assert_eq!(ab.union(&bc), set(4, &[0, 1, 2]));
        assert_eq!(ab.difference(&bc), set(4, &[0]));
        assert!(set(4, &[1]).is_subset(&ab));
        assert!(!bc.is_subset(&ab));
        assert!(!ab.is_disjoint(&bc));
        assert!(set(4, &[0]).is_disjoint(&set(4, &[3])));
    }

    #[test]
    fn test_lex_cmp() {
        let a = set(70, &[0]);
        let b = set(70, &[1]);
        let ab = set(70, &[0, 1]);
        let far = set(70, &[69]);
        assert_eq!(a.lex_cmp(&b), Ordering::Greater);
        assert_eq!(ab.lex_cmp(&a), Ordering::Greater);
        assert_eq!(b.lex_cmp(&far), Ordering::Greater);
        assert_eq!(far.lex_cmp(&BitSet::new(70)), Ordering::Greater);
        assert_eq!(ab.lex_cmp(&ab.clone()), Ordering::Equal);
        assert_eq!(a.first_difference(&far), Some(0));
    }
}

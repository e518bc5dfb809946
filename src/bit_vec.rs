/// Packed table of booleans, one bit per entry.
///
/// In Rust a bool is represented with a single byte. Keeping a vector of bits saves eight times
/// the memory compared to a vector of bools representing the same table, although access costs
/// a couple extra CPU cycles due to bit operations.
///
/// A BitVec is also an iterator over the indices of its set bits in ascending order. Iteration
/// keeps a cursor, so bits at or after the cursor may still be modified between calls to next().
pub struct BitVec {
    bit_vec: Vec<u64>,
    word_index: usize,
    bit_index: usize,
}

impl Iterator for BitVec {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let word = self.bit_vec.get(self.word_index)?;
            let masked_word = word & BitVec::greater_or_equal_bits(self.bit_index);
            match BitVec::find_first_set(masked_word) {
                Some(bit_index) => {
                    let result = (self.word_index << BitVec::SHIFT) + bit_index;
                    if bit_index + 1 == BitVec::WORD_BITS {
                        self.word_index += 1;
                        self.bit_index = 0;
                    } else {
                        self.bit_index = bit_index + 1;
                    }
                    return Some(result);
                }
                None => {
                    self.word_index += 1;
                    self.bit_index = 0;
                }
            }
        }
    }
}

impl BitVec {
    const WORD_BITS: usize = 64;
    const SHIFT: usize = 6;
    const MASK: usize = 0b11_1111;
    const ONES: u64 = std::u64::MAX;

    /// Create a BitVec of len bits, all set.
    pub fn ones(len: usize) -> BitVec {
        let mut bit_vec = vec![BitVec::ONES; ceil_div(len, BitVec::WORD_BITS)];
        // Clear the tail of the last word so iteration never yields indices >= len.
        if let Some(end) = bit_vec.get_mut(len >> BitVec::SHIFT) {
            *end &= !BitVec::greater_or_equal_bits(len & BitVec::MASK);
        }
        BitVec::from_words(bit_vec)
    }

    /// Create a BitVec of len bits, all unset.
    pub fn zeros(len: usize) -> BitVec {
        BitVec::from_words(vec![0; ceil_div(len, BitVec::WORD_BITS)])
    }

    fn from_words(bit_vec: Vec<u64>) -> BitVec {
        BitVec {
            bit_vec,
            word_index: 0,
            bit_index: 0,
        }
    }

    #[inline]
    pub fn get(&self, index: usize) -> bool {
        self.bit_vec[index >> BitVec::SHIFT] & BitVec::bit(index) != 0
    }

    #[inline]
    pub fn set(&mut self, index: usize) {
        self.bit_vec[index >> BitVec::SHIFT] |= BitVec::bit(index)
    }

    #[inline]
    pub fn unset(&mut self, index: usize) {
        self.bit_vec[index >> BitVec::SHIFT] &= !BitVec::bit(index)
    }

    #[inline]
    pub fn toggle(&mut self, index: usize) {
        self.bit_vec[index >> BitVec::SHIFT] ^= BitVec::bit(index)
    }

    /// Skip the iterator cursor forward to index. Moving backward is a no-op.
    pub fn skip_to(&mut self, index: usize) {
        let word_index = index >> BitVec::SHIFT;
        let bit_index = index & BitVec::MASK;
        if (word_index, bit_index) > (self.word_index, self.bit_index) {
            self.word_index = word_index;
            self.bit_index = bit_index;
        }
    }

    /// Find the first set bit at or after index.
    pub fn find(&self, index: usize) -> Option<usize> {
        let first_word_index = index >> BitVec::SHIFT;
        let words = self.bit_vec.get(first_word_index..)?;
        for (word_index, &word) in words.iter().enumerate() {
            let masked_word = if word_index == 0 {
                word & BitVec::greater_or_equal_bits(index & BitVec::MASK)
            } else {
                word
            };
            if let Some(bit_index) = BitVec::find_first_set(masked_word) {
                return Some(((first_word_index + word_index) << BitVec::SHIFT) + bit_index);
            }
        }
        None
    }

    #[inline]
    fn bit(index: usize) -> u64 {
        1 << (index & BitVec::MASK)
    }

    #[inline]
    fn greater_or_equal_bits(bit_index: usize) -> u64 {
        BitVec::ONES << bit_index
    }

    /// Find the first set bit in word. This index is equal to the number of word's trailing zeros.
    fn find_first_set(word: u64) -> Option<usize> {
        if word == 0 {
            return None;
        }
        Some(word.trailing_zeros() as usize)
    }
}

pub fn ceil_div(numerator: usize, denominator: usize) -> usize {
    numerator / denominator + (numerator % denominator != 0) as usize
}

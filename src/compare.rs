use std::fmt;

/// First position at which two prime sequences disagree.
///
/// A side is None when that sequence ended before index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Divergence {
    pub index: usize,
    pub left: Option<u64>,
    pub right: Option<u64>,
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let show = |side: Option<u64>| match side {
            Some(p) => p.to_string(),
            None => String::from("<end>"),
        };
        write!(
            f,
            "sequences differ at index {}: {} != {}",
            self.index,
            show(self.left),
            show(self.right)
        )
    }
}

/// True iff both sequences have the same length and the same elements in the same order.
pub fn same_primes(left: &[u64], right: &[u64]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    left.iter().zip(right.iter()).all(|(l, r)| l == r)
}

pub fn first_divergence(left: &[u64], right: &[u64]) -> Option<Divergence> {
    let mut left_iter = left.iter().copied();
    let mut right_iter = right.iter().copied();
    let mut index = 0;
    loop {
        match (left_iter.next(), right_iter.next()) {
            (None, None) => return None,
            (l, r) if l == r => index += 1,
            (left, right) => return Some(Divergence { index, left, right }),
        }
    }
}

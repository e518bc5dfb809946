use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::error::SieveError;

/// Inclusive upper bound for a sieve.
///
/// Construction rejects negative numbers and anything above Limit::MAX, the largest limit for
/// which the sieves' index arithmetic (up to 5 * limit in the sieve of Atkin) fits in a usize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Limit(usize);

impl Limit {
    pub const MAX: usize = usize::MAX / 5;

    pub fn new(limit: i64) -> Result<Limit, SieveError> {
        if limit < 0 {
            return Err(SieveError::InvalidArgument(format!(
                "limit must be non-negative, got {}",
                limit
            )));
        }
        match usize::try_from(limit) {
            Ok(limit) if limit <= Limit::MAX => Ok(Limit(limit)),
            _ => Err(SieveError::InvalidArgument(format!(
                "limit {} exceeds the maximum of {}",
                limit,
                Limit::MAX
            ))),
        }
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Number of entries in a sieve table covering [0, limit].
    pub fn table_len(self) -> usize {
        self.0 + 1
    }

    /// Largest r with r * r <= limit.
    pub fn isqrt(self) -> usize {
        isqrt(self.0 as u64) as usize
    }
}

impl TryFrom<i64> for Limit {
    type Error = SieveError;

    fn try_from(limit: i64) -> Result<Self, Self::Error> {
        Limit::new(limit)
    }
}

impl FromStr for Limit {
    type Err = SieveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let limit = s.trim().parse::<i64>().map_err(|e| {
            SieveError::InvalidArgument(format!("limit {:?} is not an integer: {}", s, e))
        })?;
        Limit::new(limit)
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integer square root by Newton's method, so large limits don't suffer float rounding.
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut x = n / 2 + 1;
    let mut y = (x + n / x) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

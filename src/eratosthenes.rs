use log::debug;

use crate::bit_vec::BitVec;
use crate::error::SieveError;
use crate::limit::Limit;

/// Sieve of Eratosthenes over the table [0, limit]
///
/// Every entry starts out as a possible prime. For each p with p * p <= limit that is still
/// unstruck, strike its multiples from p * p onward; smaller multiples were already struck by a
/// smaller prime factor. Whatever survives in [2, limit] is prime.
///
/// Usage:
///
///     use sieves::Eratosthenes;
///
///     assert_eq!(vec![2, 3, 5, 7], Eratosthenes::new(10)?.collect::<Vec<_>>());
///     # Ok::<(), sieves::SieveError>(())
pub struct Eratosthenes {
    table: BitVec,
}

impl Eratosthenes {
    pub fn new(limit: i64) -> Result<Eratosthenes, SieveError> {
        Ok(Eratosthenes::from(Limit::new(limit)?))
    }

    fn strike_composites(&mut self, limit: usize) {
        let mut candidate = self.table.find(2);
        while let Some(p) = candidate {
            if p * p > limit {
                break;
            }
            let mut multiple = p * p;
            while multiple <= limit {
                self.table.unset(multiple);
                multiple += p;
            }
            candidate = self.table.find(p + 1);
        }
    }
}

impl From<Limit> for Eratosthenes {
    fn from(limit: Limit) -> Eratosthenes {
        let table = BitVec::ones(limit.table_len());
        let mut sieve = Eratosthenes { table };
        sieve.strike_composites(limit.get());
        // 0 and 1 are never prime, whatever the table says about them.
        sieve.table.skip_to(2);
        sieve
    }
}

impl Iterator for Eratosthenes {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.table.next().map(|p| p as u64)
    }
}

/// All primes in [2, limit] by the sieve of Eratosthenes.
pub fn eratosthenes(limit: i64) -> Result<Vec<u64>, SieveError> {
    let primes = Eratosthenes::new(limit)?.collect::<Vec<_>>();
    debug!(
        "Sieve of Eratosthenes found {} primes up to {}",
        primes.len(),
        limit
    );
    Ok(primes)
}

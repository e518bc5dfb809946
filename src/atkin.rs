use log::debug;

use crate::bit_vec::BitVec;
use crate::error::SieveError;
use crate::limit::Limit;

/// Sieve of Atkin over the table [0, limit]
///
/// Every entry starts out as not prime. A square-free n > 3 is prime exactly when it has an odd
/// number of representations by the quadratic form matching its residue mod 12:
///
/// ```text
/// n mod 12 in {1, 5}:  n = 4x^2 + y^2
/// n mod 12 == 7:       n = 3x^2 + y^2
/// n mod 12 == 11:      n = 3x^2 - y^2, x > y
/// ```
///
/// so we toggle n once per representation with 1 <= x, y <= sqrt(limit). Parity leaves some
/// non-square-free numbers set, which we then clear by striking multiples of r^2 for every
/// surviving r >= 5. No number coprime to 6 is divisible by 4 or 9, so r = 2, 3 never matter.
///
/// The forms never produce 2 or 3, since neither is coprime to 12. Both are included explicitly.
///
/// Limit::MAX keeps 4x^2 + y^2 <= 5 * limit within a usize.
///
/// Algorithm due to A. O. L. Atkin and D. J. Bernstein's 2004 "Prime sieves using binary
/// quadratic forms":
/// - https://www.ams.org/journals/mcom/2004-73-246/S0025-5718-03-01501-1/
pub struct Atkin {
    table: BitVec,
}

impl Atkin {
    pub fn new(limit: i64) -> Result<Atkin, SieveError> {
        Ok(Atkin::from(Limit::new(limit)?))
    }

    fn toggle_quadratic_forms(&mut self, limit: usize, sqrt_limit: usize) {
        for x in 1..=sqrt_limit {
            let x_squared = x * x;
            for y in 1..=sqrt_limit {
                let y_squared = y * y;

                let n = 4 * x_squared + y_squared;
                if n <= limit && (n % 12 == 1 || n % 12 == 5) {
                    self.table.toggle(n);
                }

                let n = 3 * x_squared + y_squared;
                if n <= limit && n % 12 == 7 {
                    self.table.toggle(n);
                }

                if x > y {
                    let n = 3 * x_squared - y_squared;
                    if n <= limit && n % 12 == 11 {
                        self.table.toggle(n);
                    }
                }
            }
        }
    }

    fn strike_square_multiples(&mut self, limit: usize, sqrt_limit: usize) {
        for r in 5..=sqrt_limit {
            if self.table.get(r) {
                let r_squared = r * r;
                let mut multiple = r_squared;
                while multiple <= limit {
                    self.table.unset(multiple);
                    multiple += r_squared;
                }
            }
        }
    }
}

impl From<Limit> for Atkin {
    fn from(limit: Limit) -> Atkin {
        let table = BitVec::zeros(limit.table_len());
        let mut sieve = Atkin { table };
        sieve.toggle_quadratic_forms(limit.get(), limit.isqrt());
        sieve.strike_square_multiples(limit.get(), limit.isqrt());
        for &p in &[2, 3] {
            if p <= limit.get() {
                sieve.table.set(p);
            }
        }
        sieve.table.skip_to(2);
        sieve
    }
}

impl Iterator for Atkin {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.table.next().map(|p| p as u64)
    }
}

/// All primes in [2, limit] by the sieve of Atkin.
pub fn atkin(limit: i64) -> Result<Vec<u64>, SieveError> {
    let primes = Atkin::new(limit)?.collect::<Vec<_>>();
    debug!("Sieve of Atkin found {} primes up to {}", primes.len(), limit);
    Ok(primes)
}

//! Library for checking sieve output against trial division

use crate::limit::isqrt;

/// Trial division by 2 and odd d <= sqrt(n).
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let root = isqrt(n);
    (3..=root).step_by(2).all(|d| n % d != 0)
}

/// Check that primes is exactly the strictly increasing sequence of primes in [2, limit].
///
/// Returns the first offending number: a composite that made it in, a repeat or out-of-order
/// entry, or a prime that was left out.
pub fn audit(primes: &[u64], limit: u64) -> Result<(), u64> {
    let mut expected = (2..=limit).filter(|&n| is_prime(n));
    for &p in primes {
        if p > limit || !is_prime(p) {
            return Err(p);
        }
        match expected.next() {
            Some(e) if e == p => continue,
            // e < p means e was skipped. e > p means p repeats or is out of order.
            Some(e) => return Err(std::cmp::min(e, p)),
            None => return Err(p),
        }
    }
    match expected.next() {
        Some(missing) => Err(missing),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_prime_correct() {
        let primes = (0..50).filter(|&n| is_prime(n)).collect::<Vec<_>>();
        assert_eq!(
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47],
            primes
        );
        assert!(is_prime(997));
        assert!(!is_prime(999));
        assert!(!is_prime(961));
        assert!(is_prime(1_000_003));

        // Above u32::MAX: the smallest prime past 2^32, a Fermat composite, and a prime square.
        assert!(is_prime(4_294_967_311));
        assert!(!is_prime(4_294_967_297));
        assert!(!is_prime(65_537 * 65_537));
    }

    #[test]
    fn audit_correct() {
        assert_eq!(Ok(()), audit(&[], 1));
        assert_eq!(Ok(()), audit(&[2, 3, 5, 7], 10));
        assert_eq!(Err(7), audit(&[2, 3, 5], 10));
        assert_eq!(Err(3), audit(&[2, 5, 7], 10));
        assert_eq!(Err(9), audit(&[2, 3, 5, 7, 9], 10));
        assert_eq!(Err(3), audit(&[2, 3, 3, 5, 7], 10));
        assert_eq!(Err(11), audit(&[2, 3, 5, 7, 11], 10));
    }
}

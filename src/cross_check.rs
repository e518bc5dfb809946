use std::fmt;
use std::io;

use log::{error, info};

use crate::atkin::Atkin;
use crate::compare::{first_divergence, same_primes, Divergence};
use crate::eratosthenes::Eratosthenes;
use crate::error::SieveError;
use crate::limit::Limit;

/// Primes up to the same limit from both sieves, side by side
///
/// The two sieves share nothing, so run_parallel() can hand them to separate rayon workers and
/// get the same answer as run().
///
/// Usage:
///
///     use sieves::CrossCheck;
///
///     let cross_check = CrossCheck::run(1000)?;
///     assert!(cross_check.agree());
///     assert_eq!(168, cross_check.eratosthenes.len());
///     # Ok::<(), sieves::SieveError>(())
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossCheck {
    pub limit: Limit,
    pub eratosthenes: Vec<u64>,
    pub atkin: Vec<u64>,
}

impl CrossCheck {
    pub fn run(limit: i64) -> Result<CrossCheck, SieveError> {
        Ok(CrossCheck::sequential(Limit::new(limit)?))
    }

    pub fn run_parallel(limit: i64) -> Result<CrossCheck, SieveError> {
        Ok(CrossCheck::parallel(Limit::new(limit)?))
    }

    pub fn sequential(limit: Limit) -> CrossCheck {
        let eratosthenes = Eratosthenes::from(limit).collect();
        let atkin = Atkin::from(limit).collect();

        CrossCheck::logged(limit, eratosthenes, atkin)
    }

    pub fn parallel(limit: Limit) -> CrossCheck {
        let (eratosthenes, atkin) = rayon::join(
            || Eratosthenes::from(limit).collect::<Vec<_>>(),
            || Atkin::from(limit).collect::<Vec<_>>(),
        );

        CrossCheck::logged(limit, eratosthenes, atkin)
    }

    fn logged(limit: Limit, eratosthenes: Vec<u64>, atkin: Vec<u64>) -> CrossCheck {
        let cross_check = CrossCheck {
            limit,
            eratosthenes,
            atkin,
        };
        match cross_check.divergence() {
            None => info!(
                "Both sieves found the same {} primes up to {}",
                cross_check.eratosthenes.len(),
                limit
            ),
            Some(divergence) => error!(
                "Sieves disagree up to {} (Eratosthenes vs Atkin): {}",
                limit, divergence
            ),
        }
        cross_check
    }

    pub fn agree(&self) -> bool {
        same_primes(&self.eratosthenes, &self.atkin)
    }

    pub fn divergence(&self) -> Option<Divergence> {
        first_divergence(&self.eratosthenes, &self.atkin)
    }

    /// Write both prime lists and the verdict to out, one line each.
    pub fn report<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }
}

impl fmt::Display for CrossCheck {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Primes using Sieve of Eratosthenes: {:?}",
            self.eratosthenes
        )?;
        writeln!(f, "Primes using Sieve of Atkin: {:?}", self.atkin)?;
        writeln!(
            f,
            "Both algorithms generated the same primes: {}",
            self.agree()
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_log::test;

    use super::*;

    #[test]
    fn cross_check_agrees() {
        for limit in 0..=300 {
            let cross_check = CrossCheck::run(limit).unwrap();
            assert!(cross_check.agree(), "limit {}", limit);
            assert_eq!(None, cross_check.divergence());
        }
    }

    #[test]
    fn cross_check_parallel_matches_sequential() {
        assert_eq!(
            CrossCheck::run(10_000).unwrap(),
            CrossCheck::run_parallel(10_000).unwrap()
        );
    }

    #[test]
    fn cross_check_propagates_invalid_argument() {
        assert!(matches!(
            CrossCheck::run(-5),
            Err(SieveError::InvalidArgument(_))
        ));
        assert!(matches!(
            CrossCheck::run_parallel(-5),
            Err(SieveError::InvalidArgument(_))
        ));
    }

    #[test]
    fn cross_check_reports_disagreement() {
        let cross_check = CrossCheck {
            limit: Limit::new(10).unwrap(),
            eratosthenes: vec![2, 3, 5, 7],
            atkin: vec![5, 7],
        };
        assert!(!cross_check.agree());
        assert_eq!(
            Some(Divergence {
                index: 0,
                left: Some(2),
                right: Some(5)
            }),
            cross_check.divergence()
        );

        let mut out = Vec::new();
        cross_check.report(&mut out).unwrap();
        assert_eq!(
            "Primes using Sieve of Eratosthenes: [2, 3, 5, 7]\n\
             Primes using Sieve of Atkin: [5, 7]\n\
             Both algorithms generated the same primes: false\n",
            String::from_utf8(out).unwrap()
        );
    }

    #[test]
    fn cross_check_report() {
        let mut out = Vec::new();
        CrossCheck::run(10).unwrap().report(&mut out).unwrap();
        assert_eq!(
            "Primes using Sieve of Eratosthenes: [2, 3, 5, 7]\n\
             Primes using Sieve of Atkin: [2, 3, 5, 7]\n\
             Both algorithms generated the same primes: true\n",
            String::from_utf8(out).unwrap()
        );
    }
}

// Internal modules
mod atkin;
mod bit_vec;
mod compare;
mod cross_check;
mod eratosthenes;
mod error;
mod limit;
mod primality;

pub use atkin::{atkin, Atkin};
pub use compare::{first_divergence, same_primes, Divergence};
pub use cross_check::CrossCheck;
pub use eratosthenes::{eratosthenes, Eratosthenes};
pub use error::SieveError;
pub use limit::Limit;
pub use primality::{audit, is_prime};

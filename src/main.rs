//! The sieves CLI tool

use std::io::{self, Write};
use std::process;

use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;

use sieves::{CrossCheck, Limit};

#[derive(Parser)]
#[command(name = "sieves", author, version, about, long_about = None)]
struct Cli {
    /// Inclusive upper bound for both sieves
    #[arg(default_value = "1000")]
    #[arg(allow_negative_numbers = true)]
    limit: Limit,

    /// Run the two sieves on separate threads
    #[arg(long)]
    #[arg(default_value_t = false)]
    parallel: bool,

    /// Set log filter value [ off, error, warn, info, debug, trace ]
    #[arg(long)]
    #[arg(default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> Result<(), io::Error> {
    let args = Cli::parse();

    Builder::new()
        .filter_level(args.log_level)
        .parse_default_env()
        .target(Target::Stderr)
        .init();

    let cross_check = if args.parallel {
        CrossCheck::parallel(args.limit)
    } else {
        CrossCheck::sequential(args.limit)
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cross_check.report(&mut out)?;
    out.flush()?;

    // Disagreement is already logged by CrossCheck.
    if !cross_check.agree() {
        process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults() {
        let args = Cli::try_parse_from(["sieves"]).unwrap();
        assert_eq!(1000, args.limit.get());
        assert!(!args.parallel);
        assert_eq!(LevelFilter::Info, args.log_level);
    }

    #[test]
    fn cli_flags() {
        let args =
            Cli::try_parse_from(["sieves", "250", "--parallel", "--log-level", "debug"]).unwrap();
        assert_eq!(250, args.limit.get());
        assert!(args.parallel);
        assert_eq!(LevelFilter::Debug, args.log_level);
    }

    #[test]
    fn cli_rejects_invalid_limit() {
        let err = Cli::try_parse_from(["sieves", "-3"]).err().unwrap();
        assert!(err.to_string().contains("invalid argument"));
        assert!(Cli::try_parse_from(["sieves", "3.5"]).is_err());
        assert!(Cli::try_parse_from(["sieves", "many"]).is_err());
    }
}

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{self, Write};
use thiserror::Error;

use bst::{render, Order, Tree};

/// Every extra value lands at the bottom of one chain, so each insert walks
/// all the ones before it.
const MAX_EXTRA: i64 = 10_000;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("invalid range: --min {min} is greater than --max {max}")]
    InvalidRange { min: i64, max: i64 },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Builds a balanced tree, skews it with ascending inserts and rebalances it
#[derive(Parser, Debug)]
#[command(name = "balanced-bst")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// How many random values to build the tree from
    #[arg(short, long, default_value_t = 15)]
    count: usize,

    /// Smallest random value
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    min: i64,

    /// Largest random value
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    max: i64,

    /// Seed for the random values. A random seed is used (and logged) when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Build from these values instead of random ones
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    values: Vec<i64>,

    /// How many values above the maximum to insert to unbalance the tree
    #[arg(
        short,
        long,
        default_value_t = 5,
        value_parser = clap::value_parser!(u32).range(..=MAX_EXTRA)
    )]
    extra: u32,
}

impl Cli {
    pub fn run(self) -> Result<(), DemoError> {
        let stdout = io::stdout();
        self.run_with(&mut stdout.lock())
    }

    fn run_with<W: Write>(&self, out: &mut W) -> Result<(), DemoError> {
        let values = self.input()?;
        let mut tree = Tree::build(values);
        report_balance(&tree, out)?;
        print_orders(&tree, out)?;

        let base = tree.max().copied().unwrap_or(self.max);
        let extra: Vec<i64> = (1..=self.extra)
            .map(|i| base.saturating_add(i64::from(i)))
            .collect();
        tree.extend(extra.iter().copied());
        writeln!(out, "Inserted {:?}", extra)?;
        report_balance(&tree, out)?;

        writeln!(out, "Rebalancing")?;
        tree.rebalance();
        report_balance(&tree, out)?;
        print_orders(&tree, out)?;

        render::write_pretty(&tree, &mut *out)?;
        Ok(())
    }

    fn input(&self) -> Result<Vec<i64>, DemoError> {
        if !self.values.is_empty() {
            return Ok(self.values.clone());
        }
        if self.min > self.max {
            return Err(DemoError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }

        let seed = self.seed.unwrap_or_else(rand::random);
        log::info!("generating {} values with seed {}", self.count, seed);
        let mut rng = StdRng::seed_from_u64(seed);
        Ok((0..self.count)
            .map(|_| rng.random_range(self.min..=self.max))
            .collect())
    }
}

fn report_balance<W: Write>(tree: &Tree<i64>, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Balanced: {} (height {}, {} values)",
        tree.is_balanced(),
        tree.height(),
        tree.len()
    )
}

fn print_orders<W: Write>(tree: &Tree<i64>, out: &mut W) -> io::Result<()> {
    for (name, order) in [
        ("Level order", Order::LevelOrder),
        ("Preorder", Order::Preorder),
        ("Postorder", Order::Postorder),
        ("Inorder", Order::Inorder),
    ] {
        writeln!(out, "{}: {:?}", name, tree.values(order))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<String, DemoError> {
        let cli = Cli::try_parse_from(std::iter::once("balanced-bst").chain(args.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        cli.run_with(&mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn explicit_values() {
        let output = run(&["--values", "5,3,8,3,1", "--extra", "3"]).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Balanced: true (height 2, 4 values)");
        assert_eq!(lines[1], "Level order: [5, 3, 8, 1]");
        assert_eq!(lines[2], "Preorder: [5, 3, 1, 8]");
        assert_eq!(lines[3], "Postorder: [1, 3, 8, 5]");
        assert_eq!(lines[4], "Inorder: [1, 3, 5, 8]");
        assert_eq!(lines[5], "Inserted [9, 10, 11]");
        assert_eq!(lines[6], "Balanced: false (height 4, 7 values)");
        assert_eq!(lines[7], "Rebalancing");
        assert_eq!(lines[8], "Balanced: true (height 2, 7 values)");
        assert_eq!(lines[12], "Inorder: [1, 3, 5, 8, 9, 10, 11]");
        assert!(output.ends_with("        └── 1\n"));
    }

    #[test]
    fn seeded_runs_repeat() {
        let args = ["--count", "20", "--seed", "7"];

        assert_eq!(run(&args).unwrap(), run(&args).unwrap());
    }

    #[test]
    fn random_values_stay_in_range() {
        let cli = Cli::try_parse_from(["balanced-bst", "--min", "-3", "--max", "3", "--seed", "1"])
            .unwrap();
        let values = cli.input().unwrap();

        assert_eq!(values.len(), 15);
        assert!(values.iter().all(|v| (-3..=3).contains(v)));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = run(&["--min", "10", "--max", "1"]).unwrap_err();

        assert!(matches!(err, DemoError::InvalidRange { min: 10, max: 1 }));
        assert_eq!(
            err.to_string(),
            "invalid range: --min 10 is greater than --max 1"
        );
    }

    #[test]
    fn empty_input() {
        let output = run(&["--count", "0", "--extra", "0"]).unwrap();

        assert!(output.starts_with("Balanced: true (height -1, 0 values)"));
        assert!(output.contains("Inorder: []"));
    }

    #[test]
    fn long_extra_chain_is_rebalanced() {
        let output = run(&["--values", "1,2,3", "--extra", "10000"]).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[6], "Balanced: false (height 10001, 10003 values)");
        assert_eq!(lines[8], "Balanced: true (height 13, 10003 values)");
    }

    #[test]
    fn extra_is_capped() {
        let err = Cli::try_parse_from(["balanced-bst", "--extra", "200000"]).unwrap_err();

        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}

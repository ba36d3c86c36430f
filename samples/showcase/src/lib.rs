//! order-views-showcase
//!
//! Fills a [`Container`] from the command line, optionally removes values,
//! then prints the container in each requested traversal order.
//!
//! # Usage
//!
//! ```bash
//! # Integer demonstration with the default values 7 15 6 1 2
//! cargo run -p order-views-showcase
//!
//! # Strings, removing every "Java", only two orders
//! cargo run -p order-views-showcase -- --words C++ Java Python Rust Go Java \
//!   --remove Java --order ascending --order middle-out
//! ```

use std::fmt::Display;
use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use order_views::{Container, TraversalOrder};

/// Values used when none are given on the command line.
pub const DEFAULT_INTEGERS: [i64; 5] = [7, 15, 6, 1, 2];

/// Words used with `--words` when none are given on the command line.
pub const DEFAULT_WORDS: [&str; 6] = ["C++", "Java", "Python", "Rust", "Go", "Java"];

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "order-views-showcase")]
#[command(about = "Print a container in its six traversal orders")]
pub struct ShowcaseArgs {
    /// Values to add, in insertion order
    pub values: Vec<String>,

    /// Treat values as strings instead of integers
    #[arg(long)]
    pub words: bool,

    /// Traversal order to print (repeatable, default: all six)
    #[arg(long = "order", short = 'o')]
    pub orders: Vec<TraversalOrder>,

    /// Value to remove before traversing; every occurrence is removed (repeatable)
    #[arg(long, short = 'r')]
    pub remove: Vec<String>,
}

impl ShowcaseArgs {
    /// Returns the requested orders, or all of them when none were given.
    pub fn selected_orders(&self) -> Vec<TraversalOrder> {
        if self.orders.is_empty() {
            TraversalOrder::ALL.to_vec()
        } else {
            self.orders.clone()
        }
    }
}

/// Runs the demonstration, writing the report to `output`.
///
/// # Errors
///
/// Returns an error if a value cannot be parsed as an integer (without
/// `--words`) or if writing to `output` fails. A value that cannot be
/// removed is reported in the output, not as an error.
pub fn run<W: Write>(args: &ShowcaseArgs, output: &mut W) -> Result<()> {
    let orders = args.selected_orders();

    if args.words {
        let values = if args.values.is_empty() {
            DEFAULT_WORDS.iter().map(ToString::to_string).collect()
        } else {
            args.values.clone()
        };
        demonstrate(values, &args.remove, &orders, output)
    } else {
        let values = if args.values.is_empty() {
            DEFAULT_INTEGERS.to_vec()
        } else {
            parse_integers(&args.values)?
        };
        let removals = parse_integers(&args.remove)?;
        demonstrate(values, &removals, &orders, output)
    }
}

fn parse_integers(values: &[String]) -> Result<Vec<i64>> {
    values
        .iter()
        .map(|value| {
            value
                .parse::<i64>()
                .with_context(|| format!("invalid integer value: {value} (use --words for strings)"))
        })
        .collect()
}

fn demonstrate<T, W>(
    values: Vec<T>,
    removals: &[T],
    orders: &[TraversalOrder],
    output: &mut W,
) -> Result<()>
where
    T: Clone + Ord + Display,
    W: Write,
{
    let mut container: Container<T> = values.into_iter().collect();
    tracing::info!(size = container.size(), "container filled");

    writeln!(output, "Original container: {container}")?;
    writeln!(output, "Size of container: {}", container.size())?;

    for value in removals {
        match container.remove(value) {
            Ok(removed) => {
                writeln!(output, "Removed {removed} x {value}: {container}")?;
            }
            Err(error) => {
                tracing::warn!(%value, %error, "removal failed");
                writeln!(output, "Could not remove {value}: {error}")?;
            }
        }
    }

    for order in orders {
        let rendered: Vec<String> = container
            .traverse(*order)
            .map(|element| element.to_string())
            .collect();
        writeln!(output, "{order}: {}", rendered.join(" "))?;
    }

    output.flush().context("failed to flush output")?;
    Ok(())
}

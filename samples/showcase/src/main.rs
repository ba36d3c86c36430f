//! order-views-showcase
//!
//! Command-line demonstration of the six traversal orders.
//! Log verbosity is read from `RUST_LOG`.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use order_views_showcase::{ShowcaseArgs, run};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "order_views_showcase=info,order_views=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = ShowcaseArgs::parse();
    tracing::debug!(?args, "parsed arguments");

    let stdout = std::io::stdout();
    let mut output = stdout.lock();
    run(&args, &mut output)
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kitchen_cursor::appliance::{showcase, Appliance, ApplianceFactory};
use kitchen_cursor::config::{Backend, Decoration, TraversalConfig};
use kitchen_cursor::driver::{run, Visit};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "kitchen-cursor", about = "Walk kitchen appliance collections through composable cursors")]
struct Cli {
    /// Log cursor and collection events (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Give the showcase lineup random start modes and use each appliance.
    Demo {
        /// Seed for reproducible start modes.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Traverse a collection through a chain of cursor decorators.
    Traverse {
        /// Storage backend: array, vec or list.
        #[arg(long, default_value = "array")]
        backend: Backend,
        /// Comma-separated decorators, innermost first (count, skip, blenders, kind=<kind>).
        #[arg(long, value_delimiter = ',')]
        decorate: Vec<Decoration>,
        /// Generate this many random appliances instead of the showcase lineup.
        #[arg(long)]
        items: Option<usize>,
        /// Seed for reproducible random appliances.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Demo { seed } => run_demo(seed),
        Commands::Traverse {
            backend,
            decorate,
            items,
            seed,
        } => run_traverse(backend, decorate, items, seed)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_demo(seed: Option<u64>) {
    let mut factory = match seed {
        Some(seed) => ApplianceFactory::seeded(seed),
        None => ApplianceFactory::from_entropy(),
    };

    for mut appliance in showcase() {
        let mode = factory.random_start_mode();
        appliance.set_start_mode(mode);
        for line in appliance.use_appliance() {
            println!("{line}");
        }
        println!("---------------------------------");
    }
}

fn run_traverse(
    backend: Backend,
    decorations: Vec<Decoration>,
    items: Option<usize>,
    seed: Option<u64>,
) -> Result<()> {
    let mut config = TraversalConfig::new(backend);
    config.decorations = decorations;
    if let Some(items) = items {
        config = config.with_items(items);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let report = run(&config).context("traversal failed")?;

    if report.visits.is_empty() {
        println!("No appliances matched.");
    }
    for visit in &report.visits {
        print_visit(visit);
    }
    for (layer, count) in report.counts.iter().enumerate() {
        println!("counter {}: {} steps", layer + 1, count);
    }

    Ok(())
}

fn print_visit(visit: &Visit) {
    println!("=====================================\n");
    println!("{}\n", visit.description);
    println!("-----------------------------------");
    println!("{}", visit.turned_on);
    println!("{}", visit.turned_off);
    println!("=====================================\n");
}

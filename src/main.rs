//! workoutlog - Personal workout logger

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use workoutlog::cli::{Menu, format_workout};
use workoutlog::config::{Config, DEFAULT_STORE_PATH, STORE_ENV};
use workoutlog::tui::App;
use workoutlog::{Listing, RawWorkout, Tracker};

#[derive(Parser)]
#[command(name = "workoutlog")]
#[command(author, version, about = "Personal workout logger")]
struct Cli {
    /// Path of the JSON workout store
    #[arg(long, global = true, env = STORE_ENV, default_value = DEFAULT_STORE_PATH)]
    store: PathBuf,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive record/list menu
    Menu,

    /// Record a workout
    Record {
        /// Customer ID
        customer: String,

        /// walking, running, cycling, yoga or strength
        #[arg(value_name = "TYPE")]
        kind: String,

        /// Date (YYYY-MM-DD)
        date: String,

        /// Time (HH:MM)
        time: String,

        /// Duration in minutes
        #[arg(allow_hyphen_values = true)]
        duration: String,

        /// Distance in metres (walking, running and cycling only)
        #[arg(short, long, allow_hyphen_values = true)]
        distance: Option<String>,
    },

    /// List a customer's workouts with scores
    List {
        /// Customer ID
        #[arg(short, long)]
        customer: String,
    },

    /// Open TUI dashboard for one customer
    Tui {
        /// Customer ID
        #[arg(short, long)]
        customer: String,
    },
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("workoutlog=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    // stdout belongs to the menu
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::new(cli.store);
    tracing::debug!("Workout store: {}", config.store_path.display());
    let tracker = Tracker::from_config(&config);

    match cli.command {
        Some(Commands::Record { customer, kind, date, time, duration, distance }) => {
            let raw = RawWorkout {
                customer_id: customer.trim(),
                kind: kind.trim(),
                date: date.trim(),
                time: time.trim(),
                duration: duration.trim(),
                distance: distance.as_deref().map(str::trim),
            };
            let workout = tracker.record(&raw)?;
            println!(
                "Recorded: {} {} {} for {}",
                workout.kind, workout.date, workout.time, workout.customer_id
            );
        }

        Some(Commands::List { customer }) => match tracker.list(customer.trim())? {
            Listing::Empty => println!("No workouts found for this customer!"),
            Listing::Entries(entries) => {
                let mut out = io::stdout().lock();
                writeln!(out, "=== Your Workouts ===")?;
                for entry in &entries {
                    write!(out, "\n{}", format_workout(entry))?;
                }
            }
        },

        Some(Commands::Tui { customer }) => {
            let mut app = App::new(tracker, customer.trim())?;
            app.run()?;
        }

        Some(Commands::Menu) | None => {
            let stdin = io::stdin().lock();
            let stdout = io::stdout().lock();
            Menu::new(&tracker, stdin, stdout).run()?;
        }
    }

    Ok(())
}

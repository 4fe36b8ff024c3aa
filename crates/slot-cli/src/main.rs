//! `slots` CLI — compute and validate booking availability from the command line.
//!
//! Operators and support staff use this against exported resource config to
//! answer "why does this day show no slots" without touching the dashboard.
//!
//! ## Usage
//!
//! ```sh
//! # Compute the slot table for a date
//! slots compute --schedule schedule.json --rules rules.json \
//!   --bookings bookings.json --date 2030-07-01
//!
//! # Same, as JSON for piping
//! slots compute --schedule schedule.json --rules rules.json \
//!   --date 2030-07-01 --json
//!
//! # First slot that fits a party of three
//! slots compute --schedule schedule.json --rules rules.json \
//!   --date 2030-07-01 --party 3
//!
//! # Validate a resource configuration
//! slots validate --schedule schedule.json --rules rules.json \
//!   --blackouts blackouts.json
//!
//! # Bookable dates over the next month
//! slots dates --schedule schedule.json --from 2030-07-01 --days 30
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use slot_engine::{BlackoutDate, BookingRules, ExistingBooking, WeeklySchedule};

#[derive(Parser)]
#[command(name = "slots", version, about = "Booking availability toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the slot table for one date
    Compute {
        /// Weekly schedule JSON file
        #[arg(long)]
        schedule: String,
        /// Booking rules JSON file
        #[arg(long)]
        rules: String,
        /// Blackout dates JSON file
        #[arg(long)]
        blackouts: Option<String>,
        /// Existing bookings JSON file for the target date
        #[arg(long)]
        bookings: Option<String>,
        /// Target date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Report only the first slot that fits a party of this size
        #[arg(long)]
        party: Option<u32>,
        /// Emit JSON instead of the table
        #[arg(long)]
        json: bool,
    },
    /// Validate a resource configuration
    Validate {
        /// Weekly schedule JSON file
        #[arg(long)]
        schedule: String,
        /// Booking rules JSON file
        #[arg(long)]
        rules: String,
        /// Blackout dates JSON file
        #[arg(long)]
        blackouts: Option<String>,
    },
    /// List bookable dates in a window
    Dates {
        /// Weekly schedule JSON file
        #[arg(long)]
        schedule: String,
        /// Blackout dates JSON file
        #[arg(long)]
        blackouts: Option<String>,
        /// First date of the window, YYYY-MM-DD
        #[arg(long)]
        from: String,
        /// Window length in days
        #[arg(long, default_value_t = 30)]
        days: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compute {
            schedule,
            rules,
            blackouts,
            bookings,
            date,
            party,
            json,
        } => {
            let schedule: WeeklySchedule = load_json(&schedule)?;
            let rules: BookingRules = load_json(&rules)?;
            let blackouts: Vec<BlackoutDate> = load_optional(blackouts.as_deref())?;
            let bookings: Vec<ExistingBooking> = load_optional(bookings.as_deref())?;
            let date = parse_date(&date)?;

            if let Some(party) = party {
                let slot =
                    slot_engine::find_first_open(&schedule, &blackouts, &rules, &bookings, date, party)
                        .context("Failed to compute availability")?;
                match slot {
                    Some(slot) => println!(
                        "First open slot for a party of {}: {}-{} ({} left)",
                        party,
                        slot_engine::format_minute_of_day(slot.start),
                        slot_engine::format_minute_of_day(slot.end),
                        slot.remaining_capacity
                    ),
                    None => println!("No slot fits a party of {} on {}", party, date),
                }
                return Ok(());
            }

            let slots = slot_engine::compute_slots(&schedule, &blackouts, &rules, &bookings, date)
                .context("Failed to compute availability")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&slots)?);
            } else if slots.is_empty() {
                println!("No availability on {}", date);
            } else {
                for slot in &slots {
                    let state = if slot.is_available {
                        format!("{} left", slot.remaining_capacity)
                    } else if slot.remaining_capacity == 0 {
                        "sold out".to_string()
                    } else {
                        "unavailable".to_string()
                    };
                    println!(
                        "{}-{}  {}",
                        slot_engine::format_minute_of_day(slot.start),
                        slot_engine::format_minute_of_day(slot.end),
                        state
                    );
                }
            }
        }
        Commands::Validate {
            schedule,
            rules,
            blackouts,
        } => {
            let schedule: WeeklySchedule = load_json(&schedule)?;
            let rules: BookingRules = load_json(&rules)?;
            let blackouts: Vec<BlackoutDate> = load_optional(blackouts.as_deref())?;

            schedule.validate().context("Schedule is invalid")?;
            rules.validate().context("Booking rules are invalid")?;
            slot_engine::validate_blackouts(&blackouts).context("Blackouts are invalid")?;

            println!("Configuration OK");
        }
        Commands::Dates {
            schedule,
            blackouts,
            from,
            days,
        } => {
            let schedule: WeeklySchedule = load_json(&schedule)?;
            let blackouts: Vec<BlackoutDate> = load_optional(blackouts.as_deref())?;
            let from = parse_date(&from)?;

            for date in slot_engine::open_dates(&schedule, &blackouts, from, days) {
                println!("{}", date);
            }
        }
    }

    Ok(())
}

/// Read and deserialize a JSON file.
fn load_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse JSON in {}", path))
}

/// Like [`load_json`], but an omitted path means an empty list.
fn load_optional<T: serde::de::DeserializeOwned>(path: Option<&str>) -> Result<Vec<T>> {
    match path {
        Some(path) => load_json(path),
        None => Ok(Vec::new()),
    }
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    s.parse()
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

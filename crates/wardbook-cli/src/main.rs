//! `wardbook` CLI — manage a patient roster and schedule checkups from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # Add a patient, optionally with an assigned nurse and contact email
//! wardbook add "Alice Pauline" --nurse "Nurse Joy" --email alice@example.com
//!
//! # Schedule a checkup for the first listed patient
//! wardbook schedule -p 1 -d 24/12/2026 -t 10:00
//!
//! # Cancel it again
//! wardbook cancel -p 1 -d 24/12/2026 -t 10:00
//!
//! # Show the roster with scheduled checkups
//! wardbook list
//!
//! # Use a different store file
//! wardbook --store ward-b.json list
//! ```
//!
//! The roster lives in a JSON store file (`wardbook.json` by default). A
//! missing store is treated as an empty roster.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand};
use wardbook_core::{run_schedule, Email, Intent, Name, Patient, PatientRoster, ScheduleRequest};

#[derive(Parser)]
#[command(
    name = "wardbook",
    version,
    about = "Patient roster and checkup scheduling"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the JSON roster store
    #[arg(long, global = true, default_value = "wardbook.json")]
    store: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a patient to the roster
    Add {
        /// Patient name
        name: String,
        /// Assigned nurse
        #[arg(long)]
        nurse: Option<String>,
        /// Contact email
        #[arg(long)]
        email: Option<String>,
    },
    /// Schedule a checkup for a patient
    Schedule {
        #[command(flatten)]
        slot: SlotArgs,
    },
    /// Cancel a previously scheduled checkup
    Cancel {
        #[command(flatten)]
        slot: SlotArgs,
    },
    /// List patients and their scheduled checkups
    List,
}

#[derive(Args)]
struct SlotArgs {
    /// Patient position as shown by `list` (1-based)
    #[arg(short, long)]
    patient: usize,

    /// Checkup date, DD/MM/YYYY
    #[arg(short, long, value_parser = parse_date)]
    date: NaiveDate,

    /// Checkup time, 24-hour HH:MM
    #[arg(short, long, value_parser = parse_time)]
    time: NaiveTime,
}

fn parse_date(raw: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%d/%m/%Y")
        .map_err(|_| format!("invalid date '{}': expected DD/MM/YYYY", raw))
}

fn parse_time(raw: &str) -> std::result::Result<NaiveTime, String> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|_| format!("invalid time '{}': expected 24-hour HH:MM", raw))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut roster = load_roster(&cli.store)?;

    match cli.command {
        Commands::Add { name, nurse, email } => {
            let mut patient = Patient::new(Name::new(&name)?);
            if let Some(email) = email {
                patient.set_email(Email::new(&email)?);
            }
            if let Some(nurse) = nurse {
                patient.assign_nurse(nurse);
            }
            roster.push(patient);
            save_roster(&cli.store, &roster)?;
            println!(
                "Added patient {} (position {} on the roster)",
                name.trim(),
                roster.len()
            );
        }
        Commands::Schedule { slot } => run_slot_command(Intent::Create, &slot, &mut roster, &cli.store)?,
        Commands::Cancel { slot } => run_slot_command(Intent::Remove, &slot, &mut roster, &cli.store)?,
        Commands::List => print_roster(&roster),
    }

    Ok(())
}

fn run_slot_command(
    intent: Intent,
    slot: &SlotArgs,
    roster: &mut PatientRoster,
    store: &Path,
) -> Result<()> {
    // The CLI surface is 1-based to match `list` output; the core is 0-based.
    let patient_index = slot
        .patient
        .checked_sub(1)
        .context("Patient positions start at 1")?;

    let request = ScheduleRequest {
        intent,
        patient_index,
        date: slot.date,
        time: slot.time,
    };
    let message = run_schedule(&request, roster)?;
    save_roster(store, roster)?;
    println!("{}", message);
    Ok(())
}

fn print_roster(roster: &PatientRoster) {
    if roster.is_empty() {
        println!("No patients on the roster");
        return;
    }

    for (position, patient) in roster.iter().enumerate() {
        println!(
            "{}. {} (nurse: {})",
            position + 1,
            patient.name(),
            patient.nurse().unwrap_or("unassigned")
        );
        let mut checkups: Vec<_> = patient.checkups().iter().collect();
        checkups.sort_by_key(|c| c.moment());
        for checkup in checkups {
            println!("   - {}", checkup);
        }
    }
}

fn load_roster(path: &Path) -> Result<PatientRoster> {
    if !path.exists() {
        return Ok(PatientRoster::new());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster store: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Roster store is not valid JSON: {}", path.display()))
}

fn save_roster(path: &Path, roster: &PatientRoster) -> Result<()> {
    let json = serde_json::to_string_pretty(roster)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write roster store: {}", path.display()))
}

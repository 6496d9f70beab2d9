//! CLI module - interactive record/list menu over any line reader

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::error::{TrackerError, ValidationError};
use crate::tracker::{Listing, RawWorkout, ScoredWorkout, Tracker};
use crate::validate::{
    validate_customer_id, validate_date, validate_distance, validate_duration, validate_time,
    validate_type,
};
use crate::workout::{WorkoutCategory, WorkoutType};

/// "Running" for `running`
pub fn title_case(kind: WorkoutType) -> String {
    let name = kind.as_str();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Multi-line description of one scored workout
pub fn format_workout(entry: &ScoredWorkout) -> String {
    let w = &entry.workout;
    let mut out = format!(
        "Type: {}\nDate: {}\nTime: {}\nDuration: {} minutes\n",
        title_case(w.kind),
        w.date,
        w.time,
        w.duration
    );
    if w.category() == WorkoutCategory::DistanceBased {
        out.push_str(&format!("Distance: {} metres\n", w.distance));
        if let Some(speed) = entry.speed {
            out.push_str(&format!("Average Speed: {:.2} metres/minute\n", speed));
        }
    }
    out.push_str(&format!("Score: {:.2}\n", entry.score));
    out
}

/// Text menu: record a workout, list workouts, exit
pub struct Menu<'t, R, W> {
    tracker: &'t Tracker,
    input: R,
    output: W,
}

impl<'t, R: BufRead, W: Write> Menu<'t, R, W> {
    pub fn new(tracker: &'t Tracker, input: R, output: W) -> Self {
        Self {
            tracker,
            input,
            output,
        }
    }

    /// Loop until "3" or end of input
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "\n=== Workout Tracker ===")?;
            writeln!(self.output, "1. Record Workout")?;
            writeln!(self.output, "2. List Workouts")?;
            writeln!(self.output, "3. Exit")?;

            let Some(choice) = self.prompt("Choose option: ")? else {
                writeln!(self.output)?;
                break;
            };

            match choice.as_str() {
                "1" => self.record_workout()?,
                "2" => self.list_workouts()?,
                "3" => {
                    writeln!(self.output, "Goodbye!")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid option")?,
            }
        }
        Ok(())
    }

    /// Ask each field in turn and stop at the first invalid one
    pub fn record_workout(&mut self) -> Result<()> {
        let customer_id = self.field("Enter Customer ID: ")?;
        if let Err(e) = validate_customer_id(&customer_id) {
            return self.reject(&e);
        }

        let names: Vec<&str> = WorkoutType::all().iter().map(|t| t.as_str()).collect();
        let kind = self.field(&format!("Enter workout type ({}): ", names.join("/")))?;
        let category = match validate_type(&kind) {
            Ok(kind) => kind.category(),
            Err(e) => return self.reject(&e),
        };

        let date = self.field("Enter date (YYYY-MM-DD): ")?;
        if let Err(e) = validate_date(&date) {
            return self.reject(&e);
        }

        let time = self.field("Enter time (HH:MM): ")?;
        if let Err(e) = validate_time(&time) {
            return self.reject(&e);
        }

        let duration = self.field("Enter duration (minutes): ")?;
        if let Err(e) = validate_duration(&duration) {
            return self.reject(&e);
        }

        let distance = match category {
            WorkoutCategory::DistanceBased => {
                let distance = self.field("Enter distance (metres): ")?;
                if let Err(e) = validate_distance(&distance) {
                    return self.reject(&e);
                }
                Some(distance)
            }
            WorkoutCategory::TimeBased => None,
        };

        let raw = RawWorkout {
            customer_id: &customer_id,
            kind: &kind,
            date: &date,
            time: &time,
            duration: &duration,
            distance: distance.as_deref(),
        };
        match self.tracker.record(&raw) {
            Ok(_) => writeln!(self.output, "Workout recorded successfully!")?,
            Err(TrackerError::Validation(e)) => self.reject(&e)?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    pub fn list_workouts(&mut self) -> Result<()> {
        let customer_id = self.field("Enter Customer ID: ")?;

        let listing = match self.tracker.list(&customer_id) {
            Ok(listing) => listing,
            Err(e) => return self.report(&e),
        };

        match listing {
            Listing::Empty => writeln!(self.output, "No workouts found for this customer!")?,
            Listing::Entries(entries) => {
                writeln!(self.output, "\n=== Your Workouts ===")?;
                for entry in &entries {
                    write!(self.output, "\n{}", format_workout(entry))?;
                }
            }
        }
        Ok(())
    }

    fn reject(&mut self, err: &ValidationError) -> Result<()> {
        tracing::warn!("Workout rejected: {}", err);
        writeln!(self.output, "{}", err)?;
        Ok(())
    }

    fn report(&mut self, err: &TrackerError) -> Result<()> {
        tracing::error!("{}", err);
        writeln!(self.output, "Error: {}", err)?;
        Ok(())
    }

    /// Prompt and read one trimmed line; end of input reads as empty
    fn field(&mut self, label: &str) -> Result<String> {
        Ok(self.prompt(label)?.unwrap_or_default())
    }

    /// Prompt and read one trimmed line, `None` at end of input
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

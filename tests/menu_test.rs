use std::fs;
use std::io::Cursor;
use std::path::Path;

use tempfile::TempDir;
use workoutlog::cli::Menu;
use workoutlog::{Tracker, Workout, WorkoutRepository, WorkoutType};

fn setup() -> (TempDir, Tracker) {
    let dir = TempDir::new().unwrap();
    let tracker = Tracker::new(WorkoutRepository::new(dir.path().join("workouts.json")));
    (dir, tracker)
}

fn run_menu(tracker: &Tracker, input: &str) -> String {
    let mut out = Vec::new();
    Menu::new(tracker, Cursor::new(input), &mut out).run().unwrap();
    String::from_utf8(out).unwrap()
}

fn stored(path: &Path) -> Vec<Workout> {
    match fs::read_to_string(path) {
        Ok(raw) => serde_json::from_str(&raw).unwrap(),
        Err(_) => Vec::new(),
    }
}

fn seed(path: &Path, workouts: &[Workout]) {
    fs::write(path, serde_json::to_string_pretty(workouts).unwrap()).unwrap();
}

fn workout(customer: &str, kind: WorkoutType, date: &str, duration: i64, distance: i64) -> Workout {
    Workout {
        customer_id: customer.to_string(),
        kind,
        date: date.to_string(),
        time: "08:00".to_string(),
        duration,
        distance,
    }
}

#[test]
fn test_record_workout_success() {
    let (_dir, tracker) = setup();
    let out = run_menu(&tracker, "1\nC001\nrunning\n2024-01-15\n08:30\n30\n5000\n3\n");

    assert!(out.contains("Workout recorded successfully!"));
    assert!(out.contains("Goodbye!"));

    let workouts = stored(tracker.repository().path());
    assert_eq!(workouts.len(), 1);
    let w = &workouts[0];
    assert_eq!(w.customer_id, "C001");
    assert_eq!(w.kind, WorkoutType::Running);
    assert_eq!(w.date, "2024-01-15");
    assert_eq!(w.time, "08:30");
    assert_eq!(w.duration, 30);
    assert_eq!(w.distance, 5000);
}

#[test]
fn test_record_invalid_workout_type() {
    let (_dir, tracker) = setup();
    let out = run_menu(&tracker, "1\nC001\nswimming\n3\n");

    assert!(out.contains(r#"Invalid workout type: "swimming""#));
    assert!(stored(tracker.repository().path()).is_empty());
}

#[test]
fn test_record_invalid_date() {
    let (_dir, tracker) = setup();
    let out = run_menu(&tracker, "1\nC001\nrunning\n2024-13-45\n3\n");

    assert!(out.contains(r#"Invalid date format: "2024-13-45" (use YYYY-MM-DD)"#));
    assert!(stored(tracker.repository().path()).is_empty());
}

#[test]
fn test_record_invalid_time() {
    let (_dir, tracker) = setup();
    let out = run_menu(&tracker, "1\nC001\nrunning\n2024-01-15\n25:99\n3\n");

    assert!(out.contains(r#"Invalid time format: "25:99" (use HH:MM)"#));
    assert!(stored(tracker.repository().path()).is_empty());
}

#[test]
fn test_rejection_keeps_existing_records() {
    let (_dir, tracker) = setup();
    let existing = vec![workout("C001", WorkoutType::Running, "2024-01-15", 30, 5000)];
    seed(tracker.repository().path(), &existing);

    run_menu(&tracker, "1\nC001\nswimming\n1\nC001\nrunning\n2024-13-45\n3\n");

    assert_eq!(stored(tracker.repository().path()), existing);
}

#[test]
fn test_record_multiple_workouts() {
    let (_dir, tracker) = setup();
    run_menu(
        &tracker,
        "1\nC001\nwalking\n2024-01-15\n08:00\n20\n2000\n\
         1\nC002\ncycling\n2024-01-16\n09:00\n45\n15000\n3\n",
    );

    let workouts = stored(tracker.repository().path());
    assert_eq!(workouts.len(), 2);
    assert_eq!(workouts[0].customer_id, "C001");
    assert_eq!(workouts[1].customer_id, "C002");
}

#[test]
fn test_list_workouts_success() {
    let (_dir, tracker) = setup();
    seed(
        tracker.repository().path(),
        &[
            workout("C001", WorkoutType::Running, "2024-01-15", 30, 5000),
            workout("C002", WorkoutType::Walking, "2024-01-16", 20, 2000),
            workout("C001", WorkoutType::Cycling, "2024-01-17", 45, 15000),
        ],
    );

    let out = run_menu(&tracker, "2\nC001\n3\n");

    assert!(out.contains("=== Your Workouts ==="));
    assert!(out.contains("Type: Running"));
    assert!(out.contains("Type: Cycling"));
    assert!(out.contains("2024-01-15"));
    assert!(!out.contains("Walking"));
    assert!(out.contains("Score: 1000.00"));
    assert!(out.find("Running").unwrap() < out.find("Cycling").unwrap());
}

#[test]
fn test_list_time_based_score() {
    let (_dir, tracker) = setup();
    seed(
        tracker.repository().path(),
        &[workout("C001", WorkoutType::Strength, "2024-01-15", 40, 0)],
    );

    let out = run_menu(&tracker, "2\nC001\n3\n");
    assert!(out.contains("Type: Strength"));
    assert!(out.contains("Score: 120.00"));
    assert!(!out.contains("Distance:"));
}

#[test]
fn test_list_no_workouts_found() {
    let (_dir, tracker) = setup();
    seed(
        tracker.repository().path(),
        &[workout("C001", WorkoutType::Running, "2024-01-15", 30, 5000)],
    );

    let out = run_menu(&tracker, "2\nC999\n3\n");
    assert!(out.contains("No workouts found"));
}

#[test]
fn test_list_file_not_exists() {
    let (_dir, tracker) = setup();
    let out = run_menu(&tracker, "2\nC001\n3\n");

    assert!(out.contains("No workouts found"));
    assert!(!tracker.repository().path().exists());
}

#[test]
fn test_list_corrupt_store_reports_error() {
    let (_dir, tracker) = setup();
    fs::write(tracker.repository().path(), "{ not an array").unwrap();

    let out = run_menu(&tracker, "2\nC001\n3\n");
    assert!(out.contains("Error: Workout store"));
    assert!(out.contains("is corrupt"));
    assert!(!out.contains("No workouts found"));
}

#[test]
fn test_round_trip_through_menu() {
    let (_dir, tracker) = setup();
    let out = run_menu(
        &tracker,
        "1\nC001\nyoga\n2024-02-29\n07:15\n60\n2\nC001\n3\n",
    );

    assert!(out.contains("Workout recorded successfully!"));
    assert!(out.contains("Type: Yoga"));
    assert!(out.contains("Date: 2024-02-29"));
    assert!(out.contains("Time: 07:15"));
    assert!(out.contains("Duration: 60 minutes"));
    assert!(out.contains("Score: 120.00"));
}

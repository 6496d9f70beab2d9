//! TUI module - Terminal dashboard with ratatui

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Table, Row, Cell},
};
use std::io::{stdout, Stdout};

use crate::cli::title_case;
use crate::tracker::{ScoredWorkout, Tracker};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// App state for TUI
pub struct App {
    tracker: Tracker,
    customer_id: String,
    entries: Vec<ScoredWorkout>,
    should_quit: bool,
}

impl App {
    pub fn new(tracker: Tracker, customer_id: impl Into<String>) -> Result<Self> {
        let customer_id = customer_id.into();
        let entries = tracker.list(&customer_id)?.entries().to_vec();
        Ok(Self {
            tracker,
            customer_id,
            entries,
            should_quit: false,
        })
    }

    /// Run the TUI application
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = init_terminal()?;
        let result = self.event_loop(&mut terminal);
        restore_terminal()?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn reload(&mut self) -> Result<()> {
        self.entries = self.tracker.list(&self.customer_id)?.entries().to_vec();
        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
            ])
            .split(area);

        let header = Paragraph::new(format!("Workout Tracker - {}", self.customer_id))
            .style(Style::default().fg(Color::Cyan).bold())
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let rows: Vec<Row> = self.entries.iter().map(table_row).collect();

        let title = if self.entries.is_empty() {
            "No workouts found".to_string()
        } else {
            format!("Workouts ({})", self.entries.len())
        };

        let table = Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Length(7),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Length(12),
                Constraint::Length(12),
                Constraint::Min(10),
            ],
        )
        .header(Row::new(vec!["Date", "Time", "Type", "Minutes", "Metres", "m/min", "Score"])
            .style(Style::default().bold()))
        .block(Block::default().borders(Borders::ALL).title(title));

        frame.render_widget(table, chunks[1]);

        let footer = Paragraph::new("q: quit | r: refresh")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, chunks[2]);
    }

    fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                        KeyCode::Char('r') => self.reload()?,
                        _ => {}
                    }
                }
        Ok(())
    }
}

fn table_row(entry: &ScoredWorkout) -> Row<'static> {
    Row::new(row_cells(entry).map(Cell::from))
}

/// Date, time, type, minutes, metres, m/min, score
fn row_cells(entry: &ScoredWorkout) -> [String; 7] {
    let w = &entry.workout;
    let (distance, speed) = match entry.speed {
        Some(speed) => (w.distance.to_string(), format!("{:.2}", speed)),
        None if w.distance > 0 => (w.distance.to_string(), "-".to_string()),
        None => ("-".to_string(), "-".to_string()),
    };
    [
        w.date.clone(),
        w.time.clone(),
        title_case(w.kind),
        w.duration.to_string(),
        distance,
        speed,
        format!("{:.2}", entry.score),
    ]
}

fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

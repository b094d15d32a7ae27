//! TUI module - Terminal screens with ratatui

use anyhow::Result;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Tabs},
};
use std::io::{Stdout, stdout};

use crate::db::Database;
use crate::exercises::{all_tags, exercises_by_primary_archetype, exercises_by_tag};
use crate::plan::{
    Lift, PlateConfig, WORKOUT_WEEKS, WorkoutDay, WorkoutId, find_week,
    numeric::parse_weight_input, plate_math_label, prescribe_workout, rounded_training_max,
};
use crate::state::{CompletedWorkouts, Maxes};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Lines moved per page key in the archetype column
const ARCHETYPE_PAGE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Maxes,
    Workouts,
    Exercises,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Maxes, Tab::Workouts, Tab::Exercises];

    fn title(&self) -> &'static str {
        match self {
            Tab::Maxes => "Maxes",
            Tab::Workouts => "Workouts",
            Tab::Exercises => "Exercises",
        }
    }

    fn index(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }
}

/// Editable rows on the maxes tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxField {
    Lift(Lift),
    Pullups,
}

impl MaxField {
    fn all() -> [MaxField; 4] {
        [
            MaxField::Lift(Lift::Squat),
            MaxField::Lift(Lift::Bench),
            MaxField::Lift(Lift::Deadlift),
            MaxField::Pullups,
        ]
    }

    fn label(&self) -> String {
        match self {
            MaxField::Lift(lift) => format!("{} Training Max", lift.label()),
            MaxField::Pullups => "Weighted Pull-Ups (5x5 weight)".to_string(),
        }
    }

    fn value(&self, maxes: &Maxes) -> u32 {
        match self {
            MaxField::Lift(lift) => maxes.get(*lift),
            MaxField::Pullups => maxes.weighted_pullup_weight,
        }
    }

    fn apply(&self, maxes: Maxes, value: u32) -> Maxes {
        match self {
            MaxField::Lift(lift) => maxes.with(*lift, value),
            MaxField::Pullups => maxes.with_pullup_weight(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Browse,
    /// Typing a new value into a maxes row
    Edit { field: MaxField, input: String },
    /// Popup computing a training max from a 1RM
    OneRepMax { lift: Lift, input: String },
    /// Reset prompt, remembering the workout it was opened from
    ConfirmReset(Option<WorkoutId>),
    Detail(WorkoutId),
    Tag(&'static str),
}

/// App state for TUI
pub struct App {
    db: Database,
    maxes: Maxes,
    completed: CompletedWorkouts,
    plates: PlateConfig,
    tab: Tab,
    mode: Mode,
    max_cursor: usize,
    workout_cursor: usize,
    tag_cursor: usize,
    archetype_scroll: usize,
    status: String,
    should_quit: bool,
}

/// Lines in the archetype column: one header per group plus its exercises
fn archetype_line_count() -> usize {
    exercises_by_primary_archetype()
        .iter()
        .map(|(_, exercises)| exercises.len() + 1)
        .sum()
}

/// Every (week, day) card in display order
fn workout_slots() -> Vec<WorkoutId> {
    WORKOUT_WEEKS
        .iter()
        .flat_map(|w| WorkoutDay::all().iter().map(move |d| WorkoutId::new(w.week, *d)))
        .collect()
}

impl App {
    pub fn new(db: Database) -> Result<Self> {
        let maxes = db.load_maxes()?;
        let completed = db.load_completed()?;
        Ok(Self {
            db,
            maxes,
            completed,
            plates: PlateConfig::default(),
            tab: Tab::Maxes,
            mode: Mode::Browse,
            max_cursor: 0,
            workout_cursor: 0,
            tag_cursor: 0,
            archetype_scroll: 0,
            status: String::new(),
            should_quit: false,
        })
    }

    pub fn with_plates(mut self, plates: PlateConfig) -> Self {
        self.plates = plates;
        self
    }

    pub fn maxes(&self) -> &Maxes {
        &self.maxes
    }

    pub fn completed(&self) -> &CompletedWorkouts {
        &self.completed
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn tab(&self) -> Tab {
        self.tab
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
        self.maxes = self.db.load_maxes()?;
        self.completed = self.db.load_completed()?;
        self.status = "Reloaded".to_string();
        Ok(())
    }

    fn persist_maxes(&mut self, next: Maxes) -> Result<()> {
        self.maxes = next;
        self.db.save_maxes(&self.maxes)?;
        self.status = "Saved".to_string();
        Ok(())
    }

    fn set_completion(&mut self, id: &WorkoutId, complete: bool) -> Result<()> {
        let key = id.to_string();
        self.completed = std::mem::take(&mut self.completed).toggled(&key, complete);
        self.db.save_completed(&self.completed)?;
        Ok(())
    }

    fn reset_cycle(&mut self) -> Result<()> {
        self.db.clear_completed()?;
        self.completed = std::mem::take(&mut self.completed).cleared();
        self.status = "Cycle reset".to_string();
        Ok(())
    }

    fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            self.handle_key(key.code)?;
        }
        Ok(())
    }

    /// Apply one key press to the current screen
    pub fn handle_key(&mut self, code: KeyCode) -> Result<()> {
        match self.mode.clone() {
            Mode::Browse => self.handle_browse_key(code),
            Mode::Edit { field, input } => self.handle_edit_key(code, field, input),
            Mode::OneRepMax { lift, input } => self.handle_one_rep_max_key(code, lift, input),
            Mode::ConfirmReset(back) => {
                if code == KeyCode::Char('y') {
                    self.reset_cycle()?;
                }
                self.mode = back.map_or(Mode::Browse, Mode::Detail);
                Ok(())
            }
            Mode::Detail(id) => self.handle_detail_key(code, id),
            Mode::Tag(_) => {
                if matches!(code, KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q')) {
                    self.mode = Mode::Browse;
                }
                Ok(())
            }
        }
    }

    fn handle_browse_key(&mut self, code: KeyCode) -> Result<()> {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.tab = self.tab.next(),
            KeyCode::Char('r') => self.reload()?,
            KeyCode::Up => self.move_cursor(-1),
            KeyCode::Down => self.move_cursor(1),
            _ => match self.tab {
                Tab::Maxes => self.handle_maxes_key(code),
                Tab::Workouts => self.handle_workouts_key(code)?,
                Tab::Exercises => self.handle_exercises_key(code),
            },
        }
        Ok(())
    }

    fn move_cursor(&mut self, delta: isize) {
        let (cursor, len) = match self.tab {
            Tab::Maxes => (&mut self.max_cursor, MaxField::all().len()),
            Tab::Workouts => (&mut self.workout_cursor, workout_slots().len()),
            Tab::Exercises => (&mut self.tag_cursor, all_tags().len()),
        };
        if len == 0 {
            return;
        }
        *cursor = (*cursor as isize + delta).rem_euclid(len as isize) as usize;
    }

    fn handle_exercises_key(&mut self, code: KeyCode) {
        let last_line = archetype_line_count().saturating_sub(1);
        match code {
            KeyCode::Enter => {
                if let Some(tag) = all_tags().get(self.tag_cursor).copied() {
                    self.mode = Mode::Tag(tag);
                }
            }
            KeyCode::PageDown => {
                self.archetype_scroll = (self.archetype_scroll + ARCHETYPE_PAGE).min(last_line);
            }
            KeyCode::PageUp => {
                self.archetype_scroll = self.archetype_scroll.saturating_sub(ARCHETYPE_PAGE);
            }
            _ => {}
        }
    }

    fn handle_maxes_key(&mut self, code: KeyCode) {
        let field = MaxField::all()[self.max_cursor];
        match code {
            KeyCode::Enter => {
                self.mode = Mode::Edit { field, input: String::new() };
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                self.mode = Mode::Edit { field, input: c.to_string() };
            }
            KeyCode::Char('o') => {
                if let MaxField::Lift(lift) = field {
                    self.mode = Mode::OneRepMax { lift, input: String::new() };
                }
            }
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, code: KeyCode, field: MaxField, mut input: String) -> Result<()> {
        match code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                input.push(c);
                self.mode = Mode::Edit { field, input };
            }
            KeyCode::Backspace => {
                input.pop();
                self.mode = Mode::Edit { field, input };
            }
            // Leaving the field saves it
            KeyCode::Enter | KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                self.mode = Mode::Browse;
                self.persist_maxes(field.apply(self.maxes, parse_weight_input(&input)))?;
                if code != KeyCode::Enter {
                    self.handle_browse_key(code)?;
                }
            }
            KeyCode::Esc => self.mode = Mode::Browse,
            _ => {}
        }
        Ok(())
    }

    fn handle_one_rep_max_key(&mut self, code: KeyCode, lift: Lift, mut input: String) -> Result<()> {
        match code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                input.push(c);
                self.mode = Mode::OneRepMax { lift, input };
            }
            KeyCode::Backspace => {
                input.pop();
                self.mode = Mode::OneRepMax { lift, input };
            }
            KeyCode::Enter => {
                let one_rep_max = parse_weight_input(&input);
                // Calculate stays disabled until a non-zero 1RM is typed
                if one_rep_max == 0 {
                    return Ok(());
                }
                self.mode = Mode::Browse;
                let tm = rounded_training_max(f64::from(one_rep_max));
                self.persist_maxes(self.maxes.with(lift, tm))?;
            }
            KeyCode::Esc => self.mode = Mode::Browse,
            _ => {}
        }
        Ok(())
    }

    fn handle_workouts_key(&mut self, code: KeyCode) -> Result<()> {
        let slots = workout_slots();
        let Some(id) = slots.get(self.workout_cursor).copied() else {
            return Ok(());
        };
        match code {
            KeyCode::Char(' ') => {
                let done = self.completed.contains(&id.to_string());
                self.set_completion(&id, !done)?;
            }
            KeyCode::Enter => self.mode = Mode::Detail(id),
            KeyCode::Char('R') => self.mode = Mode::ConfirmReset(None),
            _ => {}
        }
        Ok(())
    }

    fn handle_detail_key(&mut self, code: KeyCode, id: WorkoutId) -> Result<()> {
        match code {
            KeyCode::Char('c') => {
                self.set_completion(&id, true)?;
                self.mode = Mode::Browse;
            }
            KeyCode::Char('R') => self.mode = Mode::ConfirmReset(Some(id)),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => self.mode = Mode::Browse,
            _ => {}
        }
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

        // Header
        let titles: Vec<&str> = Tab::ALL.iter().map(|t| t.title()).collect();
        let tabs = Tabs::new(titles)
            .select(self.tab.index())
            .highlight_style(Style::default().fg(Color::Cyan).bold())
            .block(Block::default().borders(Borders::ALL).title("5/3/1 Tracker"));
        frame.render_widget(tabs, chunks[0]);

        match &self.mode {
            Mode::Detail(id) | Mode::ConfirmReset(Some(id)) => self.render_detail(frame, chunks[1], id),
            Mode::Tag(tag) => render_tag(frame, chunks[1], tag),
            _ => match self.tab {
                Tab::Maxes => self.render_maxes(frame, chunks[1]),
                Tab::Workouts => self.render_workouts(frame, chunks[1]),
                Tab::Exercises => self.render_exercises(frame, chunks[1]),
            },
        }

        // Footer
        let footer = Paragraph::new(self.footer_text())
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, chunks[2]);

        match &self.mode {
            Mode::OneRepMax { lift, input } => {
                let text = format!(
                    "{}\n\n1RM: {} lbs\n\nTraining max: {} lbs",
                    lift.label(),
                    input,
                    rounded_training_max(f64::from(parse_weight_input(input)))
                );
                render_popup(frame, area, "Calculate Training Max from 1RM", &text);
            }
            Mode::ConfirmReset(_) => {
                render_popup(
                    frame,
                    area,
                    "Reset cycle?",
                    "This will clear all workout completions\n\ny: reset | any other key: cancel",
                );
            }
            _ => {}
        }
    }

    fn footer_text(&self) -> String {
        let keys = match (&self.mode, self.tab) {
            (Mode::Edit { .. }, _) => "digits: type | enter: save | esc: cancel",
            (Mode::OneRepMax { .. }, _) => "digits: 1RM | enter: calculate | esc: cancel",
            (Mode::Detail(_), _) => "c: complete session | R: reset cycle | esc: back",
            (Mode::ConfirmReset(_), _) => "y: reset | any other key: cancel",
            (Mode::Tag(_), _) => "esc: back",
            (_, Tab::Maxes) => "q: quit | tab: next | enter/digits: edit | o: from 1RM | r: refresh",
            (_, Tab::Workouts) => "q: quit | tab: next | space: toggle | enter: details | R: reset",
            (_, Tab::Exercises) => "q: quit | tab: next | enter: exercises for tag | pgup/pgdn: scroll",
        };
        if self.status.is_empty() {
            keys.to_string()
        } else {
            format!("{} | {}", self.status, keys)
        }
    }

    fn render_maxes(&self, frame: &mut Frame, area: Rect) {
        let rows: Vec<Row> = MaxField::all()
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let value = match &self.mode {
                    Mode::Edit { field: editing, input } if editing == field => format!("{}_", input),
                    _ => match field.value(&self.maxes) {
                        0 => String::new(),
                        v => v.to_string(),
                    },
                };
                let style = if i == self.max_cursor {
                    Style::default().fg(Color::Cyan).bold()
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from(field.label()),
                    Cell::from(value),
                    Cell::from("lbs"),
                ])
                .style(style)
            })
            .collect();

        let table = Table::new(
            rows,
            [Constraint::Length(34), Constraint::Length(10), Constraint::Length(4)],
        )
        .header(Row::new(vec!["Lift", "Weight", ""]).style(Style::default().bold()))
        .block(Block::default().borders(Borders::ALL).title("Training Maxes"));

        frame.render_widget(table, area);
    }

    fn render_workouts(&self, frame: &mut Frame, area: Rect) {
        let rows: Vec<Row> = workout_slots()
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let done = self.completed.contains(&id.to_string());
                let scheme = match id.day {
                    WorkoutDay::WeightedPullups => "5x5".to_string(),
                    WorkoutDay::Lift(_) => find_week(id.week)
                        .map(|w| w.scheme_label())
                        .unwrap_or_default(),
                };
                let sets: Vec<String> = prescribe_workout(id, &self.maxes)
                    .iter()
                    .map(|s| s.describe())
                    .collect();

                let mut style = Style::default();
                if done {
                    style = style.fg(Color::DarkGray).crossed_out();
                }
                if i == self.workout_cursor {
                    style = style.fg(Color::Cyan).bold();
                }

                Row::new(vec![
                    Cell::from(if done { "[x]" } else { "[ ]" }),
                    Cell::from(format!("Week {} • {}", id.week, scheme)),
                    Cell::from(id.day.label()),
                    Cell::from(sets.join(", ")),
                ])
                .style(style)
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Length(16),
                Constraint::Length(18),
                Constraint::Min(30),
            ],
        )
        .header(Row::new(vec!["", "Week", "Workout", "Sets"]).style(Style::default().bold()))
        .block(Block::default().borders(Borders::ALL).title("Workouts"));

        // Selection keeps the cursor row scrolled into view
        let mut state = TableState::default().with_selected(Some(self.workout_cursor));
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect, id: &WorkoutId) {
        let done = self.completed.contains(&id.to_string());
        let mut lines = vec![Line::from(id.title()).bold()];

        match id.day {
            WorkoutDay::Lift(lift) => {
                lines.push(Line::from(format!("Training Max: {} lbs", self.maxes.get(lift))));
            }
            WorkoutDay::WeightedPullups => {
                lines.push(Line::from("Added weight, not percentage based"));
            }
        }
        lines.push(Line::from(""));

        for set in prescribe_workout(id, &self.maxes) {
            let marker = if done { "●" } else { "○" };
            let amrap = if set.amrap { " (AMRAP)" } else { "" };
            lines.push(Line::from(format!("{} {} lbs  {} reps{}", marker, set.weight, set.reps, amrap)));
            if id.day.lift().is_some() {
                lines.push(
                    Line::from(format!("    {}", plate_math_label(f64::from(set.weight), &self.plates)))
                        .style(Style::default().fg(Color::DarkGray)),
                );
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(if done { "Session Completed" } else { "Press c to complete session" }));

        let detail = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Workout"));
        frame.render_widget(detail, area);
    }

    fn render_exercises(&self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let mut lines = Vec::new();
        for (archetype, exercises) in exercises_by_primary_archetype() {
            lines.push(Line::from(archetype.label()).bold());
            for exercise in exercises {
                lines.push(Line::from(format!("  {}", exercise.name)));
            }
        }
        let visible = columns[0].height.saturating_sub(2) as usize;
        let scroll = self.archetype_scroll.min(lines.len().saturating_sub(visible));
        let groups = Paragraph::new(lines)
            .scroll((scroll as u16, 0))
            .block(Block::default().borders(Borders::ALL).title("By Archetype"));
        frame.render_widget(groups, columns[0]);

        let tag_lines: Vec<Line> = all_tags()
            .iter()
            .enumerate()
            .map(|(i, tag)| {
                if i == self.tag_cursor {
                    Line::from(format!("> {}", tag)).style(Style::default().fg(Color::Cyan).bold())
                } else {
                    Line::from(format!("  {}", tag))
                }
            })
            .collect();
        let tags = Paragraph::new(tag_lines)
            .scroll((self.tag_cursor.saturating_sub(columns[1].height.saturating_sub(3) as usize) as u16, 0))
            .block(Block::default().borders(Borders::ALL).title("Tags"));
        frame.render_widget(tags, columns[1]);
    }
}

fn render_tag(frame: &mut Frame, area: Rect, tag: &str) {
    let exercises = exercises_by_tag(tag);
    let lines: Vec<Line> = if exercises.is_empty() {
        vec![Line::from("No exercises found for this category.")]
    } else {
        exercises.iter().map(|e| Line::from(format!("• {}", e.name))).collect()
    };
    let list = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(tag.to_string()));
    frame.render_widget(list, area);
}

fn render_popup(frame: &mut Frame, area: Rect, title: &str, text: &str) {
    let popup = centered_rect(50, 40, area);
    frame.render_widget(Clear, popup);
    let body = Paragraph::new(text.to_string())
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(body, popup);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
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

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Database::open(":memory:").unwrap()).unwrap()
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key).unwrap();
        }
    }

    #[test]
    fn test_workout_slots() {
        let slots = workout_slots();
        assert_eq!(slots.len(), 16);
        assert_eq!(slots[0].to_string(), "1-squat");
        assert_eq!(slots[3].to_string(), "1-weighted-pullups");
        assert_eq!(slots[15].to_string(), "4-weighted-pullups");
    }

    #[test]
    fn test_edit_training_max_saves_on_leave() {
        let mut app = app();
        press(&mut app, &[KeyCode::Down, KeyCode::Char('2'), KeyCode::Char('0'), KeyCode::Char('5')]);
        assert!(matches!(app.mode(), Mode::Edit { .. }));
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.maxes().bench, 205);
        assert_eq!(app.db.load_maxes().unwrap().bench, 205);
    }

    #[test]
    fn test_edit_escape_discards() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('9'), KeyCode::Esc]);
        assert_eq!(app.maxes().squat, 0);
        assert_eq!(*app.mode(), Mode::Browse);
    }

    #[test]
    fn test_one_rep_max_popup() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('o'), KeyCode::Enter]);
        // zero 1RM keeps the popup open
        assert!(matches!(app.mode(), Mode::OneRepMax { .. }));
        press(&mut app, &[KeyCode::Char('3'), KeyCode::Char('0'), KeyCode::Char('0'), KeyCode::Enter]);
        assert_eq!(app.maxes().squat, 270);
        assert_eq!(*app.mode(), Mode::Browse);
    }

    #[test]
    fn test_pullups_row_has_no_one_rep_max() {
        let mut app = app();
        press(&mut app, &[KeyCode::Up, KeyCode::Char('o')]);
        assert_eq!(*app.mode(), Mode::Browse);
    }

    #[test]
    fn test_toggle_completion_and_reset() {
        let mut app = app();
        press(&mut app, &[KeyCode::Tab, KeyCode::Down, KeyCode::Char(' ')]);
        assert_eq!(app.tab(), Tab::Workouts);
        assert!(app.completed().contains("1-bench"));

        press(&mut app, &[KeyCode::Char(' ')]);
        assert!(!app.completed().contains("1-bench"));

        press(&mut app, &[KeyCode::Char(' '), KeyCode::Char('R'), KeyCode::Char('n')]);
        assert!(app.completed().contains("1-bench"));
        press(&mut app, &[KeyCode::Char('R'), KeyCode::Char('y')]);
        assert!(app.completed().is_empty());
        assert!(app.db.load_completed().unwrap().is_empty());
    }

    #[test]
    fn test_detail_complete_returns_to_list() {
        let mut app = app();
        press(&mut app, &[KeyCode::Tab, KeyCode::Enter]);
        assert_eq!(*app.mode(), Mode::Detail(WorkoutId::new(1, Lift::Squat)));
        press(&mut app, &[KeyCode::Char('c')]);
        assert_eq!(*app.mode(), Mode::Browse);
        assert!(app.db.load_completed().unwrap().contains("1-squat"));
    }

    #[test]
    fn test_reset_from_detail_stays_on_workout() {
        let mut app = app();
        press(&mut app, &[KeyCode::Tab, KeyCode::Char(' '), KeyCode::Enter, KeyCode::Char('R')]);
        let id = WorkoutId::new(1, Lift::Squat);
        assert_eq!(*app.mode(), Mode::ConfirmReset(Some(id)));

        press(&mut app, &[KeyCode::Char('y')]);
        assert_eq!(*app.mode(), Mode::Detail(id));
        assert!(app.completed().is_empty());

        press(&mut app, &[KeyCode::Char('R'), KeyCode::Esc]);
        assert_eq!(*app.mode(), Mode::Detail(id));
    }

    fn screen(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(ratatui::backend::TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal.backend().buffer().content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_workouts_table_follows_cursor() {
        let mut app = app();
        press(&mut app, &[KeyCode::Tab, KeyCode::Up]);
        assert_eq!(app.workout_cursor, 15);

        let text = screen(&app, 100, 24);
        assert_eq!(text.matches("Week 4").count(), 4);
        assert!(text.matches("Week 1").count() < 4);
    }

    #[test]
    fn test_archetype_column_scrolls_to_last_group() {
        let mut app = app();
        press(&mut app, &[KeyCode::Tab, KeyCode::Tab]);
        assert!(screen(&app, 100, 40).contains("Lat pulldowns"));

        press(&mut app, &[KeyCode::PageDown; 8]);
        assert_eq!(app.archetype_scroll, archetype_line_count() - 1);
        let text = screen(&app, 100, 40);
        assert!(text.contains("Suitcase Carries"));
        assert!(!text.contains("Lat pulldowns"));

        press(&mut app, &[KeyCode::PageUp; 8]);
        assert_eq!(app.archetype_scroll, 0);
    }

    #[test]
    fn test_exercises_tag_drilldown() {
        let mut app = app();
        press(&mut app, &[KeyCode::Tab, KeyCode::Tab, KeyCode::Enter]);
        assert_eq!(*app.mode(), Mode::Tag(all_tags()[0]));
        press(&mut app, &[KeyCode::Esc]);
        assert_eq!(*app.mode(), Mode::Browse);
    }

    #[test]
    fn test_reload_picks_up_external_changes() {
        let mut app = app();
        app.db.save_maxes(&Maxes::default().with(Lift::Deadlift, 500)).unwrap();
        press(&mut app, &[KeyCode::Char('r')]);
        assert_eq!(app.maxes().deadlift, 500);
    }
}

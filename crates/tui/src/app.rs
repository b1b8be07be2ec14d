use std::{io, thread, time::Duration};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing::{info, warn};
use wc2launch_core::{
    launch::{BatchWriter, BATCH_FILE_NAME},
    select::{Command, Effect, Phase, Selector},
};

const TICK_RATE: Duration = Duration::from_millis(250);
const MENU_WIDTH: u16 = 44;

enum AppEvent {
    Input(Event),
    Tick,
}

/// Terminal frontend driving the selection wizard.
pub struct LauncherApp {
    selector: Selector,
    writer: BatchWriter,
    notice: Option<String>,
}

impl LauncherApp {
    pub fn new(writer: BatchWriter) -> Self {
        Self {
            selector: Selector::new(),
            writer,
            notice: None,
        }
    }

    /// Run the wizard until it quits; returns the farewell message to print
    /// once the terminal has been restored.
    pub async fn run(&mut self) -> Result<Option<String>> {
        let mut stdout = io::stdout();
        enable_raw_mode().context("failed to enter raw mode")?;
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        let (event_tx, mut event_rx) = mpsc::channel::<AppEvent>(128);
        spawn_input_thread(event_tx);

        while !self.selector.is_done() {
            terminal.draw(|frame| self.draw(frame))?;
            match event_rx.recv().await {
                Some(AppEvent::Input(Event::Key(key))) => self.handle_key(key),
                Some(AppEvent::Input(_)) | Some(AppEvent::Tick) => {}
                None => break,
            }
        }

        restore_terminal(&mut terminal)?;
        Ok(self.selector.farewell().map(str::to_string))
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let command = map_key(&key);
        if command == Command::Unknown {
            return;
        }
        self.notice = None;
        match self.selector.apply(command) {
            Effect::None => {}
            Effect::WriteCommand(launch) => match self.writer.write(&launch) {
                Ok(written) => {
                    info!(path = %written.path.display(), "mission confirmed");
                    self.selector.record_written(written.message());
                }
                Err(err) => {
                    warn!(%err, "batch write failed");
                    self.notice = Some(format!("Could not write {BATCH_FILE_NAME}: {err}"));
                }
            },
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let area = frame.size();
        let mut constraints = vec![Constraint::Length(4), Constraint::Min(5)];
        if self.selector.phase() == Phase::Confirm {
            constraints.push(Constraint::Length(5));
        }
        constraints.push(Constraint::Length(3));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        self.render_header(frame, chunks[0]);
        self.render_menu(frame, chunks[1]);
        if self.selector.phase() == Phase::Confirm {
            self.render_launch_panel(frame, chunks[2]);
        }
        self.render_status(frame, chunks[chunks.len() - 1]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let (title, prompt) = self.header_lines();
        let style = Style::default().add_modifier(Modifier::REVERSED);
        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                format!(" {title} "),
                style.add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(format!(" {prompt} "), style)),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(header, area);
    }

    fn header_lines(&self) -> (String, String) {
        match self.selector.phase() {
            Phase::Game => (
                "Wing Commander 2 Mission Launcher".to_string(),
                "Select a Game:".to_string(),
            ),
            Phase::System => {
                let title = self
                    .selector
                    .game()
                    .map(|game| game.title.to_string())
                    .unwrap_or_default();
                (title, "Select a System:".to_string())
            }
            Phase::Mission => {
                let title = match (self.selector.game(), self.selector.system()) {
                    (Some(game), Some(system)) => format!("{}, {}", game.title, system.name),
                    _ => String::new(),
                };
                (title, "Select a Mission:".to_string())
            }
            Phase::Confirm | Phase::Quit => {
                let title = match (self.selector.system(), self.selector.mission()) {
                    (Some(system), Some(mission)) => system.mission_label(mission),
                    _ => String::new(),
                };
                (title, "Press Enter to Go!".to_string())
            }
        }
    }

    fn render_menu(&self, frame: &mut Frame, area: Rect) {
        let entries = self.menu_entries();
        let cursor = self.selector.cursor();

        let lines: Vec<Line> = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                // Labels carry the hex shortcut the entry answers to.
                let text = format!(" {:X}. {entry} ", idx + 1);
                if idx == cursor {
                    Line::from(Span::styled(
                        text,
                        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::raw(text))
                }
            })
            .collect();

        let height = (lines.len() as u16).saturating_add(2).min(area.height);
        let width = MENU_WIDTH.min(area.width.max(1));
        let menu_area = centered_rect(width, height, area);
        let menu = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(self.menu_title()));
        frame.render_widget(menu, menu_area);
    }

    fn menu_title(&self) -> &'static str {
        match self.selector.phase() {
            Phase::Game => "Games",
            Phase::System => "Systems",
            Phase::Mission | Phase::Confirm | Phase::Quit => "Missions",
        }
    }

    fn menu_entries(&self) -> Vec<String> {
        match self.selector.phase() {
            Phase::Game => wc2launch_core::GameId::ALL
                .iter()
                .map(|id| id.info().title.to_string())
                .collect(),
            Phase::System => self
                .selector
                .game()
                .map(|game| {
                    game.systems
                        .iter()
                        .map(|system| system.name.to_string())
                        .collect()
                })
                .unwrap_or_default(),
            Phase::Mission | Phase::Confirm => self
                .selector
                .system()
                .map(|system| {
                    (0..system.missions.len())
                        .map(|idx| system.mission_label(idx))
                        .collect()
                })
                .unwrap_or_default(),
            Phase::Quit => Vec::new(),
        }
    }

    fn render_launch_panel(&self, frame: &mut Frame, area: Rect) {
        let command = self
            .selector
            .pending()
            .map(|pending| pending.line())
            .unwrap_or_default();
        let prompt = format!("Press Enter to write {BATCH_FILE_NAME} and finish!");
        let panel = Paragraph::new(vec![
            Line::from(Span::styled(
                command,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                prompt,
                Style::default().add_modifier(Modifier::REVERSED | Modifier::SLOW_BLINK),
            )),
        ])
        .block(Block::default().borders(Borders::ALL).title("Launch"))
        .alignment(Alignment::Center);
        frame.render_widget(panel, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let text = match &self.notice {
            Some(notice) => notice.clone(),
            None => self.help_line(),
        };
        let status =
            Paragraph::new(Line::from(text)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, area);
    }

    fn help_line(&self) -> String {
        match self.selector.phase() {
            Phase::Game => "Select a Game. Esc - Quit".to_string(),
            Phase::System => {
                let abbrev = self
                    .selector
                    .game()
                    .map(|game| game.abbrev)
                    .unwrap_or_default();
                format!("Select a {abbrev} system. Q - Prev Menu. Esc - Quit")
            }
            Phase::Mission => {
                let name = self
                    .selector
                    .system()
                    .map(|system| system.name)
                    .unwrap_or_default();
                format!("Select mission in {name}. Q - Prev Menu. Esc - Quit")
            }
            Phase::Confirm => {
                let name = self
                    .selector
                    .system()
                    .map(|system| system.name)
                    .unwrap_or_default();
                format!("Confirm mission in {name}. Q - Prev Menu. Esc - Quit")
            }
            Phase::Quit => String::new(),
        }
    }
}

/// Translate a terminal key event into a wizard command.
fn map_key(key: &KeyEvent) -> Command {
    match key.code {
        KeyCode::Up => Command::MoveUp,
        KeyCode::Down => Command::MoveDown,
        KeyCode::Left => Command::MoveBack,
        KeyCode::Right | KeyCode::Enter => Command::Confirm,
        KeyCode::Esc => Command::Cancel,
        KeyCode::Char(ch) => Command::from_shortcut(ch),
        _ => Command::Unknown,
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor()?;
    Ok(())
}

fn spawn_input_thread(sender: mpsc::Sender<AppEvent>) {
    thread::spawn(move || loop {
        match event::poll(TICK_RATE) {
            Ok(true) => match event::read() {
                Ok(evt) => {
                    if sender.blocking_send(AppEvent::Input(evt)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            },
            Ok(false) => {
                if sender.blocking_send(AppEvent::Tick).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });
}

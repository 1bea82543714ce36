//! Terminal setup, teardown and input
//!
//! Critical: installs a panic hook that restores the terminal, otherwise a
//! panic in raw mode with mouse capture leaves the shell unusable.

use std::io::{self, stdout};
use std::panic;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use terrarium_core::{CanvasConfig, FrameInput, Point, Senses};

pub type Tui = Terminal<CrosstermBackend<io::Stdout>>;

fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            LeaveAlternateScreen,
            crossterm::cursor::Show
        );
        original_hook(panic_info);
    }));
}

/// Raw mode, alternate screen, mouse capture.
pub fn init() -> Result<Tui> {
    install_panic_hook();
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

pub fn restore() -> Result<()> {
    disable_raw_mode()?;
    execute!(
        stdout(),
        DisableMouseCapture,
        LeaveAlternateScreen,
        crossterm::cursor::Show
    )?;
    Ok(())
}

/// Maps terminal cells onto the simulation canvas. The whole terminal shows
/// the whole canvas, so a cell covers `width / cols` by `height / rows`
/// canvas pixels and its center is what the pointer reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMap {
    cols: u16,
    rows: u16,
    width: f32,
    height: f32,
}

impl CellMap {
    pub fn new(cols: u16, rows: u16, canvas: &CanvasConfig) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
            width: canvas.width as f32,
            height: canvas.height as f32,
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols.max(1);
        self.rows = rows.max(1);
    }

    pub fn to_canvas(&self, column: u16, row: u16) -> Point {
        Point::new(
            (column as f32 + 0.5) / self.cols as f32 * self.width,
            (row as f32 + 0.5) / self.rows as f32 * self.height,
        )
    }
}

/// Drains pending crossterm events once per frame without blocking.
pub struct TerminalSenses {
    cells: CellMap,
    pointer: Point,
}

impl TerminalSenses {
    pub fn new(canvas: &CanvasConfig) -> Result<Self> {
        let (cols, rows) = crossterm::terminal::size()?;
        Ok(Self {
            cells: CellMap::new(cols, rows, canvas),
            pointer: canvas.center(),
        })
    }

    fn absorb(&mut self, event: Event, input: &mut FrameInput) {
        match event {
            Event::Key(key) => {
                if is_quit(&key) {
                    input.quit = true;
                }
            }
            Event::Mouse(MouseEvent {
                kind, column, row, ..
            }) => {
                match kind {
                    MouseEventKind::Down(MouseButton::Left) => input.presses += 1,
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => {}
                    _ => return,
                }
                self.pointer = self.cells.to_canvas(column, row);
            }
            Event::Resize(cols, rows) => {
                tracing::debug!(cols, rows, "terminal resized");
                self.cells.resize(cols, rows);
            }
            _ => {}
        }
    }
}

impl Senses for TerminalSenses {
    fn sense(&mut self, _now_ms: u64) -> Result<FrameInput> {
        let mut input = FrameInput::default();
        while event::poll(Duration::ZERO)? {
            self.absorb(event::read()?, &mut input);
        }
        input.pointer = self.pointer;
        Ok(input)
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

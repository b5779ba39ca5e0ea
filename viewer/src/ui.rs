use std::io::{self, Stdout, Write, stdout};
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};

pub struct TerminalView<W: Write> {
    stdout: W,
    is_raw_mode_owner: bool, // True except in tests.
}

impl TerminalView<Stdout> {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, Hide)?;
        Ok(Self {
            stdout,
            is_raw_mode_owner: true,
        })
    }

    /// Blocks until a key is pressed, then returns it as a character. Escape and Ctrl-C come
    /// back as `'q'`, since raw mode swallows the interrupt signal.
    pub fn wait_for_key(&mut self) -> io::Result<Option<char>> {
        if event::poll(Duration::from_millis(250))? {
            Ok(key_from_event(event::read()?))
        } else {
            Ok(None)
        }
    }
}

impl<W: Write> TerminalView<W> {
    pub fn draw(&mut self, text: &str) -> io::Result<()> {
        queue!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        for line in text.lines() {
            // Raw mode: every line needs its own carriage return.
            queue!(self.stdout, Print(line), Print("\r\n"))?;
        }
        self.stdout.flush()
    }
}

impl<W: Write> Drop for TerminalView<W> {
    fn drop(&mut self) {
        if self.is_raw_mode_owner {
            // Only the instance that enabled raw mode turns it off again.
            execute!(self.stdout, Show, Print("\r\n")).ok();
            terminal::disable_raw_mode().ok();
        }
    }
}

pub fn key_from_event(event: Event) -> Option<char> {
    match event {
        Event::Key(KeyEvent {
            kind: KeyEventKind::Release,
            ..
        }) => None,
        Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers,
            ..
        }) if modifiers.contains(KeyModifiers::CONTROL) => Some('q'),
        Event::Key(KeyEvent {
            code: KeyCode::Esc, ..
        }) => Some('q'),
        Event::Key(KeyEvent {
            code: KeyCode::Char(c),
            ..
        }) => Some(c),
        _ => None,
    }
}

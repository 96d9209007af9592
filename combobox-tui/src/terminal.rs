use std::io::{self, Write};

use crossterm::{
    cursor, event, execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal,
};

/// How a line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Normal,
    Bold,
    Reverse,
    Dim,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub emphasis: Emphasis,
}

impl Line {
    pub fn new(text: impl Into<String>, emphasis: Emphasis) -> Self {
        Self {
            text: text.into(),
            emphasis,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Emphasis::Normal)
    }
}

/// Raw-mode alternate screen, restored on drop.
pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        Ok(Self { stdout })
    }

    /// Redraw the whole screen, one line per terminal row.
    pub fn draw(&mut self, lines: &[Line]) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;

        for (y, line) in lines.iter().take(height as usize).enumerate() {
            let text: String = line.text.chars().take(width as usize).collect();
            queue!(self.stdout, cursor::MoveTo(0, y as u16))?;
            match line.emphasis {
                Emphasis::Normal => {}
                Emphasis::Bold => queue!(self.stdout, SetAttribute(Attribute::Bold))?,
                Emphasis::Reverse => queue!(self.stdout, SetAttribute(Attribute::Reverse))?,
                Emphasis::Dim => queue!(self.stdout, SetAttribute(Attribute::Dim))?,
            }
            queue!(self.stdout, Print(text), SetAttribute(Attribute::Reset))?;
        }

        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor, event, execute,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use log::debug;

use crate::buffer::Buffer;
use crate::event::{from_crossterm, Event};
use crate::style::Rgb;
use crate::text::char_width;

pub struct Terminal {
    stdout: io::Stdout,
    current_buffer: Buffer,
    previous_buffer: Buffer,
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

        let (width, height) = terminal::size()?;
        let current_buffer = Buffer::new(width, height);
        let previous_buffer = Buffer::new(width, height);

        Ok(Self {
            stdout,
            current_buffer,
            previous_buffer,
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current_buffer.width(), self.current_buffer.height())
    }

    /// Wait up to `timeout` for input, then drain everything pending.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<Event>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                // Block until event
                if let Some(ev) = from_crossterm(&event::read()?) {
                    events.push(ev);
                }
                return Ok(events);
            }
        };

        if has_event {
            if let Some(ev) = from_crossterm(&event::read()?) {
                events.push(ev);
            }
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                if let Some(ev) = from_crossterm(&event::read()?) {
                    events.push(ev);
                }
            }
        }

        Ok(events)
    }

    /// Render one frame: clear the back buffer, let the caller draw into
    /// it, then flush only the cells that changed since the last frame.
    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut Buffer),
    {
        // Check if terminal size changed
        let (width, height) = terminal::size()?;
        if width != self.current_buffer.width() || height != self.current_buffer.height() {
            debug!("terminal resized to {width}x{height}");
            self.current_buffer = Buffer::new(width, height);
            self.previous_buffer = Buffer::new(width, height);
        }

        self.current_buffer.clear();
        f(&mut self.current_buffer);

        self.flush_diff()?;

        std::mem::swap(&mut self.current_buffer, &mut self.previous_buffer);
        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_char_width: u16 = 1;
        let mut last_fg = Rgb::new(255, 255, 255);
        let mut last_bg = Rgb::new(0, 0, 0);
        let mut last_style = crate::style::TextStyle::new();

        // Reset to known state at start
        execute!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current_buffer.diff(&self.previous_buffer) {
            // Skip wide character continuation cells - the wide char already occupies this space
            if cell.wide_continuation {
                continue;
            }

            // Move cursor if not sequential (accounting for wide chars)
            if y != last_y || x != last_x + last_char_width {
                execute!(self.stdout, cursor::MoveTo(x, y))?;
            }

            // Update colors if changed
            if cell.fg != last_fg {
                execute!(
                    self.stdout,
                    SetForegroundColor(CtColor::Rgb {
                        r: cell.fg.r,
                        g: cell.fg.g,
                        b: cell.fg.b,
                    })
                )?;
                last_fg = cell.fg;
            }

            if cell.bg != last_bg {
                execute!(
                    self.stdout,
                    SetBackgroundColor(CtColor::Rgb {
                        r: cell.bg.r,
                        g: cell.bg.g,
                        b: cell.bg.b,
                    })
                )?;
                last_bg = cell.bg;
            }

            // Apply text style changes
            if cell.style.bold != last_style.bold {
                if cell.style.bold {
                    execute!(self.stdout, SetAttribute(Attribute::Bold))?;
                } else {
                    execute!(self.stdout, SetAttribute(Attribute::NormalIntensity))?;
                }
            }
            if cell.style.dim != last_style.dim {
                if cell.style.dim {
                    execute!(self.stdout, SetAttribute(Attribute::Dim))?;
                } else {
                    execute!(self.stdout, SetAttribute(Attribute::NormalIntensity))?;
                }
            }
            if cell.style.italic != last_style.italic {
                if cell.style.italic {
                    execute!(self.stdout, SetAttribute(Attribute::Italic))?;
                } else {
                    execute!(self.stdout, SetAttribute(Attribute::NoItalic))?;
                }
            }
            if cell.style.underline != last_style.underline {
                if cell.style.underline {
                    execute!(self.stdout, SetAttribute(Attribute::Underlined))?;
                } else {
                    execute!(self.stdout, SetAttribute(Attribute::NoUnderline))?;
                }
            }
            last_style = cell.style;

            // Write character
            write!(self.stdout, "{}", cell.char)?;

            last_x = x;
            last_y = y;
            last_char_width = char_width(cell.char).max(1) as u16;
        }

        // Reset at end
        execute!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
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

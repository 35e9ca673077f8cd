use crossterm::event::{
    Event as CrosstermEvent, KeyEventKind, MouseEventKind,
};

/// Input events after decoding from the backend. Mouse events carry
/// absolute coordinates; routing is the consumer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Key {
        key: Key,
        modifiers: Modifiers,
    },
    Click {
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Wheel scroll; positive delta scrolls down.
    Scroll {
        x: u16,
        y: u16,
        delta: i16,
    },
    Resize {
        width: u16,
        height: u16,
    },
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Decode a raw crossterm event. Returns `None` for events with no
/// equivalent here (releases, drags, focus changes, paste).
pub fn from_crossterm(event: &CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            Some(Event::Key {
                key: key.code.into(),
                modifiers: key.modifiers.into(),
            })
        }
        CrosstermEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(button) => Some(Event::Click {
                x: mouse.column,
                y: mouse.row,
                button: button.into(),
            }),
            MouseEventKind::ScrollUp => Some(Event::Scroll {
                x: mouse.column,
                y: mouse.row,
                delta: -1,
            }),
            MouseEventKind::ScrollDown => Some(Event::Scroll {
                x: mouse.column,
                y: mouse.row,
                delta: 1,
            }),
            _ => None,
        },
        CrosstermEvent::Resize(width, height) => Some(Event::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Char('\0'), // Placeholder for unsupported keys
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

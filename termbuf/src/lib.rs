pub mod buffer;
pub mod event;
pub mod rect;
pub mod style;
pub mod terminal;
pub mod text;

pub use buffer::{Buffer, Cell};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use rect::Rect;
pub use style::{Rgb, Span, Style, TextStyle};
pub use terminal::Terminal;
pub use text::TextAlign;

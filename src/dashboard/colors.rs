use crossterm::style::Color;

use crate::analysis::PerformanceLevel;

pub fn good_fg() -> Color {
    Color::Rgb {
        r: 0x51,
        g: 0xcf,
        b: 0x66,
    }
} // #51cf66
pub fn average_fg() -> Color {
    Color::Rgb {
        r: 0xff,
        g: 0xa9,
        b: 0x4d,
    }
} // #ffa94d
pub fn poor_fg() -> Color {
    Color::Rgb {
        r: 0xff,
        g: 0x6b,
        b: 0x6b,
    }
} // #ff6b6b
pub fn header_fg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn subheader_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn muted_fg() -> Color {
    Color::AnsiValue(246)
} // Grey
pub fn accent_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan

/// Card colour for a performance level
pub fn level_fg(level: PerformanceLevel) -> Color {
    match level {
        PerformanceLevel::Good => good_fg(),
        PerformanceLevel::Average => average_fg(),
        PerformanceLevel::Poor => poor_fg(),
    }
}

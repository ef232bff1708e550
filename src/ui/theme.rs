use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(140, 115, 200);
pub const HEADER_BG: Color = Color::Rgb(25, 25, 38);
pub const STATUS_BG: Color = Color::Rgb(30, 30, 40);
pub const SEPARATOR: Color = Color::Rgb(55, 55, 75);
pub const CARD_BORDER: Color = Color::Rgb(55, 55, 75);
pub const ACTIVE_BORDER: Color = Color::Rgb(120, 120, 180);
pub const TITLE_FG: Color = Color::Rgb(220, 220, 230);
pub const DIM_TEXT: Color = Color::Rgb(100, 100, 120);
pub const PIN_COLOR: Color = Color::Yellow;
pub const STAR_COLOR: Color = Color::Yellow;
pub const FILTER_COLOR: Color = Color::Cyan;
pub const ERROR_FG: Color = Color::LightRed;
pub const WARN_FG: Color = Color::Yellow;

pub fn language_color(name: &str) -> Color {
    match name {
        "Rust" => Color::Rgb(222, 165, 132),
        "TypeScript" | "JavaScript" => Color::Yellow,
        "Python" => Color::Cyan,
        "Go" => Color::LightCyan,
        "C" | "C++" | "C#" => Color::Blue,
        "Ruby" | "Scala" => Color::LightRed,
        "Java" | "Kotlin" => Color::Rgb(176, 114, 25),
        "Shell" | "Lua" => Color::Green,
        "HTML" | "CSS" => Color::Magenta,
        _ => Color::White,
    }
}

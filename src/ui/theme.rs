use ratatui::style::Color;

pub const BG_PRIMARY: Color = Color::Rgb(24, 18, 14);
pub const BG_PANEL: Color = Color::Rgb(36, 28, 22);
pub const FG_PRIMARY: Color = Color::Rgb(235, 225, 210);
pub const FG_DIM: Color = Color::Rgb(140, 128, 115);

pub const BAR_BG: Color = Color::Rgb(92, 58, 33);
pub const BAR_TEXT: Color = Color::Rgb(250, 240, 225);

pub const SWITCH_BG: Color = Color::Rgb(70, 60, 52);
pub const SWITCH_ACTIVE_BG: Color = Color::Rgb(198, 134, 66);
pub const SWITCH_ACTIVE_FG: Color = Color::Rgb(20, 14, 10);

pub const BUTTON_BG: Color = Color::Rgb(111, 78, 55);
pub const BUTTON_FG: Color = Color::Rgb(255, 248, 240);

pub const BORDER_IDLE: Color = Color::Rgb(120, 96, 76);
pub const BORDER_FOCUS: Color = Color::Rgb(198, 134, 66);
pub const LINK_FG: Color = Color::Rgb(120, 190, 255);
pub const ERROR_FG: Color = Color::Rgb(235, 100, 90);

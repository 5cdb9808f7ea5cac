use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue: pointer moves
    pub secondary: Color, // Orange: input and output
    pub comment: Color,   // Grey
    pub success: Color,   // Green: brackets
    pub error: Color,     // Red: current instruction, faults
    pub number: Color,
    pub glyph: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    number: Color::Rgb(205, 214, 244),
    glyph: Color::Rgb(250, 179, 135),          // Orange, like the I/O instructions
    border_focused: Color::Rgb(249, 226, 175), // Yellow border while waiting for input
    border_normal: Color::Rgb(108, 112, 134),
    current_line_bg: Color::Rgb(50, 50, 70),
};

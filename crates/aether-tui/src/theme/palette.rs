//! Color palette for the Mint-inspired glass theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(14, 18, 16); // Wallpaper
pub const CARD_BG: Color = Color::Rgb(20, 26, 23); // Glass panels
pub const POPUP_BG: Color = Color::Rgb(32, 40, 36); // Modal dialogs
pub const TERMINAL_BG: Color = Color::Rgb(10, 13, 12); // Floating terminal

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(52, 64, 58);
pub const BORDER_ACTIVE: Color = Color::Rgb(135, 207, 62); // Mint green

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(135, 207, 62);

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(222, 228, 224);
pub const TEXT_SECONDARY: Color = Color::Rgb(160, 170, 164);
pub const TEXT_MUTED: Color = Color::Rgb(96, 106, 100);
pub const CONTRAST_FG: Color = Color::Black; // Text on accent backgrounds

// --- Terminal ---
pub const PROMPT: Color = Color::Rgb(135, 207, 62);
pub const TERMINAL_TEXT: Color = Color::Rgb(210, 218, 212);
pub const TERMINAL_OUTPUT: Color = Color::Rgb(150, 160, 154);

// --- Status ---
pub const STATUS_YELLOW: Color = Color::Yellow;

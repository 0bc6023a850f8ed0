use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x000d6efd);
pub const SUCCESS: Color = Color::from_u32(0x00198754);
pub const INFO: Color = Color::from_u32(0x000dcaf0);
pub const WARNING: Color = Color::from_u32(0x00ffc107);
pub const NEUTRAL: Color = Color::from_u32(0x006c757d);
pub const BACKGROUND: Color = Color::from_u32(0x000d0d0d);

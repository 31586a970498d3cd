//! Translation bar placement.
//!
//! # Positioning Rules (DO NOT CHANGE WITHOUT UPDATING COMMENTS)
//!
//! 1. **Horizontal**: centered on the display nearest the current cursor
//!    position, recomputed on every show.
//! 2. **Vertical**: a fixed offset chosen once at startup from the primary
//!    display height - `160` above 800 px, `80` otherwise. A deliberately
//!    simple heuristic, not a multi-monitor layout engine.

/// Bar window width in logical pixels. Resizes keep this fixed.
pub const BAR_WIDTH: u32 = 680;

/// Initial bar window height in logical pixels.
pub const BAR_HEIGHT: u32 = 85;

/// Primary displays taller than this get the lower bar placement.
const TALL_DISPLAY_HEIGHT: u32 = 800;

const TALL_OFFSET: i32 = 160;
const SHORT_OFFSET: i32 = 80;

/// X coordinate centering a window of `window_width` on the display starting
/// at `display_x` with `display_width`.
pub fn horizontal_center(display_x: i32, display_width: u32, window_width: u32) -> i32 {
    display_x + ((display_width as f64 - window_width as f64) / 2.0).round() as i32
}

/// Y offset for the bar, from the primary display height.
pub fn vertical_offset(primary_height: u32) -> i32 {
    if primary_height > TALL_DISPLAY_HEIGHT {
        TALL_OFFSET
    } else {
        SHORT_OFFSET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_center() {
        // display at x=100, 1000 wide; 680-wide bar lands at 260
        assert_eq!(horizontal_center(100, 1000, BAR_WIDTH), 260);
        assert_eq!(horizontal_center(0, 1920, BAR_WIDTH), 620);
    }

    #[test]
    fn test_horizontal_center_rounds() {
        // odd leftover width rounds rather than truncates
        assert_eq!(horizontal_center(0, 681, 680), 1);
        assert_eq!(horizontal_center(0, 683, 680), 2);
    }

    #[test]
    fn test_horizontal_center_negative_display_origin() {
        // secondary display left of the primary
        assert_eq!(horizontal_center(-1920, 1920, BAR_WIDTH), -1300);
    }

    #[test]
    fn test_vertical_offset() {
        assert_eq!(vertical_offset(900), 160);
        assert_eq!(vertical_offset(700), 80);
    }

    #[test]
    fn test_vertical_offset_boundary() {
        // 800 is not "taller than 800"
        assert_eq!(vertical_offset(800), 80);
        assert_eq!(vertical_offset(801), 160);
    }
}

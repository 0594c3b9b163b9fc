//! Grid sizing from window dimensions and the chosen cell-size tier.
//!
//! Each tier picks a fixed pair of density multipliers and a render scale.
//! Tier 10 and anything unrecognised use the largest cells (scale 1.0).

/// Pixel offset of the grid from the window's top-left corner
pub const MARGIN: f32 = 10.0;
/// Cell sprite width at render scale 1.0
pub const CELL_PIXEL_WIDTH: f32 = 30.0;
/// Cell sprite height at render scale 1.0
pub const CELL_PIXEL_HEIGHT: f32 = 24.0;

/// Cell-size selection, 1 (tiny cells) through 10 (large cells)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellTier(u8);

impl CellTier {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Returns None outside 1..=10
    pub fn new(tier: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&tier).then_some(Self(tier))
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// All tiers, largest cells first (menu order)
    pub fn all() -> impl Iterator<Item = CellTier> {
        (Self::MIN..=Self::MAX).rev().map(CellTier)
    }

    /// (width multiplier, height multiplier, render scale)
    const fn multipliers(self) -> (f64, f64, f32) {
        match self.0 {
            9 => (0.0369, 0.0438, 0.9),
            8 => (0.0407, 0.0500, 0.8),
            7 => (0.0468, 0.0583, 0.7),
            6 => (0.0546, 0.0687, 0.6),
            5 => (0.0656, 0.0812, 0.5),
            4 => (0.0813, 0.1020, 0.4),
            3 => (0.1093, 0.1354, 0.3),
            2 => (0.1640, 0.2041, 0.2),
            1 => (0.3265, 0.4062, 0.1),
            _ => (0.0325, 0.0400, 1.0),
        }
    }
}

impl Default for CellTier {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

/// Grid dimensions and render scale derived for a session
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleConfig {
    pub width: usize,
    pub height: usize,
    pub render_scale: f32,
}

impl ScaleConfig {
    /// Pure lookup: truncates `window * multiplier` to whole cells
    pub fn from_tier(tier: CellTier, window_width: u32, window_height: u32) -> Self {
        let (wm, hm, render_scale) = tier.multipliers();
        Self {
            width: (window_width as f64 * wm) as usize,
            height: (window_height as f64 * hm) as usize,
            render_scale,
        }
    }

    /// On-screen cell width in pixels
    pub fn cell_width(&self) -> f32 {
        self.render_scale * CELL_PIXEL_WIDTH
    }

    /// On-screen cell height in pixels
    pub fn cell_height(&self) -> f32 {
        self.render_scale * CELL_PIXEL_HEIGHT
    }

    /// Top-left pixel of the sprite for grid cell (x, y)
    pub fn grid_to_screen(&self, x: usize, y: usize) -> (f32, f32) {
        (
            x as f32 * self.cell_width() + MARGIN,
            y as f32 * self.cell_height() + MARGIN,
        )
    }

    /// Map a window pixel to grid coordinates, truncating toward zero.
    /// Pixels left of or above the margin can map to negative coordinates.
    pub fn screen_to_grid(&self, px: f32, py: f32) -> (i64, i64) {
        let x = ((px - MARGIN) / self.cell_width()) as i64;
        let y = ((py - MARGIN) / self.cell_height()) as i64;
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_bounds() {
        assert!(CellTier::new(0).is_none());
        assert!(CellTier::new(11).is_none());
        assert_eq!(CellTier::new(1).map(CellTier::get), Some(1));
        assert_eq!(CellTier::default().get(), 10);
        assert_eq!(CellTier::all().count(), 10);
        assert_eq!(CellTier::all().next(), Some(CellTier::default()));
    }

    #[test]
    fn test_tier_five_at_640x480() {
        let scale = ScaleConfig::from_tier(CellTier(5), 640, 480);
        assert_eq!(scale.width, 41);
        assert_eq!(scale.height, 38);
        assert_eq!(scale.render_scale, 0.5);
    }

    #[test]
    fn test_default_tier_at_640x480() {
        let scale = ScaleConfig::from_tier(CellTier::default(), 640, 480);
        assert_eq!(scale.width, 20);
        assert_eq!(scale.height, 19);
        assert_eq!(scale.render_scale, 1.0);
    }

    #[test]
    fn test_smallest_tier_is_densest() {
        let tiny = ScaleConfig::from_tier(CellTier(1), 1024, 768);
        let large = ScaleConfig::from_tier(CellTier(10), 1024, 768);
        assert_eq!(tiny.width, 334);
        assert_eq!(tiny.height, 311);
        assert!(tiny.width > large.width && tiny.height > large.height);
    }

    #[test]
    fn test_grid_to_screen() {
        let scale = ScaleConfig::from_tier(CellTier(5), 640, 480);
        assert_eq!(scale.grid_to_screen(0, 0), (10.0, 10.0));
        assert_eq!(scale.grid_to_screen(2, 3), (40.0, 46.0));
    }

    #[test]
    fn test_screen_to_grid_truncates_toward_zero() {
        let scale = ScaleConfig::from_tier(CellTier::default(), 640, 480);
        assert_eq!(scale.screen_to_grid(10.0, 10.0), (0, 0));
        assert_eq!(scale.screen_to_grid(69.0, 57.0), (1, 1));
        // Inside the margin still truncates to 0
        assert_eq!(scale.screen_to_grid(5.0, 5.0), (0, 0));
        // A full cell left of the margin goes negative
        assert_eq!(scale.screen_to_grid(-25.0, -20.0), (-1, -1));
    }
}

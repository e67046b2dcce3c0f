use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlowerShape {
    Daisy,
    Peony,
    Tropical,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Palette {
    Pink,
    Red,
    Yellow,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Flower {
    pub row: u8,
    pub col: u8,
    /// Pixel nudges off the grid slot.
    pub x_offset: f32,
    pub y_offset: f32,
    pub scale: f32,
    pub rotation: f32,
    pub shape: FlowerShape,
    pub palette: Palette,
    /// Wait before this flower starts blooming.
    pub delay_ms: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransitionAction {
    Covered,
}

/// Screen-covering bloom that runs from the bottom row up.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowerField {
    rows: u8,
    cols: u8,
    flowers: Vec<Flower>,
}

impl FlowerField {
    pub const ROWS: u8 = 12;
    pub const COLS: u8 = 8;
    pub const ROW_STAGGER_MS: u32 = 80;
    pub const MAX_JITTER_MS: u32 = 150;
    pub const BLOOM_MS: u32 = 900;

    pub fn generate(seed: u64) -> Self {
        Self::generate_with(seed, Self::ROWS, Self::COLS)
    }

    pub fn generate_with(seed: u64, rows: u8, cols: u8) -> Self {
        const SHAPES: [FlowerShape; 3] = [FlowerShape::Daisy, FlowerShape::Peony, FlowerShape::Tropical];
        const PALETTES: [Palette; 3] = [Palette::Pink, Palette::Red, Palette::Yellow];

        let rows = rows.max(1);
        let cols = cols.max(1);
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut flowers = Vec::with_capacity(usize::from(rows) * usize::from(cols));

        for row in 0..rows {
            for col in 0..cols {
                let base_delay = u32::from(rows - 1 - row) * Self::ROW_STAGGER_MS;
                flowers.push(Flower {
                    row,
                    col,
                    x_offset: rng.random_range(-20.0..20.0),
                    y_offset: rng.random_range(-20.0..20.0),
                    scale: rng.random_range(2.0..3.5),
                    rotation: rng.random_range(0.0..360.0),
                    shape: SHAPES[rng.random_range(0..SHAPES.len())],
                    palette: PALETTES[rng.random_range(0..PALETTES.len())],
                    delay_ms: base_delay + rng.random_range(0..Self::MAX_JITTER_MS),
                });
            }
        }

        log::debug!("flower field {}x{} from seed {}", rows, cols, seed);
        Self {
            rows,
            cols,
            flowers,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn flowers(&self) -> &[Flower] {
        &self.flowers
    }

    /// The top-left flower, whose bloom marks the screen as covered.
    pub fn trigger(&self) -> Option<&Flower> {
        self.flowers
            .iter()
            .find(|flower| flower.row == 0 && flower.col == 0)
    }

    pub fn completion_ms(&self) -> u32 {
        self.trigger()
            .map_or(0, |flower| flower.delay_ms)
            + Self::BLOOM_MS
    }

    pub fn timeline(&self) -> Timeline<TransitionAction> {
        Timeline::new().then(self.completion_ms(), TransitionAction::Covered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_field() {
        assert_eq!(FlowerField::generate(7), FlowerField::generate(7));
        assert_ne!(FlowerField::generate(7), FlowerField::generate(8));
    }

    #[test]
    fn bottom_rows_bloom_first() {
        let field = FlowerField::generate(42);
        assert_eq!(field.flowers().len(), 96);

        for flower in field.flowers() {
            let base = u32::from(FlowerField::ROWS - 1 - flower.row) * FlowerField::ROW_STAGGER_MS;
            assert!(flower.delay_ms >= base);
            assert!(flower.delay_ms < base + FlowerField::MAX_JITTER_MS);
            assert!((2.0..3.5).contains(&flower.scale));
            assert!(flower.x_offset.abs() <= 20.0);
        }
    }

    #[test]
    fn covered_once_trigger_flower_finishes() {
        let field = FlowerField::generate(3);
        let trigger = *field.trigger().unwrap();
        assert_eq!((trigger.row, trigger.col), (0, 0));

        let expected = trigger.delay_ms + FlowerField::BLOOM_MS;
        assert_eq!(field.completion_ms(), expected);
        assert!(expected >= 11 * 80 + 900);

        let timeline = field.timeline();
        assert_eq!(timeline.len(), 1);
        assert_eq!(
            timeline.total_duration(),
            core::time::Duration::from_millis(expected.into())
        );
    }

    #[test]
    fn degenerate_sizes_are_clamped() {
        let field = FlowerField::generate_with(1, 0, 0);
        assert_eq!((field.rows(), field.cols()), (1, 1));
        assert!(field.trigger().is_some());
    }
}

use crate::catalog::{self, Pattern};
use crate::types::{FigureKind, Phase, Rotation, FIELD_HEIGHT, FIELD_WIDTH};

/// Preview of the upcoming figure, pattern resolved by value
///
/// Carrying the resolved 4x4 grid keeps the snapshot self-contained; hosts
/// never hold references into the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextPreview {
    pub kind: FigureKind,
    pub rotation: Rotation,
    pub pattern: Pattern,
}

impl NextPreview {
    pub fn new(kind: FigureKind, rotation: Rotation) -> Self {
        Self {
            kind,
            rotation,
            pattern: *catalog::pattern(kind, rotation),
        }
    }
}

/// Read-only game state copy returned from every tick
///
/// The field grid includes the active figure, already painted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub field: [[u8; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize],
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub speed: u32,
    pub phase: Phase,
    pub next: NextPreview,
}

impl Snapshot {
    /// Cell code at (x, y); out-of-range reads as empty
    pub fn cell(&self, x: usize, y: usize) -> u8 {
        if x < FIELD_WIDTH as usize && y < FIELD_HEIGHT as usize {
            self.field[y][x]
        } else {
            0
        }
    }

    /// True while gameplay transitions can fire
    pub fn in_play(&self) -> bool {
        matches!(self.phase, Phase::Spawn | Phase::Moving | Phase::Shift)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            field: [[0; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize],
            score: 0,
            high_score: 0,
            level: 1,
            speed: 1,
            phase: Phase::Uninit,
            next: NextPreview::new(FigureKind::I, Rotation::R0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_resolves_pattern_from_catalog() {
        let preview = NextPreview::new(FigureKind::T, Rotation::R180);
        assert_eq!(&preview.pattern, catalog::pattern(FigureKind::T, Rotation::R180));
    }

    #[test]
    fn out_of_range_cell_reads_empty() {
        let snapshot = Snapshot::default();
        assert_eq!(snapshot.cell(99, 0), 0);
        assert_eq!(snapshot.cell(0, 99), 0);
    }
}

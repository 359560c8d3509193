//! Active figure - position, cached bounds, movement and landing tests
//!
//! The figure caches its occupied column extent and the lowest occupied row
//! per column. The edges give O(1) wall checks on horizontal moves; the
//! per-column floors make the landing test correct whether the figure is
//! currently painted into the field or erased from it (only cells below the
//! footprint are ever examined).
//!
//! All movement is saturating: an illegal shift or rotation leaves the
//! figure untouched and reports `false`. The walls are just walls.

use arrayvec::ArrayVec;

use crate::catalog;
use crate::field::Field;
use crate::types::{FigureKind, Rotation, FIELD_HEIGHT, FIELD_WIDTH, FIGURE_BOX};

/// Absolute field coordinates covered by the figure
pub type FigureCells = ArrayVec<(i8, i8), 4>;

/// The falling tetromino
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Figure {
    pub kind: FigureKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    left_edge: i8,
    right_edge: i8,
    col_floor: [Option<i8>; FIGURE_BOX],
}

impl Figure {
    /// Place a new figure at the top-center of the field
    ///
    /// No collision check happens here: a blocked spawn is detected by the
    /// state machine as a touchdown in the spawn phase.
    pub fn spawn(kind: FigureKind, rotation: Rotation) -> Self {
        let mut figure = Self {
            kind,
            rotation,
            x: (FIELD_WIDTH as i8) / 2 - (FIGURE_BOX as i8) / 2,
            y: 0,
            left_edge: 0,
            right_edge: 0,
            col_floor: [None; FIGURE_BOX],
        };
        figure.recompute_metadata();
        figure
    }

    /// Recompute cached edges and per-column floors from the pattern
    fn recompute_metadata(&mut self) {
        let offsets = catalog::cells(self.kind, self.rotation);
        self.left_edge = offsets.iter().map(|&(dx, _)| dx).min().unwrap_or(0);
        self.right_edge = offsets.iter().map(|&(dx, _)| dx).max().unwrap_or(0);
        self.col_floor = [None; FIGURE_BOX];
        for &(dx, dy) in &offsets {
            let slot = &mut self.col_floor[dx as usize];
            *slot = Some(slot.map_or(dy, |prev: i8| prev.max(dy)));
        }
    }

    /// Absolute coordinates of the four covered cells
    pub fn cells(&self) -> FigureCells {
        catalog::cells(self.kind, self.rotation)
            .iter()
            .map(|&(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }

    /// Leftmost occupied column on the field
    pub fn left(&self) -> i8 {
        self.x + self.left_edge
    }

    /// Rightmost occupied column on the field
    pub fn right(&self) -> i8 {
        self.x + self.right_edge
    }

    /// Zero the covered cells; idempotent when already erased
    pub fn erase(&self, field: &mut Field) {
        for (x, y) in self.cells() {
            field.set(x, y, 0);
        }
    }

    /// Write the figure's cell code into the covered cells
    ///
    /// Always pair a reposition with a prior [`Figure::erase`], otherwise
    /// the old footprint stays behind as ghost cells.
    pub fn paint(&self, field: &mut Field) {
        let code = self.kind.code();
        for (x, y) in self.cells() {
            field.set(x, y, code);
        }
    }

    /// Shift one column left or right; rejects into walls or settled cells
    ///
    /// The field must not contain this figure's own footprint (erase first):
    /// the vacancy check reads the target cells directly.
    pub fn try_shift(&mut self, field: &Field, dx: i8) -> bool {
        debug_assert!(dx == -1 || dx == 1);
        if self.left() + dx < 0 || self.right() + dx >= FIELD_WIDTH as i8 {
            return false;
        }
        let clear = self.cells().iter().all(|&(x, y)| field.is_free(x + dx, y));
        if clear {
            self.x += dx;
        }
        clear
    }

    /// Landing test: can every column drop one more row?
    ///
    /// Examines only the cell below each column's lowest occupied cell, so
    /// the figure's own footprint never interferes.
    pub fn can_advance_down(&self, field: &Field) -> bool {
        for (dx, floor) in self.col_floor.iter().enumerate() {
            let Some(floor) = floor else { continue };
            let below = self.y + floor + 1;
            if below >= FIELD_HEIGHT as i8 {
                return false;
            }
            if field.is_occupied(self.x + dx as i8, below) {
                return false;
            }
        }
        true
    }

    /// Drop one row, no questions asked
    ///
    /// Callers either validated with [`Figure::can_advance_down`] or intend
    /// a forced drop.
    pub fn advance_down(&mut self) {
        self.y += 1;
    }

    /// Quarter-turn clockwise; reverts when the new footprint would leave
    /// the field or overlap settled cells
    ///
    /// Same field contract as [`Figure::try_shift`]: erase first.
    pub fn try_rotate(&mut self, field: &Field) -> bool {
        let previous = self.rotation;
        self.rotation = previous.next();
        self.recompute_metadata();

        let fits = self.cells().iter().all(|&(x, y)| field.is_free(x, y));
        if !fits {
            self.rotation = previous;
            self.recompute_metadata();
        }
        fits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_is_top_center() {
        let figure = Figure::spawn(FigureKind::T, Rotation::R0);
        assert_eq!((figure.x, figure.y), (3, 0));
    }

    #[test]
    fn metadata_for_o_figure() {
        let figure = Figure::spawn(FigureKind::O, Rotation::R0);
        // O occupies columns 1-2 of its box, rows 0-1.
        assert_eq!(figure.left(), 4);
        assert_eq!(figure.right(), 5);
        assert_eq!(figure.col_floor, [None, Some(1), Some(1), None]);
    }

    #[test]
    fn metadata_for_s_figure() {
        let figure = Figure::spawn(FigureKind::S, Rotation::R0);
        // S at R0: top row cols 1-2, bottom row cols 0-1.
        assert_eq!(figure.col_floor, [Some(1), Some(1), Some(0), None]);
    }

    #[test]
    fn paint_then_erase_restores_field() {
        let mut field = Field::new();
        field.set(0, 19, 3);
        let figure = Figure::spawn(FigureKind::L, Rotation::R90);

        figure.paint(&mut field);
        assert!(figure.cells().iter().all(|&(x, y)| field.is_occupied(x, y)));
        figure.erase(&mut field);
        assert_eq!(field.occupied_count(), 1);
        assert_eq!(field.get(0, 19), Some(3));
    }

    #[test]
    fn shift_rejected_at_left_wall() {
        let field = Field::new();
        let mut figure = Figure::spawn(FigureKind::I, Rotation::R0);
        while figure.try_shift(&field, -1) {}
        assert_eq!(figure.left(), 0);

        let before = figure;
        assert!(!figure.try_shift(&field, -1));
        assert_eq!(figure, before);
    }

    #[test]
    fn shift_rejected_at_right_wall() {
        let field = Field::new();
        let mut figure = Figure::spawn(FigureKind::I, Rotation::R90);
        while figure.try_shift(&field, 1) {}
        assert_eq!(figure.right(), FIELD_WIDTH as i8 - 1);

        let before = figure;
        assert!(!figure.try_shift(&field, 1));
        assert_eq!(figure, before);
    }

    #[test]
    fn shift_rejected_into_settled_cells() {
        let mut field = Field::new();
        let mut figure = Figure::spawn(FigureKind::O, Rotation::R0);
        // Wall of settled cells hugging the figure's right flank.
        field.set(figure.right() + 1, figure.y, 9);
        field.set(figure.right() + 1, figure.y + 1, 9);

        assert!(!figure.try_shift(&field, 1));
        assert!(figure.try_shift(&field, -1));
    }

    #[test]
    fn landing_on_floor() {
        let field = Field::new();
        let mut figure = Figure::spawn(FigureKind::O, Rotation::R0);
        while figure.can_advance_down(&field) {
            figure.advance_down();
        }
        // O's lowest cells sit on row 19.
        assert_eq!(figure.y, 18);
        assert!(figure.cells().iter().any(|&(_, y)| y == 19));
    }

    #[test]
    fn landing_on_stack_ignores_own_footprint() {
        let mut field = Field::new();
        let mut figure = Figure::spawn(FigureKind::T, Rotation::R0);
        figure.y = 16;
        figure.paint(&mut field);
        // Nothing below: the painted footprint itself must not read as ground.
        assert!(figure.can_advance_down(&field));

        field.set(figure.x + 1, 19, 5);
        // T at R0 has its floor cells on row y+1 = 17; row 19 is still 2 away.
        assert!(figure.can_advance_down(&field));
        field.set(figure.x + 1, 18, 5);
        assert!(!figure.can_advance_down(&field));
    }

    #[test]
    fn rotation_advances_and_wraps() {
        let field = Field::new();
        let mut figure = Figure::spawn(FigureKind::T, Rotation::R0);
        for expected in [Rotation::R90, Rotation::R180, Rotation::R270, Rotation::R0] {
            assert!(figure.try_rotate(&field));
            assert_eq!(figure.rotation, expected);
        }
    }

    #[test]
    fn rotation_rejected_at_wall() {
        let field = Field::new();
        // Vertical I hugging the left wall: x = -1, occupied column 0.
        let mut figure = Figure::spawn(FigureKind::I, Rotation::R270);
        while figure.try_shift(&field, -1) {}
        assert_eq!(figure.left(), 0);

        let before = figure;
        // Turning horizontal would need columns -1..2.
        assert!(!figure.try_rotate(&field));
        assert_eq!(figure, before);
    }

    #[test]
    fn rotation_rejected_over_settled_cells() {
        let mut field = Field::new();
        let mut figure = Figure::spawn(FigureKind::I, Rotation::R0);
        // Cell where the vertical footprint would land after rotating.
        field.set(figure.x + 2, figure.y + 3, 4);

        let before = figure;
        assert!(!figure.try_rotate(&field));
        assert_eq!(figure, before);
    }
}

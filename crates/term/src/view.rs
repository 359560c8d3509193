//! GameView: encodes a `Snapshot` into queued terminal commands.
//!
//! Pure with respect to the terminal (writes into a byte buffer), so it can
//! be unit-tested without a tty. Layout is fixed-size: the bordered field on
//! the left, score panel and next-figure preview on the right, one footer
//! line whose text depends on the phase.

use anyhow::Result;

use crossterm::{
    cursor::MoveTo,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    QueueableCommand,
};

use crate::core::Snapshot;
use crate::types::{Phase, FIELD_HEIGHT, FIELD_WIDTH, FIGURE_BOX};

/// Column where the sidebar starts (field is 2 chars per cell plus borders)
const SIDEBAR_X: u16 = FIELD_WIDTH as u16 * 2 + 4;

/// Terminal color for a field cell code
pub fn cell_color(code: u8) -> Color {
    match code {
        1 => Color::Cyan,        // I
        2 => Color::Blue,        // J
        3 => Color::DarkYellow,  // L
        4 => Color::Yellow,      // O
        5 => Color::Green,       // S
        6 => Color::Magenta,     // T
        7 => Color::Red,         // Z
        _ => Color::Reset,
    }
}

/// Stateless snapshot view
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Encode one full frame into `out`.
    pub fn encode_into(&self, snapshot: &Snapshot, out: &mut Vec<u8>) -> Result<()> {
        self.encode_field(snapshot, out)?;
        self.encode_sidebar(snapshot, out)?;
        self.encode_footer(snapshot, out)?;
        Ok(())
    }

    fn encode_field(&self, snapshot: &Snapshot, out: &mut Vec<u8>) -> Result<()> {
        let border: String = format!("+{}+", "-".repeat(FIELD_WIDTH as usize * 2));
        out.queue(MoveTo(0, 0))?.queue(Print(&border))?;

        for y in 0..FIELD_HEIGHT as usize {
            out.queue(MoveTo(0, y as u16 + 1))?.queue(Print("|"))?;
            for x in 0..FIELD_WIDTH as usize {
                let code = snapshot.cell(x, y);
                if code == 0 {
                    out.queue(Print(" ."))?;
                } else {
                    out.queue(SetBackgroundColor(cell_color(code)))?
                        .queue(Print("  "))?
                        .queue(ResetColor)?;
                }
            }
            out.queue(Print("|"))?;
        }

        out.queue(MoveTo(0, FIELD_HEIGHT as u16 + 1))?
            .queue(Print(&border))?;
        Ok(())
    }

    fn encode_sidebar(&self, snapshot: &Snapshot, out: &mut Vec<u8>) -> Result<()> {
        let lines = [
            format!("score    {:>7}", snapshot.score),
            format!("hi-score {:>7}", snapshot.high_score),
            format!("level    {:>7}", snapshot.level),
            format!("speed    {:>7}", snapshot.speed),
            format!("state    {:>7}", snapshot.phase.as_str()),
            String::new(),
            "next".to_string(),
        ];
        for (i, line) in lines.iter().enumerate() {
            out.queue(MoveTo(SIDEBAR_X, i as u16 + 1))?
                .queue(Print(line))?;
        }

        let preview_y = lines.len() as u16 + 1;
        let color = cell_color(snapshot.next.kind.code());
        for (dy, row) in snapshot.next.pattern.iter().enumerate() {
            out.queue(MoveTo(SIDEBAR_X, preview_y + dy as u16))?;
            for &cell in row.iter().take(FIGURE_BOX) {
                if cell == 0 {
                    out.queue(Print("  "))?;
                } else {
                    out.queue(SetBackgroundColor(color))?
                        .queue(Print("  "))?
                        .queue(ResetColor)?;
                }
            }
        }
        Ok(())
    }

    fn encode_footer(&self, snapshot: &Snapshot, out: &mut Vec<u8>) -> Result<()> {
        let text = match snapshot.phase {
            Phase::Uninit => "",
            Phase::Init => "enter: start   arrows: level/speed   q: quit",
            Phase::Idle => "PAUSED   p: resume   enter: back to menu",
            Phase::Spawn | Phase::Moving | Phase::Shift => {
                "arrows: move/drop   space: rotate   p: pause   q: quit"
            }
        };
        // Padded to a fixed width so a shorter footer overwrites a longer one.
        out.queue(MoveTo(0, FIELD_HEIGHT as u16 + 2))?
            .queue(Print(format!("{:<56}", text)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FigureKind, Rotation};
    use brick_tetris_core::NextPreview;

    #[test]
    fn colors_are_distinct_per_kind() {
        let mut seen = Vec::new();
        for kind in FigureKind::ALL {
            let color = cell_color(kind.code());
            assert!(!seen.contains(&color), "duplicate color for {:?}", kind);
            seen.push(color);
        }
    }

    #[test]
    fn empty_code_maps_to_reset() {
        assert_eq!(cell_color(0), Color::Reset);
    }

    #[test]
    fn encode_produces_field_and_sidebar() {
        let mut snapshot = Snapshot::default();
        snapshot.phase = Phase::Init;
        snapshot.score = 1500;
        snapshot.next = NextPreview::new(FigureKind::T, Rotation::R0);
        snapshot.field[19][0] = 5;

        let view = GameView;
        let mut buf = Vec::new();
        view.encode_into(&snapshot, &mut buf).unwrap();

        let text = String::from_utf8_lossy(&buf);
        assert!(text.contains("score"));
        assert!(text.contains("1500"));
        assert!(text.contains("next"));
        assert!(text.contains("enter: start"));
    }

    #[test]
    fn footer_tracks_phase() {
        let view = GameView;
        let mut menu = Vec::new();
        let mut snapshot = Snapshot::default();
        snapshot.phase = Phase::Init;
        view.encode_into(&snapshot, &mut menu).unwrap();
        assert!(String::from_utf8_lossy(&menu).contains("enter: start"));

        let mut paused = Vec::new();
        snapshot.phase = Phase::Idle;
        view.encode_into(&snapshot, &mut paused).unwrap();
        assert!(String::from_utf8_lossy(&paused).contains("PAUSED"));
    }
}

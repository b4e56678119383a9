//! South Indian chart layout.
//!
//! A fixed 4x4 grid: the twelve rashis run clockwise around the border
//! starting with Pisces, Aries, Taurus along the top row; the four centre
//! cells carry no rashi.

use std::fmt::{Display, Formatter};

use astroguide_vedic_base::{ALL_RASHIS, Rashi};
use serde::Serialize;

use crate::chart::ChartResult;

/// (row, col) of each rashi, Aries first.
pub const SOUTH_INDIAN_POSITIONS: [(usize, usize); 12] = [
    (0, 1),
    (0, 0),
    (1, 0),
    (2, 0),
    (3, 0),
    (3, 1),
    (3, 2),
    (3, 3),
    (2, 3),
    (1, 3),
    (0, 3),
    (0, 2),
];

const CELL_WIDTH: usize = 14;

/// One cell of the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ChartCell {
    Rashi {
        rashi: Rashi,
        /// Glyphs of the grahas in this sign, retrograde ones marked.
        grahas: Vec<String>,
        ascendant: bool,
    },
    /// Centre cell with an optional caption.
    Centre(Option<&'static str>),
}

/// The filled 4x4 grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SouthIndianChart {
    pub cells: [[ChartCell; 4]; 4],
}

fn is_centre(row: usize, col: usize) -> bool {
    (row == 1 || row == 2) && (col == 1 || col == 2)
}

fn centre_caption(row: usize, col: usize) -> Option<&'static str> {
    match (row, col) {
        (1, 1) => Some("RASHI"),
        (1, 2) => Some("CHART"),
        _ => None,
    }
}

impl SouthIndianChart {
    /// Lay out `chart` on the grid.
    pub fn from_chart(chart: &ChartResult) -> Self {
        let cells = std::array::from_fn(|row| {
            std::array::from_fn(|col| {
                if is_centre(row, col) {
                    return ChartCell::Centre(centre_caption(row, col));
                }
                // Every border cell maps to exactly one rashi.
                let idx = SOUTH_INDIAN_POSITIONS
                    .iter()
                    .position(|&p| p == (row, col))
                    .unwrap_or(0);
                ChartCell::Rashi {
                    rashi: ALL_RASHIS[idx],
                    grahas: chart.planets_in_sign(idx as u8).map(|p| p.glyph()).collect(),
                    ascendant: chart.ascendant.sign_index as usize == idx,
                }
            })
        });
        Self { cells }
    }

    /// Cell holding `rashi`.
    pub fn cell_of(&self, rashi: Rashi) -> &ChartCell {
        let (row, col) = SOUTH_INDIAN_POSITIONS[rashi.index() as usize];
        &self.cells[row][col]
    }
}

fn pad(s: &str) -> String {
    let len = s.chars().count();
    if len >= CELL_WIDTH {
        s.chars().take(CELL_WIDTH).collect()
    } else {
        format!("{s}{}", " ".repeat(CELL_WIDTH - len))
    }
}

impl ChartCell {
    /// Two text lines: header and contents.
    fn lines(&self) -> [String; 2] {
        match self {
            ChartCell::Rashi {
                rashi,
                grahas,
                ascendant,
            } => {
                let mut head = format!("{} {}", rashi.symbol(), rashi.western_name());
                if *ascendant {
                    head.push_str(" ASC");
                }
                [pad(&head), pad(&grahas.join(" "))]
            }
            ChartCell::Centre(caption) => [pad(caption.unwrap_or("")), pad("")],
        }
    }
}

impl Display for SouthIndianChart {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rule = format!("+{}", format!("{}+", "-".repeat(CELL_WIDTH)).repeat(4));
        writeln!(f, "{rule}")?;
        for row in &self.cells {
            let lines: Vec<[String; 2]> = row.iter().map(ChartCell::lines).collect();
            for k in 0..2 {
                write!(f, "|")?;
                for cell in &lines {
                    write!(f, "{}|", cell[k])?;
                }
                writeln!(f)?;
            }
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{BirthInput, generate_chart};

    fn chart() -> ChartResult {
        generate_chart(&BirthInput::parse("1990-01-15", "06:30", "Z", 19.076, 72.8777).unwrap())
    }

    #[test]
    fn positions_cover_border_once() {
        let mut seen = [[false; 4]; 4];
        for (r, c) in SOUTH_INDIAN_POSITIONS {
            assert!(!is_centre(r, c));
            assert!(!seen[r][c]);
            seen[r][c] = true;
        }
        let filled = seen.iter().flatten().filter(|x| **x).count();
        assert_eq!(filled, 12);
    }

    #[test]
    fn every_planet_placed_once() {
        let grid = SouthIndianChart::from_chart(&chart());
        let total: usize = grid
            .cells
            .iter()
            .flatten()
            .map(|c| match c {
                ChartCell::Rashi { grahas, .. } => grahas.len(),
                ChartCell::Centre(_) => 0,
            })
            .sum();
        assert_eq!(total, 9);
    }

    #[test]
    fn ascendant_flagged_in_gemini() {
        let grid = SouthIndianChart::from_chart(&chart());
        assert!(matches!(
            grid.cell_of(Rashi::Mithuna),
            ChartCell::Rashi { ascendant: true, .. }
        ));
        let flagged = grid
            .cells
            .iter()
            .flatten()
            .filter(|c| matches!(c, ChartCell::Rashi { ascendant: true, .. }))
            .count();
        assert_eq!(flagged, 1);
    }

    #[test]
    fn capricorn_holds_three_grahas() {
        let grid = SouthIndianChart::from_chart(&chart());
        match grid.cell_of(Rashi::Makara) {
            ChartCell::Rashi { grahas, .. } => assert_eq!(grahas, &["☿ᴿ", "♀ᴿ", "♄"]),
            other => panic!("unexpected cell {other:?}"),
        }
    }

    #[test]
    fn renders_captions() {
        let text = SouthIndianChart::from_chart(&chart()).to_string();
        assert!(text.contains("RASHI"));
        assert!(text.contains("CHART"));
        assert!(text.contains("♊ Gemini ASC"));
        assert_eq!(text.lines().count(), 13);
    }
}

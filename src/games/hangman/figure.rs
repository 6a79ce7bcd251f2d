//! ASCII gallows, drawn one body part per missed guess.

use crate::games::hangman::session::STARTING_LIVES;

/// Width of every line returned by [`figure_lines`]
pub const FIGURE_WIDTH: usize = 9;

/// Lines of the drawing for `stage` (0 = empty gallows, 7 = hanged).
pub fn figure_lines(stage: u8) -> Vec<String> {
    let stage = stage.min(STARTING_LIVES);
    let part = |from: u8, c: char| if stage >= from { c } else { ' ' };

    let head = match stage {
        0 => ' ',
        7 => 'X',
        _ => 'O',
    };

    let rows = [
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  {}   |", head),
        format!(" {}{}{}  |", part(3, '/'), part(2, '|'), part(4, '\\')),
        format!(" {} {}  |", part(5, '/'), part(6, '\\')),
        "      |".to_string(),
        "=========".to_string(),
    ];

    rows.into_iter()
        .map(|row| format!("{:<width$}", row, width = FIGURE_WIDTH))
        .collect()
}

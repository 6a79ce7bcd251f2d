/// QWERTY rows of the on-screen keyboard
pub const ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// On-screen keyboard with a movable focus, driven by the arrow keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    row: usize,
    col: usize,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> char {
        ROWS[self.row].as_bytes()[self.col] as char
    }

    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Move focus to `letter`; characters not on the keyboard leave it alone.
    pub fn focus(&mut self, letter: char) {
        let letter = letter.to_ascii_uppercase();
        for (row, keys) in ROWS.iter().enumerate() {
            if let Some(col) = keys.find(letter) {
                self.row = row;
                self.col = col;
                return;
            }
        }
    }

    pub fn move_left(&mut self) {
        self.col = self.col.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.col = (self.col + 1).min(ROWS[self.row].len() - 1);
    }

    pub fn move_up(&mut self) {
        self.row = self.row.saturating_sub(1);
        self.clamp_col();
    }

    pub fn move_down(&mut self) {
        self.row = (self.row + 1).min(ROWS.len() - 1);
        self.clamp_col();
    }

    fn clamp_col(&mut self) {
        self.col = self.col.min(ROWS[self.row].len() - 1);
    }
}

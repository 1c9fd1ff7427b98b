use crate::prelude::*;

impl Board
{
    /// Renders the board as an ascii grid, one row per line with row 0 on top, using
    /// `glyph` to pick the character shown for each square.
    pub fn render(&self, glyph: impl Fn(Square) -> char) -> String
    {
        let mut out = String::new();

        for row in 0..self.size()
        {
            for col in 0..self.size()
            {
                if col > 0
                {
                    out.push(' ');
                }
                out.push(glyph(Square::new(row, col)));
            }
            out.push('\n');
        }

        out
    }
}

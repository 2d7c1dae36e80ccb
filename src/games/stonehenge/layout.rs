//! Fixed board layouts for sizes 1-5.
//!
//! Each size has a ley-line table (cell letters per ley-line, anchor
//! excluded) and a board template. Ley-line `n` owns the `n`-th anchor
//! (`@`) of its template, counting left to right, top to bottom.

/// Smallest supported board length.
pub const MIN_BOARD_LENGTH: u8 = 1;
/// Largest supported board length.
pub const MAX_BOARD_LENGTH: u8 = 5;

const LEY_LINES_1: &[&str] = &[
    "A", "BC", "AB", "C", "B", "CA",
];

const LEY_LINES_2: &[&str] = &[
    "AC", "BDF", "AB", "EG", "CDE", "FG",
    "EB", "FC", "GDA",
];

const LEY_LINES_3: &[&str] = &[
    "ACF", "BDGJ", "AB", "EHK", "CDE", "IL",
    "FGHI", "JKL", "IEB", "JF", "KGC", "LHDA",
];

const LEY_LINES_4: &[&str] = &[
    "ACFJ", "BDGKO", "AB", "EHLP", "CDE", "IMQ",
    "FGHI", "NR", "JKLMN", "OPQR", "NIEB", "OJ",
    "PKF", "QLGC", "RMHDA",
];

const LEY_LINES_5: &[&str] = &[
    "ACFJO", "BDGKPU", "AB", "EHLQV", "CDE", "IMRW",
    "FGHI", "NSX", "JKLMN", "TY", "OPQRST", "UVWXY",
    "TNIEB", "UO", "VPJ", "WQKF", "XRLGC", "YSMHDA",
];

const BOARD_1: &str = concat!(
    "      @   @\n",
    "     /   /\n",
    "@ - A - B\n",
    "     \\ / \\\n",
    "  @ - C   @\n",
    "       \\\n",
    "        @",
);

const BOARD_2: &str = concat!(
    "        @   @\n",
    "       /   /\n",
    "  @ - A - B   @\n",
    "     / \\ / \\ /\n",
    "@ - C - D - E\n",
    "     \\ / \\ / \\\n",
    "  @ - F - G   @\n",
    "       \\   \\\n",
    "        @   @",
);

const BOARD_3: &str = concat!(
    "          @   @\n",
    "         /   /\n",
    "    @ - A - B   @\n",
    "       / \\ / \\ /\n",
    "  @ - C - D - E   @\n",
    "     / \\ / \\ / \\ /\n",
    "@ - F - G - H - I\n",
    "     \\ / \\ / \\ / \\\n",
    "  @ - J - K - L   @\n",
    "       \\   \\   \\\n",
    "        @   @   @",
);

const BOARD_4: &str = concat!(
    "            @   @\n",
    "           /   /\n",
    "      @ - A - B   @\n",
    "         / \\ / \\ /\n",
    "    @ - C - D - E   @\n",
    "       / \\ / \\ / \\ /\n",
    "  @ - F - G - H - I   @\n",
    "     / \\ / \\ / \\ / \\ /\n",
    "@ - J - K - L - M - N\n",
    "     \\ / \\ / \\ / \\ / \\\n",
    "  @ - O - P - Q - R   @\n",
    "       \\   \\   \\   \\\n",
    "        @   @   @   @",
);

const BOARD_5: &str = concat!(
    "              @   @\n",
    "             /   /\n",
    "        @ - A - B   @\n",
    "           / \\ / \\ /\n",
    "      @ - C - D - E   @\n",
    "         / \\ / \\ / \\ /\n",
    "    @ - F - G - H - I   @\n",
    "       / \\ / \\ / \\ / \\ /\n",
    "  @ - J - K - L - M - N   @\n",
    "     / \\ / \\ / \\ / \\ / \\ /\n",
    "@ - O - P - Q - R - S - T\n",
    "     \\ / \\ / \\ / \\ / \\ / \\\n",
    "  @ - U - V - W - X - Y   @\n",
    "       \\   \\   \\   \\   \\\n",
    "        @   @   @   @   @",
);

/// Ley-line table for `board_length`: one string of cell letters per ley-line.
#[must_use]
pub fn ley_line_table(board_length: u8) -> Option<&'static [&'static str]> {
    match board_length {
        1 => Some(LEY_LINES_1),
        2 => Some(LEY_LINES_2),
        3 => Some(LEY_LINES_3),
        4 => Some(LEY_LINES_4),
        5 => Some(LEY_LINES_5),
        _ => None,
    }
}

/// Board template for `board_length`, rows separated by `'\n'`.
#[must_use]
pub fn board_template(board_length: u8) -> Option<&'static str> {
    match board_length {
        1 => Some(BOARD_1),
        2 => Some(BOARD_2),
        3 => Some(BOARD_3),
        4 => Some(BOARD_4),
        5 => Some(BOARD_5),
        _ => None,
    }
}

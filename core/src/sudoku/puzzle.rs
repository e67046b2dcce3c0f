use crate::GRID_SIZE;

pub type ValueGrid = [[u8; GRID_SIZE as usize]; GRID_SIZE as usize];

/// Givens for the warm-up puzzle, `0` marks a blank.
pub const PUZZLE_TEMPLATE: ValueGrid = [
    [0, 3, 4, 6, 0, 8, 9, 1, 0],
    [6, 0, 2, 1, 9, 0, 3, 4, 8],
    [1, 9, 0, 3, 4, 2, 0, 6, 7],
    [8, 5, 9, 0, 6, 1, 4, 0, 3],
    [4, 0, 6, 8, 0, 3, 7, 9, 0],
    [7, 1, 0, 9, 2, 0, 8, 5, 6],
    [0, 6, 1, 5, 3, 7, 0, 8, 4],
    [2, 8, 0, 4, 1, 9, 6, 0, 5],
    [3, 4, 5, 0, 8, 6, 1, 7, 0],
];

/// The single reference solution entries are compared against.
pub const SOLVED_GRID: ValueGrid = [
    [5, 3, 4, 6, 7, 8, 9, 1, 2],
    [6, 7, 2, 1, 9, 5, 3, 4, 8],
    [1, 9, 8, 3, 4, 2, 5, 6, 7],
    [8, 5, 9, 7, 6, 1, 4, 2, 3],
    [4, 2, 6, 8, 5, 3, 7, 9, 1],
    [7, 1, 3, 9, 2, 4, 8, 5, 6],
    [9, 6, 1, 5, 3, 7, 2, 8, 4],
    [2, 8, 7, 4, 1, 9, 6, 3, 5],
    [3, 4, 5, 2, 8, 6, 1, 7, 9],
];

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;
pub use puzzle::*;
pub use score::*;

mod puzzle;
mod score;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SudokuCell {
    /// `0` means empty.
    pub value: u8,
    pub is_initial: bool,
    pub is_valid: bool,
}

impl SudokuCell {
    pub const EMPTY: Self = Self {
        value: 0,
        is_initial: false,
        is_valid: true,
    };

    pub const fn given(value: u8) -> Self {
        Self {
            value,
            is_initial: true,
            is_valid: true,
        }
    }

    pub const fn is_empty(self) -> bool {
        self.value == 0
    }
}

impl Default for SudokuCell {
    fn default() -> Self {
        Self::EMPTY
    }
}

pub type Grid = Array2<SudokuCell>;

/// Builds a fresh grid from a template where `0` marks a blank.
pub fn grid_from_template(template: &ValueGrid) -> Grid {
    let side = usize::from(GRID_SIZE);
    Array2::from_shape_fn((side, side), |(r, c)| match template[r][c] {
        0 => SudokuCell::EMPTY,
        value => SudokuCell::given(value),
    })
}

/// Full-and-correct check against a single reference solution.
pub fn is_solved(grid: &Grid, solution: &ValueGrid) -> bool {
    let side = usize::from(GRID_SIZE);
    grid.dim() == (side, side)
        && grid
            .indexed_iter()
            .all(|((r, c), cell)| !cell.is_empty() && cell.value == solution[r][c])
}

/// How entries are judged as they are typed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryPolicy {
    /// Only the final completion check looks at values.
    Relaxed,
    /// Mismatches are flagged and counted on entry.
    Immediate,
}

impl Default for EntryPolicy {
    fn default() -> Self {
        Self::Relaxed
    }
}

/// Normalized keyboard and number-pad input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellInput {
    Set(u8),
    Clear,
}

impl CellInput {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Backspace" | "Delete" => Some(Self::Clear),
            _ => match key.as_bytes() {
                &[digit @ b'1'..=b'9'] => Some(Self::Set(digit - b'0')),
                _ => None,
            },
        }
    }

    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Clear),
            1..=9 => Some(Self::Set(value)),
            _ => None,
        }
    }

    pub const fn value(self) -> u8 {
        match self {
            Self::Set(value) => value,
            Self::Clear => 0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntryOutcome {
    NoChange,
    Filled,
    Cleared,
    Mistake,
}

impl EntryOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CompletionCheck {
    Incomplete,
    /// Reported once, on the first check that finds the grid solved.
    JustSolved,
    AlreadySolved,
}

impl CompletionCheck {
    pub const fn is_solved(self) -> bool {
        !matches!(self, Self::Incomplete)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SudokuBoard {
    grid: Grid,
    solution: ValueGrid,
    policy: EntryPolicy,
    selected: Option<Coord2>,
    mistakes: u32,
    solved: bool,
    clock: ScoreClock,
}

impl SudokuBoard {
    pub fn new(policy: EntryPolicy) -> Self {
        Self::from_template(&PUZZLE_TEMPLATE, SOLVED_GRID, policy)
    }

    pub fn from_template(template: &ValueGrid, solution: ValueGrid, policy: EntryPolicy) -> Self {
        Self {
            grid: grid_from_template(template),
            solution,
            policy,
            selected: None,
            mistakes: 0,
            solved: false,
            clock: ScoreClock::default(),
        }
    }

    pub fn with_score_base(mut self, base: u32) -> Self {
        self.clock = ScoreClock::new(base);
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cell at `coords`, or `None` outside the grid.
    pub fn get(&self, coords: Coord2) -> Option<SudokuCell> {
        checked_coords(coords).map(|coords| self.grid[coords.to_nd_index()])
    }

    /// Cell at `coords`.
    ///
    /// # Panics
    ///
    /// If `coords` is outside the grid, see [`SudokuBoard::get`] for the checked version.
    pub fn cell_at(&self, coords: Coord2) -> SudokuCell {
        self.grid[coords.to_nd_index()]
    }

    pub fn policy(&self) -> EntryPolicy {
        self.policy
    }

    pub fn selected(&self) -> Option<Coord2> {
        self.selected
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    pub fn is_complete(&self) -> bool {
        self.solved
    }

    pub fn clock(&self) -> &ScoreClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut ScoreClock {
        &mut self.clock
    }

    pub fn solution_at(&self, (r, c): Coord2) -> u8 {
        self.solution[r as usize][c as usize]
    }

    pub fn select_cell(&mut self, coords: Coord2) -> Result<Coord2> {
        let coords = checked_coords(coords).ok_or(FlowError::InvalidCoords)?;
        self.check_accepting_input()?;

        self.selected = Some(coords);
        Ok(coords)
    }

    pub fn apply_input(&mut self, input: CellInput) -> Result<EntryOutcome> {
        self.set_cell_value(input.value())
    }

    pub fn set_cell_value(&mut self, value: u8) -> Result<EntryOutcome> {
        use EntryOutcome::*;

        if value > 9 {
            return Err(FlowError::InvalidValue);
        }
        self.check_accepting_input()?;
        let coords = self.selected.ok_or(FlowError::NoSelection)?;
        let expected = self.solution_at(coords);
        let policy = self.policy;
        let cell = &mut self.grid[coords.to_nd_index()];

        if cell.is_initial {
            log::trace!("ignoring write to given cell {:?}", coords);
            return Ok(NoChange);
        }

        if value == 0 {
            if cell.is_empty() && cell.is_valid {
                return Ok(NoChange);
            }
            *cell = SudokuCell::EMPTY;
            return Ok(Cleared);
        }

        Ok(match policy {
            EntryPolicy::Relaxed if cell.value == value => NoChange,
            EntryPolicy::Relaxed => {
                cell.value = value;
                Filled
            }
            EntryPolicy::Immediate if value != expected => {
                cell.value = value;
                cell.is_valid = false;
                self.mistakes = self.mistakes.saturating_add(1);
                log::debug!("mistake at {:?}: {} (total {})", coords, value, self.mistakes);
                Mistake
            }
            EntryPolicy::Immediate if cell.value == value => NoChange,
            EntryPolicy::Immediate => {
                cell.value = value;
                cell.is_valid = true;
                Filled
            }
        })
    }

    /// Latching completion check, only the first solved check reports [`CompletionCheck::JustSolved`].
    pub fn check_completion(&mut self) -> CompletionCheck {
        if self.solved {
            return CompletionCheck::AlreadySolved;
        }

        if is_solved(&self.grid, &self.solution) {
            self.solved = true;
            self.selected = None;
            self.clock.mark_complete();
            log::debug!("puzzle solved with {} mistake(s)", self.mistakes);
            CompletionCheck::JustSolved
        } else {
            CompletionCheck::Incomplete
        }
    }

    fn check_accepting_input(&self) -> Result<()> {
        if self.solved {
            Err(FlowError::AlreadySolved)
        } else if self.clock.is_paused() {
            Err(FlowError::Paused)
        } else {
            Ok(())
        }
    }
}

impl Default for SudokuBoard {
    fn default() -> Self {
        Self::new(EntryPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blanks(board: &SudokuBoard) -> impl Iterator<Item = Coord2> + use<> {
        let grid = board.grid().clone();
        iter_coords().filter(move |&coords| !grid[coords.to_nd_index()].is_initial)
    }

    fn fill_all(board: &mut SudokuBoard) {
        for coords in blanks(board) {
            board.select_cell(coords).unwrap();
            board.set_cell_value(board.solution_at(coords)).unwrap();
        }
    }

    #[test]
    fn full_correct_grid_is_solved_and_any_difference_is_not() {
        let mut board = SudokuBoard::default();
        assert!(!is_solved(board.grid(), &SOLVED_GRID));

        fill_all(&mut board);
        assert!(is_solved(board.grid(), &SOLVED_GRID));

        for coords in iter_coords() {
            let mut grid = board.grid().clone();
            let cell = &mut grid[coords.to_nd_index()];
            cell.value = cell.value % 9 + 1;
            assert!(!is_solved(&grid, &SOLVED_GRID), "{:?}", coords);
        }
    }

    #[test]
    fn empty_cell_is_never_solved() {
        let mut grid = grid_from_template(&SOLVED_GRID);
        assert!(is_solved(&grid, &SOLVED_GRID));

        grid[[4, 4]].value = 0;
        assert!(!is_solved(&grid, &SOLVED_GRID));
    }

    #[test]
    fn given_cells_never_change() {
        for policy in [EntryPolicy::Relaxed, EntryPolicy::Immediate] {
            let mut board = SudokuBoard::new(policy);
            let given = (0, 1);
            let original = board.cell_at(given);
            assert!(original.is_initial);

            board.select_cell(given).unwrap();
            for value in 0..=9 {
                assert_eq!(board.set_cell_value(value), Ok(EntryOutcome::NoChange));
                assert_eq!(board.cell_at(given), original);
            }
            assert_eq!(board.mistakes(), 0);
        }
    }

    #[test]
    fn immediate_mistake_then_clear_keeps_count() {
        let mut board = SudokuBoard::new(EntryPolicy::Immediate);
        assert!(!board.cell_at((0, 0)).is_initial);
        assert_ne!(board.solution_at((0, 0)), 4);

        board.select_cell((0, 0)).unwrap();
        assert_eq!(board.set_cell_value(4), Ok(EntryOutcome::Mistake));
        assert!(!board.cell_at((0, 0)).is_valid);
        assert_eq!(board.mistakes(), 1);

        assert_eq!(board.set_cell_value(0), Ok(EntryOutcome::Cleared));
        assert_eq!(board.cell_at((0, 0)), SudokuCell::EMPTY);
        assert!(board.cell_at((0, 0)).is_valid);
        assert_eq!(board.mistakes(), 1);
    }

    #[test]
    fn get_is_bounds_checked() {
        let board = SudokuBoard::new(EntryPolicy::Relaxed);
        assert_eq!(board.get((8, 8)), Some(board.cell_at((8, 8))));
        assert_eq!(board.get((9, 0)), None);
        assert_eq!(board.get((0, 9)), None);
    }

    #[test]
    fn mistakes_count_each_mismatching_entry_only() {
        let mut board = SudokuBoard::new(EntryPolicy::Immediate);
        board.select_cell((0, 0)).unwrap();

        board.set_cell_value(1).unwrap();
        board.set_cell_value(2).unwrap();
        assert_eq!(board.mistakes(), 2);
        assert_eq!(board.check_completion(), CompletionCheck::Incomplete);
        assert_eq!(board.check_completion(), CompletionCheck::Incomplete);
        assert_eq!(board.mistakes(), 2);

        assert_eq!(board.set_cell_value(5), Ok(EntryOutcome::Filled));
        assert!(board.cell_at((0, 0)).is_valid);
        assert_eq!(board.mistakes(), 2);
    }

    #[test]
    fn relaxed_policy_accepts_wrong_values_silently() {
        let mut board = SudokuBoard::new(EntryPolicy::Relaxed);
        board.select_cell((0, 0)).unwrap();

        assert_eq!(board.set_cell_value(1), Ok(EntryOutcome::Filled));
        assert!(board.cell_at((0, 0)).is_valid);
        assert_eq!(board.mistakes(), 0);
        assert_eq!(board.set_cell_value(1), Ok(EntryOutcome::NoChange));
    }

    #[test]
    fn completion_fires_once() {
        let mut board = SudokuBoard::default();
        fill_all(&mut board);

        assert_eq!(board.check_completion(), CompletionCheck::JustSolved);
        assert_eq!(board.check_completion(), CompletionCheck::AlreadySolved);
        assert_eq!(board.check_completion(), CompletionCheck::AlreadySolved);
        assert!(board.clock().is_complete());
    }

    #[test]
    fn solved_board_rejects_input() {
        let mut board = SudokuBoard::default();
        fill_all(&mut board);
        board.check_completion();

        assert_eq!(board.select_cell((0, 0)), Err(FlowError::AlreadySolved));
        assert_eq!(board.selected(), None);
        assert_eq!(board.set_cell_value(3), Err(FlowError::AlreadySolved));
    }

    #[test]
    fn bad_input_is_rejected_without_mutation() {
        let mut board = SudokuBoard::default();

        assert_eq!(board.set_cell_value(4), Err(FlowError::NoSelection));
        assert_eq!(board.select_cell((9, 0)), Err(FlowError::InvalidCoords));

        board.select_cell((0, 0)).unwrap();
        assert_eq!(board.set_cell_value(10), Err(FlowError::InvalidValue));
        assert_eq!(board.cell_at((0, 0)), SudokuCell::EMPTY);
    }

    #[test]
    fn paused_board_ignores_entries() {
        let mut board = SudokuBoard::new(EntryPolicy::Immediate);
        board.select_cell((0, 0)).unwrap();
        board.clock_mut().toggle_pause();

        assert_eq!(board.set_cell_value(5), Err(FlowError::Paused));
        assert_eq!(board.select_cell((1, 1)), Err(FlowError::Paused));
        assert_eq!(board.mistakes(), 0);
    }

    #[test]
    fn keys_map_to_cell_input() {
        assert_eq!(CellInput::from_key("7"), Some(CellInput::Set(7)));
        assert_eq!(CellInput::from_key("Backspace"), Some(CellInput::Clear));
        assert_eq!(CellInput::from_key("Delete"), Some(CellInput::Clear));
        assert_eq!(CellInput::from_key("0"), None);
        assert_eq!(CellInput::from_key("a"), None);
        assert_eq!(CellInput::from_key("12"), None);
        assert_eq!(CellInput::from_value(0), Some(CellInput::Clear));
        assert_eq!(CellInput::from_value(10), None);
    }
}

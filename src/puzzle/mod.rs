//! Daily puzzle selection
//!
//! Maps (date, mode, language) to the round's solution words.

pub mod calendar;
mod selector;
mod solution;
pub mod table;

pub use calendar::{day_index, next_date};
pub use selector::{PuzzleSelector, SelectionError, assign_offsets, board_seed, fnv1a32};
pub use solution::{SolutionSet, has_solved_all_boards, solved_at};
pub use table::{JsonPuzzleTable, PuzzleRecord, PuzzleRow, PuzzleTable};

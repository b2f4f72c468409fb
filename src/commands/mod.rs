//! Command implementations

pub mod archive;
pub mod play;
pub mod precompute;
pub mod puzzle;
pub mod stats;
pub mod status;

pub use archive::{ArchiveError, archive_date, random_archive_date};
pub use play::run_play;
pub use precompute::{PrecomputeConfig, PrecomputeSummary, print_precompute_summary, run_precompute};
pub use puzzle::solutions_for_date;
pub use stats::load_stats;
pub use status::{StatusReport, score_guess};

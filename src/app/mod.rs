//! Run orchestration and result output.
mod export;
mod runner;
mod summary;


pub use export::{export_csv, export_json};
pub use runner::{RunCoordinator, RunReport};
pub use summary::{print_summary, summary_lines};

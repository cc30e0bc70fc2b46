//! Age-based retention sweeps over directory trees.
//!
//! A sweep runs in three phases:
//!
//! - **Analyze**: walk the tree, classify every entry as DELETE or RETAIN by age, and resolve
//!   each directory's own disposition bottom-up from its children.
//! - **Execute**: remove what was planned, children before parents. Files held open by another
//!   process are reported as BUSY instead of failing the run.
//! - **Report**: flatten the action tree and group it into `delete`, `retain` and `busy` buckets.
//!
//! # Example
//!
//! ```rust,no_run
//! use sweeper_engine::{clean, SweepConfig};
//!
//! # async fn run() -> sweeper_engine::Result<()> {
//! let config = SweepConfig {
//!     max_age_days: 30,
//!     recursive: true,
//!     delete_empty_directories: true,
//!     ..Default::default()
//! };
//!
//! let report = clean("/var/tmp/exports", &config).await?;
//! println!("deleted {} entries, {} busy", report.delete.len(), report.busy.len());
//! # Ok(())
//! # }
//! ```

mod action;
mod age;
mod analyze;
mod classify;
mod config;
mod error;
mod execute;
mod flatten;
pub mod fs;
mod report;
mod resolve;
mod sweeper;

pub use action::{Action, DirDisposition, Disposition, EntryKind, FileDisposition};
pub use age::days_between;
pub use config::{DEFAULT_MAX_AGE_DAYS, SweepConfig};
pub use error::{FsOp, Result, SweepError};
pub use execute::Leftovers;
pub use flatten::flatten;
pub use fs::{EntryMetadata, FileSystem, FsError, FsErrorKind, LocalFileSystem};
pub use report::Report;
pub use resolve::resolve;
pub use sweeper::{Sweeper, analyze, clean, execute, plan};

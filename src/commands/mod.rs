//! Command implementations

pub mod audit;
pub mod compress;
pub mod simple;

pub use audit::{AuditReport, run_audit};
pub use compress::{CompressSummary, compress_files};
pub use simple::run_simple;

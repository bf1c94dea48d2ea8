//! Mock inheritance domain: wallet, drafts, receipts and sample records.
//!
//! Nothing here talks to a chain, a wallet or IPFS. Results are random strings
//! handed back after a fixed delay.

use std::time::Duration;

mod activity;
mod draft;
mod receipt;
mod records;
mod wallet;

pub use activity::{Activity, DASHBOARD_STATS, recent_activity};
pub use draft::{Draft, PdfFile};
pub use receipt::Receipt;
pub use records::{
	InheritanceRecord, RecordStatus, file_count_label, filter_records, received_inheritances,
};
pub use wallet::{Wallet, short_address};

/// Pretend time spent encrypting, pinning and recording an inheritance.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(2500);

/// Pretend time spent decrypting a received file.
pub const DOWNLOAD_DELAY: Duration = Duration::from_millis(2000);

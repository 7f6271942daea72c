pub use scan_client::{scan_badge, ScanClient};
pub use scan_error::ScanError;

mod scan_client;
mod scan_error;

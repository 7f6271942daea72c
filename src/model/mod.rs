pub use participant::Participant;
pub use scan_outcome::ScanOutcome;
pub use scan_request::ScanRequest;
pub use scan_response::ScanResponse;

mod participant;
mod scan_outcome;
mod scan_request;
mod scan_response;

use hyper::StatusCode;

use crate::model::ScanResponse;

/// What came back from a scan that reached the server.
#[derive(Debug, Clone)]
pub enum ScanOutcome {
    Success(ScanResponse),
    Failed { status: StatusCode, body: String },
}

use crate::model::ScanOutcome;
use crate::service::ScanError;

pub const CONNECTION_ERROR: &str = "Error connecting to the API";
pub const FACILITY_CLOSED: &str = "Facility closed: all remaining attendees were checked out.";

/// Renders the text printed for a single scan.
pub fn render(result: &Result<ScanOutcome, ScanError>) -> String {
    match result {
        Ok(ScanOutcome::Success(response)) => {
            let mut text = format!(
                "[{}] Success! {} for {}",
                response.action_label(),
                response.message,
                response.participant_email()
            );
            if response.is_facility_closed() {
                text.push('\n');
                text.push_str(FACILITY_CLOSED);
            }
            text
        }
        Ok(ScanOutcome::Failed { status, body }) => {
            format!("Failed! Status Code: {}\n{body}", status.as_u16())
        }
        Err(e) => format!("{CONNECTION_ERROR}: {}", e.describe()),
    }
}

use serde::Deserialize;

use crate::misc::OrUnknown;
use crate::model::Participant;

/// Body of a 200 reply from the scan endpoint.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    #[serde(default)]
    pub message: String,
    pub r#type: String,
    pub participant: Option<Participant>,
    /// Set on checkout when the last keyholder left and the building was emptied.
    pub facility_closed: Option<bool>,
}

impl ScanResponse {
    pub const CHECKIN: &'static str = "checkin";
    pub const CHECKOUT: &'static str = "checkout";

    pub fn action_label(&self) -> String {
        self.r#type.to_uppercase()
    }

    pub fn participant_email(&self) -> &str {
        self.participant
            .as_ref()
            .and_then(|p| p.email.as_deref())
            .or_unknown()
    }

    pub fn is_facility_closed(&self) -> bool {
        self.facility_closed.unwrap_or(false)
    }
}

use serde::Deserialize;

/// The participant record echoed back by the scan endpoint. Only the email is
/// read, other columns are ignored.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Participant {
    pub email: Option<String>,
}

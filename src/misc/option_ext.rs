pub const UNKNOWN: &str = "Unknown";

pub trait OrUnknown<'a> {
    fn or_unknown(self) -> &'a str;
}

impl<'a> OrUnknown<'a> for Option<&'a str> {
    fn or_unknown(self) -> &'a str {
        match self {
            None => UNKNOWN,
            Some(value) => value,
        }
    }
}

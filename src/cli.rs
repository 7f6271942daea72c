use clap::Parser;

/// Mock a Raspberry Pi badge scanner for the check-in service
#[derive(Parser, Debug)]
#[command(name = "badge_scanner")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The participant ID to scan
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub id: u64,
}

impl Cli {
    pub fn parse_args() -> Cli {
        Cli::parse()
    }
}

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "dynarray")]
#[command(version, about = "Runs the DynamicArray demonstration sequence", long_about = None)]
pub struct Cli {
    /// How many sequential integers to append before the inserts
    #[arg(short, long, value_name = "N", default_value_t = 15)]
    pub fill: usize,

    /// Also sort N random integers and check the result is ordered
    #[arg(short, long, value_name = "N")]
    pub random: Option<usize>,

    /// Set verbose level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Log level selected by the number of `-v` flags.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

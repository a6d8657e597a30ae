use clap::crate_authors;
use clap::crate_description;
use clap::crate_version;
pub use clap::Parser;

const DICER_AUTHOR: &str = crate_authors!();
const DICER_VERSION: &str = crate_version!();
const DICER_ABOUT: &str = crate_description!();
const DICER_FLAG_D_SHORT: char = 'd';
const DICER_FLAG_D_HELP: &str = "Enable Debug logging";
const DICER_HISTORY_ENV: &str = "DICER_HISTORY";
const DICER_HISTORY_HELP: &str = "File the line history is loaded from and appended to";
const DICER_HISTORY_DEFAULT: &str = "history";
const DICER_SEED_ENV: &str = "DICER_SEED";
const DICER_SEED_HELP: &str = "Seed the dice for a reproducible session";

#[derive(Parser, Debug)]
#[command(author = DICER_AUTHOR, version = DICER_VERSION, about = DICER_ABOUT)]
pub struct Args {
    #[arg(short = DICER_FLAG_D_SHORT, long, help = DICER_FLAG_D_HELP, action)]
    pub debug: bool,

    #[arg(long, env = DICER_HISTORY_ENV, default_value = DICER_HISTORY_DEFAULT, help = DICER_HISTORY_HELP)]
    pub history: String,

    #[arg(long, env = DICER_SEED_ENV, help = DICER_SEED_HELP)]
    pub seed: Option<u64>,
}

mod cli;
mod helper;
use cli::Parser;
use helper::ReplHelper;

use colored::Colorize;
use dicer_lib::Error;
use dicer_lib::RollSpec;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rustyline::error::ReadlineError;
use rustyline::hint::HistoryHinter;
use rustyline::CompletionType;
use rustyline::Config;
use rustyline::EditMode;
use rustyline::Editor;
use rustyline::Result;
use termimad::crossterm::style::Color;
use termimad::MadSkin;
use tracing::Level;
use tracing_unwrap::OptionExt;

/// Two lines pointing at the character a parse failed on
fn caret(error: &Error) -> String {
    format!("  {}\n  {}^", error.input(), " ".repeat(error.offset()))
}

fn roll_line(line: &str, generator: &mut StdRng, skin: &MadSkin) {
    match RollSpec::parse(line) {
        Ok(spec) => {
            let result = spec.roll_with(generator);
            println!("{}", skin.inline(&format!("**{}** `{}`", spec, result)));
        }
        Err(error) => {
            eprintln!("{}", format!("{}", error).bold().red());
            eprintln!("{}", caret(&error).red());
        }
    }
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(true)
        .with_max_level(if args.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    let mut generator = match args.seed {
        Some(seed) => {
            tracing::info!(seed, "seeded session");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();
    let helper = ReplHelper {
        hinter: HistoryHinter {},
        colored: "".to_owned(),
    };
    let mut skin = MadSkin::default();
    skin.bold.set_fg(Color::Yellow);
    skin.inline_code.set_fg(Color::Magenta);
    let mut rline = Editor::with_config(config)?;
    rline.set_helper(Some(helper));
    if rline.load_history(&args.history).is_err() {
        eprintln!("{}", "dicer: warn: no previous history".bold().yellow());
    }
    let mut count = 1u64;
    loop {
        let prompt = format!("dicer: {}> ", count);
        rline.helper_mut().expect_or_log("dicer: panic: no helper").colored =
            prompt.bold().green().to_string();
        match rline.readline(&prompt) {
            Ok(line) => {
                rline.add_history_entry(line.as_str())?;
                let line = line.trim();
                if !line.is_empty() {
                    roll_line(line, &mut generator, &skin);
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("{}", "dicer: signal: CTRL-C".bold().yellow());
                break;
            }
            Err(ReadlineError::Eof) => {
                eprintln!("{}", "dicer: signal: CTRL-D".bold().yellow());
                break;
            }
            Err(error) => {
                eprintln!("{}", format!("dicer: error: `{:?}`", error).bold().red());
                break;
            }
        }
        count += 1;
    }
    rline.append_history(&args.history)
}

//! CLI frontend for the Guaxiang plum-blossom divination engine.

mod commands;
mod logging;

use std::process;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gx",
    about = "Guaxiang (卦象) — plum-blossom divination from time and an observed object",
    version,
    propagate_version = true
)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug). Logs go to stderr.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a reading for an observed object
    Divine {
        /// What you observed, e.g. 一轮红日
        object: String,

        /// The question on your mind
        #[arg(short, long)]
        question: Option<String>,

        /// Question type: general, health, mental, career, love
        #[arg(short = 't', long = "type", default_value = "general")]
        question_type: String,

        /// Local time to cast for (default: now), e.g. 2024-01-01T09:00
        #[arg(short, long)]
        date: Option<String>,

        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the almanac for a day without casting
    Almanac {
        /// Local date or time (default: now)
        #[arg(short, long)]
        date: Option<String>,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show which trigram a piece of text maps to
    Classify {
        /// Object description
        text: String,
    },

    /// Look up one hexagram by its upper and lower trigrams
    Hexagram {
        /// Upper trigram: index 1-8, name, or nature (e.g. 3, 离, fire)
        upper: String,

        /// Lower trigram
        lower: String,
    },

    /// List all 64 hexagrams
    Hexagrams,

    /// Start an interactive session
    Session {
        /// Starting question type
        #[arg(short = 't', long = "type", default_value = "general")]
        question_type: String,

        /// Pin the casting time instead of using the clock
        #[arg(short, long)]
        date: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Divine {
            object,
            question,
            question_type,
            date,
            json,
        } => commands::divine::run(
            &object,
            question.as_deref(),
            &question_type,
            date.as_deref(),
            json,
        ),
        Commands::Almanac { date, json } => commands::almanac::run(date.as_deref(), json),
        Commands::Classify { text } => commands::classify::run(&text),
        Commands::Hexagram { upper, lower } => commands::hexagram::run(&upper, &lower),
        Commands::Hexagrams => commands::hexagrams::run(),
        Commands::Session {
            question_type,
            date,
        } => commands::session::run(&question_type, date.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

use std::fmt;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use quiz_core::model::{Label, SessionConfig};
use services::{
    ChoicePolicy, Clock, HttpItemSource, ItemSource, LabelCatalog, QuizLoopService,
    QuizServiceError,
};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidBaseUrl { raw: String },
    InvalidRounds { raw: String },
    InvalidPoints { raw: String },
    InvalidDistractors { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidBaseUrl { raw } => write!(f, "invalid --base-url value: {raw}"),
            ArgsError::InvalidRounds { raw } => write!(f, "invalid --rounds value: {raw}"),
            ArgsError::InvalidPoints { raw } => write!(f, "invalid --points value: {raw}"),
            ArgsError::InvalidDistractors { raw } => {
                write!(f, "invalid --distractors value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- play    [--base-url <url>] [--rounds <n>] [--points <n>] [--distractors <n>]");
    eprintln!("  cargo run -p app -- listing [--base-url <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --base-url http://localhost:8080");
    eprintln!("  --rounds 5");
    eprintln!("  --points 1");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_BASE_URL, QUIZ_ROUNDS, QUIZ_POINTS");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Play,
    Listing,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "play" => Some(Self::Play),
            "listing" => Some(Self::Listing),
            _ => None,
        }
    }
}

struct Args {
    base_url: String,
    rounds: u32,
    points: u32,
    distractors: Option<usize>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut base_url = std::env::var("QUIZ_BASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "http://localhost:8080".into());
        let mut rounds = std::env::var("QUIZ_ROUNDS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(SessionConfig::DEFAULT_TOTAL_ROUNDS);
        let mut points = std::env::var("QUIZ_POINTS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(SessionConfig::DEFAULT_POINTS_PER_CORRECT);
        let mut distractors = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--base-url" => {
                    let value = require_value(args, "--base-url")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidBaseUrl { raw: value });
                    }
                    base_url = value;
                }
                "--rounds" => {
                    let value = require_value(args, "--rounds")?;
                    rounds = value
                        .parse::<u32>()
                        .ok()
                        .filter(|parsed| *parsed > 0)
                        .ok_or(ArgsError::InvalidRounds { raw: value })?;
                }
                "--points" => {
                    let value = require_value(args, "--points")?;
                    points = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidPoints { raw: value.clone() })?;
                }
                "--distractors" => {
                    let value = require_value(args, "--distractors")?;
                    let parsed: usize = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidDistractors { raw: value.clone() })?;
                    distractors = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            base_url,
            rounds,
            points,
            distractors,
        })
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: play a quiz when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Play,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Play,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            io::Error::new(io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let source = Arc::new(HttpItemSource::new(parsed.base_url.clone()));

    match cmd {
        Command::Play => {
            let config = SessionConfig::new(parsed.rounds, parsed.points)?;
            let mut service =
                QuizLoopService::new(Clock::default_clock(), source, LabelCatalog::usability())
                    .with_config(config);
            if let Some(distractors) = parsed.distractors {
                service = service.with_choice_policy(ChoicePolicy::Shuffled { distractors });
            }
            play(&service).await
        }
        Command::Listing => {
            let listing = source.fetch_listing().await?;
            if listing.is_empty() {
                eprintln!("listing at {} is empty", parsed.base_url);
                return Ok(());
            }
            for record in listing {
                println!("{}\t{}", record.image, record.label);
            }
            Ok(())
        }
    }
}

async fn play(service: &QuizLoopService) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = match service.start_session().await {
        Ok(session) => session,
        Err(QuizServiceError::NoUsableItems) => {
            eprintln!("No questions available.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();

    while let Some(round) = service.next_round(&mut session) {
        println!();
        println!("{}   {}", round.round_display(), round.score_display());
        println!("Image: {}", round.asset());
        for (index, label) in round.choices.iter().enumerate() {
            println!("  {}) {}", index + 1, label);
        }

        let chosen = prompt_choice(&mut input, &round.choices)?;
        let outcome = service.answer(&mut session, &round, &chosen)?;
        println!("{}", outcome.feedback_display());
        println!("Score: {}", outcome.score);
    }

    let summary = service.summary(&session);
    println!();
    println!("Quiz complete!");
    println!("{}", summary.final_display());
    Ok(())
}

fn prompt_choice(input: &mut impl BufRead, choices: &[Label]) -> io::Result<Label> {
    loop {
        print!("Your choice (1-{}): ", choices.len());
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed before the quiz finished",
            ));
        }

        if let Some(choice) = line
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|index| (1..=choices.len()).contains(index))
            .map(|index| choices[index - 1].clone())
        {
            return Ok(choice);
        }

        println!("Enter a number between 1 and {}.", choices.len());
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

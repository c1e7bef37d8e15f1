mod render;

use std::fmt;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use api::{ApiConfig, Remote};
use services::{
    ConceptBrowser, ConfirmPrompt, PracticeController, map_activity, map_concept_performance,
    map_overview, map_progress,
};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
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

struct Args {
    config: ApiConfig,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url http://localhost:5000");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  DRILL_API_URL");
}

fn print_commands() {
    println!("Commands:");
    println!("  <index>     select that option");
    println!("  s           submit answer");
    println!("  n           next question");
    println!("  r           recheck the stored answer");
    println!("  a           accept proposed answer");
    println!("  x           reject proposed answer");
    println!("  f           flag question for review");
    println!("  d           delete question (asks first)");
    println!("  c [term]    browse concepts, optionally searching");
    println!("  cf [level]  filter concepts by difficulty");
    println!("  t           statistics");
    println!("  h           this help");
    println!("  q           quit");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut config = ApiConfig::from_env();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    config = Some(
                        ApiConfig::new(&value)
                            .map_err(|_| ArgsError::InvalidApiUrl { raw: value })?,
                    );
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let config = match config {
            Some(config) => config,
            None => ApiConfig::new("http://localhost:5000")
                .map_err(|_| ArgsError::InvalidApiUrl {
                    raw: "http://localhost:5000".to_string(),
                })?,
        };

        Ok(Self { config })
    }
}

/// Terminal yes/no prompt, the blocking confirmation the delete flow needs.
struct StdinConfirm;

impl ConfirmPrompt for StdinConfirm {
    fn confirm(&self, message: &str) -> bool {
        print!("{message} [y/N] ");
        let _ = io::stdout().flush();
        matches!(
            read_line().as_deref().map(str::trim),
            Some("y" | "Y" | "yes")
        )
    }
}

fn read_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(_) => None,
    }
}

async fn show_stats(remote: &Remote) {
    let overview = remote.stats.overview().await;
    let performance = remote.stats.concept_performance().await;
    let progress = remote.stats.progress_over_time().await;
    let activity = remote.stats.recent_activity().await;

    match (overview, performance, progress, activity) {
        (Ok(overview), Ok(performance), Ok(progress), Ok(activity)) => {
            print!(
                "{}",
                render::render_stats(
                    &map_overview(&overview),
                    &map_concept_performance(&performance),
                    &map_progress(&progress),
                    &map_activity(&activity),
                )
            );
        }
        _ => eprintln!("error: failed to load statistics"),
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|err| {
        eprintln!("{err}");
        print_usage();
        err
    })?;

    tracing::info!(base_url = args.config.base_url(), "starting practice session");

    let remote = Remote::http(args.config);
    let mut controller = PracticeController::new(Arc::clone(&remote.questions));
    let mut browser = ConceptBrowser::new(Arc::clone(&remote.concepts));

    if let Err(err) = controller.load_next_question().await {
        eprintln!("error: {err}");
    }

    loop {
        print!("{}\n> ", render::render_practice(&controller.snapshot()));
        let _ = io::stdout().flush();

        let Some(line) = read_line() else { break };
        let input = line.trim();
        let (command, argument) = match input.split_once(' ') {
            Some((command, argument)) => (command, argument.trim()),
            None => (input, ""),
        };

        let outcome = match command {
            "" => Ok(()),
            "q" => break,
            "h" | "?" => {
                print_commands();
                Ok(())
            }
            "s" => controller.submit_answer().await,
            "n" => controller.load_next_question().await,
            "r" => controller.recheck_question().await,
            "a" => controller.accept_new_answer().await,
            "x" => {
                controller.reject_new_answer();
                Ok(())
            }
            "f" => controller.flag_question().await,
            "d" => controller.delete_question(&StdinConfirm).await.map(|_| ()),
            "c" => {
                browser.set_search(argument);
                match browser.refresh().await {
                    Ok(()) => {
                        print!("{}", render::render_concepts(&browser.visible()));
                        Ok(())
                    }
                    Err(err) => Err(err.into()),
                }
            }
            "cf" => {
                browser.set_difficulty(argument);
                print!("{}", render::render_concepts(&browser.visible()));
                Ok(())
            }
            "t" => {
                show_stats(&remote).await;
                Ok(())
            }
            other => match other.parse::<usize>() {
                Ok(index) => controller.select_option(index),
                Err(_) => {
                    eprintln!("unknown command: {other} (h for help)");
                    Ok(())
                }
            },
        };

        // every failure is one user-visible message; prior state stays put
        if let Err(err) = outcome {
            eprintln!("error: {err}");
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#![deny(clippy::all)]
#![forbid(unsafe_code)]

use error_iter::ErrorIter as _;
use log::{debug, error, info};
use pixels_main_support::animate;
use seed_life::{Seed, Session};
use std::env;
use std::process::ExitCode;

const USAGE: &str = "usage: seed-life-pixels [--print-config] [--seed <text> | seed=<text> | <text>]";

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::parse(env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let session = Session::new(&args.seed);
    match serde_json::to_string_pretty(session.config()) {
        Ok(json) if args.print_config => {
            println!("{json}");
            return ExitCode::SUCCESS;
        }
        Ok(json) => debug!("configuration {json}"),
        Err(err) => log_error("serde_json::to_string_pretty", err),
    }

    let title = format!("Seed Life: {}", args.seed);
    let result = animate(session, &title, |snapshot| {
        info!(
            "snapshot of {:?}: {}x{}, {} bytes",
            args.seed.as_str(),
            snapshot.width,
            snapshot.height,
            snapshot.rgba.len()
        );
    });
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log_error("animate", err);
            ExitCode::FAILURE
        }
    }
}

fn log_error<E: std::error::Error + 'static>(method_name: &str, err: E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}

#[derive(Debug)]
struct Args {
    seed: Seed,
    print_config: bool,
}

impl Args {
    fn parse<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut seed = None;
        let mut print_config = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            if arg == "--print-config" {
                print_config = true;
            } else if arg == "--seed" {
                let value = args.next().ok_or("--seed needs a value")?;
                seed = Some(Seed::new(&value));
            } else if let Some(value) = arg.strip_prefix("--seed=") {
                seed = Some(Seed::new(value));
            } else if arg.starts_with('?') || arg.starts_with("seed=") {
                seed = Some(Seed::from_query(&arg).ok_or_else(|| format!("no seed in {arg:?}"))?);
            } else if arg.starts_with("--") {
                return Err(format!("unknown option {arg}"));
            } else {
                seed = Some(Seed::new(&arg));
            }
        }

        let seed = seed.unwrap_or_else(|| {
            let seed = Seed::random();
            info!("no seed given, using {seed}");
            seed
        });
        Ok(Self { seed, print_config })
    }
}

use std::io::stdout;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::{App, Arg};
use log::{debug, LevelFilter};
use threads_check::output::{print::PrintOutputter, BodyFormat};
use threads_check::{load_env_file, Checker, ClientConfig, Config};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    let matches = App::new("threads-check")
        .version(VERSION)
        .about("Checks that the Threads mentions endpoint accepts the configured credentials")
        .arg(
            Arg::with_name("ENV_FILE")
                .short("n")
                .long("env-file")
                .takes_value(true)
                .help("A .env file to read THREADS_API_BASE, THREADS_ACCESS_TOKEN and THREADS_USER_ID from [default: ./.env if present]"),
        )
        .arg(
            Arg::with_name("PRETTY")
                .short("p")
                .long("pretty")
                .help("Pretty print the returned document"),
        )
        .arg(
            Arg::with_name("ACCEPT_INVALID_CERT")
                .short("k")
                .long("danger-accept-invalid-certs")
                .help("Controls the use of certificate validation."),
        )
        .arg(
            Arg::with_name("VERBOSE")
                .short("v")
                .multiple(true)
                .help("Log more to stderr, repeat for more detail (RUST_LOG also works)"),
        )
        .usage("threads-check [OPTIONS]")
        .get_matches();

    init_logger(matches.occurrences_of("VERBOSE"));

    load_env_file(matches.value_of("ENV_FILE").map(Path::new))?;

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            debug!("configuration rejected: {:?}", e.kind);
            println!("{}", e);
            process::exit(1);
        }
    };
    debug!("using {:?}", config);

    let body_format = if matches.is_present("PRETTY") {
        BodyFormat::Pretty
    } else {
        BodyFormat::Compact
    };
    let client_config = ClientConfig::new(!matches.is_present("ACCEPT_INVALID_CERT"));

    let mut stdout = stdout();
    let mut outputter = PrintOutputter::new(&mut stdout, body_format);

    let mut checker = Checker::new(&mut outputter, client_config)?;
    checker
        .check(&config)
        .context("Failed reporting the API check")?;

    Ok(())
}

fn init_logger(verbosity: u64) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("reqwest", LevelFilter::Info);
    // RUST_LOG wins over -v
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

/// Orrery - Planet Catalogue CLI
use orrery::backend::{Catalogue, QueryEngine};
use orrery::repl::{EditorSource, ReaderSource, ReplConfig, Session};
use std::env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;
use tracing::{debug, Level};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_usage() {
    eprintln!("Orrery v{}", VERSION);
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    orrery [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -h, --help               Print this help message");
    eprintln!("    -v, --version            Print version information");
    eprintln!("    -d, --data <FILE>        Planet data file (default: data/planets.json)");
    eprintln!("    -c, --config <FILE>      Configuration file (TOML)");
    eprintln!("    -a, --ask <QUESTION>     Answer one question and exit");
    eprintln!("    -l, --list               Print the planet names and exit");
    eprintln!("    --verbose                Log debug output to stderr");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("    orrery");
    eprintln!("    orrery --ask \"How many moons does Mars have\"");
    eprintln!("    orrery --data my-planets.json --list");
}

fn print_version() {
    println!("Orrery {}", VERSION);
}

struct Options {
    data: Option<PathBuf>,
    config: Option<PathBuf>,
    ask: Option<String>,
    list: bool,
    verbose: bool,
}

fn parse_args() -> Result<Options, String> {
    let args: Vec<String> = env::args().collect();

    let mut data = None;
    let mut config = None;
    let mut ask = None;
    let mut list = false;
    let mut verbose = false;
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                process::exit(0);
            }
            "-d" | "--data" => {
                i += 1;
                let path = args.get(i).ok_or("Missing data file after --data")?;
                data = Some(PathBuf::from(path));
            }
            "-c" | "--config" => {
                i += 1;
                let path = args.get(i).ok_or("Missing config file after --config")?;
                config = Some(PathBuf::from(path));
            }
            "-a" | "--ask" => {
                i += 1;
                let question = args.get(i).ok_or("Missing question after --ask")?;
                ask = Some(question.clone());
            }
            "-l" | "--list" => {
                list = true;
            }
            "--verbose" => {
                verbose = true;
            }
            arg => {
                return Err(format!("Unknown argument: {}", arg));
            }
        }
        i += 1;
    }

    Ok(Options {
        data,
        config,
        ask,
        list,
        verbose,
    })
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_config(options: &Options) -> Result<ReplConfig, String> {
    match &options.config {
        Some(path) => ReplConfig::from_path(path).map_err(|e| e.to_string()),
        None => Ok(ReplConfig::load()),
    }
}

fn run_interactive(catalogue: &Catalogue, engine: QueryEngine, config: &ReplConfig) -> io::Result<()> {
    let mut session = Session::new(catalogue, engine, io::stdout());

    if config.editor && io::stdin().is_terminal() {
        let mut source = EditorSource::new(config, catalogue)?;
        let result = session.run(&mut source);
        source.save_history();
        result
    } else {
        debug!("stdin is not a terminal; reading plain lines");
        let mut source = ReaderSource::new(io::stdin().lock());
        session.run(&mut source)
    }
}

fn main() {
    let options = match parse_args() {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    init_logging(options.verbose);

    let config = match load_config(&options) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let data_path = options.data.clone().unwrap_or_else(|| config.data_path.clone());
    let catalogue = match Catalogue::from_json_path(&data_path) {
        Ok(catalogue) => catalogue,
        Err(e) if e.is_load_failure() => {
            eprintln!("Error loading data: {}", e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    debug!(path = %data_path.display(), planets = catalogue.len(), "catalogue ready");

    let engine = QueryEngine::new().with_suggestion_limit(config.suggestion_limit);

    if options.list {
        println!("Planets: {}", catalogue.all_names().join(", "));
        return;
    }

    if let Some(question) = &options.ask {
        println!("{}", engine.answer(question, &catalogue));
        return;
    }

    if let Err(e) = run_interactive(&catalogue, engine, &config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use bombe::config::{resolve_reflector, resolve_rotor};
use bombe::utils::converter::sanitize;
use bombe::{
    BombeConfig, BombeError, Candidate, ConfigError, EnigmaMachine, MultiBombe, Plugboard,
    Reflector,
};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bombe")]
#[command(about = "Recover Enigma rotor settings from a crib with an emulated Bombe")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one Bombe for a known rotor order
    Run(RunArgs),
    /// Try every rotor order and reflector from the given pools
    Multi(MultiArgs),
    /// Encrypt (or decrypt) text with an Enigma machine
    Encrypt(EncryptArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    #[arg(long, help = "JSON configuration file; replaces the other options")]
    config: Option<PathBuf>,

    #[arg(long, value_delimiter = ',', default_value = "I,II,III", help = "Rotors, left to right")]
    rotors: Vec<String>,

    #[arg(long, default_value = "B", help = "Reflector")]
    reflector: String,

    #[arg(long, required_unless_present = "config", help = "Ciphertext")]
    ciphertext: Option<String>,

    #[arg(long, required_unless_present = "config", help = "Known plaintext")]
    crib: Option<String>,

    #[arg(long, default_value = "0", help = "Ciphertext position where the crib starts")]
    offset: usize,

    #[arg(long, help = "Skip the checking machine")]
    no_check: bool,

    #[arg(long, help = "Print results as JSON")]
    json: bool,
}

#[derive(Args, Debug)]
struct MultiArgs {
    #[arg(long, value_delimiter = ',', default_value = "I,II,III,IV,V", help = "Rotor pool")]
    rotors: Vec<String>,

    #[arg(long, value_delimiter = ',', help = "Pool for the fourth (non-stepping) slot")]
    fourth: Vec<String>,

    #[arg(long, value_delimiter = ',', default_value = "B,C", help = "Reflector pool")]
    reflectors: Vec<String>,

    #[arg(long, help = "Ciphertext")]
    ciphertext: String,

    #[arg(long, help = "Known plaintext")]
    crib: String,

    #[arg(long, default_value = "0", help = "Ciphertext position where the crib starts")]
    offset: usize,

    #[arg(long, help = "Skip the checking machine")]
    no_check: bool,

    #[arg(long, help = "Print results as JSON")]
    json: bool,
}

#[derive(Args, Debug)]
struct EncryptArgs {
    #[arg(long, value_delimiter = ',', default_value = "I,II,III", help = "Rotors, left to right")]
    rotors: Vec<String>,

    #[arg(long, default_value = "B", help = "Reflector")]
    reflector: String,

    #[arg(long, help = "Ring settings, one letter per rotor [default: all A]")]
    rings: Option<String>,

    #[arg(long, help = "Start position, one letter per rotor [default: all A]")]
    position: Option<String>,

    #[arg(long, default_value = "", help = "Plugboard pairs, e.g. \"AB CD\"")]
    plugboard: String,

    text: String,
}

#[derive(Serialize)]
struct Report<'a, T> {
    loops: usize,
    stops: &'a [T],
}

fn init_tracing() {
    let filter = env::var("BOMBE_LOG")
        .or_else(|_| env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Run(args) => run(args),
        Command::Multi(args) => multi(args),
        Command::Encrypt(args) => encrypt(args),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: RunArgs) -> Result<(), ConfigError> {
    let config = match args.config {
        Some(path) => BombeConfig::from_path(path)?,
        None => BombeConfig {
            rotors: args.rotors,
            reflector: args.reflector,
            ciphertext: args.ciphertext.unwrap_or_default(),
            crib: args.crib.unwrap_or_default(),
            offset: args.offset,
            check: !args.no_check,
        },
    };
    let mut bombe = config.build()?;
    let stops = bombe.run_with_progress(|p| {
        info!(
            percent = (p.fraction * 100.0) as u32,
            stops = p.stops,
            "progress"
        )
    });

    if args.json {
        print_json(&Report {
            loops: bombe.loops(),
            stops: &stops,
        })?;
    } else {
        println!("Loops: {}", bombe.loops());
        println!("Stops: {}", stops.len());
        print_table(stops.iter().map(|c| (String::new(), c)));
    }
    Ok(())
}

fn multi(args: MultiArgs) -> Result<(), ConfigError> {
    let rotors = args
        .rotors
        .iter()
        .map(|r| resolve_rotor(r))
        .collect::<Result<Vec<_>, _>>()?;
    let fourth = args
        .fourth
        .iter()
        .map(|r| resolve_rotor(r))
        .collect::<Result<Vec<_>, _>>()?;
    let reflectors = args
        .reflectors
        .iter()
        .map(|r| resolve_reflector(r))
        .collect::<Result<Vec<_>, _>>()?;

    // Reuse the config's offset handling.
    let aligned = BombeConfig {
        rotors: Vec::new(),
        reflector: String::new(),
        ciphertext: args.ciphertext,
        crib: args.crib,
        offset: args.offset,
        check: !args.no_check,
    };
    let mut search = MultiBombe::new(
        &rotors,
        &fourth,
        &reflectors,
        &aligned.aligned_ciphertext()?,
        &sanitize(&aligned.crib),
        aligned.check,
    )?;
    let stops = search.run_with_progress(|p| {
        info!(
            percent = (p.fraction * 100.0) as u32,
            stops = p.stops,
            "progress"
        )
    })?;

    if args.json {
        print_json(&Report {
            loops: search.loops(),
            stops: &stops,
        })?;
    } else {
        println!("Loops: {}", search.loops());
        println!("Combinations: {}", search.combination_count());
        println!("Stops: {}", stops.len());
        print_table(
            stops
                .iter()
                .map(|m| (format!("{} / {}", m.rotors.join("-"), m.reflector), &m.candidate)),
        );
    }
    Ok(())
}

fn encrypt(args: EncryptArgs) -> Result<(), ConfigError> {
    let specs = args
        .rotors
        .iter()
        .map(|r| resolve_rotor(r).map(|c| c.spec))
        .collect::<Result<Vec<_>, BombeError>>()?;
    let specs: Vec<&str> = specs.iter().map(String::as_str).collect();
    let reflector = Reflector::parse(&resolve_reflector(&args.reflector)?.spec)?;
    let all_a = "A".repeat(specs.len());
    let mut machine = EnigmaMachine::new(
        &specs,
        reflector,
        &sanitize(args.rings.as_deref().unwrap_or(&all_a)),
        &sanitize(args.position.as_deref().unwrap_or(&all_a)),
        Plugboard::parse(&args.plugboard)?,
    )?;
    println!("{}", machine.encrypt(&sanitize(&args.text))?);
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), ConfigError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_table<'a>(rows: impl Iterator<Item = (String, &'a Candidate)>) {
    for (label, c) in rows {
        if label.is_empty() {
            println!("{}  {:<40}  {}", c.setting, c.steckers, c.preview);
        } else {
            println!("{:<24}  {}  {:<40}  {}", label, c.setting, c.steckers, c.preview);
        }
    }
}

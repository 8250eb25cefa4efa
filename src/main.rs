//! Lockroom CLI
//!
//! Usage:
//!   lockroom                                # Interactive session (default)
//!   lockroom --script moves.txt             # One command per line
//!   lockroom --list-tools                   # Print the tool catalog
//!   lockroom --serve                        # HTTP API server
//!   lockroom --seed 42 --json               # Fixed decoys, JSON output

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lockroom::core::{run_server, PuzzleEngine};
use lockroom::types::SessionConfig;
use lockroom::{DEFAULT_ADDR, NOISE_DRAWS, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "lockroom",
    version = VERSION,
    about = "Lockroom - a lock dependency puzzle for tool-using agents",
    long_about = "Lockroom models a room of locks that guard each other.\n\n\
                  Every move is a tool call: `tool arg1 arg2` or `tool(arg1, arg2)`.\n\
                  The catalog mixes real tools with decoys, and every call,\n\
                  including unknown tools, is written to the transcript.\n\n\
                  Modes:\n  \
                  --interactive  Read moves from stdin\n  \
                  --script       Read moves from a file\n  \
                  --list-tools   Print the catalog and exit\n  \
                  --serve        HTTP API server"
)]
struct Args {
    /// Interactive mode - read moves from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Run moves from a file, one per line
    #[arg(long)]
    script: Option<String>,

    /// Print the tool catalog and exit
    #[arg(long)]
    list_tools: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address
    #[arg(long, default_value = DEFAULT_ADDR)]
    addr: String,

    /// Seed for decoy generation (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of decoy draws
    #[arg(long, default_value_t = NOISE_DRAWS)]
    noise: usize,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Print a state line after every move
    #[arg(short, long)]
    verbose: bool,
}

/// Which run mode the flags select
#[derive(Debug, PartialEq, Eq)]
enum Mode<'a> {
    Serve,
    ListTools,
    Interactive,
    Script(&'a str),
}

impl Args {
    fn mode(&self) -> Mode<'_> {
        if self.serve {
            Mode::Serve
        } else if self.list_tools {
            Mode::ListTools
        } else if self.interactive {
            Mode::Interactive
        } else if let Some(ref path) = self.script {
            Mode::Script(path.as_str())
        } else {
            // Default to interactive if no mode specified
            Mode::Interactive
        }
    }

    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            seed: self.seed,
            noise_draws: self.noise,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.serve);

    if args.no_color {
        colored::control::set_override(false);
    }

    match args.mode() {
        Mode::Serve => run_serve(&args).await,
        Mode::ListTools => run_list_tools(&args),
        Mode::Script(path) => run_script(path, &args),
        Mode::Interactive => run_interactive(&args),
    }
}

fn init_tracing(serve: bool) {
    let default_filter = if serve { "lockroom=info,tower_http=info" } else { "lockroom=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Print the catalog in registration order
fn run_list_tools(args: &Args) -> anyhow::Result<()> {
    let engine = PuzzleEngine::new(args.session_config());

    if args.json {
        let tools: Vec<_> = engine.registry().catalog().collect();
        println!("{}", serde_json::to_string_pretty(&tools)?);
        return Ok(());
    }

    for tool in engine.registry().catalog() {
        let name = if tool.is_noise() { tool.name.normal() } else { tool.name.bold() };
        println!("{:<36} {}", name, tool.description.dimmed());
    }
    println!();
    println!(
        "{} tools ({} decoys), seed {}",
        engine.registry().len(),
        engine.registry().noise_count(),
        engine.seed()
    );
    Ok(())
}

/// Run moves from a file
fn run_script(path: &str, args: &Args) -> anyhow::Result<()> {
    let script = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path))?;
    let mut engine = PuzzleEngine::new(args.session_config());

    if !args.json {
        println!("{}", engine.transcript().lines()[0]);
    }

    for line in script.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some(result) = engine.execute_command(line) else {
            continue;
        };
        if !args.json {
            print_move(line, &result, &engine, args);
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
    } else {
        print_summary(&engine);
    }
    Ok(())
}

/// Interactive mode - read moves from stdin
fn run_interactive(args: &Args) -> anyhow::Result<()> {
    let mut engine = PuzzleEngine::new(args.session_config());

    print_header(args.no_color);
    println!("{}", engine.transcript().lines()[0]);
    println!("Type a tool call (e.g. victorian_inspect_wheels). Commands: tools, state, quit");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}", format_prompt(&engine));
        stdout.flush()?;

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }
        if line.eq_ignore_ascii_case("tools") {
            for tool in engine.registry().catalog() {
                println!("  {} - {}", tool.name, tool.description);
            }
            continue;
        }
        if line.eq_ignore_ascii_case("state") {
            print_locks(&engine);
            continue;
        }

        let Some(result) = engine.execute_command(line) else {
            continue;
        };

        if args.json {
            println!("{}", serde_json::to_string(&engine.snapshot())?);
        } else {
            print_move(line, &result, &engine, args);
        }

        if engine.is_complete() && result.starts_with("SUCCESS!") {
            println!("{}", "  ✓ THE VAULT IS OPEN".green().bold());
        }
    }

    print_summary(&engine);
    Ok(())
}

/// Run HTTP API server
async fn run_serve(args: &Args) -> anyhow::Result<()> {
    println!();
    println!("Lockroom v{} API Server", VERSION);
    println!();
    run_server(&args.addr, args.session_config()).await
}

fn print_header(no_color: bool) {
    let title = format!("  Lockroom v{} - Puzzle Room", VERSION);
    println!("========================================");
    if no_color {
        println!("{}", title);
    } else {
        println!("{}", title.bold());
    }
    println!("========================================");
    println!();
}

fn format_prompt(engine: &PuzzleEngine) -> String {
    format!(
        "[{}/{}] > ",
        engine.graph().solved_count(),
        engine.graph().len()
    )
}

/// Print one move's result, highlighted by outcome
fn print_move(line: &str, result: &str, engine: &PuzzleEngine, args: &Args) {
    if args.verbose {
        println!("{}", format!("> {}", line).dimmed());
    }

    let text = if result.starts_with("SUCCESS!") {
        result.green().to_string()
    } else if result.starts_with("FAILURE.") || result.starts_with("Action failed:") {
        result.red().to_string()
    } else if result.starts_with("Error:") {
        result.yellow().to_string()
    } else {
        result.to_string()
    };
    println!("{}", text);

    if args.verbose {
        println!("{}", engine.snapshot().to_parseable_string().dimmed());
    }
}

fn print_locks(engine: &PuzzleEngine) {
    for lock in engine.graph().locks() {
        let line = format!("  {} {}", lock.glyph(), lock);
        if lock.solved {
            println!("{}", line.green());
        } else if engine.graph().is_unlocked(&lock.id) {
            println!("{}", line.yellow());
        } else {
            println!("{}", line.dimmed());
        }
    }
    let items: Vec<&str> = engine.inventory().iter().collect();
    if !items.is_empty() {
        println!("  Inventory: {}", items.join(", "));
    }
}

fn print_summary(engine: &PuzzleEngine) {
    println!();
    println!(
        "Session ended. Calls: {} | Solved: {}/{} | Digest: {}",
        engine.transcript().call_count(),
        engine.graph().solved_count(),
        engine.graph().len(),
        &engine.transcript().digest()[0..16]
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(flags: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("lockroom").chain(flags.iter().copied())).unwrap()
    }

    #[test]
    fn test_interactive_flag_wins_over_script() {
        let args = parse(&["--interactive", "--script", "moves.txt"]);
        assert_eq!(args.mode(), Mode::Interactive);
    }

    #[test]
    fn test_script_mode() {
        let args = parse(&["--script", "moves.txt"]);
        assert_eq!(args.mode(), Mode::Script("moves.txt"));
    }

    #[test]
    fn test_default_mode_is_interactive() {
        assert_eq!(parse(&[]).mode(), Mode::Interactive);
        assert_eq!(parse(&["--serve", "--interactive"]).mode(), Mode::Serve);
    }
}

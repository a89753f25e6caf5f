//! Tapeworks command-line front end.
//!
//! This binary drives the run-loop controller without a graphical view. It provides:
//! 1. **Run:** Load a level, play every test case and report the verdicts.
//! 2. **Share:** Print the share link for a level.
//! 3. **Show:** Print a level's grid and test cases.
//!
//! A `LEVEL` argument is a level string, a share link, or `@path` naming a
//! file that holds either.

use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{fs, process, thread};

use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use tapeworks_core::anim::{AnimationBridge, InstantBridge, TimedBridge};
use tapeworks_core::common::{Direction, Position};
use tapeworks_core::config::Config;
use tapeworks_core::editor::EditorLatch;
use tapeworks_core::interp::TokenInterpreter;
use tapeworks_core::level::{self, Decoded};
use tapeworks_core::program::{Program, Tile, TileKind};
use tapeworks_core::run::{Controller, ControllerEvent, TestOutcome, Tick};

/// Virtual frame length used to pace `run --paced`.
const FRAME: Duration = Duration::from_millis(16);

type Runner<A> = Controller<TokenInterpreter, A, EditorLatch>;

#[derive(Parser, Debug)]
#[command(
    name = "tapeworks",
    author,
    version,
    about = "Run, share and inspect tile-and-tape puzzle levels",
    long_about = "Run, share and inspect tile-and-tape puzzle levels.\n\nExamples:\n  tapeworks run @levels/copy.json\n  tapeworks run --paced 'https://example.org/play#%7B...%7D'\n  tapeworks share @levels/copy.json --base-url https://example.org/play\n  tapeworks show 'lvl3x3:........c0........'"
)]
struct Cli {
    /// JSON configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (e.g. `info`, `tapeworks_core=debug`).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play every test case of a level and report the verdicts.
    Run {
        /// Level string, share link or @file; defaults to the config's initial level.
        level: Option<String>,

        /// Animate in real time using the configured step duration.
        #[arg(long)]
        paced: bool,

        /// Print outcomes as JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Give up after this many controller ticks.
        #[arg(long, default_value_t = 1_000_000)]
        max_ticks: usize,
    },

    /// Print the share link for a level.
    Share {
        /// Level string, share link or @file.
        level: String,

        /// Link prefix placed before `#`.
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Print a level's grid and test cases.
    Show {
        /// Level string, share link or @file.
        level: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Run {
            level,
            paced,
            json,
            max_ticks,
        } => cmd_run(config, level, paced, json, max_ticks),
        Commands::Share { level, base_url } => cmd_share(config, &level, base_url),
        Commands::Show { level } => cmd_show(&level),
    }
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Prints `message` and exits with the usage/decode error status.
fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    process::exit(2);
}

fn load_config(path: Option<&Path>) -> Config {
    match path {
        Some(path) => Config::from_file(path)
            .unwrap_or_else(|e| fail(&format!("{}: {e}", path.display()))),
        None => Config::default(),
    }
}

/// Resolves `@path` arguments to the file's contents.
fn read_level(arg: &str) -> String {
    match arg.strip_prefix('@') {
        Some(path) => fs::read_to_string(path)
            .unwrap_or_else(|e| fail(&format!("{path}: {e}"))),
        None => arg.to_string(),
    }
}

/// Builds a controller around `bridge` and loads `text` into it.
fn controller_for<A: AnimationBridge>(
    mut config: Config,
    bridge: A,
    text: &str,
) -> Runner<A> {
    config.initial_level = None;
    let mut controller = Controller::new(config, bridge, EditorLatch::new(true));
    if let Err(e) = controller.load(text) {
        fail(&e.to_string());
    }
    controller
}

fn cmd_run(mut config: Config, level: Option<String>, paced: bool, json: bool, max_ticks: usize) {
    let text = match level {
        Some(arg) => read_level(&arg),
        None => config
            .initial_level
            .take()
            .unwrap_or_else(|| fail("no level given: pass LEVEL or set initial_level")),
    };
    let layout = config.view.layout();

    let all_passed = if paced {
        let mut controller = controller_for(config, TimedBridge::new(layout), &text);
        play(&mut controller);
        let mut ticks = 0;
        loop {
            match controller.tick() {
                Tick::Idle => break,
                Tick::Waiting => {
                    thread::sleep(FRAME);
                    controller.bridge_mut().advance(FRAME);
                }
                Tick::Ran | Tick::Parked => {}
            }
            print_events(&mut controller, json);
            ticks += 1;
            if ticks >= max_ticks {
                give_up(&mut controller, max_ticks);
                break;
            }
        }
        print_events(&mut controller, json);
        report(&controller, json)
    } else {
        let mut controller = controller_for(config, InstantBridge::new(layout), &text);
        play(&mut controller);
        if controller.drain_at_most(max_ticks) == Tick::Ran {
            give_up(&mut controller, max_ticks);
        }
        print_events(&mut controller, json);
        report(&controller, json)
    };
    process::exit(i32::from(!all_passed));
}

fn play<A: AnimationBridge>(controller: &mut Runner<A>) {
    if let Err(e) = controller.play() {
        fail(&e.to_string());
    }
}

fn give_up<A: AnimationBridge>(controller: &mut Runner<A>, max_ticks: usize) {
    warn!(max_ticks, "tick budget exhausted; stopping");
    controller.stop();
}

fn print_events<A: AnimationBridge>(controller: &mut Runner<A>, json: bool) {
    for event in controller.drain_events() {
        match event {
            ControllerEvent::CaseFinished(outcome) if !json => print_outcome(&outcome),
            ControllerEvent::Stopped if !json => {
                println!("run stopped before every case was judged");
            }
            _ => {}
        }
    }
}

fn print_outcome(outcome: &TestOutcome) {
    let status = if outcome.passed() { "PASS" } else { "FAIL" };
    let verdict = if outcome.accept { "accept" } else { "reject" };
    print!(
        "case {:<3} {status}  {verdict:<6} steps={:<5} tape={}",
        outcome.index,
        outcome.steps,
        or_dash(&outcome.tape)
    );
    if let Some(fault) = &outcome.fault {
        print!("  fault: {fault}");
    }
    println!();
}

/// Prints the summary and returns whether every case was judged and passed.
fn report<A: AnimationBridge>(controller: &Runner<A>, json: bool) -> bool {
    let outcomes = controller.outcomes();
    let all_passed =
        outcomes.len() == controller.test_cases().len() && outcomes.iter().all(TestOutcome::passed);
    if json {
        match serde_json::to_string_pretty(outcomes) {
            Ok(text) => println!("{text}"),
            Err(e) => fail(&e.to_string()),
        }
    } else {
        let passed = outcomes.iter().filter(|o| o.passed()).count();
        println!("{passed}/{} cases passed", controller.test_cases().len());
        controller.stats().print();
    }
    all_passed
}

fn cmd_share(mut config: Config, level: &str, base_url: Option<String>) {
    if let Some(base_url) = base_url {
        config.share.base_url = base_url;
    }
    let layout = config.view.layout();
    let controller = controller_for(config, InstantBridge::new(layout), &read_level(level));
    match controller.share() {
        Ok(link) => println!("{link}"),
        Err(e) => fail(&e.to_string()),
    }
}

fn cmd_show(level: &str) {
    let text = read_level(level);
    let decoded = level::unwrap_link(&text)
        .and_then(|s| level::decode(&s))
        .unwrap_or_else(|e| fail(&e.to_string()));

    let (title, cases) = match &decoded {
        Decoded::Level(level) => (level.title.as_str(), level.test_cases.as_slice()),
        Decoded::Program(_) => ("(legacy program)", &[][..]),
    };
    let program = decoded.program();
    println!(
        "{title}  [{}x{}, {} tiles]",
        program.cols(),
        program.rows(),
        program.tile_count()
    );
    println!();
    print!("{}", render_grid(program));
    println!();
    if cases.is_empty() {
        println!("no test cases");
    }
    for (index, case) in cases.iter().enumerate() {
        let limit = if case.limit == 0 {
            "unlimited".to_string()
        } else {
            case.limit.to_string()
        };
        println!(
            "case {index:<3} {:<6} input={:<12} output={:<12} limit={limit}",
            if case.accept { "accept" } else { "reject" },
            or_dash(&case.input.to_string()),
            or_dash(&case.output.to_string()),
        );
    }
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() { "-" } else { s }
}

/// One character per cell: `S`/`E` endpoints, arrows for conveyors, `b`/`g`
/// branches, writer colours as their letter, `.` empty.
fn render_grid(program: &Program) -> String {
    let mut out = String::new();
    for y in 0..program.rows() as i32 {
        for x in 0..program.cols() as i32 {
            let position = Position::new(x, y);
            let cell = if position == program.start().position {
                'S'
            } else if position == program.end().position {
                'E'
            } else {
                program.tile(position).map_or('.', glyph)
            };
            out.push(cell);
        }
        out.push('\n');
    }
    out
}

fn glyph(tile: Tile) -> char {
    match tile.kind {
        TileKind::Conveyor => match tile.forward() {
            Direction::Up => '^',
            Direction::Right => '>',
            Direction::Down => 'v',
            Direction::Left => '<',
        },
        TileKind::BranchBr => 'b',
        TileKind::BranchGy => 'g',
        TileKind::WriteR => 'R',
        TileKind::WriteB => 'B',
        TileKind::WriteG => 'G',
        TileKind::WriteY => 'Y',
    }
}

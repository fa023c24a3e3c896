use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use uc_online::config::DEFAULT_APP_ID;
use uc_online::paths::locate_config;
use uc_online::session::RuntimeSession;

/// Callback pumps when no game is launched
const PUMP_ITERATIONS: u32 = 5;
const PUMP_INTERVAL: Duration = Duration::from_secs(1);

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--help") {
        println!("{}", USAGE_TEXT);
        std::process::exit(0);
    }

    let mut config_path = locate_config();
    if let Some(config_index) = args.iter().position(|arg| arg == "--config") {
        if let Some(next_arg) = args.get(config_index + 1) {
            config_path = PathBuf::from(next_arg);
        } else {
            eprintln!("{}", USAGE_TEXT);
            std::process::exit(1);
        }
    }

    println!("uc-online Launcher");
    println!("==================");

    if let Err(e) = run(config_path) {
        println!("[uc-online] An error occurred: {}", e);
    }

    println!("Done!");
}

fn run(config_path: PathBuf) -> Result<(), Box<dyn Error>> {
    let mut session = RuntimeSession::open(config_path);

    println!("\nCurrent configuration:");
    println!("  AppID: {}", session.app_id());
    println!(
        "  Game Executable: {}",
        if session.game_executable().is_empty() {
            "(not configured)"
        } else {
            session.game_executable()
        }
    );
    println!(
        "  Game Arguments: {}",
        if session.game_arguments().is_empty() {
            "(none)"
        } else {
            session.game_arguments()
        }
    );
    println!();

    session.set_app_id(DEFAULT_APP_ID);
    println!("Using AppID: {} (Spacewar)", session.app_id());

    session.log().log("Now starting uc-online initialization");
    session
        .log()
        .log(&format!("AppID set to: {}", session.app_id()));

    if let Err(e) = session.initialize() {
        session.log().log_error("uc-online initialization failed");
        return Err(format!("Failed to initialize Steam: {}", e).into());
    }

    println!("Steam initialized successfully!");

    if session.game_executable().is_empty() {
        println!("No game executable configured in the config file.");
        println!("Set GameExecutable in the config file to launch a game.");
    } else {
        println!("Attempting to launch configured game...");
        if session.launch_game().is_ok() {
            println!("Game launched!");
            return Ok(());
        }
        println!("Failed to launch game, keeping Steam running.");
    }

    for i in 0..PUMP_ITERATIONS {
        session.pump_callbacks();
        std::thread::sleep(PUMP_INTERVAL);
        println!("Running callbacks... ({}/{})", i + 1, PUMP_ITERATIONS);
    }

    println!("\nThis window is now safe to close.");
    Ok(())
}

static USAGE_TEXT: &str = r#"
Usage: uc-online [OPTIONS]

Initializes the Steam API with the AppID from the config file, then launches
the configured game or keeps Steam callbacks running for a few seconds.

Options:
    --config <path>   Config file to use (default: config.ini in the working directory,
                      then next to the executable; created if missing)
    --help            Show this help
"#;

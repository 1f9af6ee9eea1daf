use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use rainfield::{save_frame, AppError, Camera, Color, RainConfig, RainField};

const HEADLESS_WIDTH: u32 = 1280;
const HEADLESS_HEIGHT: u32 = 720;

enum Mode {
    Window { count: Option<u32> },
    Headless { out: PathBuf, count: Option<u32>, seconds: f32 },
}

fn parse_args(args: &[String]) -> Option<Mode> {
    match args.first().map(String::as_str) {
        Some("--headless") => {
            let out = PathBuf::from(args.get(1)?);
            let count = args.get(2).and_then(|s| s.parse().ok());
            let seconds = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(0.0);
            Some(Mode::Headless { out, count, seconds })
        }
        Some(arg) => Some(Mode::Window { count: Some(arg.parse().ok()?) }),
        None => Some(Mode::Window { count: None }),
    }
}

fn config_for(count: Option<u32>) -> RainConfig {
    let config = RainConfig::new();
    match count {
        Some(count) => config.with_count(count),
        None => config,
    }
}

fn headless(out: PathBuf, count: Option<u32>, seconds: f32) -> Result<(), AppError> {
    let mut field = RainField::new(config_for(count))?;
    field.advance(seconds);
    save_frame(
        &field,
        &Camera::new(),
        HEADLESS_WIDTH,
        HEADLESS_HEIGHT,
        Color::BACKGROUND,
        &out,
    )?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(mode) = parse_args(&args) else {
        eprintln!("Usage: rainfield [COUNT]");
        eprintln!("       rainfield --headless OUT.png [COUNT] [SECONDS]");
        return ExitCode::FAILURE;
    };

    let result = match mode {
        Mode::Window { count } => rainfield::window::run(config_for(count)),
        Mode::Headless { out, count, seconds } => headless(out, count, seconds),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

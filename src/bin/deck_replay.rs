use serde::{Deserialize, Serialize};
use slide_deck::api::{ControllerSnapshot, DeckConfig, PresentationController};
use slide_deck::core::Deck;
use slide_deck::interaction::DeckInput;
use slide_deck::render::MemoryView;
use std::fs;
use std::path::{Path, PathBuf};

const MIN_FRAME_MS: f64 = 1.0;
const MAX_FRAMES_PER_RUN: u64 = 1_000_000;

#[derive(Debug)]
struct CliArgs {
    deck: PathBuf,
    script: PathBuf,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct ReplayScript {
    #[serde(default = "default_start")]
    start: bool,
    #[serde(default = "default_frame_ms")]
    frame_ms: f64,
    #[serde(default)]
    until_ms: Option<f64>,
    #[serde(default)]
    steps: Vec<ReplayStep>,
}

#[derive(Debug, Deserialize)]
struct ReplayStep {
    at_ms: f64,
    #[serde(default)]
    input: Option<DeckInput>,
    #[serde(default)]
    resize_px: Option<f64>,
}

#[derive(Debug, Serialize)]
struct ReplayReport {
    snapshot: ControllerSnapshot,
    view: MemoryView,
    rejected_steps: Vec<String>,
}

fn default_start() -> bool {
    true
}

fn default_frame_ms() -> f64 {
    16.0
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let _ = slide_deck::telemetry::init_default_tracing();

    let deck = Deck::from_json(&read(&args.deck)?).map_err(|err| err.to_string())?;
    let config = match &args.config {
        Some(path) => DeckConfig::from_json(&read(path)?).map_err(|err| err.to_string())?,
        None => DeckConfig::default(),
    };
    let script: ReplayScript =
        serde_json::from_str(&read(&args.script)?).map_err(|err| format!("invalid json: {err}"))?;
    if !script.frame_ms.is_finite() || script.frame_ms < MIN_FRAME_MS {
        return Err(format!("`frame_ms` must be finite and >= {MIN_FRAME_MS}"));
    }

    let view = MemoryView::new(deck.len());
    let mut controller =
        PresentationController::new(view, deck, config).map_err(|err| err.to_string())?;
    if script.start {
        controller.start();
    }

    let mut rejected_steps = Vec::new();
    let mut steps = script.steps;
    steps.sort_by(|left, right| left.at_ms.total_cmp(&right.at_ms));

    for step in &steps {
        run_frames_until(&mut controller, step.at_ms, script.frame_ms)?;
        if let Some(width) = step.resize_px {
            controller.resize(width);
        }
        if let Some(input) = step.input {
            if let Err(err) = controller.handle_input(input) {
                rejected_steps.push(format!("{}ms {input:?}: {err}", step.at_ms));
            }
        }
    }

    let settle_ms = config.counter_duration_ms.max(config.transition_grace_ms);
    let until_ms = script
        .until_ms
        .unwrap_or_else(|| controller.clock_ms() + settle_ms);
    run_frames_until(&mut controller, until_ms, script.frame_ms)?;

    let report = ReplayReport {
        snapshot: controller.snapshot(),
        view: controller.into_view(),
        rejected_steps,
    };
    let text =
        serde_json::to_string_pretty(&report).map_err(|err| format!("serialize report: {err}"))?;
    match &args.output {
        Some(path) => fs::write(path, text)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{text}");
            Ok(())
        }
    }
}

/// Ticks from the current clock to `target_ms` in `frame_ms` steps.
///
/// Frame times are computed from the start time, not accumulated, and the
/// run fails once it would exceed `MAX_FRAMES_PER_RUN` frames or the clock
/// stops advancing.
fn run_frames_until(
    controller: &mut PresentationController<MemoryView>,
    target_ms: f64,
    frame_ms: f64,
) -> Result<(), String> {
    let start_ms = controller.clock_ms();
    let mut previous_ms = start_ms;
    let mut frame = 1_u64;
    loop {
        let now = start_ms + frame_ms * frame as f64;
        if now >= target_ms {
            break;
        }
        if frame > MAX_FRAMES_PER_RUN || now <= previous_ms {
            return Err(format!(
                "cannot reach {target_ms}ms from {start_ms}ms in {frame_ms}ms frames \
                 (limit {MAX_FRAMES_PER_RUN} frames)"
            ));
        }
        controller.tick(now);
        previous_ms = now;
        frame += 1;
    }
    controller.tick(target_ms);
    Ok(())
}

fn read(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    const USAGE: &str =
        "usage: deck_replay --deck <path> --script <path> [--config <path>] [--output <path>]";

    let mut args = std::env::args().skip(1);
    let mut deck = None::<PathBuf>;
    let mut script = None::<PathBuf>;
    let mut config = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        let slot = match flag.as_str() {
            "--deck" => &mut deck,
            "--script" => &mut script,
            "--config" => &mut config,
            "--output" => &mut output,
            other => return Err(format!("unknown flag `{other}`\n{USAGE}")),
        };
        let value = args
            .next()
            .ok_or_else(|| format!("missing value for {flag}"))?;
        *slot = Some(PathBuf::from(value));
    }

    Ok(CliArgs {
        deck: deck.ok_or_else(|| USAGE.to_owned())?,
        script: script.ok_or_else(|| USAGE.to_owned())?,
        config,
        output,
    })
}

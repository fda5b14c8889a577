//! Counter animation preview.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::counter::{CounterSpec, Frame, MAX_PREVIEW_DURATION_MS};

/// Preview the frames of an animated counter
#[derive(Debug, Clone, Args)]
pub struct CounterArgs {
    /// Target value
    #[arg(long)]
    pub end: f64,

    /// Starting value
    #[arg(long, default_value_t = 0.0)]
    pub start: f64,

    /// Duration in milliseconds (defaults to the configured duration)
    #[arg(long, value_name = "MS")]
    pub duration: Option<u64>,

    /// Digits after the decimal point
    #[arg(long, default_value_t = 0)]
    pub decimals: usize,

    /// Thousands separator
    #[arg(long, default_value = ",")]
    pub separator: String,

    /// Text before the number
    #[arg(long, default_value = "")]
    pub prefix: String,

    /// Text after the number
    #[arg(long, default_value = "")]
    pub suffix: String,

    /// Frames sampled per second
    #[arg(long, default_value_t = 10)]
    pub fps: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct CounterOutput<'a> {
    start: f64,
    end: f64,
    duration_ms: u64,
    frames: &'a [Frame],
}

impl CounterArgs {
    fn spec(&self, default_duration_ms: u64) -> CounterSpec {
        CounterSpec::new(self.end)
            .start(self.start)
            .duration_ms(self.duration.unwrap_or(default_duration_ms))
            .decimals(self.decimals)
            .separator(self.separator.clone())
            .prefix(self.prefix.clone())
            .suffix(self.suffix.clone())
    }

    /// Execute the counter command
    pub fn execute(&self) -> CliResult<()> {
        if !self.end.is_finite() || !self.start.is_finite() {
            return Err(CliError::validation("Counter values must be finite numbers"));
        }
        if self.fps == 0 {
            return Err(CliError::validation("--fps must be at least 1"));
        }

        let duration = match self.duration {
            Some(ms) => ms,
            None => load_config()?.counter.duration_ms,
        };
        if duration > MAX_PREVIEW_DURATION_MS {
            return Err(CliError::validation(format!(
                "--duration must be at most {MAX_PREVIEW_DURATION_MS} ms"
            )));
        }
        let spec = self.spec(duration);
        let frames = spec.frames(self.fps);

        if self.json {
            return print_json(&CounterOutput {
                start: spec.start,
                end: spec.end,
                duration_ms: spec.duration_ms,
                frames: &frames,
            });
        }

        for frame in &frames {
            println!("{:>6}ms  {}", frame.elapsed_ms, frame.text);
        }

        Ok(())
    }
}

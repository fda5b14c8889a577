//! Animated number counters.
//!
//! A counter eases from `start` to `end` over a fixed duration once it has
//! become visible. The model is time-source agnostic: callers feed it
//! millisecond timestamps through [`CounterAnimation::tick`], the same way a
//! browser feeds animation-frame timestamps to the embedded script.

use serde::Serialize;

/// Default animation duration in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 2000;

/// Default visible fraction that triggers the animation.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Default thousands separator.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Upper bound on the frames sampled by [`CounterSpec::frames`], excluding the
/// final pinned frame.
pub const MAX_FRAMES: usize = 1000;

/// Longest duration accepted for a frame preview (one hour).
pub const MAX_PREVIEW_DURATION_MS: u64 = 3_600_000;

/// Cubic ease-out: fast start, slow finish. `p` is clamped to `0..=1`.
#[must_use]
pub fn ease_out_cubic(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Formats `value` with fixed `decimals` and groups the integer part by
/// thousands using `separator`.
///
/// ```
/// use zahefo::counter::format_number;
///
/// assert_eq!(format_number(1234567.891, 2, ","), "1,234,567.89");
/// assert_eq!(format_number(999.0, 0, ","), "999");
/// ```
#[must_use]
pub fn format_number(value: f64, decimals: usize, separator: &str) -> String {
    let fixed = format!("{value:.decimals$}");
    let (negative, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 * separator.len());
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }

    let is_zero = unsigned.chars().all(|c| c == '0' || c == '.');
    let mut out = String::new();
    if negative && !is_zero {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Rounded percentage of `current` over `max`, clamped to `0..=100`.
///
/// Returns 0 when `max` is not positive.
#[must_use]
pub fn percentage(current: f64, max: f64) -> u8 {
    if max <= 0.0 || !current.is_finite() || !max.is_finite() {
        return 0;
    }
    (current / max * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Parameters of one counter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounterSpec {
    /// Value shown before the animation starts
    pub start: f64,
    /// Value shown once the animation finishes
    pub end: f64,
    /// Animation length in milliseconds
    pub duration_ms: u64,
    /// Text before the number (e.g. "$")
    pub prefix: String,
    /// Text after the number (e.g. "+", "%")
    pub suffix: String,
    /// Fixed number of decimal places
    pub decimals: usize,
    /// Thousands separator
    pub separator: String,
    /// Wait for visibility before starting
    pub trigger_on_view: bool,
    /// Visible fraction required to trigger
    pub threshold: f64,
}

impl CounterSpec {
    /// Counter from 0 to `end` with default settings.
    #[must_use]
    pub fn new(end: f64) -> Self {
        Self {
            start: 0.0,
            end,
            duration_ms: DEFAULT_DURATION_MS,
            prefix: String::new(),
            suffix: String::new(),
            decimals: 0,
            separator: DEFAULT_SEPARATOR.to_string(),
            trigger_on_view: true,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Sets the start value.
    pub fn start(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    /// Sets the duration.
    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Sets the prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the suffix.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Sets the number of decimals.
    pub fn decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// Sets the thousands separator.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Enables or disables visibility gating.
    pub fn trigger_on_view(mut self, trigger_on_view: bool) -> Self {
        self.trigger_on_view = trigger_on_view;
        self
    }

    /// Sets the visibility threshold.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Value at elapsed time `elapsed_ms` after the animation started.
    #[must_use]
    pub fn value_at(&self, elapsed_ms: u64) -> f64 {
        if self.duration_ms == 0 || elapsed_ms >= self.duration_ms {
            return self.end;
        }
        let p = elapsed_ms as f64 / self.duration_ms as f64;
        self.start + (self.end - self.start) * ease_out_cubic(p)
    }

    /// `prefix + formatted value + suffix`.
    #[must_use]
    pub fn render(&self, value: f64) -> String {
        format!(
            "{}{}{}",
            self.prefix,
            format_number(value, self.decimals, &self.separator),
            self.suffix
        )
    }

    /// Samples the animation every `1000 / fps` milliseconds.
    ///
    /// Long durations are sampled more coarsely so at most
    /// [`MAX_FRAMES`] + 1 frames are produced. The last frame always lands on
    /// the duration so the preview ends on the pinned `end` value.
    #[must_use]
    pub fn frames(&self, fps: u32) -> Vec<Frame> {
        let step = u64::from(1000 / fps.clamp(1, 1000))
            .max(self.duration_ms.div_ceil(MAX_FRAMES as u64));
        let mut frames = Vec::new();
        let mut t: u64 = 0;
        while t < self.duration_ms {
            frames.push(self.frame_at(t));
            t = t.saturating_add(step);
        }
        frames.push(self.frame_at(self.duration_ms));
        frames
    }

    fn frame_at(&self, elapsed_ms: u64) -> Frame {
        let value = self.value_at(elapsed_ms);
        Frame {
            elapsed_ms,
            value,
            text: self.render(value),
        }
    }
}

/// One sampled animation frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Milliseconds since the animation started
    pub elapsed_ms: u64,
    /// Raw value
    pub value: f64,
    /// Formatted text
    pub text: String,
}

/// Lifecycle of a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting to become visible
    Idle,
    /// Triggered; the next tick records the start time
    Armed,
    /// Animating since `started_at`
    Running {
        /// Timestamp of the first frame
        started_at: u64,
    },
    /// Pinned at `end`
    Finished,
}

/// Running state of one counter.
///
/// Cancelling the animation is dropping this value.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    spec: CounterSpec,
    phase: Phase,
    value: f64,
}

impl CounterAnimation {
    /// Creates the state for `spec`.
    ///
    /// Counters without visibility gating start armed.
    #[must_use]
    pub fn new(spec: CounterSpec) -> Self {
        let phase = if spec.trigger_on_view {
            Phase::Idle
        } else {
            Phase::Armed
        };
        let value = spec.start;
        Self { spec, phase, value }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The counter's parameters.
    #[must_use]
    pub const fn spec(&self) -> &CounterSpec {
        &self.spec
    }

    /// Reports the visible fraction of the element.
    ///
    /// Returns true only on the call that triggers the animation; later
    /// observations never re-trigger it.
    pub fn observe(&mut self, visible_ratio: f64) -> bool {
        if self.phase == Phase::Idle && visible_ratio >= self.spec.threshold {
            self.phase = Phase::Armed;
            return true;
        }
        false
    }

    /// Advances to `now_ms` and returns the current value.
    pub fn tick(&mut self, now_ms: u64) -> f64 {
        match self.phase {
            Phase::Idle => {}
            Phase::Armed => {
                self.phase = Phase::Running { started_at: now_ms };
                self.advance(now_ms, now_ms);
            }
            Phase::Running { started_at } => self.advance(started_at, now_ms),
            Phase::Finished => self.value = self.spec.end,
        }
        self.value
    }

    /// Advances to `now_ms` and returns the formatted text.
    pub fn display(&mut self, now_ms: u64) -> String {
        let value = self.tick(now_ms);
        self.spec.render(value)
    }

    /// Last computed value, without advancing.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    fn advance(&mut self, started_at: u64, now_ms: u64) {
        let elapsed = now_ms.saturating_sub(started_at);
        if self.spec.duration_ms == 0 || elapsed >= self.spec.duration_ms {
            self.phase = Phase::Finished;
            self.value = self.spec.end;
        } else {
            self.value = self.spec.value_at(elapsed);
        }
    }
}

/// A display value such as "25+" split into prefix, number and suffix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatValue {
    /// Leading text
    pub prefix: String,
    /// Numeric part
    pub end: f64,
    /// Decimal places present in the source
    pub decimals: usize,
    /// Trailing text
    pub suffix: String,
}

impl StatValue {
    /// Parses `"25+"`, `"98%"`, `"1,000+"` and similar.
    ///
    /// Returns `None` if the text contains no digits.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let start = text.find(|c: char| c.is_ascii_digit())?;
        let rest = &text[start..];
        let len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == ',' || c == '.'))
            .unwrap_or(rest.len());
        let number = rest[..len].trim_end_matches([',', '.']);
        let suffix = &rest[number.len()..];

        let digits: String = number.chars().filter(|c| *c != ',').collect();
        let end = digits.parse::<f64>().ok()?;
        let decimals = digits.split_once('.').map_or(0, |(_, frac)| frac.len());

        Some(Self {
            prefix: text[..start].to_string(),
            end,
            decimals,
            suffix: suffix.to_string(),
        })
    }

    /// Counter spec that animates to this value.
    #[must_use]
    pub fn to_spec(&self, duration_ms: u64, threshold: f64) -> CounterSpec {
        CounterSpec::new(self.end)
            .prefix(self.prefix.clone())
            .suffix(self.suffix.clone())
            .decimals(self.decimals)
            .duration_ms(duration_ms)
            .threshold(threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert!(ease_out_cubic(0.0).abs() < f64::EPSILON);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < f64::EPSILON);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
        assert!((ease_out_cubic(2.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(format_number(0.0, 0, ","), "0");
        assert_eq!(format_number(100.0, 0, ","), "100");
        assert_eq!(format_number(1000.0, 0, ","), "1,000");
        assert_eq!(format_number(1_234_567.0, 0, " "), "1 234 567");
        assert_eq!(format_number(12.345, 1, ","), "12.3");
        assert_eq!(format_number(-9876.5, 1, ","), "-9,876.5");
    }

    #[test]
    fn test_format_number_rounds_like_fixed() {
        assert_eq!(format_number(49.6, 0, ","), "50");
        assert_eq!(format_number(2.0, 2, ","), "2.00");
        assert_eq!(format_number(-0.2, 0, ","), "0");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(45.0, 60.0), 75);
        assert_eq!(percentage(1.0, 3.0), 33);
        assert_eq!(percentage(5.0, 0.0), 0);
        assert_eq!(percentage(120.0, 100.0), 100);
        assert_eq!(percentage(-4.0, 10.0), 0);
    }

    #[test]
    fn test_counter_waits_for_visibility() {
        let mut counter = CounterAnimation::new(CounterSpec::new(50.0));
        assert_eq!(counter.phase(), Phase::Idle);
        assert!(counter.tick(1_000).abs() < f64::EPSILON);

        assert!(!counter.observe(0.1));
        assert_eq!(counter.phase(), Phase::Idle);

        assert!(counter.observe(0.3));
        assert_eq!(counter.phase(), Phase::Armed);
    }

    #[test]
    fn test_latch_fires_once() {
        let mut counter = CounterAnimation::new(CounterSpec::new(50.0));
        assert!(counter.observe(0.9));
        assert!(!counter.observe(0.9));
        counter.tick(0);
        assert!(!counter.observe(1.0));
        assert!(matches!(counter.phase(), Phase::Running { .. }));
    }

    #[test]
    fn test_first_tick_records_start_time() {
        let spec = CounterSpec::new(100.0).duration_ms(1000).trigger_on_view(false);
        let mut counter = CounterAnimation::new(spec);
        assert_eq!(counter.phase(), Phase::Armed);

        assert!(counter.tick(5_000).abs() < f64::EPSILON);
        assert_eq!(counter.phase(), Phase::Running { started_at: 5_000 });

        let halfway = counter.tick(5_500);
        assert!((halfway - 87.5).abs() < 1e-9);
    }

    #[test]
    fn test_counter_pins_to_end_and_is_monotonic() {
        let spec = CounterSpec::new(50.0).duration_ms(2500);
        let mut counter = CounterAnimation::new(spec);
        counter.observe(1.0);

        let mut previous = f64::NEG_INFINITY;
        for t in (0..=2500).step_by(16) {
            let value = counter.tick(t);
            assert!(value >= previous, "value decreased at t={t}");
            assert!(value <= 50.0);
            previous = value;
        }
        assert!((counter.tick(2500) - 50.0).abs() < f64::EPSILON);
        assert_eq!(counter.phase(), Phase::Finished);
        assert_eq!(counter.display(9_999), "50");
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let spec = CounterSpec::new(42.0).duration_ms(0).trigger_on_view(false);
        let mut counter = CounterAnimation::new(spec);
        assert!((counter.tick(7) - 42.0).abs() < f64::EPSILON);
        assert_eq!(counter.phase(), Phase::Finished);
    }

    #[test]
    fn test_counting_down() {
        let spec = CounterSpec::new(0.0).start(10.0).duration_ms(100);
        assert!((spec.value_at(0) - 10.0).abs() < f64::EPSILON);
        assert!(spec.value_at(50) < 10.0);
        assert!(spec.value_at(100).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display_uses_prefix_suffix_and_separator() {
        let spec = CounterSpec::new(1500.0)
            .prefix("$")
            .suffix("+")
            .duration_ms(0)
            .trigger_on_view(false);
        let mut counter = CounterAnimation::new(spec);
        assert_eq!(counter.display(0), "$1,500+");
    }

    #[test]
    fn test_frames_end_on_target() {
        let spec = CounterSpec::new(50.0).duration_ms(1000).suffix("+");
        let frames = spec.frames(10);
        assert_eq!(frames.len(), 11);
        assert_eq!(frames[0].elapsed_ms, 0);
        assert_eq!(frames[0].text, "0+");
        let last = frames.last().unwrap();
        assert_eq!(last.elapsed_ms, 1000);
        assert_eq!(last.text, "50+");
    }

    #[test]
    fn test_frames_with_zero_duration() {
        let frames = CounterSpec::new(7.0).duration_ms(0).frames(60);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].text, "7");
    }

    #[test]
    fn test_frames_are_bounded_for_long_durations() {
        let frames = CounterSpec::new(1.0).duration_ms(5_000_000).frames(1000);
        assert!(frames.len() <= MAX_FRAMES + 1);
        let last = frames.last().unwrap();
        assert_eq!(last.elapsed_ms, 5_000_000);
        assert_eq!(last.text, "1");
        assert!(frames.windows(2).all(|w| w[0].elapsed_ms < w[1].elapsed_ms));

        let frames = CounterSpec::new(1.0).duration_ms(u64::MAX).frames(1000);
        assert!(frames.len() <= MAX_FRAMES + 1);
        assert_eq!(frames.last().unwrap().elapsed_ms, u64::MAX);
    }

    #[test]
    fn test_stat_value_parse() {
        let value = StatValue::parse("25+").unwrap();
        assert_eq!(value.prefix, "");
        assert!((value.end - 25.0).abs() < f64::EPSILON);
        assert_eq!(value.suffix, "+");

        let value = StatValue::parse("98%").unwrap();
        assert_eq!(value.suffix, "%");

        let value = StatValue::parse("1,000+").unwrap();
        assert!((value.end - 1000.0).abs() < f64::EPSILON);
        assert_eq!(value.decimals, 0);

        let value = StatValue::parse("$4.5M").unwrap();
        assert_eq!(value.prefix, "$");
        assert!((value.end - 4.5).abs() < f64::EPSILON);
        assert_eq!(value.decimals, 1);
        assert_eq!(value.suffix, "M");

        assert!(StatValue::parse("Zero Major Loss").is_none());
    }

    #[test]
    fn test_stat_value_to_spec_renders_original_text() {
        for text in ["25+", "50+", "98%", "1,000+", "$4.5M"] {
            let spec = StatValue::parse(text).unwrap().to_spec(2500, 0.3);
            assert_eq!(spec.render(spec.end), text);
        }
    }
}

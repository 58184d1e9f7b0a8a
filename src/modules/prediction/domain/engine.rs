use chrono::{Days, NaiveDate};

/// Cycle parameters used when no per-user tuning exists. The defaults
/// match a textbook 28-day cycle with a 14-day luteal phase.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleConfig {
    pub cycle_length_days: u64,
    pub luteal_phase_days: u64,
    pub period_length_days: u64,
    pub fertile_window_lead_days: u64,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            cycle_length_days: 28,
            luteal_phase_days: 14,
            period_length_days: 5,
            fertile_window_lead_days: 5,
        }
    }
}

/// Inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CyclePrediction {
    /// Most recent logged period date, if any history exists.
    pub last_period: Option<NaiveDate>,
    pub next_period_start: NaiveDate,
    pub ovulation_day: NaiveDate,
    pub fertile_window: DateRange,
    pub pms_window: DateRange,
    /// Signed; negative once the predicted start has passed.
    pub days_until_next_period: i64,
}

/// Derives the next cycle from logged period dates. Input order does
/// not matter. With no history the prediction anchors on `today`.
pub fn predict(period_dates: &[NaiveDate], today: NaiveDate, config: &CycleConfig) -> CyclePrediction {
    let last_period = period_dates.iter().max().copied();

    let next_period_start = match last_period {
        Some(last) => last + Days::new(config.cycle_length_days),
        None => today + Days::new(config.cycle_length_days),
    };

    let ovulation_day = next_period_start - Days::new(config.luteal_phase_days);

    let fertile_window = DateRange {
        start: ovulation_day - Days::new(config.fertile_window_lead_days),
        end: ovulation_day + Days::new(1),
    };

    let pms_window = DateRange {
        start: next_period_start - Days::new(7),
        end: next_period_start - Days::new(1),
    };

    CyclePrediction {
        last_period,
        next_period_start,
        ovulation_day,
        fertile_window,
        pms_window,
        days_until_next_period: (next_period_start - today).num_days(),
    }
}

/// What a calendar cell represents. Logged periods dominate, then
/// ovulation beats the rest of the fertile window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Period,
    Ovulation,
    Fertile,
    Pms,
    Plain,
}

pub fn classify(day: NaiveDate, logged: &[NaiveDate], prediction: &CyclePrediction) -> DayKind {
    if logged.contains(&day) {
        return DayKind::Period;
    }
    if day == prediction.ovulation_day {
        return DayKind::Ovulation;
    }
    if prediction.fertile_window.contains(day) {
        return DayKind::Fertile;
    }
    if prediction.pms_window.contains(day) {
        return DayKind::Pms;
    }
    DayKind::Plain
}

/// Projects the next `n` periods, each spanning the configured period
/// length.
pub fn upcoming_periods(
    prediction: &CyclePrediction,
    n: usize,
    config: &CycleConfig,
) -> Vec<DateRange> {
    let anchor = prediction
        .last_period
        .unwrap_or(prediction.next_period_start - Days::new(config.cycle_length_days));

    (1..=n as u64)
        .map(|i| {
            let start = anchor + Days::new(config.cycle_length_days * i);
            DateRange {
                start,
                end: start + Days::new(config.period_length_days - 1),
            }
        })
        .collect()
}

/// Groups consecutive logged dates into runs and returns the first day
/// of each run, oldest first.
pub fn cycle_starts(period_dates: &[NaiveDate]) -> Vec<NaiveDate> {
    let mut dates: Vec<_> = period_dates.to_vec();
    dates.sort_unstable();
    dates.dedup();

    let mut starts = Vec::new();
    let mut previous: Option<NaiveDate> = None;
    for date in dates {
        match previous {
            Some(prev) if date == prev + Days::new(1) => {}
            _ => starts.push(date),
        }
        previous = Some(date);
    }
    starts
}

#[derive(Debug, Clone, PartialEq)]
pub struct CycleStats {
    /// Days between consecutive cycle starts, oldest pair first.
    pub cycle_lengths: Vec<i64>,
    pub average_cycle_length: Option<f64>,
}

/// Per-cycle lengths from consecutive starts. Fewer than two starts
/// yields no lengths and no average.
pub fn cycle_stats(period_start_dates: &[NaiveDate]) -> CycleStats {
    let mut starts: Vec<_> = period_start_dates.to_vec();
    starts.sort_unstable();
    starts.dedup();

    let cycle_lengths: Vec<i64> = starts
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_days())
        .collect();

    let average_cycle_length = if cycle_lengths.is_empty() {
        None
    } else {
        Some(cycle_lengths.iter().sum::<i64>() as f64 / cycle_lengths.len() as f64)
    };

    CycleStats {
        cycle_lengths,
        average_cycle_length,
    }
}

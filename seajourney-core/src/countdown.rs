//! Countdown to the launch instant.

use chrono::{DateTime, Utc};
use serde::Serialize;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Day/hour/minute/second breakdown of the time left before launch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CountdownRemaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl CountdownRemaining {
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Break a millisecond delta down, flooring each unit. Negative deltas
    /// clamp to [`CountdownRemaining::ZERO`].
    pub fn from_millis(delta_ms: i64) -> Self {
        if delta_ms <= 0 {
            return Self::ZERO;
        }
        Self {
            days: (delta_ms / MS_PER_DAY) as u64,
            hours: ((delta_ms % MS_PER_DAY) / MS_PER_HOUR) as u64,
            minutes: ((delta_ms % MS_PER_HOUR) / MS_PER_MINUTE) as u64,
            seconds: ((delta_ms % MS_PER_MINUTE) / MS_PER_SECOND) as u64,
        }
    }

    /// Recombine the breakdown into whole seconds.
    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Remaining time between `now` and `target`, floored at zero.
pub fn remaining_between(
    target: DateTime<Utc>,
    now: DateTime<Utc>,
) -> CountdownRemaining {
    CountdownRemaining::from_millis((target - now).num_milliseconds())
}

/// Outcome of a single countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    Running(CountdownRemaining),
    /// The target has passed. Emitted once; later ticks are ignored.
    Finished,
}

/// Countdown state owned by the page.
#[derive(Debug, Clone)]
pub struct Countdown {
    target: DateTime<Utc>,
    remaining: CountdownRemaining,
    finished: bool,
}

impl Countdown {
    /// Start a countdown with its breakdown already computed for `now`.
    pub fn starting_at(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let mut countdown = Self {
            target,
            remaining: CountdownRemaining::ZERO,
            finished: false,
        };
        countdown.tick(now);
        countdown
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    pub fn remaining(&self) -> CountdownRemaining {
        self.remaining
    }

    /// Once finished the page stops scheduling ticks.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Recompute the breakdown for `now`.
    ///
    /// A zero delta still counts as running; only a target strictly in the
    /// past finishes the countdown.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<CountdownTick> {
        if self.finished {
            return None;
        }

        let delta_ms = (self.target - now).num_milliseconds();
        if delta_ms < 0 {
            self.remaining = CountdownRemaining::ZERO;
            self.finished = true;
            tracing::info!(target_instant = %self.target, "countdown finished");
            return Some(CountdownTick::Finished);
        }

        self.remaining = CountdownRemaining::from_millis(delta_ms);
        Some(CountdownTick::Running(self.remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn launch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 18, 0, 0, 0).unwrap()
    }

    #[test]
    fn one_hour_before_launch() {
        let now = Utc.with_ymd_and_hms(2025, 9, 17, 23, 0, 0).unwrap();
        assert_eq!(
            remaining_between(launch(), now),
            CountdownRemaining {
                days: 0,
                hours: 1,
                minutes: 0,
                seconds: 0
            }
        );
    }

    #[test]
    fn breakdown_recombines_to_whole_second_delta() {
        let target = launch();
        for secs in [0_i64, 1, 59, 60, 3_599, 3_600, 86_399, 86_400, 1_234_567, 40_000_000]
        {
            let now = target - Duration::seconds(secs);
            let remaining = remaining_between(target, now);
            assert_eq!(remaining.total_seconds(), secs as u64, "delta {secs}s");
            assert!(remaining.hours < 24);
            assert!(remaining.minutes < 60);
            assert!(remaining.seconds < 60);
        }
    }

    #[test]
    fn sub_second_remainder_is_floored() {
        let now = launch() - Duration::milliseconds(61_999);
        let remaining = remaining_between(launch(), now);
        assert_eq!((remaining.minutes, remaining.seconds), (1, 1));
    }

    #[test]
    fn instants_past_target_are_all_zero() {
        for secs in [1_i64, 60, 86_400 * 400] {
            let now = launch() + Duration::seconds(secs);
            assert_eq!(remaining_between(launch(), now), CountdownRemaining::ZERO);
        }
    }

    #[test]
    fn countdown_finishes_once_and_stops() {
        let target = launch();
        let mut countdown = Countdown::starting_at(target, target - Duration::seconds(2));
        assert_eq!(countdown.remaining().seconds, 2);
        assert!(!countdown.is_finished());

        assert_eq!(
            countdown.tick(target),
            Some(CountdownTick::Running(CountdownRemaining::ZERO))
        );
        assert!(!countdown.is_finished());

        assert_eq!(
            countdown.tick(target + Duration::seconds(1)),
            Some(CountdownTick::Finished)
        );
        assert!(countdown.is_finished());
        assert!(countdown.remaining().is_zero());

        // A late tick from a clock that went backwards changes nothing.
        assert_eq!(countdown.tick(target - Duration::hours(1)), None);
        assert!(countdown.remaining().is_zero());
    }

    #[test]
    fn starting_after_target_is_already_finished() {
        let countdown =
            Countdown::starting_at(launch(), launch() + Duration::minutes(5));
        assert!(countdown.is_finished());
        assert_eq!(countdown.remaining(), CountdownRemaining::ZERO);
    }
}

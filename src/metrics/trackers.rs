use super::{Hand, KeyHistory, Metric, MetricContext, Report};
use crate::error::KgResult;

/// Fresh instances of every built-in tracker, in declaration order. Reports
/// come back in this same order.
pub fn built_in() -> Vec<Box<dyn Metric>> {
    vec![
        Box::new(HandBalance::default()),
        Box::new(HomeRow::default()),
        Box::new(KeyEase::default()),
        Box::new(RepeatFinger::default()),
        Box::new(Alternation::default()),
    ]
}

#[derive(Default)]
pub struct HandBalance {
    n_left: u64,
    n_right: u64,
}

impl Metric for HandBalance {
    fn condition(&mut self, ctx: &MetricContext, key: char) -> bool {
        ctx.hand(key) == Some(Hand::Right)
    }

    fn on_true(&mut self, _ctx: &MetricContext, _key: char) {
        self.n_right += 1;
    }

    fn on_false(&mut self, _ctx: &MetricContext, _key: char) {
        self.n_left += 1;
    }

    fn report(&self) -> Report {
        let total = self.n_left + self.n_right;
        let ratio = if total == 0 {
            f64::NAN
        } else {
            self.n_left as f64 / total as f64
        };
        Report::new(
            "Hand Balance",
            "Share of keys typed using the left hand",
            vec![("ratio", ratio)],
        )
    }
}

#[derive(Default)]
pub struct HomeRow {
    top: u64,
    home: u64,
    bottom: u64,
}

impl Metric for HomeRow {
    fn on_true(&mut self, ctx: &MetricContext, key: char) {
        if let Some(coord) = ctx.coord(key) {
            match coord.row {
                0 => self.top += 1,
                1 => self.home += 1,
                2 => self.bottom += 1,
                _ => {}
            }
        }
    }

    fn report(&self) -> Report {
        let total = self.top + self.home + self.bottom;
        let share = |n: u64| {
            if total == 0 {
                f64::NAN
            } else {
                n as f64 / total as f64
            }
        };
        Report::new(
            "Row percentage",
            "Share of keys typed on each row",
            vec![
                ("home", share(self.home)),
                ("top", share(self.top)),
                ("bottom", share(self.bottom)),
            ],
        )
    }
}

#[derive(Default)]
pub struct KeyEase {
    cumulative_ease: u64,
}

impl Metric for KeyEase {
    fn on_true(&mut self, ctx: &MetricContext, key: char) {
        if let Some(ease) = ctx.key_ease(key) {
            self.cumulative_ease += u64::from(ease);
        }
    }

    fn report(&self) -> Report {
        Report::new(
            "Cumulative Key Ease",
            "Aggregates the total 'ease' score for all keys in the text",
            vec![("score", self.cumulative_ease as f64)],
        )
    }
}

/// Counts consecutive, different keys struck by the same finger. The current
/// key is enqueued whichever way the condition goes, so "previous" is always
/// the last in-layout, non-space character evaluated.
pub struct RepeatFinger {
    history: KeyHistory,
    repeats: u64,
}

impl Default for RepeatFinger {
    fn default() -> Self {
        Self {
            history: KeyHistory::new(1),
            repeats: 0,
        }
    }
}

impl Metric for RepeatFinger {
    fn init(&mut self, _ctx: &MetricContext) -> KgResult<()> {
        self.history.clear();
        Ok(())
    }

    fn condition(&mut self, ctx: &MetricContext, key: char) -> bool {
        match self.history.last() {
            Some(prev) if prev != key => ctx.same_finger(key, prev),
            _ => false,
        }
    }

    fn on_true(&mut self, _ctx: &MetricContext, key: char) {
        self.repeats += 1;
        self.history.push(key);
    }

    fn on_false(&mut self, _ctx: &MetricContext, key: char) {
        self.history.push(key);
    }

    fn report(&self) -> Report {
        Report::new(
            "Repeated Fingers",
            "Counts the times the same finger strikes two consecutive, different keys",
            vec![("repeats", self.repeats as f64)],
        )
    }
}

pub struct Alternation {
    history: KeyHistory,
    hand_switches: u64,
}

impl Default for Alternation {
    fn default() -> Self {
        Self {
            history: KeyHistory::new(1),
            hand_switches: 0,
        }
    }
}

impl Metric for Alternation {
    fn init(&mut self, _ctx: &MetricContext) -> KgResult<()> {
        self.history.clear();
        Ok(())
    }

    fn condition(&mut self, ctx: &MetricContext, key: char) -> bool {
        match self.history.last() {
            Some(prev) => ctx.hand(prev) != ctx.hand(key),
            None => false,
        }
    }

    fn on_true(&mut self, _ctx: &MetricContext, key: char) {
        self.hand_switches += 1;
        self.history.push(key);
    }

    fn on_false(&mut self, _ctx: &MetricContext, key: char) {
        self.history.push(key);
    }

    fn report(&self) -> Report {
        Report::new(
            "Hand Alternation",
            "Counts the times each successive key switches hands",
            vec![("switches", self.hand_switches as f64)],
        )
    }
}

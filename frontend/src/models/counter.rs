use crate::utils::format::{parse_int_prefix, round_half_up};

/// Linear ramp from 0 to `target` in a fixed number of ticks.
///
/// Tick `n` shows `target / steps * n`. Once that reaches or passes the target
/// (or the last step is taken) the value is clamped and the ramp stops, so a
/// counter never takes more than `steps` ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterRamp {
    target: f64,
    increment: f64,
    steps: u32,
    ticks: u32,
    finished: bool,
}

impl CounterRamp {
    pub fn new(target: i64, steps: u32) -> Self {
        let steps = steps.max(1);
        let target = target as f64;
        Self {
            target,
            increment: target / steps as f64,
            steps,
            ticks: 0,
            finished: false,
        }
    }

    /// Reads a `data-count` attribute; anything unparsable counts to 0.
    pub fn from_attr(attr: Option<&str>, steps: u32) -> Self {
        Self::new(attr.and_then(parse_int_prefix).unwrap_or(0), steps)
    }

    /// Advances one tick and returns the value to display, or `None` once done.
    pub fn tick(&mut self) -> Option<i64> {
        if self.finished {
            return None;
        }
        self.ticks += 1;
        let mut current = self.increment * self.ticks as f64;
        if current >= self.target || self.ticks >= self.steps {
            current = self.target;
            self.finished = true;
        }
        Some(round_half_up(current) as i64)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mut ramp: CounterRamp) -> (Vec<i64>, u32) {
        let mut shown = Vec::new();
        while let Some(v) = ramp.tick() {
            shown.push(v);
        }
        (shown, ramp.ticks())
    }

    #[test]
    fn lands_exactly_on_target() {
        let (shown, ticks) = run(CounterRamp::new(240, 50));
        assert_eq!(shown.last(), Some(&240));
        assert_eq!(ticks, 50);
        assert_eq!(shown[0], 5); // 4.8 rounds up
    }

    #[test]
    fn never_exceeds_step_budget() {
        for target in [1, 7, 33, 98, 240, 1001, 123_457] {
            let (shown, ticks) = run(CounterRamp::new(target, 50));
            assert!(ticks <= 50, "target {} took {} ticks", target, ticks);
            assert_eq!(*shown.last().unwrap(), target);
            assert!(shown.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn stops_after_finishing() {
        let mut ramp = CounterRamp::new(3, 50);
        while ramp.tick().is_some() {}
        assert!(ramp.is_finished());
        assert_eq!(ramp.tick(), None);
    }

    #[test]
    fn zero_and_unparsable_targets_finish_at_once() {
        let (shown, ticks) = run(CounterRamp::from_attr(Some("n/a"), 50));
        assert_eq!(shown, vec![0]);
        assert_eq!(ticks, 1);
        let (shown, _) = run(CounterRamp::from_attr(None, 50));
        assert_eq!(shown, vec![0]);
    }

    #[test]
    fn attribute_prefix_is_used() {
        let (shown, _) = run(CounterRamp::from_attr(Some("85%"), 50));
        assert_eq!(shown.last(), Some(&85));
    }
}

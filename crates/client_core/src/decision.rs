//! Injectable source of the random draws behind the simulated recognition.

use std::collections::VecDeque;

use rand::Rng;

pub trait DecisionSource: Send {
    /// Uniform draw in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// True with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.uniform() < p
    }

    /// Uniform index into a collection of `len` items. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        let idx = (self.uniform() * len as f64).floor() as usize;
        idx.min(len.saturating_sub(1))
    }
}

#[derive(Debug, Default)]
pub struct ThreadRngDecisions;

impl DecisionSource for ThreadRngDecisions {
    fn uniform(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Replays a fixed sequence of draws. Once the sequence runs out the last
/// value repeats.
#[derive(Debug, Clone)]
pub struct ScriptedDecisions {
    queue: VecDeque<f64>,
    last: f64,
}

impl ScriptedDecisions {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            queue: values.into_iter().collect(),
            last: 0.0,
        }
    }

    pub fn always(value: f64) -> Self {
        Self::new([value])
    }
}

impl DecisionSource for ScriptedDecisions {
    fn uniform(&mut self) -> f64 {
        if let Some(next) = self.queue.pop_front() {
            self.last = next;
        }
        self.last
    }
}

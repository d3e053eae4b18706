//! Timed tasks checked once per tick instead of timeout callbacks.

use crate::catalog::Station;

#[derive(Clone, Debug, PartialEq)]
pub struct TimedTask<A> {
    pub due_at_ms: f64,
    pub action: A,
}

/// Pending actions ordered by due time; ties keep scheduling order.
#[derive(Clone, Debug)]
pub struct TaskQueue<A> {
    tasks: Vec<TimedTask<A>>,
}

impl<A> Default for TaskQueue<A> {
    fn default() -> Self {
        Self { tasks: Vec::new() }
    }
}

impl<A> TaskQueue<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_at_ms: f64, action: A) {
        let at = self.tasks.partition_point(|t| t.due_at_ms <= due_at_ms);
        self.tasks.insert(at, TimedTask { due_at_ms, action });
    }

    /// Remove and return every task due at or before `now_ms`, earliest first.
    pub fn drain_due(&mut self, now_ms: f64) -> Vec<A> {
        let due = self.tasks.partition_point(|t| t.due_at_ms <= now_ms);
        self.tasks.drain(..due).map(|t| t.action).collect()
    }

    pub fn cancel_where(&mut self, mut pred: impl FnMut(&A) -> bool) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !pred(&t.action));
        before - self.tasks.len()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Steps of the station roulette after the spin starts.
#[derive(Clone, Debug, PartialEq)]
pub enum RouletteStep {
    /// `Some(n)` shows a number, `None` shows "GO".
    Countdown(Option<u8>),
    Reveal(Box<Station>),
}

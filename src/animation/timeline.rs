/// Keyed, cancellable delayed-event scheduler.
///
/// This is the minimal animation-scheduling surface the effect components
/// need: schedule an event after a delay under a cancellation key, cancel
/// every pending event for a key, and advance time. There is no timeout
/// based cancellation; all cancellation is explicit and immediate.
///
/// `advance` fires due events in deterministic (due time, insertion) order,
/// so identical inputs always replay identically.
#[derive(Clone, Debug)]
pub struct Timeline<K, E> {
    now: f64,
    seq: u64,
    pending: Vec<Scheduled<K, E>>,
}

#[derive(Clone, Debug)]
struct Scheduled<K, E> {
    key: K,
    due: f64,
    seq: u64,
    event: E,
}

impl<K: PartialEq + Copy, E> Timeline<K, E> {
    /// An empty timeline at t = 0.
    pub fn new() -> Self {
        Self {
            now: 0.0,
            seq: 0,
            pending: Vec::new(),
        }
    }

    /// Schedule `event` to fire `delay_secs` from now under `key`.
    /// Non-positive or non-finite delays fire on the next `advance`.
    pub fn schedule(&mut self, key: K, delay_secs: f64, event: E) {
        let delay = if delay_secs.is_finite() {
            delay_secs.max(0.0)
        } else {
            0.0
        };
        self.pending.push(Scheduled {
            key,
            due: self.now + delay,
            seq: self.seq,
            event,
        });
        self.seq += 1;
    }

    /// Drop every pending event scheduled under `key`. Returns how many
    /// were removed.
    pub fn cancel(&mut self, key: K) -> usize {
        let before = self.pending.len();
        self.pending.retain(|s| s.key != key);
        before - self.pending.len()
    }

    /// Drop every pending event regardless of key.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Advance by `dt_secs` and return all events now due, in firing order.
    pub fn advance(&mut self, dt_secs: f64) -> Vec<E> {
        if dt_secs.is_finite() && dt_secs > 0.0 {
            self.now += dt_secs;
        }
        let now = self.now;
        let mut due: Vec<Scheduled<K, E>> = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due <= now {
                due.push(self.pending.swap_remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by(|a, b| {
            a.due
                .partial_cmp(&b.due)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.seq.cmp(&b.seq))
        });
        due.into_iter().map(|s| s.event).collect()
    }

    /// How many events are still scheduled.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Nothing scheduled.
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Accumulated timeline clock, in seconds.
    pub fn now(&self) -> f64 {
        self.now
    }
}

impl<K: PartialEq + Copy, E> Default for Timeline<K, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;

//! Sliding-window rate limiter (per caller IP).

use std::collections::VecDeque;
use std::net::IpAddr;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use dashmap::DashMap;

#[derive(Debug, Default)]
struct Window {
    hits: VecDeque<Instant>,
}

impl Window {
    fn prune(&mut self, now: Instant, window: Duration) {
        while let Some(first) = self.hits.front() {
            if now.duration_since(*first) >= window {
                self.hits.pop_front();
            } else {
                break;
            }
        }
    }
}

/// Per-caller sliding window: at most `max_hits` requests per `window`.
/// Construct once at startup, then share via AppState.
#[derive(Debug)]
pub struct RateLimiter {
    window: Duration,
    max_hits: usize,
    max_ip_entries: usize,
    per_ip: DashMap<IpAddr, Mutex<Window>>,
}

impl RateLimiter {
    pub fn new(window: Duration, max_hits: usize, max_ip_entries: usize) -> Self {
        Self {
            window,
            max_hits: max_hits.max(1),
            max_ip_entries: max_ip_entries.max(1),
            per_ip: DashMap::new(),
        }
    }

    /// Record a hit for `ip`. `Ok` admits the request; `Err` carries a
    /// retry-after hint in whole seconds (min 1).
    pub fn check(&self, ip: IpAddr) -> Result<(), u64> {
        let now = Instant::now();
        {
            let entry = self.per_ip.entry(ip).or_default();
            // Poisoned mutex means a logic bug; deny instead of panic.
            let Ok(mut w) = entry.value().lock() else {
                return Err(1);
            };
            w.prune(now, self.window);
            if w.hits.len() >= self.max_hits {
                let oldest = w.hits.front().copied().unwrap_or(now);
                let remaining = self.window.saturating_sub(now.duration_since(oldest));
                let secs = (remaining.as_millis() as u64 + 999) / 1000;
                return Err(secs.max(1));
            }
            w.hits.push_back(now);
        }
        self.maybe_trim(now);
        Ok(())
    }

    pub fn tracked_ips(&self) -> usize {
        self.per_ip.len()
    }

    /// Best-effort size control: once the table grows past the ceiling, drop
    /// windows with no hits left inside the current window.
    fn maybe_trim(&self, now: Instant) {
        if self.per_ip.len() <= self.max_ip_entries {
            return;
        }
        self.per_ip.retain(|_, m| match m.get_mut() {
            Ok(w) => {
                w.prune(now, self.window);
                !w.hits.is_empty()
            }
            Err(_) => false,
        });
        tracing::warn!(len = self.per_ip.len(), "api rate-limit ip table trimmed");
    }
}

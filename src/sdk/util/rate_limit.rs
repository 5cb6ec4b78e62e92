use std::num::NonZeroU32;
use std::sync::Arc;
use std::thread;
use governor::clock::{Clock, DefaultClock};
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};

pub type Limiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

pub fn per_minute(requests: u32) -> Limiter {
    let quota = Quota::per_minute(NonZeroU32::new(requests).unwrap_or(NonZeroU32::MIN));
    Arc::new(RateLimiter::direct(quota))
}

/// fueleconomy.gov publishes no quota; stay polite.
pub fn fuel_economy_limiter() -> Limiter {
    per_minute(120)
}

pub fn directions_limiter() -> Limiter {
    per_minute(50)
}

/// Blocks the calling thread until the limiter grants one request.
pub fn wait(limiter: &Limiter) {
    let clock = DefaultClock::default();
    while let Err(not_until) = limiter.check() {
        let delay = not_until.wait_time_from(clock.now());
        log::debug!("Rate limited, sleeping {:?}", delay);
        thread::sleep(delay);
    }
}

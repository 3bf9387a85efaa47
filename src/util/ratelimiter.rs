use std::num::NonZeroUsize;

use tokio::{
    sync::Mutex,
    time::{sleep, Duration, Instant},
};

/// Lets at most `count` callers through per `duration` window.
pub struct Ratelimiter {
    pub duration: Duration,
    pub count: usize,

    value: Mutex<(Instant, usize)>,
}

impl Ratelimiter {
    pub fn new(duration: Duration, count: NonZeroUsize) -> Ratelimiter {
        Ratelimiter {
            duration,
            count: count.get(),
            value: Mutex::new((Instant::now(), 0)),
        }
    }

    /// Waits until the current window has room.
    pub async fn ask(&self) {
        loop {
            let now = Instant::now();

            let left = {
                let mut v = self.value.lock().await;

                if now - v.0 >= self.duration {
                    *v = (now, 1);
                    return;
                } else if v.1 < self.count {
                    v.1 += 1;
                    return;
                }

                self.duration - (now - v.0)
            };

            sleep(left).await;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_window() {
        let two = NonZeroUsize::new(2).unwrap();
        let limiter = Ratelimiter::new(Duration::from_secs(1), two);
        let start = Instant::now();

        limiter.ask().await;
        limiter.ask().await;
        assert_eq!(Instant::now() - start, Duration::ZERO);

        limiter.ask().await;
        assert!(Instant::now() - start >= Duration::from_secs(1));

        limiter.ask().await;
        assert!(Instant::now() - start < Duration::from_secs(2));

        limiter.ask().await;
        assert!(Instant::now() - start >= Duration::from_secs(2));
    }
}

pub mod ratelimiter;

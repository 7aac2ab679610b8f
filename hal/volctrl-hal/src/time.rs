//! Time keeping

/// Monotonic millisecond clock
///
/// Wraps after ~49 days; callers compare with `wrapping_sub`.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

/// Blocking delay
pub trait Delay {
    fn delay_ms(&mut self, ms: u32);
}

/// Milliseconds elapsed from `since` to `now`, tolerating wrap-around
pub fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_wraps() {
        assert_eq!(elapsed_ms(150, 100), 50);
        assert_eq!(elapsed_ms(10, u32::MAX - 9), 20);
    }
}

use heapless::Vec;

use crate::config::MAX_WINDOW_SIZE;

/// Running average over a circular buffer of past smoothed values
///
/// The buffer starts full of zeros and the average always divides by the
/// window size, so it ramps up from zero while the window fills. A running
/// sum is kept alongside the buffer, making each push O(1).
#[derive(Debug, Clone)]
pub struct RunningAverage {
    buffer: Vec<i32, MAX_WINDOW_SIZE>,
    window_size: usize,
    index: usize,
    sum: i32,
    average: i32,
}

impl RunningAverage {
    /// Create new running average
    ///
    /// window_size must be > 0 and <= MAX_WINDOW_SIZE
    pub fn new(window_size: usize) -> Self {
        debug_assert!(window_size > 0 && window_size <= MAX_WINDOW_SIZE);
        let window_size = window_size.clamp(1, MAX_WINDOW_SIZE);

        let mut buffer = Vec::new();
        for _ in 0..window_size {
            let _ = buffer.push(0);
        }

        Self {
            buffer,
            window_size,
            index: 0,
            sum: 0,
            average: 0,
        }
    }

    /// Overwrite the oldest slot with `value` and return the new average
    pub fn push(&mut self, value: i32) -> i32 {
        self.sum -= self.buffer[self.index];
        self.buffer[self.index] = value;
        self.sum += value;
        self.index = (self.index + 1) % self.window_size;

        self.average = self.sum / self.window_size as i32;
        self.average
    }

    /// Average as of the last push
    pub fn average(&self) -> i32 {
        self.average
    }

    pub fn sum(&self) -> i32 {
        self.sum
    }

    /// Raw slots in storage order (not chronological)
    pub fn values(&self) -> &[i32] {
        &self.buffer
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Reset filter state
    pub fn reset(&mut self) {
        self.index = 0;
        self.sum = 0;
        self.average = 0;
        for val in self.buffer.iter_mut() {
            *val = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramps_up_from_zero() {
        let mut avg = RunningAverage::new(4);

        // [400, 0, 0, 0]
        assert_eq!(avg.push(400), 100);
        // [400, 400, 0, 0]
        assert_eq!(avg.push(400), 200);
    }

    #[test]
    fn circular_buffer_wraps() {
        let mut avg = RunningAverage::new(3);

        avg.push(3);
        avg.push(6);
        avg.push(9);
        let out = avg.push(12);

        // Buffer now contains [12, 6, 9]
        assert_eq!(out, 9);
        assert_eq!(avg.sum(), 27);
        assert_eq!(avg.values(), &[12, 6, 9]);
    }

    #[test]
    fn integer_division_truncates() {
        let mut avg = RunningAverage::new(10);
        assert_eq!(avg.push(59), 5);
    }

    #[test]
    fn reset_clears_buffer() {
        let mut avg = RunningAverage::new(3);

        avg.push(5);
        avg.push(5);
        avg.reset();

        assert_eq!(avg.sum(), 0);
        assert_eq!(avg.average(), 0);
        assert_eq!(avg.push(9), 3);
    }
}

//! Metrics collection and reporting for compression runs.
//!
//! Collected in a plain struct with explicit updates at each pipeline
//! stage; the algorithm is synchronous and single-threaded, so no
//! synchronization is involved. For multi-threaded use, wrap in
//! `Arc<Mutex<Metrics>>`.

use std::time::{Duration, Instant};

/// Counters and timing for one compress or decompress run.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// When the run started
    pub start_time: Instant,

    /// When the run ended (set on completion)
    pub end_time: Option<Instant>,

    /// Bytes read from the input
    pub input_bytes: u64,

    /// Bytes written to the output
    pub output_bytes: u64,

    /// Packed payload bytes inside the container
    pub payload_bytes: u64,

    /// Full serialized container size (header + tree + payload)
    pub container_bytes: u64,
}

impl Metrics {
    /// Create new metrics with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            input_bytes: 0,
            output_bytes: 0,
            payload_bytes: 0,
            container_bytes: 0,
        }
    }

    /// Mark the run as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Compression ratio (container / input). Returns 0.0 with no input.
    pub fn compression_ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.container_bytes as f64 / self.input_bytes as f64
        }
    }

    /// Fraction of input size saved by compression.
    pub fn space_saving(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            1.0 - self.compression_ratio()
        }
    }

    /// Throughput in input bytes per second.
    pub fn throughput_bps(&self) -> f64 {
        let duration_secs = self.duration().as_secs_f64();
        if duration_secs == 0.0 {
            0.0
        } else {
            self.input_bytes as f64 / duration_secs
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Run Summary ===");
        println!("Duration: {} ms", self.duration().as_millis());
        println!("Input:  {} bytes", self.input_bytes);
        println!("Output: {} bytes", self.output_bytes);
        if self.container_bytes > 0 {
            println!("Payload: {} bytes", self.payload_bytes);
            println!("Container: {} bytes", self.container_bytes);
            println!("Ratio: {:.1}%", self.compression_ratio() * 100.0);
            println!("Space saving: {:.1}%", self.space_saving() * 100.0);
        }
        println!("Throughput: {:.0} bytes/s", self.throughput_bps());
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_math() {
        let mut metrics = Metrics::new();
        metrics.input_bytes = 1000;
        metrics.container_bytes = 400;
        assert!((metrics.compression_ratio() - 0.4).abs() < 1e-9);
        assert!((metrics.space_saving() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_zero_input_is_not_a_division() {
        let metrics = Metrics::new();
        assert_eq!(metrics.compression_ratio(), 0.0);
        assert_eq!(metrics.space_saving(), 0.0);
    }

    #[test]
    fn test_duration_freezes_on_complete() {
        let mut metrics = Metrics::new();
        metrics.complete();
        let first = metrics.duration();
        let second = metrics.duration();
        assert_eq!(first, second);
    }
}

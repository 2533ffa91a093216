//! Benchmark utilities and performance testing
//!
//! Simple `Instant`-based timing of each parser against the equivalent
//! `str::parse` / `from_str_radix` call. Only available with the std feature.

#[cfg(feature = "std")]
use std::time::{Duration, Instant};

use crate::error::Result;
use crate::{base10, base10_64, base16};

/// Inputs covering the common shapes: short, long, boundary, leading zeros
pub const DECIMAL_INPUTS: &[&str] = &[
    "0",
    "100",
    "429495",
    "+429495",
    "-429495",
    "2147483647",
    "-2147483648",
    "00000000000000000000000000000001",
];

/// Inputs for the 64-bit parsers
pub const DECIMAL_64_INPUTS: &[&str] = &[
    "0",
    "100",
    "4294967295",
    "9223372036854775807",
    "-9223372036854775808",
    "0000000000000000000000000000000000000000000000000000000000000001",
];

/// Inputs for the hex parsers
pub const HEX_INPUTS: &[&str] = &["0", "f", "ff", "fff", "ffff", "abcdef12", "00000000ffff"];

/// Timing of one parser over a batch of inputs
#[derive(Debug, Clone)]
pub struct BenchStats {
    /// Parses performed
    pub parses: usize,
    /// Wall time for the whole batch
    pub elapsed: Duration,
}

impl BenchStats {
    /// Stats for `parses` calls that took `elapsed` in total
    pub fn new(parses: usize, elapsed: Duration) -> Self {
        Self { parses, elapsed }
    }

    /// Mean nanoseconds per parse, 0 for an empty batch
    pub fn ns_per_parse(&self) -> f64 {
        if self.parses == 0 {
            return 0.0;
        }
        self.elapsed.as_nanos() as f64 / self.parses as f64
    }

    /// Millions of parses per second, 0 when nothing was timed
    pub fn mparses_per_sec(&self) -> f64 {
        let ns = self.elapsed.as_nanos();
        if ns == 0 {
            return 0.0;
        }
        self.parses as f64 * 1_000.0 / ns as f64
    }
}

#[cfg(feature = "std")]
impl std::fmt::Display for BenchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>6.2} ns/parse, {:>7.1} M parses/s ({} parses)",
            self.ns_per_parse(),
            self.mparses_per_sec(),
            self.parses
        )
    }
}

/// Time `count` rounds of `parse` over every input
///
/// Every input must parse; the first failure is returned.
#[cfg(feature = "std")]
pub fn bench_inputs<T, E>(
    inputs: &[&str],
    count: usize,
    parse: impl Fn(&str) -> core::result::Result<T, E>,
) -> core::result::Result<BenchStats, E> {
    let start = Instant::now();

    for _ in 0..count {
        for &input in inputs {
            let value = parse(std::hint::black_box(input))?;
            std::hint::black_box(value);
        }
    }

    let duration = start.elapsed();
    Ok(BenchStats::new(count * inputs.len(), duration))
}

/// Benchmark the 32-bit signed decimal parser
#[cfg(feature = "std")]
pub fn bench_i32(count: usize) -> Result<BenchStats> {
    bench_inputs(DECIMAL_INPUTS, count, |s| base10::i32::<i32>(s))
}

/// Benchmark the 64-bit signed decimal parser
#[cfg(feature = "std")]
pub fn bench_i64(count: usize) -> Result<BenchStats> {
    bench_inputs(DECIMAL_64_INPUTS, count, |s| base10_64::i64(s))
}

/// Benchmark the 32-bit hex parser
#[cfg(feature = "std")]
pub fn bench_hex_u32(count: usize) -> Result<BenchStats> {
    bench_inputs(HEX_INPUTS, count, |s| base16::u32::<u32>(s))
}

/// Run simple performance test suite
#[cfg(feature = "std")]
pub fn run_perf_test() -> core::result::Result<(), std::boxed::Box<dyn std::error::Error>> {
    std::println!("parseint Performance Test Suite");
    std::println!("===============================");

    const TEST_COUNT: usize = 100_000;

    std::println!("\nTesting with {} rounds...", TEST_COUNT);

    let ours = bench_i32(TEST_COUNT)?;
    let std_parse = bench_inputs(DECIMAL_INPUTS, TEST_COUNT, |s| s.parse::<i32>())?;
    std::println!("i32 parseint: {}", ours);
    std::println!("i32 std:      {}", std_parse);

    let ours = bench_i64(TEST_COUNT)?;
    let std_parse = bench_inputs(DECIMAL_64_INPUTS, TEST_COUNT, |s| s.parse::<i64>())?;
    std::println!("i64 parseint: {}", ours);
    std::println!("i64 std:      {}", std_parse);

    let ours = bench_hex_u32(TEST_COUNT)?;
    let std_parse = bench_inputs(HEX_INPUTS, TEST_COUNT, |s| u32::from_str_radix(s, 16))?;
    std::println!("hex u32 parseint: {}", ours);
    std::println!("hex u32 std:      {}", std_parse);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    #[cfg(feature = "std")]
    fn test_bench_stats() {
        let stats = BenchStats::new(1000, Duration::from_nanos(25_000));
        assert_eq!(stats.parses, 1000);
        assert!((stats.ns_per_parse() - 25.0).abs() < 1e-9);
        assert!((stats.mparses_per_sec() - 40.0).abs() < 1e-9);
        assert!(stats.to_string().contains("ns/parse"));
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_bench_stats_empty() {
        let stats = BenchStats::new(0, Duration::ZERO);
        assert_eq!(stats.ns_per_parse(), 0.0);
        assert_eq!(stats.mparses_per_sec(), 0.0);
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_bench_inputs_all_parse() {
        let stats = bench_i32(10).unwrap();
        assert_eq!(stats.parses, 10 * DECIMAL_INPUTS.len());

        let stats = bench_i64(10).unwrap();
        assert_eq!(stats.parses, 10 * DECIMAL_64_INPUTS.len());

        let stats = bench_hex_u32(10).unwrap();
        assert_eq!(stats.parses, 10 * HEX_INPUTS.len());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_std_accepts_same_inputs() {
        assert!(bench_inputs(DECIMAL_INPUTS, 1, |s| s.parse::<i32>()).is_ok());
        assert!(bench_inputs(DECIMAL_64_INPUTS, 1, |s| s.parse::<i64>()).is_ok());
        assert!(bench_inputs(HEX_INPUTS, 1, |s| u32::from_str_radix(s, 16)).is_ok());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_bench_inputs_reports_failure() {
        let result = bench_inputs(&["12", "x"], 1, |s| base10_64::u64(s));
        assert_eq!(result.unwrap_err(), crate::Error::Syntax);
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_run_perf_test() {
        run_perf_test().unwrap();
    }
}

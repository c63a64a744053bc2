//! Benchmark configuration

/// Shape of the keys fed to a benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPattern {
    /// Uniform random keys, mostly distinct
    Random,
    /// Keys in ascending order, the worst case for an unbalanced tree
    Sequential,
    /// Random keys from a small domain, so most keys repeat
    Duplicates,
}

impl KeyPattern {
    pub const ALL: [KeyPattern; 3] = [
        KeyPattern::Random,
        KeyPattern::Sequential,
        KeyPattern::Duplicates,
    ];
}

impl std::fmt::Display for KeyPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyPattern::Random => write!(f, "random"),
            KeyPattern::Sequential => write!(f, "sequential"),
            KeyPattern::Duplicates => write!(f, "duplicates"),
        }
    }
}

/// Configuration for benchmark runs
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Entry counts to benchmark
    pub key_counts: Vec<usize>,
    /// Width of each range scan, in key units
    pub range_width: u64,
    /// Seed for every generated workload
    pub seed: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            key_counts: vec![1_000, 10_000, 100_000],
            range_width: 1_000,
            seed: 0x5eed,
        }
    }
}

impl BenchmarkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quick config with smaller counts for fast testing
    pub fn quick() -> Self {
        Self {
            key_counts: vec![100, 1_000],
            ..Default::default()
        }
    }

    /// Honors `REDBLACK_BENCH_QUICK` so CI can shorten runs. Also installs
    /// the `RUST_LOG`-driven logger on first use.
    pub fn from_env() -> Self {
        let _ = env_logger::try_init();
        if std::env::var_os("REDBLACK_BENCH_QUICK").is_some() {
            log::info!("using quick benchmark configuration");
            Self::quick()
        } else {
            Self::default()
        }
    }
}

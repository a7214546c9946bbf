// src/constant_time/config.rs

// Default configuration with thresholds
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub combined_score_threshold: f64,
    pub num_warmup: usize,
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            combined_score_threshold: 1.8,
            num_warmup: 100,
            num_samples: 25,
            num_iterations: 100,
        }
    }
}

// Builder methods for easy customization
impl TestConfig {
    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.num_warmup = warmup;
        self
    }

    pub fn with_samples_and_iterations(mut self, samples: usize, iterations: usize) -> Self {
        self.num_samples = samples;
        self.num_iterations = iterations;
        self
    }

    pub fn with_combined_score_threshold(mut self, threshold: f64) -> Self {
        self.combined_score_threshold = threshold;
        self
    }
}

// Predefined configurations for the key exchange operations
impl TestConfig {
    /// Decapsulation does a full N_BAR x N_BAR x N product per call, so
    /// fewer iterations per sample are enough.
    pub fn for_decapsulation() -> Self {
        Self::default()
            .with_warmup(20)
            .with_samples_and_iterations(30, 10)
            .with_combined_score_threshold(2.0)
    }
}

//! Accumulators for reading posteriors off a chain.

/// Streaming mean and variance (Welford).
#[derive(Debug, Clone, Default)]
pub struct RunningMean {
    count: u64,
    mean: f64,
    m2: f64,
}

impl RunningMean {
    pub fn new() -> RunningMean {
        RunningMean::default()
    }

    pub fn push(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population variance, zero until two values were pushed.
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / self.count as f64
        }
    }
}

/// Visit counts of each category of a discrete variable.
#[derive(Debug, Clone)]
pub struct CategoryTally {
    counts: Vec<u64>,
    total: u64,
}

impl CategoryTally {
    pub fn new(categories: usize) -> CategoryTally {
        CategoryTally {
            counts: vec![0; categories],
            total: 0,
        }
    }

    /// Count the category `value`; values outside the tally are ignored.
    pub fn record(&mut self, value: f64) {
        if value < 0.0 {
            return;
        }
        if let Some(count) = self.counts.get_mut(value as usize) {
            *count += 1;
            self.total += 1;
        }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn count(&self, cat: usize) -> u64 {
        self.counts.get(cat).copied().unwrap_or(0)
    }

    pub fn frequency(&self, cat: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(cat) as f64 / self.total as f64
    }
}

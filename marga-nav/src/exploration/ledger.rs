//! Route cost versus path gain bookkeeping.
//!
//! Every time the navigator has to drive a multi-leg route to reach its
//! next frontier cell, the route length and the best-path length are
//! recorded. When the recent detours add up to more than the best path has
//! shrunk over the same window (scaled by a multiplier), further mapping is
//! not worth it.

/// History of route costs and best-path lengths, most recent first.
#[derive(Clone, Debug)]
pub struct RouteLedger {
    route_costs: Vec<usize>,
    path_lengths: Vec<usize>,
}

impl Default for RouteLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteLedger {
    /// Empty ledger. The cost history starts with a zero seed.
    pub fn new() -> Self {
        Self {
            route_costs: vec![0],
            path_lengths: Vec::new(),
        }
    }

    /// Record the best-path length at a route computation.
    pub fn record_path_len(&mut self, len: usize) {
        self.path_lengths.insert(0, len);
    }

    /// Record the number of legs of a computed route.
    pub fn record_route(&mut self, cost: usize) {
        self.route_costs.insert(0, cost);
    }

    /// Route costs, most recent first (including the seed).
    pub fn route_costs(&self) -> &[usize] {
        &self.route_costs
    }

    /// Best-path lengths, most recent first.
    pub fn path_lengths(&self) -> &[usize] {
        &self.path_lengths
    }

    /// Routes recorded, excluding the seed.
    pub fn routes(&self) -> usize {
        self.route_costs.len() - 1
    }

    /// Do the last `window - 1` routes cost more than `multiplier` times the
    /// path shortening seen across the window?
    pub fn should_stop(&self, window: usize, multiplier: i64) -> bool {
        if window < 2 || self.route_costs.len() <= window {
            return false;
        }
        let (Some(&oldest), Some(&newest)) =
            (self.path_lengths.get(window - 1), self.path_lengths.first())
        else {
            return false;
        };

        let cost: usize = self.route_costs[..window - 1].iter().sum();
        let gain = (oldest as i64 - newest as i64) * multiplier;
        let stop = cost as i64 > gain;
        if stop {
            tracing::debug!(
                "Route cost {} over last {} routes exceeds gain {}",
                cost,
                window - 1,
                gain
            );
        }
        stop
    }
}

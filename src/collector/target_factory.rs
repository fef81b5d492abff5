//! Call-site counts for one tracked factory, per example group.
//!
//! The hook side reports every call site that built the tracked factory.
//! At the end of a group the collector attaches those call sites to the
//! group result and prints the most frequent ones.

use crate::aggregator::ranking::rank_frequency;
use log::debug;
use std::collections::HashMap;

/// Per-group result the collector enriches
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupResult {
    /// Group identifier, e.g. "spec/models/user_spec.rb:3"
    pub id: String,

    pub description: String,

    /// Seconds spent building the tracked factory in this group
    pub time: f64,

    /// Call sites of the tracked factory, one entry per call
    pub target_calls: Vec<String>,
}

impl GroupResult {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            ..Default::default()
        }
    }
}

/// Collects call sites of a single factory
#[derive(Debug, Clone)]
pub struct TargetFactoryCollector {
    target_factory: String,
    top_count: usize,
    calls: HashMap<String, Vec<String>>,
    times: HashMap<String, f64>,
}

impl TargetFactoryCollector {
    pub fn new(target_factory: impl Into<String>, top_count: usize) -> Self {
        Self {
            target_factory: target_factory.into(),
            top_count,
            calls: HashMap::new(),
            times: HashMap::new(),
        }
    }

    pub fn target_factory(&self) -> &str {
        &self.target_factory
    }

    /// Record one creation of the tracked factory
    ///
    /// Creations of other factories are ignored.
    pub fn record(
        &mut self,
        group_id: &str,
        factory: &str,
        call_site: impl Into<String>,
        seconds: f64,
    ) {
        if factory != self.target_factory {
            return;
        }

        self.calls
            .entry(group_id.to_string())
            .or_default()
            .push(call_site.into());
        *self.times.entry(group_id.to_string()).or_insert(0.0) += seconds;
    }

    /// Attach the group's recorded calls and time to its result
    pub fn populate(&self, data: &mut GroupResult) {
        data.target_calls = self.calls.get(&data.id).cloned().unwrap_or_default();
        data.time = self.times.get(&data.id).copied().unwrap_or(0.0);

        debug!(
            "Group {}: {} calls of {}",
            data.id,
            data.target_calls.len(),
            self.target_factory
        );
    }

    /// Render the group header followed by its most frequent call sites
    ///
    /// ```text
    /// user (spec/models/user_spec.rb:3) – 0.4200s (4 calls)
    ///  ↳ spec/models/user_spec.rb:10 – 3
    ///  ↳ spec/models/user_spec.rb:22 – 1
    /// ```
    pub fn print_group_result(&self, group: &GroupResult) -> String {
        let mut out = format!(
            "{} ({}) – {:.4}s ({} calls)\n",
            group.description,
            group.id,
            group.time,
            group.target_calls.len()
        );

        for ranked in rank_frequency(group.target_calls.iter())
            .into_iter()
            .take(self.top_count)
        {
            out.push_str(&format!(" ↳ {} – {}\n", ranked.key, ranked.weight));
        }

        out
    }
}

//! Snapshot record definitions.
//!
//! These are the records the instrumentation side hands over at the end of a
//! run. Both are validated at construction, whether built in code or
//! deserialized, so downstream code never sees a record breaking them.

use crate::utils::error::SnapshotError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-factory invocation statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFactoryStat", into = "RawFactoryStat")]
pub struct FactoryStat {
    name: String,
    total_count: u64,
    top_level_count: u64,
    total_time: f64,
    top_level_time: f64,
}

/// Unvalidated wire shape of [`FactoryStat`]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawFactoryStat {
    name: String,
    total_count: u64,
    top_level_count: u64,
    total_time: f64,
    top_level_time: f64,
}

impl FactoryStat {
    /// Build a stat, checking the count and time invariants
    ///
    /// # Errors
    /// * `SnapshotError::InvalidStat` - empty name, more top-level creations
    ///   than creations, negative or non-finite times, or more top-level
    ///   time than total time
    pub fn new(
        name: impl Into<String>,
        total_count: u64,
        top_level_count: u64,
        total_time: f64,
        top_level_time: f64,
    ) -> Result<Self, SnapshotError> {
        let name = name.into();
        let invalid = |reason: String| SnapshotError::InvalidStat {
            name: name.clone(),
            reason,
        };

        if name.is_empty() {
            return Err(invalid("name is empty".to_string()));
        }
        if top_level_count > total_count {
            return Err(invalid(format!(
                "top_level_count {} exceeds total_count {}",
                top_level_count, total_count
            )));
        }
        for (field, value) in [("total_time", total_time), ("top_level_time", top_level_time)] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!("{} must be a non-negative number (got {})", field, value)));
            }
        }
        // -0.0 would sort below 0.0 under total_cmp
        let (total_time, top_level_time) = (total_time + 0.0, top_level_time + 0.0);
        if top_level_time > total_time {
            return Err(invalid(format!(
                "top_level_time {} exceeds total_time {}",
                top_level_time, total_time
            )));
        }

        Ok(Self {
            name,
            total_count,
            top_level_count,
            total_time,
            top_level_time,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn top_level_count(&self) -> u64 {
        self.top_level_count
    }

    /// Seconds spent in all creations of this factory
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Seconds spent in creations not nested in another factory
    pub fn top_level_time(&self) -> f64 {
        self.top_level_time
    }

    /// Seconds per 1000 top-level creations, 0 when there were none
    pub fn time_per_thousand(&self) -> f64 {
        if self.top_level_count == 0 {
            0.0
        } else {
            1000.0 * self.top_level_time / self.top_level_count as f64
        }
    }
}

impl TryFrom<RawFactoryStat> for FactoryStat {
    type Error = SnapshotError;

    fn try_from(raw: RawFactoryStat) -> Result<Self, Self::Error> {
        Self::new(
            raw.name,
            raw.total_count,
            raw.top_level_count,
            raw.total_time,
            raw.top_level_time,
        )
    }
}

impl From<FactoryStat> for RawFactoryStat {
    fn from(stat: FactoryStat) -> Self {
        Self {
            name: stat.name,
            total_count: stat.total_count,
            top_level_count: stat.top_level_count,
            total_time: stat.total_time,
            top_level_time: stat.top_level_time,
        }
    }
}

/// Factory names active when a nested creation happened, plus the call site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStackSample", into = "RawStackSample")]
pub struct StackSample {
    stack: Vec<String>,
    location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawStackSample {
    stack: Vec<String>,
    location: String,
}

impl StackSample {
    /// Build a sample, rejecting empty stacks, empty names and empty locations
    pub fn new<I, S>(stack: I, location: impl Into<String>) -> Result<Self, SnapshotError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let location = location.into();
        let stack: Vec<String> = stack.into_iter().map(Into::into).collect();
        let invalid = |reason: &str| SnapshotError::InvalidStack {
            location: location.clone(),
            reason: reason.to_string(),
        };

        if location.is_empty() {
            return Err(invalid("location is empty"));
        }
        if stack.is_empty() {
            return Err(invalid("stack is empty"));
        }
        if stack.iter().any(|name| name.is_empty()) {
            return Err(invalid("stack contains an empty factory name"));
        }

        Ok(Self { stack, location })
    }

    pub fn stack(&self) -> &[String] {
        &self.stack
    }

    /// Source location, "file:line"
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Number of times `factory` appears in the stack
    pub fn occurrences_of(&self, factory: &str) -> u64 {
        self.stack.iter().filter(|name| *name == factory).count() as u64
    }
}

impl TryFrom<RawStackSample> for StackSample {
    type Error = SnapshotError;

    fn try_from(raw: RawStackSample) -> Result<Self, Self::Error> {
        Self::new(raw.stack, raw.location)
    }
}

impl From<StackSample> for RawStackSample {
    fn from(sample: StackSample) -> Self {
        Self {
            stack: sample.stack,
            location: sample.location,
        }
    }
}

/// Read-only profiling data for one test run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfilingSnapshot {
    #[serde(default)]
    pub stats: Vec<FactoryStat>,

    #[serde(default)]
    pub stacks: Vec<StackSample>,
}

impl ProfilingSnapshot {
    pub fn new(stats: Vec<FactoryStat>, stacks: Vec<StackSample>) -> Self {
        Self { stats, stacks }
    }

    /// True when no factory was ever created during the run
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

/// Snapshot file as written by the instrumentation side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotFile {
    /// When the test run started
    pub started_at: DateTime<Utc>,

    /// When the run finished; absent means "now"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub snapshot: ProfilingSnapshot,
}

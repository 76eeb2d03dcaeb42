// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use clinic_rota_domain::CohortTag;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Represents the entity performing an engine operation.
///
/// An actor is a staff member who has been resolved by the external session
/// collaborator. The engine never authenticates; it attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The organizational role, as a string (e.g. "admin", "worker").
    pub actor_type: String,
    /// Opaque experiment cohort tag, if one was assigned upstream.
    pub cohort: Option<CohortTag>,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The organizational role string
    /// * `cohort` - Optional cohort tag propagated into telemetry
    #[must_use]
    pub const fn new(id: String, actor_type: String, cohort: Option<CohortTag>) -> Self {
        Self {
            id,
            actor_type,
            cohort,
        }
    }
}

/// One telemetry event, emitted per completed engine operation.
///
/// Events carry no domain payload: operation name, wall-clock duration,
/// success flag, and the actor's cohort tag. The monitoring collaborator
/// consumes them; the engine only records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationEvent {
    /// The operation name (e.g. "assign_shift").
    pub operation: String,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
    /// Whether the operation returned a success envelope.
    pub success: bool,
    /// The acting staff member's cohort tag, if any.
    pub cohort: Option<CohortTag>,
}

impl OperationEvent {
    /// Creates a new `OperationEvent`.
    #[must_use]
    pub const fn new(
        operation: String,
        duration_ms: u64,
        success: bool,
        cohort: Option<CohortTag>,
    ) -> Self {
        Self {
            operation,
            duration_ms,
            success,
            cohort,
        }
    }
}

/// Aggregated statistics for one cohort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CohortStats {
    /// Total events recorded for the cohort.
    pub total: usize,
    /// Events with `success == false`.
    pub errors: usize,
    /// Mean duration across the cohort's events, in milliseconds.
    pub avg_duration_ms: u64,
}

/// Recording seam for telemetry events.
///
/// Implementations must not block the operation path; recording an event
/// is an in-memory append or a fire-and-forget hand-off.
pub trait Recorder {
    /// Records one completed-operation event.
    fn record(&mut self, event: OperationEvent);
}

/// In-memory recorder with a bounded buffer.
///
/// Used by the server for the diagnostics surface and by tests to assert
/// on emitted events. Oldest events are dropped once the buffer is full.
#[derive(Debug, Clone)]
pub struct MemoryRecorder {
    events: Vec<OperationEvent>,
    capacity: usize,
}

impl MemoryRecorder {
    /// Default buffer capacity.
    const DEFAULT_CAPACITY: usize = 500;

    /// Creates a recorder with the default capacity.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            events: Vec::new(),
            capacity: Self::DEFAULT_CAPACITY,
        }
    }

    /// Creates a recorder with an explicit capacity.
    #[must_use]
    pub const fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::new(),
            capacity,
        }
    }

    /// Returns the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[OperationEvent] {
        &self.events
    }

    /// Aggregates statistics for the given cohort tag.
    #[must_use]
    pub fn stats_for(&self, cohort: &CohortTag) -> CohortStats {
        let matching: Vec<&OperationEvent> = self
            .events
            .iter()
            .filter(|e| e.cohort.as_ref() == Some(cohort))
            .collect();

        let total: usize = matching.len();
        let errors: usize = matching.iter().filter(|e| !e.success).count();
        let avg_duration_ms: u64 = if total == 0 {
            0
        } else {
            matching.iter().map(|e| e.duration_ms).sum::<u64>() / total as u64
        };

        CohortStats {
            total,
            errors,
            avg_duration_ms,
        }
    }
}

impl Default for MemoryRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Recorder for MemoryRecorder {
    fn record(&mut self, event: OperationEvent) {
        if self.events.len() >= self.capacity {
            self.events.remove(0);
        }
        self.events.push(event);
    }
}

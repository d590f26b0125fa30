use crate::config::GateConfig;
use crate::jobs::{DispatchRef, Job};
use crate::rules::UnknownModePolicy;

use super::engine::Gate;

/// Builder for constructing a [`Gate`] with custom configuration.
pub struct GateBuilder<J: Job> {
    job: J,
    dispatch: DispatchRef<J::Args>,
    config: GateConfig,
}

impl<J: Job> GateBuilder<J> {
    /// Creates a new builder with default configuration.
    pub fn new(job: J, dispatch: DispatchRef<J::Args>) -> Self {
        Self {
            job,
            dispatch,
            config: GateConfig::default(),
        }
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: GateConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the event bus capacity.
    pub fn with_bus_capacity(mut self, capacity: usize) -> Self {
        self.config.bus_capacity = capacity;
        self
    }

    /// Sets how rules with an unrecognized mode are handled.
    pub fn with_unknown_mode(mut self, policy: UnknownModePolicy) -> Self {
        self.config.unknown_mode = policy;
        self
    }

    /// Builds the gate.
    pub fn build(self) -> Gate<J> {
        Gate::from_parts(self.job, self.dispatch, self.config)
    }
}

//! Serializable copy of a trained agent.
//!
//! The crate never touches the filesystem. A caller that wants to keep an
//! agent around takes a snapshot and stores the bytes wherever it likes.

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::config::AgentConfig;
use super::learner::NimAgent;
use super::q_table::QTable;

/// Hyperparameters and learned values of an agent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub config: AgentConfig,
    pub q: QTable,
}

impl AgentSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by [`AgentSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Rebuild the agent, re-validating its hyperparameters.
    pub fn into_agent(self) -> Result<NimAgent> {
        NimAgent::with_table(self.config, self.q)
    }
}

impl From<&NimAgent> for AgentSnapshot {
    fn from(agent: &NimAgent) -> Self {
        Self {
            config: *agent.config(),
            q: agent.q_table().clone(),
        }
    }
}

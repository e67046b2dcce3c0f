#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use assets::*;
pub use chat::*;
pub use error::*;
pub use flow::*;
pub use loading::*;
pub use sudoku::*;
pub use timeline::*;
pub use transition::*;
pub use types::*;

mod assets;
mod chat;
mod error;
mod flow;
mod loading;
mod sudoku;
mod timeline;
mod transition;
mod types;

/// Everything the host can tune about a run of the flow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Who the whole thing is addressed to.
    pub recipient: alloc::string::String,
    pub variant: FlowVariant,
    pub policy: EntryPolicy,
    /// Settle time between a grid mutation and the completion check.
    pub check_debounce_ms: u32,
    pub score_base: u32,
}

impl FlowConfig {
    pub const DEFAULT_RECIPIENT: &'static str = "Fred";
    pub const DEFAULT_CHECK_DEBOUNCE_MS: u32 = 200;
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            recipient: Self::DEFAULT_RECIPIENT.into(),
            variant: Default::default(),
            policy: Default::default(),
            check_debounce_ms: Self::DEFAULT_CHECK_DEBOUNCE_MS,
            score_base: 0,
        }
    }
}

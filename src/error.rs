use std::io;

use thiserror::Error;

use crate::TermInt;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal error while trying to {action}")]
    Terminal {
        action: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("terminal reported an unusable size of {width}x{height}")]
    EmptyField { width: TermInt, height: TermInt },

    #[error("input and tick sources both closed")]
    SourcesClosed,
}

impl GameError {
    pub fn terminal(action: &'static str) -> impl FnOnce(io::Error) -> GameError {
        move |source| GameError::Terminal { action, source }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;

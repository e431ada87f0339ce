use serde::{Serialize, Serializer};
use thiserror::Error;

/// Why a transcript could not be turned into a usable session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    #[error("Input text is empty.")]
    EmptyInput,

    #[error(
        "Could not parse transcript. Please ensure it contains clear speaker roles (e.g., 'User:' and 'AI:')."
    )]
    NoRecognizableTurns,
}

impl Serialize for SegmentError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A session was rejected; no statistics or score were computed.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("transcript rejected: {}", join_messages(.errors))]
pub struct SessionRejected {
    pub errors: Vec<SegmentError>,
}

impl SessionRejected {
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

fn join_messages(errors: &[SegmentError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

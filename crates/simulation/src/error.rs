use keyo_ports::RouteError;
use thiserror::Error;

/// Failures while building a session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Invalid route network: {0}")]
    RouteNetwork(#[from] RouteError),

    #[error("Resource catalog is empty")]
    EmptyCatalog,

    #[error("Invalid player setup: {0}")]
    InvalidPlayer(String),
}

pub type Result<T> = std::result::Result<T, SimulationError>;

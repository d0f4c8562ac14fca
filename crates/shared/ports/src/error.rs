use keyo_core::{LocationId, Price, Quantity, Weight};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-checkable reason attached to every failed or empty outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    ResourceNotFound,
    InvalidQuantity,
    InsufficientFunds,
    InsufficientCapacity,
    InsufficientInventory,
    RouteNotFound,
    InvalidEdge,
    NoCapacityAvailable,
}

impl ReasonCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::ResourceNotFound => "RESOURCE_NOT_FOUND",
            ReasonCode::InvalidQuantity => "INVALID_QUANTITY",
            ReasonCode::InsufficientFunds => "INSUFFICIENT_FUNDS",
            ReasonCode::InsufficientCapacity => "INSUFFICIENT_CAPACITY",
            ReasonCode::InsufficientInventory => "INSUFFICIENT_INVENTORY",
            ReasonCode::RouteNotFound => "ROUTE_NOT_FOUND",
            ReasonCode::InvalidEdge => "INVALID_EDGE",
            ReasonCode::NoCapacityAvailable => "NO_CAPACITY_AVAILABLE",
        }
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rejections of a player buy or sell
///
/// A rejected trade leaves player and market untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TradeError {
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Quantity must be at least 1")]
    InvalidQuantity,

    #[error("Insufficient funds: need {required}, have {available}")]
    InsufficientFunds { required: Price, available: Price },

    #[error("Insufficient capacity: need {required}kg, {available}kg free")]
    InsufficientCapacity { required: Weight, available: Weight },

    #[error("Insufficient inventory of {resource}: holding {held}, requested {requested}")]
    InsufficientInventory {
        resource: String,
        held: Quantity,
        requested: Quantity,
    },
}

impl TradeError {
    pub fn code(&self) -> ReasonCode {
        match self {
            TradeError::ResourceNotFound(_) => ReasonCode::ResourceNotFound,
            TradeError::InvalidQuantity => ReasonCode::InvalidQuantity,
            TradeError::InsufficientFunds { .. } => ReasonCode::InsufficientFunds,
            TradeError::InsufficientCapacity { .. } => ReasonCode::InsufficientCapacity,
            TradeError::InsufficientInventory { .. } => ReasonCode::InsufficientInventory,
        }
    }
}

/// Route graph construction and search failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Unknown location: {0}")]
    UnknownLocation(LocationId),

    #[error("No route from {origin} to {destination}")]
    Unreachable {
        origin: LocationId,
        destination: LocationId,
    },

    #[error("Invalid edge {a} <-> {b}: distance {distance} and cost {cost} must be positive")]
    InvalidEdge {
        a: LocationId,
        b: LocationId,
        distance: Decimal,
        cost: Decimal,
    },
}

impl RouteError {
    pub fn code(&self) -> ReasonCode {
        match self {
            RouteError::UnknownLocation(_) | RouteError::Unreachable { .. } => {
                ReasonCode::RouteNotFound
            }
            RouteError::InvalidEdge { .. } => ReasonCode::InvalidEdge,
        }
    }
}

pub type TradeResult<T> = std::result::Result<T, TradeError>;
pub type RouteResult<T> = std::result::Result<T, RouteError>;

mod allocation;
mod player;
mod receipt;
mod resource;
mod side;
mod sort_key;
mod view;

pub use allocation::{Allocation, Offer};
pub use player::Player;
pub use receipt::{TradeId, TradeReceipt};
pub use resource::{LEVEL_MAX, LEVEL_MIN, PRICE_CEILING_RATIO, PRICE_FLOOR_RATIO, Resource};
pub use side::Side;
pub use sort_key::SortKey;
pub use view::ResourceView;

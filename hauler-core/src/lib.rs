pub mod error;
pub mod location;
pub mod order;
pub mod policy;
pub mod repository;
pub mod view;

pub use error::{CreateStage, OrderError};
pub use location::LocationSpec;
pub use order::{CargoSpec, NewOrder, NewOrderRecord, Order, OrderStatus};
pub use policy::TransitionMode;
pub use repository::{CargoRegistrar, LocationResolver, OrderStore};
pub use view::{LocationView, OrderView, OwnerView};

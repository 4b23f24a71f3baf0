#[cfg(feature = "serde-adapters")]
pub mod adapters;

mod builders;
pub use builders::*;

pub mod correction;
pub mod debug;
pub mod deserializers;
mod documents;
pub use documents::*;
pub mod fmt;
pub mod serializers;
mod shapes;
pub use shapes::*;
mod unit;
mod utils;

pub mod validation;

pub use deserializers as de;
pub use serializers as se;

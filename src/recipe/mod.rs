pub mod conversion;
pub mod definition;
pub mod tags;

pub use conversion::*;
pub use definition::*;
pub use tags::*;

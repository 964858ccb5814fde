pub mod collection;
pub mod item;

pub use collection::*;
pub use item::*;

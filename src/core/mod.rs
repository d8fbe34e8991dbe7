pub mod engine;
pub mod guide;
pub mod index;
pub mod normalize;
pub mod table;
pub mod types;

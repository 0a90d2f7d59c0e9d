pub mod general;
pub mod mix;
pub mod secondary;

pub use general::resolve_general;
pub use secondary::resolve_secondary;

//! Command implementations.

pub mod analyze;
pub mod relationships;
pub mod verify;

pub use self::analyze::execute_analyze;
pub use self::relationships::execute_relationships;
pub use self::verify::execute_verify;

pub mod commitment;

// Re-export
pub use self::commitment::Pedersen;

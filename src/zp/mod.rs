pub mod constants;
pub mod group;

// Re-export
pub use self::group::ZpGroup;

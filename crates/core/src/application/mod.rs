// Application Layer - Composed root

pub mod computer;

// Re-exports
pub use computer::Computer;

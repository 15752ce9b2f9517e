//! Storage layer: in-memory reference implementation of the
//! persistence collaborator, plus the per-user scoped facade.

pub mod scoped;
pub mod store;

pub use scoped::ScopedStore;
pub use store::Store;

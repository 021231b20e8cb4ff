pub mod pet_store;

// Re-export key types for convenience
pub use pet_store::PetStoreService;

/// File loading.
pub mod loader;

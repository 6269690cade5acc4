// src/application/ports/mod.rs
pub mod security;
pub mod storage;
pub mod time;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type TokenVerifierPort = dyn security::TokenVerifier;
pub type BlobStorePort = dyn storage::BlobStore;
pub type ClockPort = dyn time::Clock;
pub type SlugGeneratorPort = dyn util::SlugGenerator;

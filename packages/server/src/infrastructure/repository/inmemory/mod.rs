pub mod world;

pub use world::InMemoryWorldRepository;

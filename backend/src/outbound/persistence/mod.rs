//! Record-store adapters implementing the domain's driven port.

pub mod memory;

pub use memory::MemoryCarRepository;

pub mod assembler;
mod slots;

pub use assembler::generate;

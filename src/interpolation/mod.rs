pub mod arithmetic;
pub mod errors;
pub mod sequence;
pub mod formula;
pub use sequence::Sequence;

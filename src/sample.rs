//! Struct `Sample` represents a batch of binary examples.

// Provides `Binary` and `DataPoint`.
pub(crate) mod data_point;
// Provides sample struct.
pub(crate) mod sample_struct;

// Provides a struct that reads a file.
pub(crate) mod sample_reader;


pub use data_point::{Binary, DataPoint};
pub use sample_reader::SampleReader;
pub use sample_struct::Sample;

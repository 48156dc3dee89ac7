pub mod graph;
pub mod look;
pub mod ring_buffer;

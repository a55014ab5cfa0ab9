//! Encoding pipeline: arrays are classified into a layout strategy, rendered
//! through the primitive formatters, and assembled by the line writer.

pub mod encoders;
pub mod normalize;
pub mod primitives;
pub mod writer;

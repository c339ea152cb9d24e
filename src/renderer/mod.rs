//! WebGPU rendering module
//!
//! Each frame the world is tessellated into a triangle list in screen pixels
//! and drawn in a single pass with alpha blending.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, pixel_to_ndc};
pub use scene::build_frame;
pub use vertex::Vertex;

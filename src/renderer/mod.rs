//! Rendering
//!
//! `draw_frame` turns game state into circle draw calls on any
//! [`RenderSurface`]. The WebGPU surface renders them with SDFs in the
//! fragment shader.

pub mod error;
pub mod scene;
pub mod sdf_pipeline;
pub mod surface;

pub use error::RenderError;
pub use scene::draw_frame;
pub use sdf_pipeline::SdfRenderState;
pub use surface::{DrawCommand, DrawList, RenderSurface, Rgba, colors};

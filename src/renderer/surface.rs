//! Draw surface interface
//!
//! The game only ever clears the surface and draws filled circles, some
//! with an outline.

use glam::Vec2;

/// Linear RGBA color
pub type Rgba = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Rgba;

    /// Hot pink (#ff69b4), flower center and petal outline
    pub const FLOWER: Rgba = [1.0, 0.412, 0.706, 1.0];
    pub const PETAL: Rgba = [1.0, 1.0, 1.0, 1.0];
    pub const MONSTER: Rgba = [1.0, 0.0, 0.0, 1.0];
    pub const BACKGROUND: Rgba = [0.02, 0.02, 0.05, 1.0];
}

/// Something that can be drawn on
pub trait RenderSurface {
    /// Reset the surface for a new frame
    fn clear(&mut self);
    /// Queue a filled circle, outlined when `stroke` is set
    fn draw_circle(&mut self, center: Vec2, radius: f32, fill: Rgba, stroke: Option<Rgba>);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        fill: Rgba,
        stroke: Option<Rgba>,
    },
}

/// Surface that records draw calls instead of rasterizing them
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Circles queued since the last clear
    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        let start = self
            .commands
            .iter()
            .rposition(|c| *c == DrawCommand::Clear)
            .map(|i| i + 1)
            .unwrap_or(0);
        self.commands[start..].iter()
    }
}

impl RenderSurface for DrawList {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, fill: Rgba, stroke: Option<Rgba>) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill,
            stroke,
        });
    }
}

//! Free-standing text labels placed in world coordinates.

use glam::{DVec2, Vec4};

#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub position: DVec2,
    pub size: f32,
    pub color: Vec4,
    pub size_manual: bool,
    pub color_manual: bool,
}

impl TextLabel {
    pub fn new(text: impl Into<String>, position: DVec2) -> Self {
        Self {
            text: text.into(),
            position,
            size: 10.0,
            color: Vec4::new(0.0, 0.0, 0.0, 1.0),
            size_manual: false,
            color_manual: false,
        }
    }
}

//! Line and symbol styling.

use glam::Vec4;

/// Default per-trace colors, cycled by trace index.
pub const DEFAULT_LINE_COLORS: [Vec4; 6] = [
    Vec4::new(0.0, 0.0, 1.0, 1.0),          // blue
    Vec4::new(1.0, 0.0, 0.0, 1.0),          // red
    Vec4::new(0.0, 0.502, 0.0, 1.0),        // green
    Vec4::new(1.0, 0.0, 1.0, 1.0),          // fuchsia
    Vec4::new(1.0, 0.549, 0.0, 1.0),        // dark orange
    Vec4::new(0.545, 0.271, 0.075, 1.0),    // saddle brown
];

/// Color assigned to a newly created trace slot.
pub fn default_line_color(index: usize) -> Vec4 {
    DEFAULT_LINE_COLORS[index % DEFAULT_LINE_COLORS.len()]
}

/// How a trace's data is turned into marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotMethod {
    #[default]
    Lines,
    Splines,
    Labels,
    Shapes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashStyle {
    #[default]
    Solid,
    Dash,
    Dot,
    DashDot,
    DashDotDot,
}

impl DashStyle {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "solid" => Some(Self::Solid),
            "dash" => Some(Self::Dash),
            "dot" => Some(Self::Dot),
            "dashdot" => Some(Self::DashDot),
            "dashdotdot" => Some(Self::DashDotDot),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: Vec4,
    pub width: f32,
    pub dash: DashStyle,
    pub plot_method: PlotMethod,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Vec4::new(0.0, 0.0, 0.0, 1.0),
            width: 1.0,
            dash: DashStyle::Solid,
            plot_method: PlotMethod::Lines,
        }
    }
}

/// Point marker drawn at each data point of a point series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolKind {
    #[default]
    None,
    Square,
    OpenDiamond,
    Circle,
    OpenTriangle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SymbolStyle {
    pub kind: SymbolKind,
    pub size: f32,
    pub color: Vec4,
}

impl Default for SymbolStyle {
    fn default() -> Self {
        Self {
            kind: SymbolKind::None,
            size: 8.0,
            color: Vec4::new(0.0, 0.0, 0.0, 1.0),
        }
    }
}

/// Looks up a color by its common name. Unknown names return `None`; the
/// caller decides between falling back and skipping.
pub fn color_from_name(name: &str) -> Option<Vec4> {
    let rgb = match name.trim().to_ascii_lowercase().as_str() {
        "black" => [0.0, 0.0, 0.0],
        "white" => [1.0, 1.0, 1.0],
        "red" => [1.0, 0.0, 0.0],
        "green" => [0.0, 0.502, 0.0],
        "lime" => [0.0, 1.0, 0.0],
        "blue" => [0.0, 0.0, 1.0],
        "yellow" => [1.0, 1.0, 0.0],
        "cyan" | "aqua" => [0.0, 1.0, 1.0],
        "magenta" | "fuchsia" => [1.0, 0.0, 1.0],
        "orange" => [1.0, 0.647, 0.0],
        "darkorange" => [1.0, 0.549, 0.0],
        "saddlebrown" => [0.545, 0.271, 0.075],
        "brown" => [0.647, 0.165, 0.165],
        "purple" => [0.502, 0.0, 0.502],
        "gray" | "grey" => [0.502, 0.502, 0.502],
        "silver" => [0.753, 0.753, 0.753],
        "pink" => [1.0, 0.753, 0.796],
        _ => return None,
    };
    Some(Vec4::new(rgb[0], rgb[1], rgb[2], 1.0))
}

/// Unpacks a packed 0xAARRGGBB value.
pub fn color_from_argb(argb: u32) -> Vec4 {
    let a = ((argb >> 24) & 0xff) as f32 / 255.0;
    let r = ((argb >> 16) & 0xff) as f32 / 255.0;
    let g = ((argb >> 8) & 0xff) as f32 / 255.0;
    let b = (argb & 0xff) as f32 / 255.0;
    Vec4::new(r, g, b, a)
}

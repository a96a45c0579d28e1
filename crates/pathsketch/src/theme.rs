use clap::ValueEnum;
use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

/// Fill color for nodes, picked from the control panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NodeColor {
    Red,
    Green,
    #[default]
    Blue,
    Yellow,
}

impl NodeColor {
    pub fn all() -> &'static [NodeColor] {
        &[
            NodeColor::Red,
            NodeColor::Green,
            NodeColor::Blue,
            NodeColor::Yellow,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Yellow => "Yellow",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn color32(&self) -> Color32 {
        match self {
            Self::Red => Color32::from_rgb(0xF0, 0x80, 0x80),    // lightcoral
            Self::Green => Color32::from_rgb(0x90, 0xEE, 0x90),  // lightgreen
            Self::Blue => Color32::from_rgb(0x87, 0xCE, 0xEB),   // skyblue
            Self::Yellow => Color32::from_rgb(0xF0, 0xE6, 0x8C), // khaki
        }
    }
}

impl std::fmt::Display for NodeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub canvas_background: Color32,
    pub edge_color: Color32,
    pub edge_label_color: Color32,
    pub path_color: Color32,
    pub node_outline: Color32,
    pub node_label: Color32,
    pub node_radius: f32,
    pub edge_width: f32,
    pub path_width: f32,
    pub label_size: f32,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::from_rgb(0xF0, 0xF0, 0xF0),
            canvas_background: Color32::from_rgb(0xAD, 0xD8, 0xE6), // lightblue
            edge_color: Color32::from_rgb(0x00, 0x80, 0x00),
            edge_label_color: Color32::from_rgb(0x00, 0x64, 0x00),
            path_color: Color32::from_rgb(0xFF, 0x00, 0x00),
            node_outline: Color32::from_rgb(0x33, 0x33, 0x33),
            node_label: Color32::BLACK,
            node_radius: 16.0,
            edge_width: 2.0,
            path_width: 4.0,
            label_size: 14.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x1E, 0x1E, 0x1E),
            canvas_background: Color32::from_rgb(0x1B, 0x2B, 0x34),
            edge_color: Color32::from_rgb(0x5C, 0xDB, 0x95),
            edge_label_color: Color32::from_rgb(0xA3, 0xE8, 0xB8),
            path_color: Color32::from_rgb(0xFF, 0x5C, 0x5C),
            node_outline: Color32::from_rgb(0xC8, 0xC8, 0xC8),
            node_label: Color32::BLACK,
            node_radius: 16.0,
            edge_width: 2.0,
            path_width: 4.0,
            label_size: 14.0,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.name == "dark"
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), (opacity * 255.0) as u8)
    }
}

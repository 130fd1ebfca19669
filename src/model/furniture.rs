use serde::{Deserialize, Serialize};

/// A piece of furniture as listed in the furniture table
///
/// Dimensions are in centimetres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Furniture {
    pub name: String,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    /// Index into `Home::levels`
    #[serde(default)]
    pub level: Option<usize>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl Furniture {
    pub fn new(name: impl Into<String>, width: f32, depth: f32, height: f32) -> Self {
        Self {
            name: name.into(),
            width,
            depth,
            height,
            level: None,
            visible: true,
        }
    }
}

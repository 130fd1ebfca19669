use printpdf::Rgb;

/// Build an RGB colour from a `(r, g, b)` tuple in 0.0..=1.0
pub fn rgb(color: (f32, f32, f32)) -> Rgb {
    Rgb::new(color.0, color.1, color.2, None)
}

/// Standard colors
pub const BLACK: Rgb = Rgb {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    icc_profile: None,
};

/// Page background
pub const WHITE: Rgb = Rgb {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    icc_profile: None,
};

/// Table grid and banner rules
pub const GRAY: Rgb = Rgb {
    r: 0.5,
    g: 0.5,
    b: 0.5,
    icc_profile: None,
};

/// Furniture table header background
pub const LIGHT_GRAY: Rgb = Rgb {
    r: 0.9,
    g: 0.9,
    b: 0.9,
    icc_profile: None,
};

/// Wall fill in the plan
pub const WALL_COLOR: Rgb = Rgb {
    r: 0.25,
    g: 0.25,
    b: 0.25,
    icc_profile: None,
};

/// Room floor fill in the plan
pub const ROOM_COLOR: Rgb = Rgb {
    r: 0.93,
    g: 0.91,
    b: 0.86,
    icc_profile: None,
};

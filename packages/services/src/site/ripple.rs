/// Bounding box of the clicked button, in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Square ripple circle placed relative to the button's top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

/// Circle covering the whole button, centred on the click point
pub fn ripple_at(rect: ButtonRect, client_x: f64, client_y: f64) -> Ripple {
    let size = rect.width.max(rect.height);
    Ripple {
        size,
        left: client_x - rect.left - size / 2.0,
        top: client_y - rect.top - size / 2.0,
    }
}

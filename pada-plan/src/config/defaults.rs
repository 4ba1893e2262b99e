//! Default value functions for serde deserialization.

pub fn max_iterations() -> usize {
    1_000_000
}

pub fn guide_stride() -> f64 {
    8.0
}

pub fn arrival_tolerance() -> f64 {
    5.0
}

pub fn max_stride() -> f64 {
    40.0
}

pub fn max_turn() -> f64 {
    75f64.to_radians()
}

pub fn min_separation() -> f64 {
    2.0
}

pub fn max_separation() -> f64 {
    10.0
}

pub fn scan_step() -> f64 {
    0.5
}

pub fn foot_length() -> f64 {
    5.0
}

pub fn foot_width() -> f64 {
    3.0
}

pub fn max_stand_angle() -> f64 {
    30f64.to_radians()
}

pub fn decay_ratio() -> f64 {
    1.0 / 3.0
}

pub fn lookahead() -> usize {
    3
}

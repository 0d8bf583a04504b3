// src/noyau/angle.rs
//
// Conversion d’angles degrés <-> radians selon le mode courant.
// Pures, sans échec.

use std::f64::consts::PI;

pub fn to_radians(value: f64, use_radians: bool) -> f64 {
    if use_radians {
        value
    } else {
        value * PI / 180.0
    }
}

pub fn from_radians(value: f64, use_radians: bool) -> f64 {
    if use_radians {
        value
    } else {
        value * 180.0 / PI
    }
}

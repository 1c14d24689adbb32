//! Stacking depth to scroll-speed coefficient mapping.
//!
//! The coefficient is a signed multiplier an external scroll engine applies
//! to the scroll delta when translating a surface. Depths above 1 move
//! opposite to the scroll and appear slower ("deeper"); depths at or below 1
//! move with the scroll ("shallower"). The mapping is a pure function of the
//! depth with no hysteresis.

/// Map a stacking depth to its signed scroll-speed coefficient.
pub fn scroll_speed(z_index: f64) -> f64 {
    if z_index > 1.0 {
        -(0.2 + z_index * 0.1)
    } else {
        0.3 + z_index * 0.15
    }
}

/// The coefficient formatted to two decimal places, the attribute form the
/// external scroll engine reads.
pub fn scroll_speed_attr(z_index: f64) -> String {
    format!("{:.2}", scroll_speed(z_index))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/parallax.rs"]
mod tests;

//! Hydraulic piston
//!
//! Converts hydraulic pressure into force over the piston area, `F = P * A`.

use crate::constants::MAX_EXTENSION;
use crate::math::Real;

#[derive(Clone, Debug, PartialEq)]
pub struct Piston {
    extension: Real,
    max_extension: Real,
    area: Real,
    hydraulic_pressure: Real,
    current_force: Real,
}

impl Piston {
    pub fn new(area: Real) -> Self {
        Self {
            extension: 0.0,
            max_extension: MAX_EXTENSION,
            area,
            hydraulic_pressure: 0.0,
            current_force: 0.0,
        }
    }

    /// Push the rod out by `amount`, stopping at the maximum extension.
    pub fn extend(&mut self, amount: Real) {
        if self.extension >= self.max_extension {
            return;
        }
        self.extension = (self.extension + amount).clamp(0.0, self.max_extension);
    }

    /// Pull the rod back by `amount`, stopping at zero.
    pub fn retract(&mut self, amount: Real) {
        if self.extension <= 0.0 {
            return;
        }
        self.extension = (self.extension - amount).clamp(0.0, self.max_extension);
    }

    pub fn set_hydraulic_pressure(&mut self, pressure: Real) {
        self.hydraulic_pressure = pressure;
        self.current_force = pressure * self.area;
    }

    /// Change the piston area and recompute the force for the held pressure.
    pub fn set_area(&mut self, area: Real) {
        self.area = area;
        self.current_force = self.hydraulic_pressure * area;
    }

    pub fn reset(&mut self) {
        self.extension = 0.0;
        self.set_hydraulic_pressure(0.0);
    }

    pub fn extension(&self) -> Real {
        self.extension
    }

    pub fn max_extension(&self) -> Real {
        self.max_extension
    }

    pub fn area(&self) -> Real {
        self.area
    }

    pub fn hydraulic_pressure(&self) -> Real {
        self.hydraulic_pressure
    }

    pub fn current_force(&self) -> Real {
        self.current_force
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_clamped_for_any_delta() {
        let mut piston = Piston::new(0.01);
        let deltas = [5.0, 500.0, -3.0, 1.0e9, 0.25, 17.0];
        for delta in deltas {
            piston.extend(delta);
            assert!((0.0..=MAX_EXTENSION).contains(&piston.extension()));
            piston.retract(delta * 0.5);
            assert!((0.0..=MAX_EXTENSION).contains(&piston.extension()));
        }
    }

    #[test]
    fn extend_stops_exactly_at_max() {
        let mut piston = Piston::new(0.01);
        for _ in 0..20 {
            piston.extend(15.0);
        }
        assert_eq!(piston.extension(), MAX_EXTENSION);
    }

    #[test]
    fn retract_stops_at_zero() {
        let mut piston = Piston::new(0.01);
        piston.extend(12.0);
        piston.retract(15.0);
        assert_eq!(piston.extension(), 0.0);
        piston.retract(15.0);
        assert_eq!(piston.extension(), 0.0);
    }

    #[test]
    fn force_is_pressure_times_area() {
        let mut piston = Piston::new(0.02);
        for pressure in [0.0, 1.0, 2_000_000.0, 150_000_000.0, 123.456] {
            piston.set_hydraulic_pressure(pressure);
            assert_eq!(piston.current_force(), pressure * 0.02);
            assert_eq!(piston.hydraulic_pressure(), pressure);
        }
    }

    #[test]
    fn changing_area_rescales_force() {
        let mut piston = Piston::new(0.01);
        piston.set_hydraulic_pressure(10_000_000.0);
        piston.set_area(0.05);
        assert_eq!(piston.current_force(), 10_000_000.0 * 0.05);
    }

    #[test]
    fn reset_clears_extension_and_pressure() {
        let mut piston = Piston::new(0.01);
        piston.extend(100.0);
        piston.set_hydraulic_pressure(5.0e6);
        piston.reset();
        assert_eq!(piston.extension(), 0.0);
        assert_eq!(piston.hydraulic_pressure(), 0.0);
        assert_eq!(piston.current_force(), 0.0);
    }
}

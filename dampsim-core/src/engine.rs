use crate::params::PhysicalParameters;

/// Sign of `value`: -1, 0 or 1. Zero stays zero (unlike `f64::signum`) and NaN propagates.
pub fn sign(value: f64) -> f64 {
    if value == 0.0 || value.is_nan() {
        value
    } else {
        value.signum()
    }
}

/// Compute the acceleration of the mass from Hooke's law plus the damping law
///
/// a = -(k/m)·x - (b/m)·sign(v)·|v|^p
///
/// The sign factor keeps the damping force opposed to the motion for even
/// exponents, where |v|^p alone would lose the direction.
pub fn acceleration(
    position: f64,
    velocity: f64,
    params: &PhysicalParameters,
    damping_exponent: f64,
) -> f64 {
    let spring = -(params.spring_constant / params.mass) * position;
    // No damping at rest, whatever the exponent (0^p is inf for p < 0)
    if sign(velocity) == 0.0 {
        return spring;
    }
    let damping = (params.damping_coefficient / params.mass)
        * sign(velocity)
        * velocity.abs().powf(damping_exponent);
    spring - damping
}

/// Kinetic plus spring potential energy: ½mv² + ½kx²
pub fn mechanical_energy(position: f64, velocity: f64, params: &PhysicalParameters) -> f64 {
    0.5 * params.mass * velocity * velocity + 0.5 * params.spring_constant * position * position
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sign_of_zero_is_zero() {
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-0.0), 0.0);
        assert_eq!(sign(3.5), 1.0);
        assert_eq!(sign(-1e-300), -1.0);
        assert!(sign(f64::NAN).is_nan());
    }

    #[test]
    fn test_damping_opposes_motion_for_quadratic_exponent() {
        let params = PhysicalParameters::new(1.0, 0.0, 1.0);

        let moving_right = acceleration(0.0, 2.0, &params, 2.0);
        let moving_left = acceleration(0.0, -2.0, &params, 2.0);

        assert_relative_eq!(moving_right, -4.0);
        assert_relative_eq!(moving_left, 4.0);
    }

    #[test]
    fn test_zero_velocity_has_no_damping_even_with_zero_exponent() {
        let params = PhysicalParameters::new(2.0, 1.0, 5.0);
        // 0^0 == 1, so only sign(0) == 0 keeps the damping term out
        assert_relative_eq!(acceleration(1.0, 0.0, &params, 0.0), -0.5);
    }

    #[test]
    fn test_zero_velocity_has_no_damping_with_negative_exponent() {
        let params = PhysicalParameters::new(1.0, 0.5, 0.25);
        assert_relative_eq!(acceleration(1.0, 0.0, &params, -1.0), -0.5);
        assert_relative_eq!(acceleration(1.0, -0.0, &params, -2.5), -0.5);
    }

    #[test]
    fn test_nan_velocity_still_propagates() {
        let params = PhysicalParameters::new(1.0, 0.5, 0.25);
        assert!(acceleration(1.0, f64::NAN, &params, 1.0).is_nan());
    }

    #[test]
    fn test_energy_at_rest_is_spring_energy() {
        let params = PhysicalParameters::new(1.0, 0.5, 0.25);
        assert_relative_eq!(mechanical_energy(2.0, 0.0, &params), 1.0);
    }
}

//! Darcy friction factor correlations.

/// Reynolds number below which flow is treated as laminar.
pub const LAMINAR_RE: f64 = 2300.0;

const MIN_FRICTION_FACTOR: f64 = 1e-4;

/// Swamee-Jain explicit approximation of Colebrook-White.
///
/// `relative_roughness` is ε/D. Valid for turbulent flow only.
pub fn swamee_jain(relative_roughness: f64, reynolds: f64) -> f64 {
    let a = relative_roughness / 3.7;
    let b = 5.74 / reynolds.powf(0.9);
    let f = 0.25 / (a + b).log10().powi(2);
    f.max(MIN_FRICTION_FACTOR)
}

/// Darcy friction factor: 64/Re when laminar, Swamee-Jain otherwise.
pub fn darcy_friction_factor(relative_roughness: f64, reynolds: f64) -> f64 {
    if reynolds < LAMINAR_RE {
        64.0 / reynolds
    } else {
        swamee_jain(relative_roughness, reynolds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn laminar_branch() {
        assert!((darcy_friction_factor(0.001, 1000.0) - 0.064).abs() < 1e-12);
    }

    #[test]
    fn turbulent_reference_point() {
        // Commercial steel, Re 1e5, e/D 4.6e-4: Moody chart gives about 0.0205.
        let f = swamee_jain(4.6e-4, 1e5);
        assert!((f - 0.0205).abs() < 5e-4, "f = {f}");
    }

    #[test]
    fn rougher_pipe_has_more_friction() {
        assert!(swamee_jain(1e-2, 1e5) > swamee_jain(1e-4, 1e5));
    }
}

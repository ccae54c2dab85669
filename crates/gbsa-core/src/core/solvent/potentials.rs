use super::config::ObcGlobals;

/// Hawkins–Cramer–Truhlar pairwise descreening integral of atom `j` over atom `i`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HctOverlap {
    /// Inverse lower integration limit.
    pub l: f64,
    /// Inverse upper integration limit.
    pub u: f64,
    /// `ln(u / l)`.
    pub log_ratio: f64,
    /// Contribution to atom `i`'s raw descreening sum, before weighting.
    pub term: f64,
}

impl HctOverlap {
    /// Radial factor `t3` of the force back-propagation pass.
    ///
    /// Equals `-1/2 * d(term)/dr` for the analytic part of the integral; the
    /// enclosure correction carries no derivative.
    #[inline]
    pub fn radial_factor(&self, scaled_radius_j: f64, r: f64) -> f64 {
        let r_inverse = 1.0 / r;
        let r2_inverse = r_inverse * r_inverse;
        let l2 = self.l * self.l;
        let u2 = self.u * self.u;
        0.125 * (1.0 + scaled_radius_j * scaled_radius_j * r2_inverse) * (l2 - u2)
            + 0.25 * self.log_ratio * r2_inverse
    }
}

/// Returns `None` when atom `i` lies entirely outside atom `j`'s descreening
/// region (`offset_radius_i >= r + scaled_radius_j`).
#[inline]
pub fn hct_overlap(offset_radius_i: f64, scaled_radius_j: f64, r: f64) -> Option<HctOverlap> {
    let r_scaled_radius_j = r + scaled_radius_j;
    if offset_radius_i >= r_scaled_radius_j {
        return None;
    }

    let r_inverse = 1.0 / r;
    let l = 1.0 / offset_radius_i.max((r - scaled_radius_j).abs());
    let u = 1.0 / r_scaled_radius_j;
    let l2 = l * l;
    let u2 = u * u;
    let log_ratio = (u / l).ln();

    let mut term = l - u
        + 0.25 * r * (u2 - l2)
        + (0.5 * r_inverse * log_ratio)
        + (0.25 * scaled_radius_j * scaled_radius_j * r_inverse) * (l2 - u2);

    // Atom i buried inside j's descreening sphere.
    if offset_radius_i < (scaled_radius_j - r) {
        term += 2.0 * (1.0 / offset_radius_i - l);
    }

    Some(HctOverlap {
        l,
        u,
        log_ratio,
        term,
    })
}

/// Born radius of one atom together with its OBC chain derivative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObcRadius {
    pub born_radius: f64,
    pub chain: f64,
}

/// OBC tanh rescaling of a weighted descreening sum into a Born radius.
#[inline]
pub fn obc_born_radius(
    descreening_sum: f64,
    radius: f64,
    offset_radius: f64,
    obc: &ObcGlobals,
) -> ObcRadius {
    let sum = descreening_sum * (0.5 * offset_radius);
    let sum2 = sum * sum;
    let sum3 = sum * sum2;
    let tanh_sum = (obc.alpha * sum - obc.beta * sum2 + obc.gamma * sum3).tanh();

    let born_radius = 1.0 / (1.0 / offset_radius - tanh_sum / radius);
    let chain = offset_radius * (obc.alpha - 2.0 * obc.beta * sum + 3.0 * obc.gamma * sum2);
    let chain = (1.0 - tanh_sum * tanh_sum) * chain / radius;

    ObcRadius { born_radius, chain }
}

/// Still generalized-Born pair energy and its derivatives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StillPair {
    pub energy: f64,
    /// Scalar applied along the displacement vector to obtain the pair force.
    pub d_energy_dr: f64,
    /// Derivative with respect to `alpha2 = B_i * B_j`.
    pub d_energy_dalpha2: f64,
}

/// `scaled_charge_i` is `pre_factor * q_i`.
#[inline]
pub fn still_pair(scaled_charge_i: f64, charge_j: f64, r2: f64, alpha2: f64) -> StillPair {
    let d = r2 / (4.0 * alpha2);
    let exp_term = (-d).exp();
    let denominator2 = r2 + alpha2 * exp_term;
    let denominator = denominator2.sqrt();

    let energy = (scaled_charge_i * charge_j) / denominator;
    let d_energy_dr = -energy * (1.0 - 0.25 * exp_term) / denominator2;
    let d_energy_dalpha2 = -0.5 * energy * exp_term * (1.0 + d) / denominator2;

    StillPair {
        energy,
        d_energy_dr,
        d_energy_dalpha2,
    }
}

/// ACE nonpolar surface term for one atom.
#[inline]
pub fn ace_surface_term(
    radius: f64,
    born_radius: f64,
    probe_radius: f64,
    surface_area_factor: f64,
    nonpolar_scale_factor: f64,
) -> f64 {
    let r = radius + probe_radius;
    let ratio6 = (radius / born_radius).powi(6);
    nonpolar_scale_factor * surface_area_factor * r * r * ratio6
}

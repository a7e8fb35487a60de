use crate::{config::VELOCITY_EPSILON, core::types::ContactRegime, utils::math::sign};

/// Friction outcome for one contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionResponse {
    pub regime: ContactRegime,
    /// Friction force on the body whose relative velocity was supplied.
    pub force: f64,
}

/// Coulomb friction model deciding between sliding and static lock.
///
/// `relative_velocity` is the velocity of the body minus that of the surface it rests on,
/// and `required_force` is the friction that body would need so that it keeps
/// accelerating exactly like the surface. Both are signed along the motion axis.
///
/// * Sliding (`|v_rel| > VELOCITY_EPSILON`): kinetic friction `mu_k * N` against `v_rel`.
/// * Locked (`|required| <= mu_s * N`, bound inclusive): friction supplies `required`.
/// * Slip onset: friction saturates at the kinetic bound in the direction of `required`,
///   i.e. opposing the net applied force, and the contact is treated as sliding.
///
/// The kinetic coefficient is capped at the static one.
pub fn resolve(
    normal_force: f64,
    relative_velocity: f64,
    required_force: f64,
    mu_static: f64,
    mu_kinetic: f64,
) -> FrictionResponse {
    let normal_force = normal_force.max(0.0);
    let mu_static = mu_static.max(0.0);
    let mut mu_kinetic = mu_kinetic.max(0.0);
    if mu_kinetic > mu_static {
        mu_kinetic = mu_static;
    }

    let max_kinetic = mu_kinetic * normal_force;

    if relative_velocity.abs() > VELOCITY_EPSILON {
        return FrictionResponse {
            regime: ContactRegime::Sliding,
            force: -sign(relative_velocity) * max_kinetic,
        };
    }

    let max_static = mu_static * normal_force;
    if required_force.abs() <= max_static {
        FrictionResponse {
            regime: ContactRegime::Locked,
            force: required_force,
        }
    } else {
        FrictionResponse {
            regime: ContactRegime::SlipOnset,
            force: sign(required_force) * max_kinetic,
        }
    }
}

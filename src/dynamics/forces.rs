use crate::{
    config::VELOCITY_EPSILON,
    core::{
        params::ParameterSet,
        types::{ContactRegime, MotionStatus, ScenarioKind},
    },
    dynamics::friction::{resolve, FrictionResponse},
    utils::math::{crossed_zero, incline_gravity, momentum_weighted},
};

/// Block and plank velocities along the motion axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocities {
    pub v1: f64,
    pub v2: f64,
}

impl Velocities {
    pub fn new(v1: f64, v2: f64) -> Self {
        Self { v1, v2 }
    }
}

/// Accelerations and contact regimes produced by a force model for one set of velocities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dynamics {
    pub a1: f64,
    pub a2: f64,
    /// The block's contact (incline, belt surface, or plank).
    pub primary: FrictionResponse,
    /// Plank-to-ground contact, plank scenario only.
    pub ground: Option<FrictionResponse>,
    pub status: MotionStatus,
}

/// Scenario-specific force model driven by the integrator.
///
/// Every method is a pure function of its arguments so the integrator can evaluate a
/// model more than once per step.
pub trait ForceModel: Send + Sync {
    /// Resolves the contacts for the given velocities and returns the accelerations.
    fn evaluate(&self, params: &ParameterSet, velocities: Velocities) -> Dynamics;

    /// Snaps velocities whose contact passed its lock point during the step.
    fn settle(&self, params: &ParameterSet, before: Velocities, after: Velocities) -> Velocities;

    /// Pins the velocities of locked contacts exactly onto the surface they ride on.
    fn hold(
        &self,
        params: &ParameterSet,
        dynamics: &Dynamics,
        velocities: Velocities,
    ) -> Velocities;
}

/// Returns the force model backing `scenario`.
pub fn model_for(scenario: ScenarioKind) -> &'static dyn ForceModel {
    match scenario {
        ScenarioKind::Single => &InclineModel,
        ScenarioKind::Belt => &BeltModel,
        ScenarioKind::Plank => &PlankModel,
    }
}

/// True when a relative velocity that was clearly sliding reached or passed zero.
fn passed_lock_point(before: f64, after: f64) -> bool {
    before.abs() > VELOCITY_EPSILON && crossed_zero(before, after)
}

/// A block on a fixed incline.
#[derive(Debug, Clone, Copy, Default)]
pub struct InclineModel;

impl ForceModel for InclineModel {
    fn evaluate(&self, params: &ParameterSet, velocities: Velocities) -> Dynamics {
        let g = incline_gravity(params.gravity, params.angle_rad());
        let drive = params.mass * g.along;
        let contact = resolve(
            params.mass * g.normal,
            velocities.v1,
            -drive,
            params.mu_static,
            params.mu_kinetic,
        );

        let (a1, status) = match contact.regime {
            ContactRegime::Locked => (0.0, MotionStatus::AtRest),
            _ => ((drive + contact.force) / params.mass, MotionStatus::Sliding),
        };

        Dynamics {
            a1,
            a2: 0.0,
            primary: contact,
            ground: None,
            status,
        }
    }

    fn settle(&self, _params: &ParameterSet, before: Velocities, after: Velocities) -> Velocities {
        let v1 = if passed_lock_point(before.v1, after.v1) {
            0.0
        } else {
            after.v1
        };
        Velocities::new(v1, 0.0)
    }

    fn hold(
        &self,
        _params: &ParameterSet,
        dynamics: &Dynamics,
        velocities: Velocities,
    ) -> Velocities {
        match dynamics.primary.regime {
            ContactRegime::Locked => Velocities::new(0.0, 0.0),
            _ => velocities,
        }
    }
}

/// A block on a conveyor belt lying on the incline plane and running at constant speed.
#[derive(Debug, Clone, Copy, Default)]
pub struct BeltModel;

impl ForceModel for BeltModel {
    fn evaluate(&self, params: &ParameterSet, velocities: Velocities) -> Dynamics {
        let g = incline_gravity(params.gravity, params.angle_rad());
        let drive = params.mass * g.along;
        // The belt never accelerates, so locking means the block's net force is zero.
        let contact = resolve(
            params.mass * g.normal,
            velocities.v1 - params.belt_velocity,
            -drive,
            params.mu_static,
            params.mu_kinetic,
        );

        let (a1, status) = match contact.regime {
            ContactRegime::Locked => (0.0, MotionStatus::BeltMatched),
            _ => ((drive + contact.force) / params.mass, MotionStatus::Sliding),
        };

        Dynamics {
            a1,
            a2: 0.0,
            primary: contact,
            ground: None,
            status,
        }
    }

    fn settle(&self, params: &ParameterSet, before: Velocities, after: Velocities) -> Velocities {
        let belt = params.belt_velocity;
        let v1 = if passed_lock_point(before.v1 - belt, after.v1 - belt) {
            belt
        } else {
            after.v1
        };
        Velocities::new(v1, belt)
    }

    fn hold(
        &self,
        params: &ParameterSet,
        dynamics: &Dynamics,
        velocities: Velocities,
    ) -> Velocities {
        match dynamics.primary.regime {
            ContactRegime::Locked => Velocities::new(params.belt_velocity, params.belt_velocity),
            _ => velocities,
        }
    }
}

/// A block riding on a free plank that rests on the ground, with an optional pull on
/// the plank.
///
/// The block-plank contact is always resolved before the plank-ground contact. Whether
/// the block locks decides which mass the ground contact has to hold back: the whole
/// stack, or the plank alone with the block's friction reaction added to its load.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlankModel;

impl ForceModel for PlankModel {
    fn evaluate(&self, params: &ParameterSet, velocities: Velocities) -> Dynamics {
        let m1 = params.mass;
        let m2 = params.plank_mass;
        let g = incline_gravity(params.gravity, params.angle_rad());

        let block_normal = m1 * g.normal;
        let ground_normal = m2 * g.normal + block_normal;
        let block_drive = m1 * g.along;
        let plank_drive = m2 * g.along + params.applied_force;
        let relative = velocities.v1 - velocities.v2;

        let block_contact = if relative.abs() <= VELOCITY_EPSILON {
            // Try the stack as one body first; the ground sees the combined load.
            let stack_mass = params.stack_mass();
            let stack_drive = block_drive + plank_drive;
            let stack_velocity = momentum_weighted(m1, velocities.v1, m2, velocities.v2);
            let ground = resolve(
                ground_normal,
                stack_velocity,
                -stack_drive,
                params.ground_mu_static,
                params.ground_mu_kinetic,
            );
            let common = match ground.regime {
                ContactRegime::Locked => 0.0,
                _ => (stack_drive + ground.force) / stack_mass,
            };

            let required = m1 * common - block_drive;
            let contact = resolve(
                block_normal,
                relative,
                required,
                params.mu_static,
                params.mu_kinetic,
            );
            if contact.regime == ContactRegime::Locked {
                let status = match ground.regime {
                    ContactRegime::Locked => MotionStatus::AtRest,
                    _ => MotionStatus::MovingTogether,
                };
                return Dynamics {
                    a1: common,
                    a2: common,
                    primary: contact,
                    ground: Some(ground),
                    status,
                };
            }
            contact
        } else {
            resolve(
                block_normal,
                relative,
                0.0,
                params.mu_static,
                params.mu_kinetic,
            )
        };

        // Block and plank move independently; the plank carries the friction reaction.
        let plank_load = plank_drive - block_contact.force;
        let ground = resolve(
            ground_normal,
            velocities.v2,
            -plank_load,
            params.ground_mu_static,
            params.ground_mu_kinetic,
        );
        let a2 = match ground.regime {
            ContactRegime::Locked => 0.0,
            _ => (plank_load + ground.force) / m2,
        };

        Dynamics {
            a1: (block_drive + block_contact.force) / m1,
            a2,
            primary: block_contact,
            ground: Some(ground),
            status: MotionStatus::Sliding,
        }
    }

    fn settle(&self, params: &ParameterSet, before: Velocities, after: Velocities) -> Velocities {
        let mut settled = after;

        if passed_lock_point(before.v1 - before.v2, after.v1 - after.v2) {
            let common = momentum_weighted(params.mass, after.v1, params.plank_mass, after.v2);
            // A plank the ground held at the start of the step only moves the way the
            // ground let it; the block's overshoot must not drag it the other way.
            let plank_was_held = before.v2.abs() <= VELOCITY_EPSILON;
            let common = if plank_was_held && common * after.v2 <= 0.0 {
                0.0
            } else {
                common
            };
            settled = Velocities::new(common, common);
        }

        if passed_lock_point(before.v2, settled.v2) {
            let together = (settled.v1 - settled.v2).abs() <= VELOCITY_EPSILON;
            settled.v2 = 0.0;
            if together {
                settled.v1 = 0.0;
            }
        }

        settled
    }

    fn hold(
        &self,
        params: &ParameterSet,
        dynamics: &Dynamics,
        velocities: Velocities,
    ) -> Velocities {
        let ground_locked = dynamics
            .ground
            .is_some_and(|ground| ground.regime == ContactRegime::Locked);

        match dynamics.primary.regime {
            ContactRegime::Locked if ground_locked => Velocities::new(0.0, 0.0),
            ContactRegime::Locked if velocities.v1 == velocities.v2 => velocities,
            ContactRegime::Locked => {
                let common = momentum_weighted(
                    params.mass,
                    velocities.v1,
                    params.plank_mass,
                    velocities.v2,
                );
                Velocities::new(common, common)
            }
            _ if ground_locked => Velocities::new(velocities.v1, 0.0),
            _ => velocities,
        }
    }
}

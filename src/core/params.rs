use serde::{Deserialize, Serialize};

use crate::{
    config::{DEFAULT_GRAVITY, MAX_FRICTION_COEFFICIENT},
    core::types::ScenarioKind,
    error::{ParamError, Result},
};

/// Physical constants and initial conditions for one scenario run.
///
/// Fields that a scenario does not use are ignored by the kernel and by validation
/// (for example `plank_mass` outside the plank scenario).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    /// Mass of the block (kg).
    pub mass: f64,
    /// Mass of the plank (kg), plank scenario only.
    pub plank_mass: f64,
    /// Incline angle in degrees. The belt and the plank's ground lie on the same plane.
    pub angle_deg: f64,
    /// Gravitational acceleration magnitude (m/s^2).
    pub gravity: f64,
    /// Static friction coefficient of the block's contact.
    pub mu_static: f64,
    /// Kinetic friction coefficient of the block's contact.
    pub mu_kinetic: f64,
    /// Static friction coefficient between plank and ground.
    pub ground_mu_static: f64,
    /// Kinetic friction coefficient between plank and ground.
    pub ground_mu_kinetic: f64,
    /// Conveyor surface velocity (m/s), belt scenario only.
    pub belt_velocity: f64,
    /// Block velocity at `t = 0` (m/s).
    pub initial_velocity: f64,
    /// Plank velocity at `t = 0` (m/s), plank scenario only.
    pub plank_initial_velocity: f64,
    /// Constant external pull on the plank along the motion axis (N), plank scenario only.
    pub applied_force: f64,
    /// Pacing hint for the frame scheduler. Never alters simulated time.
    pub playback_speed: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            mass: 1.0,
            plank_mass: 2.0,
            angle_deg: 30.0,
            gravity: DEFAULT_GRAVITY,
            mu_static: 0.3,
            mu_kinetic: 0.25,
            ground_mu_static: 0.1,
            ground_mu_kinetic: 0.1,
            belt_velocity: 2.0,
            initial_velocity: 0.0,
            plank_initial_velocity: 0.0,
            applied_force: 0.0,
            playback_speed: 1.0,
        }
    }
}

impl ParameterSet {
    /// Starting parameters offered for each scenario.
    pub fn preset(scenario: ScenarioKind) -> Self {
        match scenario {
            ScenarioKind::Single => Self::default(),
            ScenarioKind::Belt => Self {
                angle_deg: 0.0,
                mu_static: 0.5,
                mu_kinetic: 0.4,
                belt_velocity: 2.0,
                ..Self::default()
            },
            ScenarioKind::Plank => Self {
                angle_deg: 0.0,
                mu_static: 0.4,
                mu_kinetic: 0.3,
                ground_mu_static: 0.05,
                ground_mu_kinetic: 0.05,
                initial_velocity: 4.0,
                ..Self::default()
            },
        }
    }

    pub fn angle_rad(&self) -> f64 {
        self.angle_deg.to_radians()
    }

    /// Combined mass of block and plank.
    pub fn stack_mass(&self) -> f64 {
        self.mass + self.plank_mass
    }

    /// Checks the fields `scenario` reads. Fields belonging to other scenarios are ignored.
    pub fn validate(&self, scenario: ScenarioKind) -> Result<()> {
        let mut finite = vec![
            ("mass", self.mass),
            ("angle_deg", self.angle_deg),
            ("gravity", self.gravity),
            ("mu_static", self.mu_static),
            ("mu_kinetic", self.mu_kinetic),
            ("initial_velocity", self.initial_velocity),
            ("playback_speed", self.playback_speed),
        ];
        match scenario {
            ScenarioKind::Single => {}
            ScenarioKind::Belt => finite.push(("belt_velocity", self.belt_velocity)),
            ScenarioKind::Plank => finite.extend([
                ("plank_mass", self.plank_mass),
                ("ground_mu_static", self.ground_mu_static),
                ("ground_mu_kinetic", self.ground_mu_kinetic),
                ("plank_initial_velocity", self.plank_initial_velocity),
                ("applied_force", self.applied_force),
            ]),
        }
        if let Some(&(field, _)) = finite.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ParamError::NonFinite(field));
        }

        check_mass("mass", self.mass)?;
        check_friction("mu_static", self.mu_static)?;
        check_friction("mu_kinetic", self.mu_kinetic)?;
        if scenario == ScenarioKind::Plank {
            check_mass("plank_mass", self.plank_mass)?;
            check_friction("ground_mu_static", self.ground_mu_static)?;
            check_friction("ground_mu_kinetic", self.ground_mu_kinetic)?;
        }

        if !(0.0..=90.0).contains(&self.angle_deg) {
            return Err(ParamError::InvalidAngle(self.angle_deg));
        }
        if self.gravity < 0.0 {
            return Err(ParamError::NegativeGravity(self.gravity));
        }
        if self.playback_speed <= 0.0 {
            return Err(ParamError::InvalidPlaybackSpeed(self.playback_speed));
        }
        Ok(())
    }
}

fn check_mass(field: &'static str, value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ParamError::NonPositiveMass { field, value })
    }
}

fn check_friction(field: &'static str, value: f64) -> Result<()> {
    if (0.0..=MAX_FRICTION_COEFFICIENT).contains(&value) {
        Ok(())
    } else {
        Err(ParamError::FrictionOutOfRange {
            field,
            value,
            max: MAX_FRICTION_COEFFICIENT,
        })
    }
}

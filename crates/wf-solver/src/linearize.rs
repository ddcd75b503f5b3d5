//! Central-difference linearization of the equations of motion.
//!
//! The nonlinear plant model is perturbed one variable at a time around a
//! resolved operating point, with the induction factor frozen at its
//! equilibrium value, to produce the dense state-space quadruple
//!
//! ```text
//!   δẋ = A δx + B δu
//!   δy = C δx + D δu
//! ```
//!
//! in deviation variables. The perturbation size scales with the magnitude
//! of the variable being perturbed and never drops below [`MIN_STEP`].

use nalgebra::DMatrix;

use crate::equilibrium::OperatingPoint;
use crate::error::SolverResult;
use wf_aero::AirfoilModel;
use wf_model::{
    INPUT_DIM, OUTPUT_DIM, STATE_DIM, TurbineInput, TurbineState, turbine_dynamics,
};
use wf_profile::TurbineProfile;

/// Relative perturbation size for central differences.
pub const RELATIVE_STEP: f64 = 1e-2;

/// Absolute floor on the perturbation size.
pub const MIN_STEP: f64 = 1e-7;

/// Linear state-space model around an equilibrium operating point.
///
/// State order: (β, β̇, x, ẋ, ω_r, ε, ε̇). Input order: (θ, V).
/// Output order: (D_ax, M_β, M_r, P_g, θ, V).
#[derive(Clone, Debug)]
pub struct StateSpaceModel {
    /// State matrix, `STATE_DIM × STATE_DIM`
    pub a: DMatrix<f64>,
    /// Input matrix, `STATE_DIM × INPUT_DIM`
    pub b: DMatrix<f64>,
    /// Output matrix, `OUTPUT_DIM × STATE_DIM`
    pub c: DMatrix<f64>,
    /// Feedthrough matrix, `OUTPUT_DIM × INPUT_DIM`
    pub d: DMatrix<f64>,
    /// Operating point the model was linearized around
    pub operating_point: OperatingPoint,
    /// Equilibrium state vector
    pub state0: TurbineState,
    /// Equilibrium input vector
    pub input0: TurbineInput,
    /// Equilibrium output vector
    pub output0: [f64; OUTPUT_DIM],
}

/// Perturbation size for a variable with equilibrium magnitude `x0`.
fn step_for(x0: f64) -> f64 {
    (RELATIVE_STEP * x0.abs()).max(MIN_STEP)
}

/// Linearize the plant model around `op` with the default perturbation
/// sizing.
pub fn linearize(
    airfoil: &dyn AirfoilModel,
    profile: &TurbineProfile,
    op: &OperatingPoint,
) -> SolverResult<StateSpaceModel> {
    linearize_with(airfoil, profile, op, step_for)
}

/// Linearize with a caller-supplied perturbation sizing rule.
pub fn linearize_with(
    airfoil: &dyn AirfoilModel,
    profile: &TurbineProfile,
    op: &OperatingPoint,
    step: impl Fn(f64) -> f64,
) -> SolverResult<StateSpaceModel> {
    let state0 = TurbineState {
        flap_angle: op.flap_angle,
        flap_rate: 0.0,
        tower_displacement: op.tower_displacement,
        tower_rate: 0.0,
        rotor_speed: op.rotor_speed,
        torsion_angle: op.torsion_angle,
        torsion_rate: 0.0,
    };
    let input0 = TurbineInput {
        pitch_deg: op.pitch_deg,
        wind_speed: op.wind_speed,
    };
    let induction = op.induction;

    let (_, outputs0) = turbine_dynamics(airfoil, profile, &state0, &input0, induction)?;
    let output0 = outputs0.to_array();

    let x0 = state0.to_array();
    let u0 = [input0.pitch_deg, input0.wind_speed];

    let mut a = DMatrix::zeros(STATE_DIM, STATE_DIM);
    let mut c = DMatrix::zeros(OUTPUT_DIM, STATE_DIM);
    for j in 0..STATE_DIM {
        let h = step(x0[j]);

        let mut plus = x0;
        plus[j] += h;
        let (dx_p, y_p) =
            turbine_dynamics(airfoil, profile, &TurbineState::from_array(plus), &input0, induction)?;

        let mut minus = x0;
        minus[j] -= h;
        let (dx_m, y_m) = turbine_dynamics(
            airfoil,
            profile,
            &TurbineState::from_array(minus),
            &input0,
            induction,
        )?;

        let dx_p = dx_p.to_array();
        let dx_m = dx_m.to_array();
        let y_p = y_p.to_array();
        let y_m = y_m.to_array();
        for i in 0..STATE_DIM {
            a[(i, j)] = (dx_p[i] - dx_m[i]) / (2.0 * h);
        }
        for i in 0..OUTPUT_DIM {
            c[(i, j)] = (y_p[i] - y_m[i]) / (2.0 * h);
        }
    }

    let mut b = DMatrix::zeros(STATE_DIM, INPUT_DIM);
    let mut d = DMatrix::zeros(OUTPUT_DIM, INPUT_DIM);
    for j in 0..INPUT_DIM {
        let h = step(u0[j]);

        let mut plus = u0;
        plus[j] += h;
        let input_p = TurbineInput {
            pitch_deg: plus[0],
            wind_speed: plus[1],
        };
        let (dx_p, y_p) = turbine_dynamics(airfoil, profile, &state0, &input_p, induction)?;

        let mut minus = u0;
        minus[j] -= h;
        let input_m = TurbineInput {
            pitch_deg: minus[0],
            wind_speed: minus[1],
        };
        let (dx_m, y_m) = turbine_dynamics(airfoil, profile, &state0, &input_m, induction)?;

        let dx_p = dx_p.to_array();
        let dx_m = dx_m.to_array();
        let y_p = y_p.to_array();
        let y_m = y_m.to_array();
        for i in 0..STATE_DIM {
            b[(i, j)] = (dx_p[i] - dx_m[i]) / (2.0 * h);
        }
        for i in 0..OUTPUT_DIM {
            d[(i, j)] = (y_p[i] - y_m[i]) / (2.0 * h);
        }
    }

    tracing::debug!(
        wind_speed = op.wind_speed,
        "linearized plant model around operating point"
    );

    Ok(StateSpaceModel {
        a,
        b,
        c,
        d,
        operating_point: *op,
        state0,
        input0,
        output0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equilibrium::operating_point;
    use wf_aero::LinearAirfoil;
    use wf_profile::nrel_5mw;

    fn model_at(wind_speed: f64) -> StateSpaceModel {
        let profile = nrel_5mw();
        let airfoil = LinearAirfoil::new(0.1, 0.01).unwrap();
        let op = operating_point(&airfoil, &profile, wind_speed).unwrap();
        linearize(&airfoil, &profile, &op).unwrap()
    }

    #[test]
    fn matrices_have_the_plant_dimensions() {
        let model = model_at(8.0);
        assert_eq!(model.a.shape(), (STATE_DIM, STATE_DIM));
        assert_eq!(model.b.shape(), (STATE_DIM, INPUT_DIM));
        assert_eq!(model.c.shape(), (OUTPUT_DIM, STATE_DIM));
        assert_eq!(model.d.shape(), (OUTPUT_DIM, INPUT_DIM));
    }

    #[test]
    fn kinematic_rows_are_exact_integrators() {
        // β̇, ẋ and ε̇ enter their position rows as identity, independent of
        // the perturbation size, because the relation is exactly linear.
        let model = model_at(8.0);
        assert_eq!(model.a[(0, 1)], 1.0);
        assert_eq!(model.a[(2, 3)], 1.0);
        assert_eq!(model.a[(5, 6)], 1.0);
    }

    #[test]
    fn input_feedthrough_rows_pass_the_inputs_through() {
        // The last two outputs are the inputs themselves.
        let model = model_at(8.0);
        assert!((model.d[(4, 0)] - 1.0).abs() < 1e-9);
        assert!((model.d[(5, 1)] - 1.0).abs() < 1e-9);
        assert_eq!(model.d[(4, 1)], 0.0);
        assert_eq!(model.d[(5, 0)], 0.0);
        for j in 0..STATE_DIM {
            assert_eq!(model.c[(4, j)], 0.0);
            assert_eq!(model.c[(5, j)], 0.0);
        }
    }

    #[test]
    fn linearization_is_deterministic() {
        let first = model_at(8.0);
        let second = model_at(8.0);
        assert_eq!(first.a, second.a);
        assert_eq!(first.b, second.b);
        assert_eq!(first.c, second.c);
        assert_eq!(first.d, second.d);
    }
}

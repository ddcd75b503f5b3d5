use clap::{Parser, Subcommand, ValueEnum};
use nalgebra::DMatrix;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use wf_aero::{AirfoilModel, airfoil_from_def};
use wf_profile::{TurbineProfile, nrel_5mw, profile_from_path};
use wf_sim::{Gust, SimOptions, gust_response};
use wf_solver::{StateSpaceModel, linearize, operating_point};

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Profile(#[from] wf_profile::ProfileError),
    #[error(transparent)]
    Aero(#[from] wf_aero::AeroError),
    #[error(transparent)]
    Solver(#[from] wf_solver::SolverError),
    #[error(transparent)]
    Sim(#[from] wf_sim::SimError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Usage(String),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "wf-cli")]
#[command(about = "windflow CLI - wind turbine rotor modeling tool", long_about = None)]
struct Cli {
    /// Turbine profile YAML file (defaults to the built-in NREL 5MW)
    #[arg(short, long, global = true)]
    profile: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a turbine profile file
    Validate,
    /// Solve the equilibrium operating point at one wind speed
    OperatingPoint {
        /// Wind speed in m/s
        wind: f64,
    },
    /// Sweep equilibrium operating points over a wind speed range
    PowerCurve {
        /// First wind speed in m/s
        #[arg(long, default_value_t = 4.0)]
        min: f64,
        /// Last wind speed in m/s
        #[arg(long, default_value_t = 25.0)]
        max: f64,
        /// Wind speed increment in m/s
        #[arg(long, default_value_t = 0.5)]
        step: f64,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Dimensionless Cp-lambda characteristic at fixed pitch
    CpLambda {
        /// Blade pitch in degrees (defaults to the profile's rated pitch)
        #[arg(long)]
        pitch: Option<f64>,
        /// First tip-speed ratio
        #[arg(long, default_value_t = 3.0)]
        min: f64,
        /// Last tip-speed ratio
        #[arg(long, default_value_t = 12.0)]
        max: f64,
        /// Tip-speed ratio increment
        #[arg(long, default_value_t = 0.25)]
        step: f64,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Linearize the turbine model around an operating point, as JSON
    Linearize {
        /// Wind speed in m/s
        wind: f64,
        /// Output JSON file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Time response of the linear model to a wind gust, as CSV
    GustResponse {
        /// Wind speed in m/s to linearize at
        wind: f64,
        /// Gust shape
        #[arg(long, value_enum, default_value_t = GustShape::Smooth)]
        shape: GustShape,
        /// Gust amplitude in m/s
        #[arg(long, default_value_t = 1.0)]
        amplitude: f64,
        /// Gust duration in seconds (smooth shape)
        #[arg(long, default_value_t = 10.0)]
        duration: f64,
        /// Gust start time in seconds (smooth shape)
        #[arg(long, default_value_t = 5.0)]
        start: f64,
        /// Time step in seconds
        #[arg(long, default_value_t = 0.01)]
        dt: f64,
        /// End time in seconds
        #[arg(long, default_value_t = 60.0)]
        t_end: f64,
        /// Record every N-th step
        #[arg(long, default_value_t = 5)]
        every: usize,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum GustShape {
    /// Sustained wind-speed step at t = 0
    Step,
    /// Smooth 1-cos gust over a finite window
    Smooth,
    /// Sine at the rotor rotation frequency
    Rotational,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let profile = load_profile(cli.profile.as_deref())?;

    match cli.command {
        Commands::Validate => cmd_validate(&profile, cli.profile.as_deref()),
        Commands::OperatingPoint { wind } => cmd_operating_point(&profile, wind),
        Commands::PowerCurve {
            min,
            max,
            step,
            output,
        } => cmd_power_curve(&profile, min, max, step, output.as_deref()),
        Commands::CpLambda {
            pitch,
            min,
            max,
            step,
            output,
        } => cmd_cp_lambda(&profile, pitch, min, max, step, output.as_deref()),
        Commands::Linearize { wind, output } => cmd_linearize(&profile, wind, output.as_deref()),
        Commands::GustResponse {
            wind,
            shape,
            amplitude,
            duration,
            start,
            dt,
            t_end,
            every,
            output,
        } => {
            let opts = SimOptions {
                dt,
                t_end,
                record_every: every,
                ..SimOptions::default()
            };
            cmd_gust_response(
                &profile,
                wind,
                shape,
                amplitude,
                duration,
                start,
                &opts,
                output.as_deref(),
            )
        }
    }
}

fn load_profile(path: Option<&Path>) -> CliResult<TurbineProfile> {
    match path {
        Some(path) => Ok(profile_from_path(path)?),
        None => Ok(nrel_5mw()),
    }
}

fn airfoil_for(profile: &TurbineProfile) -> CliResult<Box<dyn AirfoilModel>> {
    let def = profile
        .airfoil
        .as_ref()
        .ok_or_else(|| CliError::Usage("profile defines no airfoil model".to_string()))?;
    Ok(airfoil_from_def(def)?)
}

fn cmd_validate(profile: &TurbineProfile, path: Option<&Path>) -> CliResult<()> {
    // loading already validated; report what we got
    match path {
        Some(path) => println!("Validating profile: {}", path.display()),
        None => println!("Validating built-in profile"),
    }
    println!("✓ Profile '{}' is valid", profile.name);
    println!("  Blade stations: {}", profile.element_count());
    println!("  Rotor radius:   {} m", profile.turbine.rotor_radius);
    println!(
        "  Rated: V = {} m/s, lambda = {}, pitch = {} deg",
        profile.nominal.wind_speed, profile.nominal.tip_speed_ratio, profile.nominal.pitch_deg
    );
    Ok(())
}

fn cmd_operating_point(profile: &TurbineProfile, wind: f64) -> CliResult<()> {
    let airfoil = airfoil_for(profile)?;
    let op = operating_point(airfoil.as_ref(), profile, wind)?;

    println!("Operating point at V = {} m/s:", wind);
    println!("  Pitch:           {:.4} deg", op.pitch_deg);
    println!("  Rotor speed:     {:.4} rad/s", op.rotor_speed);
    println!("  Generator speed: {:.4} rad/s", op.generator_speed);
    println!("  Induction:       {:.4}", op.induction);
    println!("  Flap angle:      {:.6} rad", op.flap_angle);
    println!("  Tower displ.:    {:.4} m", op.tower_displacement);
    println!("  Torsion angle:   {:.6} rad", op.torsion_angle);
    println!("  Axial force:     {:.1} N", op.axial_force);
    println!("  Rotor torque:    {:.1} N*m", op.rotor_torque);
    println!("  Aero power:      {:.1} W", op.aero_power);
    println!("  C_dax:           {:.4}", op.thrust_coefficient);
    println!("  C_p:             {:.4}", op.power_coefficient);
    Ok(())
}

fn cmd_power_curve(
    profile: &TurbineProfile,
    min: f64,
    max: f64,
    step: f64,
    output: Option<&Path>,
) -> CliResult<()> {
    let winds = sweep_range(min, max, step)?;
    let curve = wf_sim::power_curve(airfoil_for(profile)?.as_ref(), profile, &winds)?;

    let mut csv = String::from(
        "wind_mps,pitch_deg,rotor_speed_radps,induction,axial_force_n,rotor_torque_nm,aero_power_w,cdax,cp\n",
    );
    for op in &curve {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{},{},{}\n",
            op.wind_speed,
            op.pitch_deg,
            op.rotor_speed,
            op.induction,
            op.axial_force,
            op.rotor_torque,
            op.aero_power,
            op.thrust_coefficient,
            op.power_coefficient
        ));
    }
    write_text(&csv, output, curve.len(), "operating points")
}

fn cmd_cp_lambda(
    profile: &TurbineProfile,
    pitch: Option<f64>,
    min: f64,
    max: f64,
    step: f64,
    output: Option<&Path>,
) -> CliResult<()> {
    let pitch = pitch.unwrap_or(profile.nominal.pitch_deg);
    let lambdas = sweep_range(min, max, step)?;
    let points = wf_sim::cp_lambda(airfoil_for(profile)?.as_ref(), profile, pitch, &lambdas)?;

    let mut csv = String::from("lambda,cdax,cp,induction\n");
    for p in &points {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            p.tip_speed_ratio, p.thrust_coefficient, p.power_coefficient, p.induction
        ));
    }
    write_text(&csv, output, points.len(), "sweep points")
}

/// Serializable view of the state-space quadruple for JSON export.
#[derive(Serialize)]
struct LinearModelExport {
    wind_speed: f64,
    pitch_deg: f64,
    rotor_speed: f64,
    induction: f64,
    state_names: [&'static str; 7],
    input_names: [&'static str; 2],
    output_names: [&'static str; 6],
    a: Vec<Vec<f64>>,
    b: Vec<Vec<f64>>,
    c: Vec<Vec<f64>>,
    d: Vec<Vec<f64>>,
}

fn matrix_rows(m: &DMatrix<f64>) -> Vec<Vec<f64>> {
    (0..m.nrows())
        .map(|i| m.row(i).iter().copied().collect())
        .collect()
}

impl From<&StateSpaceModel> for LinearModelExport {
    fn from(model: &StateSpaceModel) -> Self {
        let op = &model.operating_point;
        Self {
            wind_speed: op.wind_speed,
            pitch_deg: op.pitch_deg,
            rotor_speed: op.rotor_speed,
            induction: op.induction,
            state_names: [
                "flap_angle",
                "flap_rate",
                "tower_displacement",
                "tower_rate",
                "rotor_speed",
                "torsion_angle",
                "torsion_rate",
            ],
            input_names: ["pitch_deg", "wind_speed"],
            output_names: [
                "axial_force",
                "flap_moment",
                "rotor_torque",
                "generator_power",
                "pitch_deg",
                "wind_speed",
            ],
            a: matrix_rows(&model.a),
            b: matrix_rows(&model.b),
            c: matrix_rows(&model.c),
            d: matrix_rows(&model.d),
        }
    }
}

fn cmd_linearize(profile: &TurbineProfile, wind: f64, output: Option<&Path>) -> CliResult<()> {
    let airfoil = airfoil_for(profile)?;
    let op = operating_point(airfoil.as_ref(), profile, wind)?;
    let model = linearize(airfoil.as_ref(), profile, &op)?;

    let export = LinearModelExport::from(&model);
    let json = serde_json::to_string_pretty(&export)?;
    if let Some(path) = output {
        std::fs::write(path, json)?;
        println!("✓ Exported linear model to {}", path.display());
    } else {
        println!("{json}");
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_gust_response(
    profile: &TurbineProfile,
    wind: f64,
    shape: GustShape,
    amplitude: f64,
    duration: f64,
    start: f64,
    opts: &SimOptions,
    output: Option<&Path>,
) -> CliResult<()> {
    let airfoil = airfoil_for(profile)?;
    let op = operating_point(airfoil.as_ref(), profile, wind)?;
    let model = linearize(airfoil.as_ref(), profile, &op)?;

    let gust = match shape {
        GustShape::Step => Gust::Step { amplitude },
        GustShape::Smooth => Gust::Smooth {
            amplitude,
            duration,
            start_time: start,
        },
        GustShape::Rotational => Gust::Rotational {
            amplitude,
            rotor_speed: op.rotor_speed,
        },
    };
    let record = gust_response(&model, &gust, opts)?;

    // deviation variables, one row per sample
    let mut csv = String::from(
        "t_s,d_flap_angle,d_flap_rate,d_tower_displacement,d_tower_rate,d_rotor_speed,\
         d_torsion_angle,d_torsion_rate,d_axial_force,d_flap_moment,d_rotor_torque,\
         d_generator_power\n",
    );
    for ((t, x), y) in record.t.iter().zip(&record.x).zip(&record.y) {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{},{},{}\n",
            t, x[0], x[1], x[2], x[3], x[4], x[5], x[6], y[0], y[1], y[2], y[3]
        ));
    }
    write_text(&csv, output, record.t.len(), "samples")
}

fn sweep_range(min: f64, max: f64, step: f64) -> CliResult<Vec<f64>> {
    if !(step > 0.0) || max < min {
        return Err(CliError::Usage(
            "sweep requires min <= max and a positive step".to_string(),
        ));
    }
    let n = ((max - min) / step).floor() as usize + 1;
    Ok((0..n).map(|i| min + i as f64 * step).collect())
}

fn write_text(text: &str, output: Option<&Path>, count: usize, what: &str) -> CliResult<()> {
    if let Some(path) = output {
        std::fs::write(path, text)?;
        println!("✓ Exported {} {} to {}", count, what, path.display());
    } else {
        print!("{text}");
    }
    Ok(())
}

use clap::Parser;
use plume_core::{
    forward_plume, inverse_plume, moving_average, GeoReference, PlumeError, PointSource, Ppb,
    ReceptorGrid, Scenario, StabilityClass, Vec2, Wind,
};
use std::process;
use tracing_subscriber::EnvFilter;

/// Gaussian plume demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "plume-demo")]
#[command(about = "Steady-state Gaussian plume dispersion demo", long_about = None)]
struct Args {
    /// Load the scenario from a JSON file (other scenario flags are ignored)
    #[arg(short, long)]
    config: Option<String>,

    /// Wind speed in m/s
    #[arg(short, long, default_value_t = 2.0)]
    wind_speed: f64,

    /// Wind direction in degrees
    #[arg(long, default_value_t = 0.0)]
    wind_direction: f64,

    /// Pasquill-Gifford stability class (A-F); default uses Ry=0.22 ry=0.894 Rz=0.20 rz=0.894
    #[arg(short, long)]
    stability: Option<String>,

    /// Source emission rate in g/h
    #[arg(short, long, default_value_t = 3_600_000.0)]
    rate: f64,

    /// Reference latitude for geographic source placement
    #[arg(long, requires = "ref_lon")]
    ref_lat: Option<f64>,

    /// Reference longitude for geographic source placement
    #[arg(long, requires = "ref_lat")]
    ref_lon: Option<f64>,

    /// Source latitude (needs --ref-lat/--ref-lon)
    #[arg(long, requires_all = ["ref_lat", "source_lon"])]
    source_lat: Option<f64>,

    /// Source longitude (needs --ref-lat/--ref-lon)
    #[arg(long, requires_all = ["ref_lon", "source_lat"])]
    source_lon: Option<f64>,

    /// Grid extent in metres (square, centred on the origin)
    #[arg(long, default_value_t = 1000.0)]
    extent: f64,

    /// Receptors per grid side
    #[arg(long, default_value_t = 101)]
    resolution: usize,

    /// Observed mixing ratio (ppb) to invert at the receptor
    #[arg(long)]
    observed: Option<f64>,

    /// Receptor x (m) for the inversion
    #[arg(long, default_value_t = 0.0)]
    receptor_x: f64,

    /// Receptor y (m) for the inversion
    #[arg(long, default_value_t = 100.0)]
    receptor_y: f64,

    /// Moving-average window for the centreline profile
    #[arg(long, default_value_t = 3)]
    smooth: usize,
}

fn scenario_from_args(args: &Args) -> plume_core::Result<Scenario> {
    if let Some(path) = &args.config {
        return Scenario::from_file(path);
    }

    let mut scenario = Scenario {
        wind: Wind::new(args.wind_speed, args.wind_direction),
        grid: ReceptorGrid::centered(Vec2::zeros(), args.extent, args.resolution),
        ..Scenario::default()
    };

    if let Some(letter) = &args.stability {
        let class = StabilityClass::from_letter(letter).ok_or_else(|| {
            PlumeError::config(format!(
                "unknown stability class '{letter}' (expected A-F)"
            ))
        })?;
        scenario.stability_class = Some(class);
    }

    let position = match (args.ref_lat, args.ref_lon, args.source_lat, args.source_lon) {
        (Some(ref_lat), Some(ref_lon), Some(lat), Some(lon)) => {
            GeoReference::new(ref_lat, ref_lon).to_local(lat, lon)
        }
        _ => Vec2::zeros(),
    };
    scenario.sources = vec![PointSource::new(position.x, position.y, args.rate)];

    scenario.validate()?;
    Ok(scenario)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    println!("=== Gaussian Plume Demo ===\n");

    let scenario = match scenario_from_args(&args) {
        Ok(s) => s,
        Err(e) => {
            match &args.config {
                Some(path) => eprintln!("Invalid scenario {path}: {e}"),
                None => eprintln!("Invalid scenario: {e}"),
            }
            process::exit(1);
        }
    };

    let dispersion = scenario.effective_dispersion();
    println!(
        "Wind: {} from {}, stability: {}",
        scenario.wind.speed,
        scenario.wind.direction,
        scenario
            .stability_class
            .map_or_else(|| "custom".to_string(), |c| format!("{c:?}"))
    );
    println!(
        "Dispersion: Ry={:.4} ry={:.3} Rz={:.4} rz={:.3}",
        dispersion.ry_coeff, dispersion.ry_exp, dispersion.rz_coeff, dispersion.rz_exp
    );
    println!(
        "Gas: T={}, P={}, M={} kg/mol",
        scenario.gas.temperature, scenario.gas.pressure, scenario.gas.molar_mass
    );
    for (i, source) in scenario.sources.iter().enumerate() {
        println!(
            "Source {}: ({:.1}, {:.1}) m, {}",
            i, source.position.x, source.position.y, source.rate
        );
    }

    let field = scenario.run();
    let grid = field.grid();
    println!(
        "\nEvaluated {}x{} receptors ({:.1} m spacing), {} inside a plume",
        grid.nx,
        grid.ny,
        grid.spacing,
        field.covered_cells()
    );

    if let Some((ix, iy, peak)) = field.max() {
        let p = grid.point(ix, iy);
        println!("Peak: {} at ({:.1}, {:.1}) m", peak, p.x, p.y);
    }

    // Centreline profile of the first source
    if let Some(source) = scenario.sources.first() {
        let axis = scenario.wind.plume_frame().downwind_axis();
        let distances: Vec<f64> = (1..=10).map(|k| f64::from(k) * 50.0).collect();
        let receptors: Vec<Vec2> = distances
            .iter()
            .map(|d| source.position + axis * *d)
            .collect();
        let profile = forward_plume(
            &receptors,
            &scenario.sources,
            &scenario.wind,
            &dispersion,
            &scenario.gas,
        );
        let values: Vec<f64> = profile.iter().map(|c| c.value()).collect();

        println!("\nDistance(m) | Centreline(ppb)");
        println!("------------|----------------");
        for (d, c) in distances.iter().zip(&values) {
            println!("{:11.0} | {:15.3}", d, c);
        }

        match moving_average(&values, args.smooth) {
            Ok(smoothed) => println!(
                "Smoothed (window {}): {:?}",
                args.smooth,
                smoothed.iter().map(|v| format!("{v:.3}")).collect::<Vec<_>>()
            ),
            Err(e) => eprintln!("Smoothing skipped: {e}"),
        }
    }

    if let (Some(observed), Some(source)) = (args.observed, scenario.sources.first()) {
        let receptor = Vec2::new(args.receptor_x, args.receptor_y);
        let estimate = inverse_plume(
            receptor,
            source.position,
            Ppb::new(observed),
            &scenario.wind,
            &dispersion,
            &scenario.gas,
        );
        println!(
            "\nInversion: {} at ({:.1}, {:.1}) m -> {}",
            Ppb::new(observed),
            receptor.x,
            receptor.y,
            estimate
        );
    }
}

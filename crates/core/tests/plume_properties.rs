//! Model-level properties of the forward and inverse plume.
use approx::assert_relative_eq;
use ctor::ctor;
use nalgebra::Rotation2;
use plume_core::atmosphere::PlumeFrame;
use plume_core::core_types::units::Degrees;
use plume_core::{
    forward_plume, inverse_plume, DispersionCoefficients, GasProperties, GramsPerHour,
    PointSource, Ppb, StabilityClass, Vec2, Wind,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn reference_dispersion() -> DispersionCoefficients {
    DispersionCoefficients::new(0.22, 0.894, 0.20, 0.894)
}

/// Place a receptor at the given plume-frame offsets from `source`.
fn receptor_at(source: Vec2, wind: &Wind, crosswind: f64, downwind: f64) -> Vec2 {
    let axis = wind.plume_frame().downwind_axis();
    let cross_axis = Vec2::new(axis.y, -axis.x);
    source + axis * downwind + cross_axis * crosswind
}

#[test]
fn test_reference_scenario_round_trip() {
    // 3.6e6 g/h = 1 kg/s, wind from 0° at 2 m/s, receptor 100 m downwind
    let wind = Wind::new(2.0, 0.0);
    let dispersion = reference_dispersion();
    let gas = GasProperties::default();
    let source = PointSource::new(0.0, 0.0, 3_600_000.0);
    let receptor = Vec2::new(0.0, 100.0);

    let c = forward_plume(&[receptor], &[source], &wind, &dispersion, &gas);
    assert!(c[0].is_finite());
    assert!(*c[0] > 0.0);

    let q = inverse_plume(receptor, source.position, c[0], &wind, &dispersion, &gas);
    assert_relative_eq!(*q, 3_600_000.0, max_relative = 1e-10);
}

#[test]
fn test_plume_frame_helper_places_receptor() {
    let wind = Wind::new(3.0, 217.0);
    let source = Vec2::new(12.0, -7.0);
    let receptor = receptor_at(source, &wind, -4.0, 90.0);
    let (crosswind, downwind) = PlumeFrame::new(Degrees::new(217.0)).rotate(receptor - source);
    assert_relative_eq!(crosswind, -4.0, epsilon = 1e-9);
    assert_relative_eq!(downwind, 90.0, epsilon = 1e-9);
}

#[test]
fn test_round_trip_recovers_rate() {
    let mut rng = StdRng::seed_from_u64(7);
    let gas = GasProperties::default();

    for _ in 0..200 {
        let dispersion = StabilityClass::ALL[rng.random_range(0..6)].coefficients();
        let wind = Wind::new(rng.random_range(0.5..15.0), rng.random_range(0.0..360.0));
        let source = PointSource::new(
            rng.random_range(-500.0..500.0),
            rng.random_range(-500.0..500.0),
            rng.random_range(1.0..1e7),
        );

        let downwind = rng.random_range(5.0..3000.0);
        let sigma_y = dispersion.sigma_y(downwind);
        let crosswind = rng.random_range(-2.0..2.0) * sigma_y;
        let receptor = receptor_at(source.position, &wind, crosswind, downwind);

        let c = forward_plume(&[receptor], &[source], &wind, &dispersion, &gas);
        assert!(*c[0] > 0.0);

        let q = inverse_plume(receptor, source.position, c[0], &wind, &dispersion, &gas);
        assert_relative_eq!(*q, *source.rate, max_relative = 1e-8);
    }
}

#[test]
fn test_not_downwind_is_exactly_zero_both_ways() {
    let mut rng = StdRng::seed_from_u64(11);
    let gas = GasProperties::default();
    let dispersion = reference_dispersion();

    for _ in 0..200 {
        let wind = Wind::new(rng.random_range(0.5..10.0), rng.random_range(0.0..360.0));
        let source = PointSource::new(
            rng.random_range(-100.0..100.0),
            rng.random_range(-100.0..100.0),
            1000.0,
        );
        let receptor = receptor_at(
            source.position,
            &wind,
            rng.random_range(-200.0..200.0),
            rng.random_range(-1000.0..-1.0),
        );

        let c = forward_plume(&[receptor], &[source], &wind, &dispersion, &gas);
        assert_eq!(c[0], Ppb::ZERO);

        let observed = Ppb::new(40.0);
        let q = inverse_plume(receptor, source.position, observed, &wind, &dispersion, &gas);
        assert_eq!(q, GramsPerHour::ZERO);
    }
}

fn random_sources(rng: &mut StdRng, n: usize) -> Vec<PointSource> {
    (0..n)
        .map(|_| {
            PointSource::new(
                rng.random_range(-300.0..300.0),
                rng.random_range(-300.0..300.0),
                rng.random_range(0.0..5e5),
            )
        })
        .collect()
}

fn random_receptors(rng: &mut StdRng, n: usize) -> Vec<Vec2> {
    (0..n)
        .map(|_| {
            Vec2::new(
                rng.random_range(-800.0..800.0),
                rng.random_range(-800.0..800.0),
            )
        })
        .collect()
}

#[test]
fn test_field_is_non_negative() {
    let mut rng = StdRng::seed_from_u64(3);
    let sources = random_sources(&mut rng, 8);
    let receptors = random_receptors(&mut rng, 2000);

    let c = forward_plume(
        &receptors,
        &sources,
        &Wind::new(4.0, 250.0),
        &StabilityClass::B.coefficients(),
        &GasProperties::default(),
    );
    assert_eq!(c.len(), receptors.len());
    assert!(c.iter().all(|v| v.value() >= 0.0));
    assert!(c.iter().any(|v| v.value() > 0.0));
}

#[test]
fn test_superposition() {
    let mut rng = StdRng::seed_from_u64(19);
    let gas = GasProperties::default();
    let dispersion = reference_dispersion();
    let wind = Wind::new(2.5, 75.0);
    let sources = random_sources(&mut rng, 2);
    let receptors = random_receptors(&mut rng, 500);

    let both = forward_plume(&receptors, &sources, &wind, &dispersion, &gas);
    let first = forward_plume(&receptors, &sources[..1], &wind, &dispersion, &gas);
    let second = forward_plume(&receptors, &sources[1..], &wind, &dispersion, &gas);

    for i in 0..receptors.len() {
        assert_relative_eq!(
            *both[i],
            *first[i] + *second[i],
            max_relative = 1e-12,
            epsilon = 1e-300
        );
    }
}

#[test]
fn test_rotation_invariance() {
    let mut rng = StdRng::seed_from_u64(23);
    let gas = GasProperties::default();
    let dispersion = reference_dispersion();
    let sources = random_sources(&mut rng, 3);
    let receptors = random_receptors(&mut rng, 400);
    let wind = Wind::new(3.0, 40.0);

    let base = forward_plume(&receptors, &sources, &wind, &dispersion, &gas);

    for angle in [15.0_f64, 90.0, 200.0] {
        let rotation = Rotation2::new(angle.to_radians());
        let rotated_sources: Vec<PointSource> = sources
            .iter()
            .map(|s| PointSource {
                position: rotation * s.position,
                rate: s.rate,
            })
            .collect();
        let rotated_receptors: Vec<Vec2> = receptors.iter().map(|r| rotation * *r).collect();
        let rotated_wind = Wind::new(3.0, 40.0 + angle);

        let rotated = forward_plume(
            &rotated_receptors,
            &rotated_sources,
            &rotated_wind,
            &dispersion,
            &gas,
        );

        for (a, b) in base.iter().zip(&rotated) {
            assert_relative_eq!(**a, **b, max_relative = 1e-6, epsilon = 1e-9);
        }
    }
}

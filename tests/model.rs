use impact_calculator::core::constants::SEA_LEVEL_DENSITY_KG_M3;
use impact_calculator::model::{
    DEFAULT_ENTRY_ANGLE_DEG, MaterialPreset, air_density, body_properties, dynamic_pressure,
    entry_conditions,
};

#[test]
fn air_density_decreases_with_altitude() {
    assert!((air_density(0.0) - SEA_LEVEL_DENSITY_KG_M3).abs() < 1e-12);
    let mut previous = air_density(0.0);
    for step in 1..=150 {
        let rho = air_density(step as f64 * 1_000.0);
        assert!(rho < previous, "density must fall at {} km", step);
        previous = rho;
    }
    let one_scale_height = air_density(7_200.0);
    assert!((one_scale_height - SEA_LEVEL_DENSITY_KG_M3 / std::f64::consts::E).abs() < 1e-9);
}

#[test]
fn air_density_below_ground_is_sea_level() {
    assert_eq!(air_density(-50.0), SEA_LEVEL_DENSITY_KG_M3);
}

#[test]
fn dynamic_pressure_is_half_rho_v_squared() {
    let q = dynamic_pressure(1.0, 20_000.0);
    assert!((q - 2.0e8).abs() < 1e-3);
    assert_eq!(dynamic_pressure(0.5, 0.0), 0.0);
}

#[test]
fn slow_entries_pass_through() {
    let entry = entry_conditions(2.5, Some(30.0));
    assert!((entry.velocity_m_s - 2_500.0).abs() < 1e-9);
    assert_eq!(entry.v_infinity_km_s, 2.5);
    assert_eq!(entry.angle_deg, 30.0);
}

#[test]
fn hyperbolic_entries_add_escape_speed() {
    for v_inf in [3.0, 15.0, 40.0] {
        let entry = entry_conditions(v_inf, None);
        let expected = (v_inf * v_inf + 11.2 * 11.2_f64).sqrt() * 1_000.0;
        assert!(
            (entry.velocity_m_s - expected).abs() < 1e-6,
            "v_inf {} gave {}",
            v_inf,
            entry.velocity_m_s
        );
        assert_eq!(entry.angle_deg, DEFAULT_ENTRY_ANGLE_DEG);
    }
}

#[test]
fn body_properties_for_stony_sphere() {
    let body = body_properties(50.0, &MaterialPreset::stony());
    let volume = 4.0 / 3.0 * std::f64::consts::PI * 25.0_f64.powi(3);
    assert_eq!(body.radius_m, 25.0);
    assert!((body.mass_kg - 3_000.0 * volume).abs() / body.mass_kg < 1e-12);
    assert!((body.area_m2 - std::f64::consts::PI * 625.0).abs() < 1e-9);
    assert_eq!(body.strength_pa, 2.0e5);
    assert_eq!(body.material, "stony");
}

#[test]
fn canonical_presets_are_ordered() {
    let [stony, iron, cometary] = MaterialPreset::canonical();
    assert_eq!(stony.name, "stony");
    assert_eq!(iron.density_kg_m3, 7_800.0);
    assert_eq!(iron.strength_pa, 2.0e6);
    assert_eq!(cometary.density_kg_m3, 1_000.0);
    assert!(cometary.strength_pa < stony.strength_pa);
}

use impact_calculator::blast::{
    Outcome, OverpressureThresholds, Severity, classify_outcome, estimate_blast_effects,
    estimate_blast_effects_with, reference_overpressure_pa,
};
use impact_calculator::model::{MaterialPreset, body_properties, entry_conditions};
use impact_calculator::trajectory::{IntegratorOptions, integrate_trajectory};

#[test]
fn zero_energy_or_altitude_has_no_effects() {
    for (energy, altitude) in [(0.0, 10_000.0), (5.0, 0.0), (-1.0, 5_000.0)] {
        let blast = estimate_blast_effects(energy, altitude);
        assert_eq!(blast.severity, Severity::None);
        assert_eq!(blast.window_breakage_km, 0.0);
        assert_eq!(blast.structural_damage_km, 0.0);
        assert_eq!(blast.severe_destruction_km, 0.0);
        assert_eq!(blast.extreme_destruction_km, 0.0);
    }
}

#[test]
fn tunguska_blast_is_catastrophic() {
    let blast = estimate_blast_effects(8.18, 9_100.0);
    assert_eq!(blast.severity, Severity::Catastrophic);
    assert!(
        (40.0..=55.0).contains(&blast.window_breakage_km),
        "window radius {} km",
        blast.window_breakage_km
    );
    assert!(blast.severe_destruction_km > 10.0);
}

#[test]
fn high_small_burst_is_minor() {
    let blast = estimate_blast_effects(0.67, 32_400.0);
    assert_eq!(blast.severity, Severity::Minor);
    assert!(blast.window_breakage_km > 3.0 && blast.window_breakage_km < 10.0);
}

#[test]
fn radii_shrink_as_overpressure_rises() {
    let blast = estimate_blast_effects(1.0, 1_000.0);
    assert!(blast.window_breakage_km > blast.structural_damage_km);
    assert!(blast.structural_damage_km > blast.severe_destruction_km);
    assert!(blast.severe_destruction_km > blast.extreme_destruction_km);
    assert!(blast.extreme_destruction_km > 0.0);
    assert_eq!(blast.severity, Severity::Major);
}

#[test]
fn window_radius_is_capped() {
    let blast = estimate_blast_effects(1.0e4, 1_000.0);
    assert_eq!(blast.window_breakage_km, 300.0);
    assert!(blast.structural_damage_km > 100.0);
}

#[test]
fn bursts_above_25_km_are_attenuated() {
    let low = estimate_blast_effects(10.0, 30_000.0);
    let high = estimate_blast_effects(10.0, 45_000.0);
    assert!(high.window_breakage_km < low.window_breakage_km);
    assert_eq!(low.severity, Severity::Major);
    assert_eq!(high.severity, Severity::Minor);
}

#[test]
fn reference_curve_matches_inversion() {
    let thresholds = OverpressureThresholds::default();
    let blast = estimate_blast_effects(1.0e-3, 100.0);
    // 1 kt: ranges come straight from the reference curve.
    let range_m = blast.structural_damage_km * 1_000.0;
    let p = reference_overpressure_pa(range_m, 100.0);
    assert!(
        (p - thresholds.structural_damage_pa).abs() / thresholds.structural_damage_pa < 1e-6,
        "overpressure {} Pa",
        p
    );
}

#[test]
fn custom_thresholds_change_radii() {
    let default = estimate_blast_effects(1.0, 5_000.0);
    let sensitive = OverpressureThresholds {
        window_breakage_pa: 500.0,
        ..OverpressureThresholds::default()
    };
    let custom = estimate_blast_effects_with(1.0, 5_000.0, &sensitive);
    assert!(custom.window_breakage_km > default.window_breakage_km);
    assert_eq!(custom.structural_damage_km, default.structural_damage_km);
}

#[test]
fn severity_is_ordered() {
    assert!(Severity::None < Severity::Minor);
    assert!(Severity::Minor < Severity::Moderate);
    assert!(Severity::Moderate < Severity::Significant);
    assert!(Severity::Significant < Severity::Major);
    assert!(Severity::Major < Severity::Catastrophic);
    assert_eq!(Severity::Catastrophic.to_string(), "catastrophic");
}

#[test]
fn outcome_messages_follow_priority() {
    let cases = [
        (MaterialPreset::new("strong", 3_000.0, 1.0e10), 30.0, 0.2, 45.0, "Complete ablation"),
        (MaterialPreset::stony(), 15.0, 50.0, 45.0, "Airburst"),
        (MaterialPreset::iron(), 20.0, 200.0, 45.0, "Ground impact"),
        (MaterialPreset::stony(), 1.0, 0.001, 5.0, "Decelerated"),
    ];
    for (material, v_inf, diameter, angle, prefix) in cases {
        let entry = entry_conditions(v_inf, Some(angle));
        let body = body_properties(diameter, &material);
        let result = integrate_trajectory(&entry, &body, &IntegratorOptions::default());
        let outcome = classify_outcome(&result.impact);
        let message = outcome.to_string();
        assert!(
            message.starts_with(prefix),
            "expected '{}' but got '{}'",
            prefix,
            message
        );
    }
}

#[test]
fn airburst_outcome_reports_altitude_in_km() {
    let entry = entry_conditions(15.0, Some(45.0));
    let body = body_properties(50.0, &MaterialPreset::stony());
    let result = integrate_trajectory(&entry, &body, &IntegratorOptions::default());
    match classify_outcome(&result.impact) {
        Outcome::Airburst { altitude_m } => {
            let message = classify_outcome(&result.impact).to_string();
            assert!(message.contains(&format!("{:.1} km", altitude_m / 1_000.0)));
        }
        other => panic!("expected airburst, got {:?}", other),
    }
}

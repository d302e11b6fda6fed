use dic_speciation::{Assumptions, SampleInput, SpeciationResult, speciate, speciate_detailed};

fn assert_rel(actual: f64, expected: f64, what: &str) {
    let rel = ((actual - expected) / expected).abs();
    assert!(
        rel <= 1e-6,
        "{what}: got {actual}, expected {expected} (rel err {rel:e})"
    );
}

fn assert_result(r: &SpeciationResult, expected: [f64; 6]) {
    for ((name, value), want) in r.named_values().into_iter().zip(expected) {
        assert_rel(value, want, name);
    }
}

#[test]
fn low_dic_near_neutral_sample() {
    let r = speciate(1.2, 6.8, 12.0, 99.9);
    assert_result(
        &r,
        [
            30.625282900695677,
            69.27644249894342,
            0.015010653649835462,
            69.3064638062431,
            609.9784410502461,
            150.89743949439665,
        ],
    );
}

#[test]
fn moderate_dic_slightly_basic_sample() {
    let r = speciate(8.5, 7.2, 15.0, 98.8);
    assert_result(
        &r,
        [
            100.59584401266795,
            606.7900573440404,
            0.3576456874215958,
            607.5053487188836,
            2203.577411332614,
            551.1936939469555,
        ],
    );
}

#[test]
fn acidic_sample_is_dominated_by_dissolved_co2() {
    let r = speciate(15.0, 5.5, 18.0, 98.9);
    assert!(r.co2_um > r.hco3_um);
    assert!(r.hco3_um > r.co3_um);
    let dic = SampleInput::new(15.0, 5.5, 18.0, 98.9).normalized().dic_um;
    assert!(r.co3_um / dic < 1e-5, "carbonate share should be negligible");
    assert_rel(r.co2_um, 1108.201026315713, "calc_CO2_uM");
    assert_rel(r.pco2_pct_sat, 6643.886645555305, "calc_pCO2_perc_sat");
}

#[test]
fn alkalinity_counts_carbonate_twice() {
    let r = speciate(8.5, 7.2, 15.0, 98.8);
    assert_eq!(r.carb_alk_um, r.hco3_um + 2.0 * r.co3_um);
}

#[test]
fn hydrogen_ion_is_ten_to_minus_ph_on_micromolar_scale() {
    // Kept unscaled: K1 and K2 are applied on the same scale.
    let d = speciate_detailed(
        &SampleInput::new(1.2, 6.8, 12.0, 99.9),
        &Assumptions::default(),
    );
    assert_rel(d.normalized.h_um, 10f64.powf(-6.8), "h_um");
    assert_rel(d.normalized.dic_um, 99.91673605328893, "dic_um");
    assert_rel(d.constants.kw, 2.4712120214720666e18, "kw");
}

#[test]
fn result_serializes_with_output_column_names() {
    let r = speciate(1.2, 6.8, 12.0, 99.9);
    let v = serde_json::to_value(r).unwrap();
    for name in dic_speciation::OUTPUT_COLUMNS {
        assert!(v.get(name).is_some(), "missing {name}");
    }
}

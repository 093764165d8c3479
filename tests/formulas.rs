//! 자재 환산 공식 회귀 테스트.
use material_estimator::formulas::{self, RebarComponent};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn concrete_ratios_are_linear() {
    for v in [0.0, 1.0, 2.5, 10.0, 123.4] {
        assert!(close(formulas::cement(v), 8.0 * v));
        assert!(close(formulas::sand(v), 0.5 * v));
        assert!(close(formulas::gravel(v), 0.75 * v));
    }
}

#[test]
fn rebar_depends_on_component_label() {
    assert!(close(formulas::rebar(3.0, "slab"), 300.0));
    assert!(close(formulas::rebar(3.0, "foundation"), 360.0));
    assert_eq!(formulas::rebar(3.0, "column"), 0.0);
    assert_eq!(formulas::rebar(3.0, "Slab"), 0.0);
    assert_eq!(formulas::rebar(3.0, ""), 0.0);
}

#[test]
fn rebar_component_labels() {
    assert_eq!(RebarComponent::from_label("slab"), Some(RebarComponent::Slab));
    assert_eq!(
        RebarComponent::from_label("foundation"),
        Some(RebarComponent::Foundation)
    );
    assert_eq!(RebarComponent::from_label("beam"), None);
    assert!(close(
        formulas::rebar_for(2.0, RebarComponent::Foundation),
        formulas::rebar(2.0, "foundation")
    ));
}

#[test]
fn chb_divides_by_three_point_two() {
    assert!(close(formulas::chb(40.0), 12.5));
    assert!(close(formulas::chb(3.2), 1.0));
}

#[test]
fn plywood_uses_sheet_area() {
    assert!(close(formulas::plywood(2.9768), 1.0));
    assert!((formulas::plywood(40.0) - 13.437).abs() < 1e-3);
}

#[test]
fn floor_area_formulas() {
    assert!(close(formulas::steel_bars(50.0), 500.0));
    assert!(close(formulas::wood(50.0), 10.0));
    assert!((formulas::tiles(50.0) - 538.213).abs() < 1e-3);
    assert!(close(formulas::tiles(0.0929), 1.0));
}

#[test]
fn negative_inputs_propagate() {
    assert!(close(formulas::cement(-1.0), -8.0));
    assert!(close(formulas::chb(-3.2), -1.0));
    assert!(close(formulas::steel_bars(-10.0), -100.0));
}

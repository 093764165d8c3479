use material_estimator::estimate::{
    estimate, slab_volume, total_floor_area, HouseType, Measurements,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn sample() -> Measurements {
    Measurements {
        floor_area_m2: 50.0,
        wall_area_m2: 40.0,
        ceiling_height_m: 3.0,
        foundation_volume_m3: 10.0,
        column_volume_m3: 2.0,
    }
}

#[test]
fn house_type_multiplier() {
    assert_eq!(HouseType::from_choice(1), HouseType::Bungalow);
    assert_eq!(HouseType::from_choice(2), HouseType::SingleDetached);
    assert_eq!(HouseType::from_choice(0), HouseType::SingleDetached);
    assert_eq!(HouseType::from_choice(7), HouseType::SingleDetached);
    assert_eq!(HouseType::from_choice(-1), HouseType::SingleDetached);
    assert!(close(total_floor_area(50.0, HouseType::Bungalow), 50.0));
    assert!(close(total_floor_area(50.0, HouseType::SingleDetached), 100.0));
}

#[test]
fn slab_is_not_doubled() {
    assert!(close(slab_volume(50.0), 7.5));
}

#[test]
fn bungalow_scenario() {
    let bill = estimate(&sample(), HouseType::Bungalow);
    assert!(close(bill.cement, 140.0));
    assert!(close(bill.sand, 8.75));
    assert!(close(bill.gravel, 13.125));
    assert!(close(bill.rebar, 1950.0));
    assert!(close(bill.chb, 12.5));
    assert!((bill.plywood - 13.44).abs() < 5e-3);
    assert!(close(bill.steel_bars, 500.0));
    assert!((bill.tiles - 538.21).abs() < 5e-3);
    assert!(close(bill.wood, 10.0));
}

#[test]
fn two_floor_doubles_floor_derived_quantities() {
    let bill = estimate(&sample(), HouseType::SingleDetached);
    // 기초 80 + 슬래브 8 × (100 × 0.15) = 200
    assert!(close(bill.cement, 200.0));
    assert!(close(bill.rebar, 1200.0 + 1500.0));
    assert!(close(bill.steel_bars, 1000.0));
    assert!(close(bill.wood, 20.0));
    assert!(close(bill.chb, 12.5));
}

#[test]
fn dead_inputs_do_not_affect_result() {
    let base = estimate(&sample(), HouseType::Bungalow);
    let mut other = sample();
    other.ceiling_height_m = 99.0;
    other.column_volume_m3 = 42.0;
    assert_eq!(estimate(&other, HouseType::Bungalow), base);
}

#[test]
fn all_zero_input_gives_zero_bill() {
    let bill = estimate(&Measurements::default(), HouseType::SingleDetached);
    assert_eq!(bill.cement, 0.0);
    assert_eq!(bill.tiles, 0.0);
}

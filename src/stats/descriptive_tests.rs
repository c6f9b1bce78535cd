use super::*;

#[test]
fn mean_of_empty_is_none() {
    assert_eq!(mean(&[]), None);
}

#[test]
fn mean_of_values() {
    assert_eq!(mean(&[5.0, 7.0]), Some(6.0));
    assert_eq!(mean(&[300.0, 320.0]), Some(310.0));
}

#[test]
fn std_dev_needs_two_values() {
    assert_eq!(sample_std_dev(&[]), None);
    assert_eq!(sample_std_dev(&[5.0]), None);
}

#[test]
fn std_dev_uses_sample_denominator() {
    let sd = sample_std_dev(&[5.0, 7.0]).unwrap();
    assert!((sd - 2.0_f64.sqrt()).abs() < 1e-12);

    let sd = sample_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    assert!((sd - 2.138_089_935_299_395).abs() < 1e-12);
}

#[test]
fn std_dev_of_constant_values_is_zero() {
    assert_eq!(sample_std_dev(&[3.0, 3.0, 3.0]), Some(0.0));
}

//! Unit tests for fueltank-types

use crate::{Liters, VolumeError};

// ============================================================================
// Construction
// ============================================================================

#[test]
fn new_accepts_finite_values() {
    assert_eq!(Liters::new(0.0).unwrap(), Liters::ZERO);
    assert_eq!(Liters::new(12.5).unwrap().as_f64(), 12.5);
    assert_eq!(Liters::new(-3.0).unwrap().as_f64(), -3.0);
}

#[test]
fn new_rejects_non_finite_values() {
    assert!(matches!(
        Liters::new(f64::NAN),
        Err(VolumeError::NonFinite(_))
    ));
    assert!(matches!(
        Liters::new(f64::INFINITY),
        Err(VolumeError::NonFinite(_))
    ));
    assert!(matches!(
        Liters::new(f64::NEG_INFINITY),
        Err(VolumeError::NonFinite(_))
    ));
}

#[test]
fn zero_is_zero() {
    assert!(Liters::ZERO.is_zero());
    assert!(!Liters::new(0.1).unwrap().is_zero());
}

// ============================================================================
// Parsing (the text boundary)
// ============================================================================

#[test]
fn parses_integer_and_decimal_text() {
    assert_eq!("20".parse::<Liters>().unwrap().as_f64(), 20.0);
    assert_eq!("12.5".parse::<Liters>().unwrap().as_f64(), 12.5);
    assert_eq!(" 7.25 ".parse::<Liters>().unwrap().as_f64(), 7.25);
}

#[test]
fn non_numeric_text_is_rejected() {
    let err = "x".parse::<Liters>().unwrap_err();
    assert_eq!(err, VolumeError::NotNumeric("x".to_string()));

    assert!("".parse::<Liters>().is_err());
    assert!("12,5".parse::<Liters>().is_err());
}

#[test]
fn non_finite_text_is_rejected() {
    // f64::from_str accepts "NaN" and "inf"; the volume boundary does not.
    assert!(matches!(
        "NaN".parse::<Liters>(),
        Err(VolumeError::NonFinite(_))
    ));
    assert!(matches!(
        "inf".parse::<Liters>(),
        Err(VolumeError::NonFinite(_))
    ));
}

// ============================================================================
// Arithmetic and Display
// ============================================================================

#[test]
fn add_and_sub_work_on_liter_counts() {
    let a = Liters::new(30.0).unwrap();
    let b = Liters::new(15.0).unwrap();

    assert_eq!((a + b).as_f64(), 45.0);
    assert_eq!((a - b).as_f64(), 15.0);
}

#[test]
fn ordering_follows_the_liter_count() {
    let small = Liters::new(5.0).unwrap();
    let large = Liters::new(50.0).unwrap();

    assert!(small < large);
    assert!(large >= small);
    assert_eq!(small, Liters::new(5.0).unwrap());
}

#[test]
fn display_includes_the_unit() {
    assert_eq!(Liters::new(30.0).unwrap().to_string(), "30 L");
    assert_eq!(Liters::new(12.5).unwrap().to_string(), "12.5 L");
}

// ============================================================================
// Serde (the deserialization boundary)
// ============================================================================

#[test]
fn serializes_as_a_plain_number() {
    let volume = Liters::new(12.5).unwrap();
    assert_eq!(serde_json::to_string(&volume).unwrap(), "12.5");
}

#[test]
fn deserializes_from_a_plain_number() {
    let volume: Liters = serde_json::from_str("12.5").unwrap();
    assert_eq!(volume.as_f64(), 12.5);
}

#[test]
fn try_from_guards_deserialized_values() {
    assert!(Liters::try_from(20.0).is_ok());
    assert!(matches!(
        Liters::try_from(f64::NAN),
        Err(VolumeError::NonFinite(_))
    ));
}

// ============================================================================
// Property-Based Tests
// ============================================================================

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn every_finite_value_round_trips_through_text(value in -1.0e6f64..1.0e6) {
            let volume = Liters::new(value).expect("finite by construction");
            let parsed: Liters = value.to_string().parse().expect("text is numeric");
            prop_assert_eq!(parsed, volume);
        }

        #[test]
        fn parsing_never_produces_a_non_finite_volume(text in "\\PC*") {
            if let Ok(volume) = text.parse::<Liters>() {
                prop_assert!(volume.as_f64().is_finite());
            }
        }
    }
}

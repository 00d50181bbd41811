use mortality_core::errors::*;

#[test]
fn unknown_location_carries_name() {
    let err = MortalityError::UnknownLocation {
        location: "Atlantis".into(),
    };
    assert!(err.to_string().contains("Atlantis"));
    assert_eq!(err.error_code(), codes::UNKNOWN_LOCATION);
}

#[test]
fn invalid_age_carries_value_and_limit() {
    let err = MortalityError::InvalidAge {
        age: 200.0,
        max_age: 120,
    };
    let msg = err.to_string();
    assert!(msg.contains("200"));
    assert!(msg.contains("120"));
}

#[test]
fn input_errors_are_distinguished_from_internal_errors() {
    let input = [
        MortalityError::UnknownLocation {
            location: "x".into(),
        },
        MortalityError::InvalidAge {
            age: -1.0,
            max_age: 120,
        },
        MortalityError::InvalidSex { sex: "x".into() },
    ];
    for err in &input {
        assert!(err.is_input_error(), "{err:?}");
        assert!(!err.is_internal(), "{err:?}");
    }

    let internal = [
        MortalityError::NoData,
        MortalityError::InvalidData(DataError::ZeroMass { key: "k".into() }),
        MortalityError::Config("bad".into()),
        MortalityError::AlreadyInitialized,
    ];
    for err in &internal {
        assert!(err.is_internal(), "{err:?}");
    }
}

// --- From impls ---

#[test]
fn data_error_converts_to_invalid_data() {
    let data_err = DataError::BracketGap { from: 5, to: 10 };
    let err: MortalityError = data_err.clone().into();
    assert_eq!(err, MortalityError::InvalidData(data_err));
    assert_eq!(err.error_code(), codes::INVALID_DATA);
    assert!(err.to_string().contains("5..10"));
}

#[test]
fn coded_string_prefixes_error_code() {
    let err = MortalityError::InvalidSex {
        sex: "unknown".into(),
    };
    assert_eq!(err.coded_string(), "[INVALID_SEX] invalid sex: unknown");
}

#[test]
fn data_errors_report_row_context() {
    let err = DataError::UnknownAgeGroup {
        row: 17,
        label: "Elderly".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("17"));
    assert!(msg.contains("Elderly"));
}

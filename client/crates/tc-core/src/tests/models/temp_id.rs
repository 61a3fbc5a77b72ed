use crate::tests::{at, temp_id};
use crate::{CoreError, TempId, TempIdResponse};

use googletest::prelude::*;

#[test]
fn given_window_when_checking_bounds_then_start_inclusive_end_exclusive() {
    // Given
    let id = temp_id("A", 100, 200);

    // Then
    assert_that!(id.is_current_at(at(99)), eq(false));
    assert_that!(id.is_current_at(at(100)), eq(true));
    assert_that!(id.is_current_at(at(199)), eq(true));
    assert_that!(id.is_current_at(at(200)), eq(false));
}

#[test]
fn given_window_when_checking_validity_then_only_end_matters() {
    // Given
    let id = temp_id("A", 100, 200);

    // Then
    assert_that!(id.is_valid_at(at(0)), eq(true));
    assert_that!(id.is_valid_at(at(150)), eq(true));
    assert_that!(id.is_valid_at(at(200)), eq(false));
    assert_that!(id.is_valid_at(at(500)), eq(false));
}

#[test]
fn given_well_formed_response_when_converted_then_fields_map() {
    // Given
    let response = TempIdResponse {
        temp_id: String::from("abc"),
        valid_from: 1_588_000_000.0,
        valid_to: 1_588_000_900.5,
    };

    // When
    let result = TempId::try_from(response);

    // Then
    assert_that!(result, ok(anything()));
    let id = result.unwrap();
    assert_that!(id.temp_id.as_str(), eq("abc"));
    assert_that!(id.valid_from.timestamp(), eq(1_588_000_000));
    assert_that!(id.valid_until.timestamp_millis(), eq(1_588_000_900_500));
}

#[test]
fn given_nan_timestamp_when_converted_then_validation_error() {
    // Given
    let response = TempIdResponse {
        temp_id: String::from("abc"),
        valid_from: f64::NAN,
        valid_to: 100.0,
    };

    // When
    let result = TempId::try_from(response);

    // Then
    assert_that!(result, err(anything()));
    match result.unwrap_err() {
        CoreError::Validation { field, .. } => {
            assert_that!(field.as_deref(), some(eq("validFrom")));
        }
    }
}

#[test]
fn given_out_of_range_timestamp_when_converted_then_error() {
    let response = TempIdResponse {
        temp_id: String::from("abc"),
        valid_from: 0.0,
        valid_to: 1.0e300,
    };

    assert_that!(TempId::try_from(response), err(anything()));
}

#[test]
fn given_blank_identifier_when_converted_then_error() {
    let response = TempIdResponse {
        temp_id: String::from("   "),
        valid_from: 0.0,
        valid_to: 10.0,
    };

    assert_that!(TempId::try_from(response), err(anything()));
}

#[test]
fn given_inverted_window_when_converted_then_accepted() {
    // The issuing server owns window ordering; it is not checked here.
    let response = TempIdResponse {
        temp_id: String::from("abc"),
        valid_from: 200.0,
        valid_to: 100.0,
    };

    assert_that!(TempId::try_from(response), ok(anything()));
}

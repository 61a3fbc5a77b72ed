use crate::TempIdResponse;

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_server_payload_when_deserialized_then_fields_read() {
    // Given
    let payload = json!({
        "tempID": "dGVtcC1pZA==",
        "validFrom": 1588000000,
        "validTo": 1588000900.25
    });

    // When
    let response: TempIdResponse = serde_json::from_value(payload).unwrap();

    // Then
    assert_that!(response.temp_id.as_str(), eq("dGVtcC1pZA=="));
    assert_that!(response.valid_from, eq(1_588_000_000.0));
    assert_that!(response.valid_to, eq(1_588_000_900.25));
}

#[test]
fn given_identifier_alias_when_deserialized_then_accepted() {
    let payload = json!({ "identifier": "x", "validFrom": 1, "validTo": 2 });

    let response: TempIdResponse = serde_json::from_value(payload).unwrap();

    assert_that!(response.temp_id.as_str(), eq("x"));
}

#[test]
fn given_missing_valid_to_when_deserialized_then_error() {
    let payload = json!({ "tempID": "x", "validFrom": 1 });

    let result = serde_json::from_value::<TempIdResponse>(payload);

    assert_that!(result, err(anything()));
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use dataexchange::model::{
    AssetSourceEntry, Code, DataSetEntry, ExportServerSideEncryption, JobError, JobErrorLimitName,
    LimitName, Origin, OriginDetails, ServerSideEncryptionTypes, State,
};
use smithy_json::deserialize::json_token_iter;
use smithy_json::serialize::JsonObjectWriter;
use std::str::FromStr;

#[test]
fn enum_values_round_trip() {
    for value in LimitName::values() {
        let parsed = LimitName::try_parse(value).expect("known value");
        assert_eq!(parsed.as_str(), *value);
    }
    assert_eq!(
        ServerSideEncryptionTypes::from("aws:kms"),
        ServerSideEncryptionTypes::AwsKms
    );
    assert_eq!(ServerSideEncryptionTypes::Aes256.as_str(), "AES256");
    assert_eq!(
        JobErrorLimitName::from_str("Assets per revision"),
        Ok(JobErrorLimitName::AssetsPerRevision)
    );
}

#[test]
fn unknown_enum_values() {
    let state = State::from("PAUSED");
    assert_eq!(state, State::Unknown("PAUSED".to_string()));
    assert_eq!(state.as_str(), "PAUSED");

    let err = State::try_parse("PAUSED").unwrap_err();
    assert_eq!(err.enum_name(), "State");
    assert_eq!(err.value(), "PAUSED");
    assert_eq!(err.to_string(), "`PAUSED` is not a valid State");
    // matching is case sensitive
    assert!(State::try_parse("completed").is_err());
}

#[test]
fn structure_json_round_trip() {
    let entry = AssetSourceEntry::builder().bucket("b").key("k").build();
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    dataexchange::json_ser::serialize_structure_asset_source_entry(&mut object, &entry);
    object.finish();
    assert_eq!(out, r#"{"Bucket":"b","Key":"k"}"#);

    let mut tokens = json_token_iter(out.as_bytes()).peekable();
    let parsed = dataexchange::json_deser::deser_structure_asset_source_entry(&mut tokens)
        .expect("valid json")
        .expect("object is present");
    assert_eq!(parsed, entry);
}

#[test]
fn unset_members_are_not_serialized() {
    let encryption = ExportServerSideEncryption::builder()
        .r#type(ServerSideEncryptionTypes::AwsKms)
        .build();
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    dataexchange::json_ser::serialize_structure_export_server_side_encryption(
        &mut object,
        &encryption,
    );
    object.finish();
    assert_eq!(out, r#"{"Type":"aws:kms"}"#);
}

#[test]
fn builder_setters_overwrite() {
    let builder = AssetSourceEntry::builder().bucket("first").bucket("second");
    assert_eq!(builder.build().bucket(), Some("second"));
    let entry = AssetSourceEntry::builder().set_key(None).build();
    assert_eq!(entry.key(), None);
    assert_eq!(
        format!("{:?}", entry),
        "AssetSourceEntry { bucket: None, key: None }"
    );
}

#[test]
fn records_differing_in_one_field_are_unequal() {
    let entry = AssetSourceEntry::builder().bucket("b").key("k").build();
    assert_eq!(entry, entry.clone());
    assert_ne!(entry, AssetSourceEntry::builder().bucket("b").key("k2").build());
    assert_ne!(entry, AssetSourceEntry::builder().bucket("b").build());

    let error = JobError::builder()
        .code(Code::ValidationException)
        .limit_value(10.0)
        .message("too big")
        .build();
    assert_ne!(
        error,
        JobError::builder()
            .code(Code::ValidationException)
            .limit_value(10.5)
            .message("too big")
            .build()
    );
    assert_ne!(
        error,
        JobError::builder()
            .code(Code::Unknown("VALIDATION_EXCEPTION ".to_string()))
            .limit_value(10.0)
            .message("too big")
            .build()
    );

    let data_set = DataSetEntry::builder()
        .id("ds")
        .origin(Origin::Entitled)
        .origin_details(OriginDetails::builder().product_id("prod-1").build())
        .build();
    assert_ne!(
        data_set,
        DataSetEntry::builder()
            .id("ds")
            .origin(Origin::Entitled)
            .origin_details(OriginDetails::builder().product_id("prod-2").build())
            .build()
    );
}

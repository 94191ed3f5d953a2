/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use dataexchange::error::{
    CancelJobErrorKind, GetDataSetError, GetDataSetErrorKind, ListTagsForResourceErrorKind,
    ResourceNotFoundException, StartJobErrorKind,
};
use dataexchange::model::{
    AssetSourceEntry, AssetType, Code, JobErrorLimitName, Origin, ResourceType, State, Type,
};
use dataexchange::operation::{
    CancelJob, GetAsset, GetDataSet, GetJob, ListJobs, ListTagsForResource, StartJob,
};
use smithy_http::body::SdkBody;
use smithy_http::middleware::load_response;
use smithy_http::response::ParseStrictResponse;
use smithy_types::retry::{ErrorKind, ProvideErrorKind};
use smithy_types::Instant;

fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
    http::Response::builder()
        .status(status)
        .header("x-amzn-requestid", "req-1")
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap()
}

#[test]
fn parse_get_data_set() {
    let output = GetDataSet::new()
        .parse(&response(
            200,
            r#"{
                "Arn": "arn:aws:dataexchange:us-east-1::data-sets/ds",
                "AssetType": "S3_SNAPSHOT",
                "CreatedAt": "2021-05-01T12:00:00Z",
                "Description": null,
                "Id": "ds",
                "Name": "weather",
                "Origin": "ENTITLED",
                "OriginDetails": {"ProductId": "prod-1"},
                "Tags": {"team": "forecast"},
                "SomethingAddedLater": {"nested": [1, 2, {"deep": true}]},
                "UpdatedAt": "2021-05-01T12:00:00.5Z"
            }"#,
        ))
        .expect("valid response");
    assert_eq!(
        output.arn(),
        Some("arn:aws:dataexchange:us-east-1::data-sets/ds")
    );
    assert_eq!(output.asset_type(), Some(&AssetType::S3Snapshot));
    assert_eq!(
        output.created_at(),
        Some(&Instant::from_epoch_seconds(1619870400))
    );
    assert_eq!(output.description(), None);
    assert_eq!(output.origin(), Some(&Origin::Entitled));
    assert_eq!(
        output.origin_details().and_then(|details| details.product_id()),
        Some("prod-1")
    );
    assert_eq!(
        output.tags().and_then(|tags| tags.get("team")).map(String::as_str),
        Some("forecast")
    );
    assert_eq!(
        output.updated_at(),
        Some(&Instant::from_secs_and_nanos(1619870400, 500_000_000))
    );
    assert_eq!(output.source_id(), None);
}

#[test]
fn nested_structure_of_the_wrong_type_is_none() {
    for origin_details in &["\"x\"", "5", "[{\"ProductId\": \"prod-1\"}]", "true"] {
        let body = format!(
            r#"{{"Id": "ds", "OriginDetails": {}, "Name": "weather", "Origin": "OWNED"}}"#,
            origin_details
        );
        let raw = http::Response::builder()
            .status(200)
            .body(Bytes::from(body))
            .unwrap();
        let output = GetDataSet::new().parse(&raw).expect("parse continues");
        assert_eq!(output.origin_details(), None, "{}", origin_details);
        assert_eq!(output.id(), Some("ds"));
        assert_eq!(output.name(), Some("weather"));
        assert_eq!(output.origin(), Some(&Origin::Owned));
    }

    let output = GetAsset::new()
        .parse(&response(
            200,
            r#"{"AssetDetails": {"S3SnapshotAsset": "large"}, "Name": "data.csv"}"#,
        ))
        .expect("parse continues");
    let details = output.asset_details().expect("details object is present");
    assert_eq!(details.s3_snapshot_asset(), None);
    assert_eq!(output.name(), Some("data.csv"));
}

#[test]
fn unknown_fields_do_not_change_the_record() {
    let without = GetJob::new()
        .parse(&response(
            200,
            r#"{"Id": "job", "State": "COMPLETED", "Errors": [{"Code": "MALWARE_DETECTED", "LimitValue": 1.5}]}"#,
        ))
        .expect("valid response");
    let with = GetJob::new()
        .parse(&response(
            200,
            r#"{
                "Id": "job",
                "Progress": {"Percent": 100, "Stages": ["copy", null]},
                "State": "COMPLETED",
                "Errors": [{"Code": "MALWARE_DETECTED", "Retryable": false, "LimitValue": 1.5}],
                "Priority": null
            }"#,
        ))
        .expect("valid response");
    assert_eq!(with, without);
    assert_ne!(
        without,
        GetJob::new()
            .parse(&response(200, r#"{"Id": "job", "State": "ERROR"}"#))
            .expect("valid response")
    );
}

#[test]
fn parse_job_with_errors() {
    let output = GetJob::new()
        .parse(&response(
            200,
            r#"{
                "Id": "job",
                "State": "ERROR",
                "Type": "IMPORT_ASSETS_FROM_S3",
                "Details": {
                    "ImportAssetsFromS3": {
                        "AssetSources": [{"Bucket": "b", "Key": "k"}, null],
                        "DataSetId": "ds",
                        "RevisionId": "rev"
                    }
                },
                "Errors": [{
                    "Code": "VALIDATION_EXCEPTION",
                    "LimitName": "Asset size in GB",
                    "LimitValue": 10,
                    "Message": "too big",
                    "Details": {
                        "ImportAssetsFromS3JobErrorDetails": [{"Bucket": "b", "Key": "k"}]
                    }
                }]
            }"#,
        ))
        .expect("valid response");
    assert_eq!(output.state(), Some(&State::Error));
    assert_eq!(output.r#type(), Some(&Type::ImportAssetsFromS3));
    let sources = output
        .details()
        .and_then(|details| details.import_assets_from_s3())
        .and_then(|s3| s3.asset_sources())
        .expect("sources are present");
    assert_eq!(
        sources,
        &[AssetSourceEntry::builder().bucket("b").key("k").build()][..]
    );
    let errors = output.errors().expect("errors are present");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code(), Some(&Code::ValidationException));
    assert_eq!(errors[0].limit_name(), Some(&JobErrorLimitName::AssetSizeInGb));
    assert_eq!(errors[0].limit_value(), Some(10.0));
    assert_eq!(
        errors[0]
            .details()
            .and_then(|details| details.import_assets_from_s3_job_error_details())
            .map(|entries| entries.len()),
        Some(1)
    );
}

#[test]
fn parse_list_jobs_with_unknown_enum() {
    let output = ListJobs::new()
        .parse(&response(
            200,
            r#"{"Jobs": [{"Id": "a", "State": "PAUSED"}, {"Id": "b"}], "NextToken": "next"}"#,
        ))
        .unwrap();
    let jobs = output.jobs().unwrap();
    assert_eq!(jobs[0].state(), Some(&State::Unknown("PAUSED".to_string())));
    assert_eq!(jobs[1].id(), Some("b"));
    assert_eq!(output.next_token(), Some("next"));
}

#[test]
fn empty_success_body() {
    CancelJob::new()
        .parse(&response(204, ""))
        .expect("no content is a success");
    let tags = ListTagsForResource::new().parse(&response(200, "")).unwrap();
    assert_eq!(tags.tags(), None);
}

#[test]
fn modeled_error_from_header() {
    let raw = http::Response::builder()
        .status(404)
        .header(
            "x-amzn-errortype",
            "ResourceNotFoundException:http://internal.amazon.com/coral/com.amazonaws.dataexchange/",
        )
        .header("x-amzn-requestid", "req-2")
        .body(Bytes::from_static(
            br#"{"Message": "no such data set", "ResourceId": "ds", "ResourceType": "DATA_SET"}"#,
        ))
        .unwrap();
    let err: GetDataSetError = GetDataSet::new().parse(&raw).unwrap_err();
    assert!(err.is_resource_not_found_exception());
    assert_eq!(err.code(), Some("ResourceNotFoundException"));
    assert_eq!(err.message(), Some("no such data set"));
    assert_eq!(err.request_id(), Some("req-2"));
    assert_eq!(
        err.to_string(),
        "ResourceNotFoundException: no such data set"
    );
    match err.kind {
        GetDataSetErrorKind::ResourceNotFoundException(inner) => {
            assert_eq!(
                inner,
                ResourceNotFoundException::builder()
                    .message("no such data set")
                    .resource_id("ds")
                    .resource_type(ResourceType::DataSet)
                    .build()
            );
            assert_eq!(inner.status_code(), 404);
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
}

#[test]
fn modeled_error_from_body() {
    let err = CancelJob::new()
        .parse(&response(
            429,
            r#"{"__type": "ThrottlingException", "message": "slow down"}"#,
        ))
        .unwrap_err();
    assert!(matches!(err.kind, CancelJobErrorKind::ThrottlingException(_)));
    assert_eq!(
        err.retryable_error_kind(),
        Some(ErrorKind::ThrottlingError)
    );

    let err = CancelJob::new()
        .parse(&response(500, r#"{"code": "InternalServerException"}"#))
        .unwrap_err();
    assert!(err.is_internal_server_exception());
    assert_eq!(err.retryable_error_kind(), Some(ErrorKind::ServerError));
    assert_eq!(err.to_string(), "InternalServerException");
}

#[test]
fn unmodeled_error_is_generic() {
    let err = StartJob::new()
        .parse(&response(
            400,
            r#"{"__type": "SomethingNewException", "message": "new failure"}"#,
        ))
        .unwrap_err();
    assert!(matches!(err.kind, StartJobErrorKind::Unhandled(_)));
    assert_eq!(err.code(), Some("SomethingNewException"));
    assert_eq!(err.message(), Some("new failure"));
    assert_eq!(err.request_id(), Some("req-1"));
    assert_eq!(err.retryable_error_kind(), None);
}

#[test]
fn operations_without_modeled_errors() {
    let err = ListTagsForResource::new()
        .parse(&response(403, r#"{"__type": "AccessDeniedException"}"#))
        .unwrap_err();
    assert!(matches!(err.kind, ListTagsForResourceErrorKind::Unhandled(_)));
    assert_eq!(err.code(), Some("AccessDeniedException"));
}

#[test]
fn error_without_code_is_unhandled() {
    let err = GetDataSet::new()
        .parse(&response(502, "{}"))
        .unwrap_err();
    assert!(matches!(err.kind, GetDataSetErrorKind::Unhandled(_)));
    assert_eq!(err.code(), None);
}

#[test]
fn malformed_success_body_is_unhandled() {
    let err = GetDataSet::new()
        .parse(&response(200, r#"{"Id": "ds""#))
        .unwrap_err();
    assert!(matches!(err.kind, GetDataSetErrorKind::Unhandled(_)));

    let err = GetDataSet::new()
        .parse(&response(200, r#"{"Id": 5}"#))
        .unwrap_err();
    assert!(matches!(err.kind, GetDataSetErrorKind::Unhandled(_)));
}

#[tokio::test]
async fn load_and_parse_response() {
    let raw = http::Response::builder()
        .status(200)
        .body(SdkBody::from(r#"{"Id": "job", "State": "COMPLETED"}"#))
        .unwrap();
    let success = load_response(raw, &GetJob::new())
        .await
        .expect("successful response");
    assert_eq!(success.parsed.id(), Some("job"));
    assert_eq!(success.parsed.state(), Some(&State::Completed));
    assert_eq!(success.raw.status(), 200);
}

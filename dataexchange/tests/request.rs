/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_endpoint::AwsEndpointStage;
use aws_types::SigningService;
use dataexchange::input::{
    CancelJobInput, CreateDataSetInput, CreateJobInput, GetAssetInput, ListDataSetsInput,
    UntagResourceInput, UpdateRevisionInput,
};
use dataexchange::model::{
    AssetSourceEntry, AssetType, ImportAssetsFromS3RequestDetails, RequestDetails, Type,
};
use dataexchange::{Config, Endpoint, Region};
use protocol_test_helpers::{
    assert_ok, forbid_headers, forbid_query_params, validate_body, validate_headers,
    validate_query_string, MediaType,
};
use smithy_http::middleware::MapRequest;
use smithy_http::operation::BuildError;

fn config() -> Config {
    Config::builder().region(Region::new("us-east-1")).build()
}

#[test]
fn create_job_request() {
    let input = CreateJobInput::builder()
        .r#type(Type::ImportAssetsFromS3)
        .details(
            RequestDetails::builder()
                .import_assets_from_s3(
                    ImportAssetsFromS3RequestDetails::builder()
                        .data_set_id("ds")
                        .revision_id("rev")
                        .asset_sources(AssetSourceEntry::builder().bucket("b").key("k").build())
                        .build(),
                )
                .build(),
        )
        .build()
        .unwrap();
    let op = input.make_operation(&config()).unwrap();
    let request = op.request().http();
    assert_eq!(request.method(), "POST");
    assert_eq!(request.uri(), "/v1/jobs");
    assert_ok(validate_headers(
        request,
        &[("content-type", "application/json")],
    ));
    let body = request.body().bytes().expect("body is in memory");
    assert_eq!(
        request.headers()["content-length"],
        body.len().to_string().as_str()
    );
    assert_ok(validate_body(
        body,
        r#"{
            "Details": {
                "ImportAssetsFromS3": {
                    "AssetSources": [{"Bucket": "b", "Key": "k"}],
                    "DataSetId": "ds",
                    "RevisionId": "rev"
                }
            },
            "Type": "IMPORT_ASSETS_FROM_S3"
        }"#,
        MediaType::Json,
    ));
}

#[test]
fn create_data_set_writes_tags_and_enum() {
    let input = CreateDataSetInput::builder()
        .asset_type(AssetType::S3Snapshot)
        .name("weather")
        .description("daily readings")
        .tags("team", "forecast")
        .tags("env", "prod")
        .build()
        .unwrap();
    let op = input.make_operation(&config()).unwrap();
    let request = op.request().http();
    assert_eq!(request.uri(), "/v1/data-sets");
    assert_ok(validate_body(
        request.body().bytes().unwrap(),
        r#"{"AssetType":"S3_SNAPSHOT","Description":"daily readings","Name":"weather","Tags":{"env":"prod","team":"forecast"}}"#,
        MediaType::Json,
    ));
}

#[test]
fn update_revision_is_a_patch_with_boolean() {
    let input = UpdateRevisionInput::builder()
        .data_set_id("ds")
        .revision_id("rev")
        .comment("final")
        .finalized(true)
        .build()
        .unwrap();
    let op = input.make_operation(&config()).unwrap();
    let request = op.request().http();
    assert_eq!(request.method(), "PATCH");
    assert_eq!(request.uri(), "/v1/data-sets/ds/revisions/rev");
    assert_ok(validate_body(
        request.body().bytes().unwrap(),
        r#"{"Comment":"final","Finalized":true}"#,
        MediaType::Json,
    ));
}

#[test]
fn list_data_sets_uses_query_string() {
    let input = ListDataSetsInput::builder()
        .max_results(10)
        .next_token("a b")
        .origin("OWNED")
        .build()
        .unwrap();
    let op = input.make_operation(&config()).unwrap();
    let request = op.request().http();
    assert_eq!(request.method(), "GET");
    assert_eq!(request.uri().path(), "/v1/data-sets");
    assert_ok(validate_query_string(
        request,
        &["maxResults=10", "nextToken=a%20b", "origin=OWNED"],
    ));
    assert_ok(forbid_headers(request, &["content-type", "content-length"]));
    assert_eq!(request.body().bytes(), Some(&b""[..]));
}

#[test]
fn unset_query_params_are_omitted() {
    let input = ListDataSetsInput::builder().build().unwrap();
    let op = input.make_operation(&config()).unwrap();
    let request = op.request().http();
    assert_eq!(request.uri(), "/v1/data-sets");
    assert_ok(forbid_query_params(
        request,
        &["maxResults", "nextToken", "origin"],
    ));
}

#[test]
fn list_query_params_are_repeated() {
    let input = UntagResourceInput::builder()
        .resource_arn("arn:aws:dataexchange:us-east-1:123456789012:data-sets/ds")
        .tag_keys("team")
        .tag_keys("env")
        .build()
        .unwrap();
    let op = input.make_operation(&config()).unwrap();
    let request = op.request().http();
    assert_eq!(request.method(), "DELETE");
    assert_eq!(
        request.uri().path(),
        "/tags/arn%3Aaws%3Adataexchange%3Aus-east-1%3A123456789012%3Adata-sets%2Fds"
    );
    assert_eq!(request.uri().query(), Some("tagKeys=team&tagKeys=env"));
}

#[test]
fn labels_are_percent_encoded() {
    let input = GetAssetInput::builder()
        .data_set_id("ds/1")
        .revision_id("rev 2")
        .asset_id("asset")
        .build()
        .unwrap();
    let op = input.make_operation(&config()).unwrap();
    assert_eq!(
        op.request().http().uri(),
        "/v1/data-sets/ds%2F1/revisions/rev%202/assets/asset"
    );
}

#[test]
fn missing_label_fails_to_build() {
    let input = GetAssetInput::builder()
        .data_set_id("ds")
        .revision_id("rev")
        .build()
        .unwrap();
    match input.make_operation(&config()) {
        Err(BuildError::MissingField { field, .. }) => assert_eq!(field, "asset_id"),
        other => panic!("expected a missing field error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn empty_label_fails_to_build() {
    let input = CancelJobInput::builder().job_id("").build().unwrap();
    let err = input.make_operation(&config()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "job_id was missing. cannot be empty or unset"
    );
}

#[test]
fn operation_carries_signing_properties() {
    let op = CancelJobInput::builder()
        .job_id("job")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let metadata = op.metadata().expect("metadata is set");
    assert_eq!(metadata.name(), "CancelJob");
    assert_eq!(metadata.service(), "dataexchange");
    let properties = op.request().properties();
    assert_eq!(properties.get::<Region>(), Some(&Region::new("us-east-1")));
    assert_eq!(
        properties.get::<SigningService>(),
        Some(&SigningService::from_static("dataexchange"))
    );
}

#[test]
fn default_endpoint_is_regional() {
    let op = CancelJobInput::builder()
        .job_id("job")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let (request, _parts) = op.into_request_response();
    let request = AwsEndpointStage.apply(request).expect("endpoint resolves");
    assert_eq!(
        request.http().uri(),
        "https://dataexchange.us-east-1.amazonaws.com/v1/jobs/job"
    );
}

#[test]
fn endpoint_can_be_overridden() {
    let config = Config::builder()
        .region(Region::new("eu-west-1"))
        .endpoint_resolver(Endpoint::immutable(http::Uri::from_static(
            "http://localhost:8080",
        )))
        .build();
    let op = ListDataSetsInput::builder()
        .max_results(5)
        .build()
        .unwrap()
        .make_operation(&config)
        .unwrap();
    let (request, _parts) = op.into_request_response();
    let request = AwsEndpointStage.apply(request).expect("endpoint resolves");
    assert_eq!(
        request.http().uri(),
        "http://localhost:8080/v1/data-sets?maxResults=5"
    );
}

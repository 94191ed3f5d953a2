/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use mediaconvert::error::{DeleteQueueErrorKind, ListTagsForResourceErrorKind};
use mediaconvert::input::{
    DeleteQueueInput, DescribeEndpointsInput, TagResourceInput, UntagResourceInput,
};
use mediaconvert::model::{
    BurninDestinationSettings, BurninSubtitleAlignment, DescribeEndpointsMode, DvbSubtitlingType,
    FontScript, ProresCodecProfile, ProresInterlaceMode, Vp9Settings,
};
use mediaconvert::operation::{
    CancelJob, DeleteQueue, DescribeEndpoints, ListTagsForResource, UntagResource,
};
use mediaconvert::{Config, Region};
use protocol_test_helpers::{assert_ok, forbid_headers, validate_body, validate_headers, MediaType};
use smithy_http::response::ParseStrictResponse;
use smithy_json::deserialize::json_token_iter;
use smithy_json::serialize::JsonObjectWriter;
use smithy_types::retry::{ErrorKind, ProvideErrorKind};

fn config() -> Config {
    Config::builder().region(Region::new("us-west-2")).build()
}

fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
    http::Response::builder()
        .status(status)
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap()
}

#[test]
fn describe_endpoints_request_uses_camel_case() {
    let op = DescribeEndpointsInput::builder()
        .max_results(20)
        .mode(DescribeEndpointsMode::GetOnly)
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let request = op.request().http();
    assert_eq!(request.method(), "POST");
    assert_eq!(request.uri(), "/2017-08-29/endpoints");
    assert_ok(validate_headers(
        request,
        &[("content-type", "application/json")],
    ));
    assert_ok(validate_body(
        request.body().bytes().unwrap(),
        r#"{"maxResults": 20, "mode": "GET_ONLY"}"#,
        MediaType::Json,
    ));
}

#[test]
fn tag_requests() {
    let op = TagResourceInput::builder()
        .arn("arn:aws:mediaconvert:us-west-2:123456789012:queues/Default")
        .tags("project", "captions")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let request = op.request().http();
    assert_eq!(request.uri(), "/2017-08-29/tags");
    assert_ok(validate_body(
        request.body().bytes().unwrap(),
        r#"{"arn": "arn:aws:mediaconvert:us-west-2:123456789012:queues/Default", "tags": {"project": "captions"}}"#,
        MediaType::Json,
    ));

    let op = UntagResourceInput::builder()
        .arn("arn:aws:mediaconvert:us-west-2:123456789012:queues/Default")
        .tag_keys("project")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let request = op.request().http();
    assert_eq!(request.method(), "PUT");
    assert_eq!(
        request.uri(),
        "/2017-08-29/tags/arn%3Aaws%3Amediaconvert%3Aus-west-2%3A123456789012%3Aqueues%2FDefault"
    );
    assert_ok(validate_body(
        request.body().bytes().unwrap(),
        r#"{"tagKeys": ["project"]}"#,
        MediaType::Json,
    ));
}

#[test]
fn delete_queue_request() {
    let op = DeleteQueueInput::builder()
        .name("my queue")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let request = op.request().http();
    assert_eq!(request.method(), "DELETE");
    assert_eq!(request.uri(), "/2017-08-29/queues/my%20queue");
    assert_ok(forbid_headers(request, &["content-type"]));
    assert_eq!(op.metadata().map(|m| m.service()), Some("mediaconvert"));

    let err = DeleteQueueInput::builder()
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap_err();
    assert_eq!(err.to_string(), "name was missing. cannot be empty or unset");
}

#[test]
fn parse_describe_endpoints() {
    let output = DescribeEndpoints::new()
        .parse(&response(
            200,
            r#"{"endpoints": [{"url": "https://abcd1234.mediaconvert.us-west-2.amazonaws.com"}], "nextToken": null}"#,
        ))
        .unwrap();
    let endpoints = output.endpoints().unwrap();
    assert_eq!(
        endpoints[0].url(),
        Some("https://abcd1234.mediaconvert.us-west-2.amazonaws.com")
    );
    assert_eq!(output.next_token(), None);
}

#[test]
fn parse_list_tags() {
    let output = ListTagsForResource::new()
        .parse(&response(
            200,
            r#"{"resourceTags": {"arn": "arn:aws:mediaconvert:::presets/p", "tags": {"a": "1", "b": null}}}"#,
        ))
        .unwrap();
    let resource_tags = output.resource_tags().unwrap();
    assert_eq!(resource_tags.arn(), Some("arn:aws:mediaconvert:::presets/p"));
    let tags = resource_tags.tags().unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags.get("a").map(String::as_str), Some("1"));
}

#[test]
fn accepted_status_without_body() {
    CancelJob::new()
        .parse(&response(202, ""))
        .expect("accepted is a success");
    UntagResource::new()
        .parse(&response(200, "{}"))
        .expect("empty object is a success");
}

#[test]
fn modeled_errors() {
    let raw = http::Response::builder()
        .status(404)
        .header("x-amzn-errortype", "NotFoundException")
        .header("x-amzn-requestid", "abc")
        .body(Bytes::from_static(br#"{"message": "queue does not exist"}"#))
        .unwrap();
    let err = DeleteQueue::new().parse(&raw).unwrap_err();
    assert!(err.is_not_found_exception());
    assert_eq!(err.request_id(), Some("abc"));
    match &err.kind {
        DeleteQueueErrorKind::NotFoundException(inner) => {
            assert_eq!(inner.message(), Some("queue does not exist"));
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
    assert_eq!(err.to_string(), "NotFoundException: queue does not exist");

    let err = ListTagsForResource::new()
        .parse(&response(
            429,
            r#"{"__type": "TooManyRequestsException", "message": "slow down"}"#,
        ))
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ListTagsForResourceErrorKind::TooManyRequestsException(_)
    ));
    assert_eq!(err.retryable_error_kind(), Some(ErrorKind::ThrottlingError));

    let err = ListTagsForResource::new()
        .parse(&response(503, r#"{"__type": "InternalServerErrorException"}"#))
        .unwrap_err();
    assert_eq!(err.retryable_error_kind(), Some(ErrorKind::ServerError));

    let err = ListTagsForResource::new()
        .parse(&response(400, r#"{"__type": "BadRequestException"}"#))
        .unwrap_err();
    assert!(err.is_bad_request_exception());
    assert_eq!(err.retryable_error_kind(), None);
}

#[test]
fn caption_settings_json() {
    let settings = BurninDestinationSettings::builder()
        .alignment(BurninSubtitleAlignment::Centered)
        .font_script(FontScript::Hant)
        .shadow_x_offset(-2)
        .x_position(10)
        .build();
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    mediaconvert::json_ser::serialize_structure_burnin_destination_settings(&mut object, &settings);
    object.finish();
    assert_ok(validate_body(
        &out,
        r#"{"alignment": "CENTERED", "fontScript": "HANT", "shadowXOffset": -2, "xPosition": 10}"#,
        MediaType::Json,
    ));

    let mut tokens = json_token_iter(out.as_bytes()).peekable();
    let parsed = mediaconvert::json_deser::deser_structure_burnin_destination_settings(&mut tokens)
        .unwrap()
        .unwrap();
    assert_eq!(parsed, settings);
}

#[test]
fn dvb_settings_carry_subtitling_type() {
    let mut tokens = json_token_iter(
        br#"{"subtitlingType": "HEARING_IMPAIRED", "fontOpacity": 255, "unknownField": [true]}"#,
    )
    .peekable();
    let parsed = mediaconvert::json_deser::deser_structure_dvb_sub_destination_settings(&mut tokens)
        .unwrap()
        .unwrap();
    assert_eq!(parsed.subtitling_type(), Some(&DvbSubtitlingType::HearingImpaired));
    assert_eq!(parsed.font_opacity(), Some(255));
    assert_eq!(parsed.outline_size(), None);
}

#[test]
fn video_codec_settings() {
    let mut tokens = json_token_iter(
        br#"{"gopSize": 90.5, "bitrate": 5000000, "rateControlMode": "VBR"}"#,
    )
    .peekable();
    let vp9: Vp9Settings = mediaconvert::json_deser::deser_structure_vp9_settings(&mut tokens)
        .unwrap()
        .unwrap();
    assert_eq!(vp9.gop_size(), Some(90.5));
    assert_eq!(vp9.bitrate(), Some(5_000_000));

    assert_eq!(
        ProresCodecProfile::from("APPLE_PRORES_422_HQ"),
        ProresCodecProfile::AppleProres422Hq
    );
    assert_eq!(
        ProresInterlaceMode::FollowBottomField.as_str(),
        "FOLLOW_BOTTOM_FIELD"
    );
    assert_eq!(ProresCodecProfile::values().len(), 4);
    assert!(ProresCodecProfile::try_parse("APPLE_PRORES_4444").is_err());
}

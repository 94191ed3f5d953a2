/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use mediaconvert::error::GetQueueErrorKind;
use mediaconvert::input::{
    AssociateCertificateInput, CreateQueueInput, DisassociateCertificateInput, ListQueuesInput,
    UpdateQueueInput,
};
use mediaconvert::model::{
    Commitment, Order, PricingPlan, QueueListBy, QueueStatus, RenewalType,
    ReservationPlanSettings, ReservationPlanStatus, Type,
};
use mediaconvert::operation::{
    AssociateCertificate, DisassociateCertificate, GetQueue, ListQueues,
};
use mediaconvert::{Config, Region};
use protocol_test_helpers::{
    assert_ok, forbid_headers, validate_body, validate_headers, validate_query_string, MediaType,
};
use smithy_http::response::ParseStrictResponse;
use smithy_types::Instant;

const CERTIFICATE_ARN: &str = "arn:aws:acm:us-west-2:123456789012:certificate/abc";

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
fn certificate_requests() {
    let op = AssociateCertificateInput::builder()
        .arn(CERTIFICATE_ARN)
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let request = op.request().http();
    assert_eq!(request.method(), "POST");
    assert_eq!(request.uri(), "/2017-08-29/certificates");
    assert_ok(validate_headers(
        request,
        &[("content-type", "application/json")],
    ));
    assert_ok(validate_body(
        request.body().bytes().unwrap(),
        r#"{"arn": "arn:aws:acm:us-west-2:123456789012:certificate/abc"}"#,
        MediaType::Json,
    ));

    let op = DisassociateCertificateInput::builder()
        .arn(CERTIFICATE_ARN)
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let request = op.request().http();
    assert_eq!(request.method(), "DELETE");
    assert_eq!(
        request.uri(),
        "/2017-08-29/certificates/arn%3Aaws%3Aacm%3Aus-west-2%3A123456789012%3Acertificate%2Fabc"
    );
    assert_ok(forbid_headers(request, &["content-type"]));

    let err = DisassociateCertificateInput::builder()
        .arn("")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap_err();
    assert_eq!(err.to_string(), "arn was missing. cannot be empty or unset");
}

#[test]
fn certificate_responses_have_no_members() {
    AssociateCertificate::new()
        .parse(&response(202, ""))
        .expect("accepted is a success");
    DisassociateCertificate::new()
        .parse(&response(202, "{}"))
        .expect("empty object is a success");
    let err = AssociateCertificate::new()
        .parse(&response(
            404,
            r#"{"__type": "NotFoundException", "message": "no such certificate"}"#,
        ))
        .unwrap_err();
    assert!(err.is_not_found_exception());
}

#[test]
fn create_queue_request() {
    let op = CreateQueueInput::builder()
        .name("batch")
        .description("overnight transcodes")
        .pricing_plan(PricingPlan::Reserved)
        .reservation_plan_settings(
            ReservationPlanSettings::builder()
                .commitment(Commitment::OneYear)
                .renewal_type(RenewalType::AutoRenew)
                .reserved_slots(2)
                .build(),
        )
        .status(QueueStatus::Active)
        .tags("team", "media")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let request = op.request().http();
    assert_eq!(request.method(), "POST");
    assert_eq!(request.uri(), "/2017-08-29/queues");
    assert_ok(validate_body(
        request.body().bytes().unwrap(),
        r#"{
            "description": "overnight transcodes",
            "name": "batch",
            "pricingPlan": "RESERVED",
            "reservationPlanSettings": {"commitment": "ONE_YEAR", "renewalType": "AUTO_RENEW", "reservedSlots": 2},
            "status": "ACTIVE",
            "tags": {"team": "media"}
        }"#,
        MediaType::Json,
    ));
}

#[test]
fn list_and_update_queue_requests() {
    let op = ListQueuesInput::builder()
        .list_by(QueueListBy::CreationDate)
        .max_results(10)
        .order(Order::Descending)
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let request = op.request().http();
    assert_eq!(request.method(), "GET");
    assert_eq!(
        request.uri(),
        "/2017-08-29/queues?listBy=CREATION_DATE&maxResults=10&order=DESCENDING"
    );
    assert_ok(validate_query_string(
        request,
        &["listBy=CREATION_DATE", "maxResults=10", "order=DESCENDING"],
    ));

    let op = UpdateQueueInput::builder()
        .name("batch")
        .status(QueueStatus::Paused)
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let request = op.request().http();
    assert_eq!(request.method(), "PUT");
    assert_eq!(request.uri(), "/2017-08-29/queues/batch");
    assert_ok(validate_body(
        request.body().bytes().unwrap(),
        r#"{"status": "PAUSED"}"#,
        MediaType::Json,
    ));
}

#[test]
fn parse_queue_with_epoch_timestamps() {
    let output = GetQueue::new()
        .parse(&response(
            200,
            r#"{"queue": {
                "arn": "arn:aws:mediaconvert:us-west-2:123456789012:queues/batch",
                "createdAt": 1570000000,
                "lastUpdated": 1570000100.25,
                "name": "batch",
                "pricingPlan": "RESERVED",
                "progressingJobsCount": 1,
                "reservationPlan": {
                    "commitment": "ONE_YEAR",
                    "expiresAt": 1601536000,
                    "purchasedAt": 1570000000,
                    "renewalType": "EXPIRE",
                    "reservedSlots": 2,
                    "status": "ACTIVE"
                },
                "status": "PAUSED",
                "submittedJobsCount": 4,
                "type": "CUSTOM"
            }}"#,
        ))
        .unwrap();
    let queue = output.queue().expect("queue is present");
    assert_eq!(queue.name(), Some("batch"));
    assert_eq!(
        queue.created_at(),
        Some(&Instant::from_epoch_seconds(1570000000))
    );
    assert_eq!(
        queue.last_updated(),
        Some(&Instant::from_secs_and_nanos(1570000100, 250_000_000))
    );
    assert_eq!(queue.pricing_plan(), Some(&PricingPlan::Reserved));
    assert_eq!(queue.progressing_jobs_count(), Some(1));
    assert_eq!(queue.submitted_jobs_count(), Some(4));
    assert_eq!(queue.status(), Some(&QueueStatus::Paused));
    assert_eq!(queue.r#type(), Some(&Type::Custom));

    let plan = queue.reservation_plan().expect("reservation plan");
    assert_eq!(plan.commitment(), Some(&Commitment::OneYear));
    assert_eq!(plan.renewal_type(), Some(&RenewalType::Expire));
    assert_eq!(plan.reserved_slots(), Some(2));
    assert_eq!(plan.status(), Some(&ReservationPlanStatus::Active));
    assert_eq!(
        plan.expires_at(),
        Some(&Instant::from_epoch_seconds(1601536000))
    );
}

#[test]
fn queue_counts_out_of_range_are_unhandled() {
    let err = GetQueue::new()
        .parse(&response(
            200,
            r#"{"queue": {"name": "batch", "submittedJobsCount": 3000000000}}"#,
        ))
        .unwrap_err();
    assert!(matches!(err.kind, GetQueueErrorKind::Unhandled(_)));
    assert_eq!(err.to_string(), "invalid number");
}

#[test]
fn list_queues_response() {
    let output = ListQueues::new()
        .parse(&response(
            200,
            r#"{"nextToken": "page-2", "queues": [{"name": "Default", "type": "SYSTEM"}, null, {"name": "batch"}]}"#,
        ))
        .unwrap();
    assert_eq!(output.next_token(), Some("page-2"));
    let queues = output.queues().unwrap();
    assert_eq!(queues.len(), 2);
    assert_eq!(queues[0].r#type(), Some(&Type::System));
    assert_eq!(queues[1].name(), Some("batch"));
}

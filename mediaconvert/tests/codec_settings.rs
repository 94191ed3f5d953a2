/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use mediaconvert::model::{
    Eac3CodingMode, Eac3PhaseControl, Eac3Settings, Eac3StereoDownmix, H264CodecLevel,
    H264CodecProfile, H264FlickerAdaptiveQuantization, H264GopSizeUnits, H264QvbrSettings,
    H264RateControlMode, H264Settings, H265CodecProfile, H265Settings, H265Tiles,
    H265WriteMp4PackagingType,
    M2tsSegmentationMarkers, Mpeg2CodecLevel, Mpeg2IntraDcPrecision, Mpeg2Settings, OutputSdt,
    Vp9Settings,
};
use protocol_test_helpers::{assert_ok, validate_body, MediaType};
use smithy_json::deserialize::{json_token_iter, ErrorReason};
use smithy_json::serialize::JsonObjectWriter;

fn write<T>(value: &T, serialize: fn(&mut JsonObjectWriter<'_>, &T)) -> String {
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    serialize(&mut object, value);
    object.finish();
    out
}

#[test]
fn h264_settings_with_qvbr() {
    let settings = H264Settings::builder()
        .bitrate(5_000_000)
        .codec_level(H264CodecLevel::Level41)
        .codec_profile(H264CodecProfile::High)
        .flicker_adaptive_quantization(H264FlickerAdaptiveQuantization::Enabled)
        .gop_size(2.0)
        .gop_size_units(H264GopSizeUnits::Seconds)
        .qvbr_settings(
            H264QvbrSettings::builder()
                .max_average_bitrate(6_000_000)
                .qvbr_quality_level(8)
                .qvbr_quality_level_fine_tune(0.33)
                .build(),
        )
        .rate_control_mode(H264RateControlMode::Qvbr)
        .build();
    let out = write(
        &settings,
        mediaconvert::json_ser::serialize_structure_h264_settings,
    );
    assert_ok(validate_body(
        &out,
        r#"{
            "bitrate": 5000000,
            "codecLevel": "LEVEL_4_1",
            "codecProfile": "HIGH",
            "flickerAdaptiveQuantization": "ENABLED",
            "gopSize": 2.0,
            "gopSizeUnits": "SECONDS",
            "qvbrSettings": {"maxAverageBitrate": 6000000, "qvbrQualityLevel": 8, "qvbrQualityLevelFineTune": 0.33},
            "rateControlMode": "QVBR"
        }"#,
        MediaType::Json,
    ));

    let mut tokens = json_token_iter(out.as_bytes()).peekable();
    let parsed = mediaconvert::json_deser::deser_structure_h264_settings(&mut tokens)
        .expect("valid json")
        .expect("object is present");
    assert_eq!(parsed, settings);
    assert_eq!(H264CodecLevel::values().len(), 17);
}

#[test]
fn h265_and_mpeg2_enums() {
    let mut tokens = json_token_iter(
        br#"{"codecProfile": "MAIN10_HIGH", "tiles": "ENABLED", "writeMp4PackagingType": "HVC1", "slices": 4}"#,
    )
    .peekable();
    let h265: H265Settings = mediaconvert::json_deser::deser_structure_h265_settings(&mut tokens)
        .unwrap()
        .unwrap();
    assert_eq!(h265.codec_profile(), Some(&H265CodecProfile::Main10High));
    assert_eq!(h265.tiles(), Some(&H265Tiles::Enabled));
    assert_eq!(
        h265.write_mp4_packaging_type(),
        Some(&H265WriteMp4PackagingType::Hvc1)
    );
    assert_eq!(h265.slices(), Some(4));

    let mpeg2 = Mpeg2Settings::builder()
        .codec_level(Mpeg2CodecLevel::High1440)
        .intra_dc_precision(Mpeg2IntraDcPrecision::IntraDcPrecision10)
        .number_b_frames_between_reference_frames(2)
        .build();
    let out = write(
        &mpeg2,
        mediaconvert::json_ser::serialize_structure_mpeg2_settings,
    );
    assert_ok(validate_body(
        &out,
        r#"{"codecLevel": "HIGH1440", "intraDcPrecision": "INTRA_DC_PRECISION_10", "numberBFramesBetweenReferenceFrames": 2}"#,
        MediaType::Json,
    ));
    assert_eq!(Mpeg2IntraDcPrecision::values().len(), 5);
}

#[test]
fn eac3_settings_mix_levels() {
    let settings = Eac3Settings::builder()
        .bitrate(384000)
        .coding_mode(Eac3CodingMode::CodingMode32)
        .dialnorm(24)
        .lo_ro_center_mix_level(-3.0)
        .lt_rt_surround_mix_level(-1.5)
        .phase_control(Eac3PhaseControl::Shift90Degrees)
        .stereo_downmix(Eac3StereoDownmix::Dpl2)
        .build();
    let out = write(
        &settings,
        mediaconvert::json_ser::serialize_structure_eac3_settings,
    );
    assert_ok(validate_body(
        &out,
        r#"{
            "bitrate": 384000,
            "codingMode": "CODING_MODE_3_2",
            "dialnorm": 24,
            "loRoCenterMixLevel": -3.0,
            "ltRtSurroundMixLevel": -1.5,
            "phaseControl": "SHIFT_90_DEGREES",
            "stereoDownmix": "DPL2"
        }"#,
        MediaType::Json,
    ));
    let mut tokens = json_token_iter(out.as_bytes()).peekable();
    let parsed = mediaconvert::json_deser::deser_structure_eac3_settings(&mut tokens)
        .unwrap()
        .unwrap();
    assert_eq!(parsed, settings);
}

#[test]
fn m2ts_settings_nested_tables_and_pids() {
    let mut tokens = json_token_iter(
        br#"{
            "audioPids": [482, null, 483],
            "dvbNitSettings": 7,
            "dvbSdtSettings": {"outputSdt": "SDT_MANUAL", "serviceName": "ch1", "sdtInterval": 500},
            "fragmentTime": 1.5,
            "scte35Esam": {"scte35EsamPid": 508},
            "segmentationMarkers": "EBP_LEGACY",
            "videoPid": 481
        }"#,
    )
    .peekable();
    let m2ts = mediaconvert::json_deser::deser_structure_m2ts_settings(&mut tokens)
        .unwrap()
        .unwrap();
    assert_eq!(m2ts.audio_pids(), Some(&[482, 483][..]));
    assert_eq!(m2ts.dvb_nit_settings(), None);
    let sdt = m2ts.dvb_sdt_settings().expect("sdt settings");
    assert_eq!(sdt.output_sdt(), Some(&OutputSdt::SdtManual));
    assert_eq!(sdt.service_name(), Some("ch1"));
    assert_eq!(sdt.sdt_interval(), Some(500));
    assert_eq!(m2ts.fragment_time(), Some(1.5));
    assert_eq!(
        m2ts.scte35_esam().and_then(|esam| esam.scte35_esam_pid()),
        Some(508)
    );
    assert_eq!(
        m2ts.segmentation_markers(),
        Some(&M2tsSegmentationMarkers::EbpLegacy)
    );
    assert_eq!(m2ts.video_pid(), Some(481));

    let out = write(&m2ts, mediaconvert::json_ser::serialize_structure_m2ts_settings);
    assert_ok(validate_body(
        &out,
        r#"{
            "audioPids": [482, 483],
            "dvbSdtSettings": {"outputSdt": "SDT_MANUAL", "sdtInterval": 500, "serviceName": "ch1"},
            "fragmentTime": 1.5,
            "scte35Esam": {"scte35EsamPid": 508},
            "segmentationMarkers": "EBP_LEGACY",
            "videoPid": 481
        }"#,
        MediaType::Json,
    ));

    let mut tokens = json_token_iter(br#"{"audioPids": [482, 2147483648]}"#).peekable();
    let err = mediaconvert::json_deser::deser_structure_m2ts_settings(&mut tokens)
        .expect_err("pid does not fit an i32");
    assert_eq!(err.reason(), &ErrorReason::InvalidNumber);
}

#[test]
fn integers_out_of_range_are_rejected() {
    let parse = |json: &'static [u8]| {
        let mut tokens = json_token_iter(json).peekable();
        mediaconvert::json_deser::deser_structure_vp9_settings(&mut tokens)
    };
    let err = parse(br#"{"bitrate": 4294967297}"#).expect_err("too large for i32");
    assert_eq!(err.reason(), &ErrorReason::InvalidNumber);
    assert!(parse(br#"{"maxBitrate": 2.9}"#).is_err());
    assert!(parse(br#"{"parNumerator": -2147483649}"#).is_err());
    assert!(parse(br#"{"hrdBufferSize": 1e20}"#).is_err());

    let vp9: Vp9Settings = parse(br#"{"bitrate": 4000000.0, "parNumerator": -2147483648}"#)
        .unwrap()
        .unwrap();
    assert_eq!(vp9.bitrate(), Some(4_000_000));
    assert_eq!(vp9.par_numerator(), Some(i32::MIN));
}

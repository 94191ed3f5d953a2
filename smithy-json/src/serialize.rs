/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::escape::escape_string;
use smithy_types::instant::Format;
use smithy_types::{Instant, Number};

/// Writes the members of a JSON object into a borrowed `String`.
///
/// The opening brace is written on construction and the closing brace by [`finish`](Self::finish).
pub struct JsonObjectWriter<'a> {
    json: &'a mut String,
    started: bool,
}

impl<'a> JsonObjectWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        output.push('{');
        Self {
            json: output,
            started: false,
        }
    }

    /// Writes a null value with the given `key`.
    pub fn null(&mut self, key: &str) -> &mut Self {
        self.key(key).push_str("null");
        self
    }

    /// Writes the boolean `value` with the given `key`.
    pub fn boolean(&mut self, key: &str, value: bool) -> &mut Self {
        append_bool(self.key(key), value);
        self
    }

    /// Writes a string `value` with the given `key`.
    pub fn string(&mut self, key: &str, value: &str) -> &mut Self {
        append_string(self.key(key), value);
        self
    }

    /// Writes a string `value` with the given `key` without escaping it.
    pub fn string_unchecked(&mut self, key: &str, value: &str) -> &mut Self {
        append_string_unchecked(self.key(key), value);
        self
    }

    /// Writes a number `value` with the given `key`.
    pub fn number(&mut self, key: &str, value: Number) -> &mut Self {
        append_number(self.key(key), value);
        self
    }

    /// Writes an Instant `value` with the given `key` and `format`.
    pub fn instant(&mut self, key: &str, instant: &Instant, format: Format) -> &mut Self {
        append_instant(self.key(key), instant, format);
        self
    }

    /// Starts an array with the given `key`.
    pub fn start_array(&mut self, key: &str) -> JsonArrayWriter<'_> {
        JsonArrayWriter::new(self.key(key))
    }

    /// Starts an object with the given `key`.
    pub fn start_object(&mut self, key: &str) -> JsonObjectWriter<'_> {
        JsonObjectWriter::new(self.key(key))
    }

    /// Finishes the object.
    pub fn finish(self) {
        self.json.push('}');
    }

    fn key(&mut self, key: &str) -> &mut String {
        if self.started {
            self.json.push(',');
        }
        self.started = true;
        append_string(self.json, key);
        self.json.push(':');
        self.json
    }
}

/// Writes the elements of a JSON array into a borrowed `String`.
pub struct JsonArrayWriter<'a> {
    json: &'a mut String,
    started: bool,
}

impl<'a> JsonArrayWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        output.push('[');
        Self {
            json: output,
            started: false,
        }
    }

    /// Writes a null value to the array.
    pub fn null(&mut self) -> &mut Self {
        self.element().push_str("null");
        self
    }

    /// Writes the boolean `value` to the array.
    pub fn boolean(&mut self, value: bool) -> &mut Self {
        append_bool(self.element(), value);
        self
    }

    /// Writes a string to the array.
    pub fn string(&mut self, value: &str) -> &mut Self {
        append_string(self.element(), value);
        self
    }

    /// Writes a string `value` to the array without escaping it.
    pub fn string_unchecked(&mut self, value: &str) -> &mut Self {
        append_string_unchecked(self.element(), value);
        self
    }

    /// Writes a number `value` to the array.
    pub fn number(&mut self, value: Number) -> &mut Self {
        append_number(self.element(), value);
        self
    }

    /// Writes an Instant `value` using `format` to the array.
    pub fn instant(&mut self, instant: &Instant, format: Format) -> &mut Self {
        append_instant(self.element(), instant, format);
        self
    }

    /// Starts a nested array inside of the array.
    pub fn start_array(&mut self) -> JsonArrayWriter<'_> {
        JsonArrayWriter::new(self.element())
    }

    /// Starts a nested object inside of the array.
    pub fn start_object(&mut self) -> JsonObjectWriter<'_> {
        JsonObjectWriter::new(self.element())
    }

    /// Finishes the array.
    pub fn finish(self) {
        self.json.push(']');
    }

    fn element(&mut self) -> &mut String {
        if self.started {
            self.json.push(',');
        }
        self.started = true;
        self.json
    }
}

fn append_bool(json: &mut String, value: bool) {
    json.push_str(if value { "true" } else { "false" });
}

fn append_string(json: &mut String, value: &str) {
    append_string_unchecked(json, &escape_string(value));
}

fn append_string_unchecked(json: &mut String, value: &str) {
    json.push('"');
    json.push_str(value);
    json.push('"');
}

fn append_instant(json: &mut String, value: &Instant, format: Format) {
    let formatted = value.fmt(format);
    match format {
        Format::EpochSeconds => json.push_str(&formatted),
        Format::DateTime => append_string(json, &formatted),
    }
}

fn append_number(json: &mut String, value: Number) {
    match value {
        Number::PosInt(value) => json.push_str(itoa::Buffer::new().format(value)),
        Number::NegInt(value) => json.push_str(itoa::Buffer::new().format(value)),
        // JSON has no representation for NaN or the infinities
        Number::Float(value) if !value.is_finite() => json.push_str("null"),
        Number::Float(value) => json.push_str(ryu::Buffer::new().format_finite(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::{append_number, append_string_unchecked, JsonArrayWriter, JsonObjectWriter};
    use proptest::proptest;
    use smithy_types::instant::Format;
    use smithy_types::{Instant, Number};

    #[test]
    fn empty() {
        let mut output = String::new();
        JsonObjectWriter::new(&mut output).finish();
        assert_eq!("{}", &output);

        let mut output = String::new();
        JsonArrayWriter::new(&mut output).finish();
        assert_eq!("[]", &output);
    }

    #[test]
    fn objects_inside_array() {
        let mut output = String::new();
        let mut array = JsonArrayWriter::new(&mut output);
        let mut first = array.start_object();
        first.string("Bucket", "b").string("Key", "k");
        first.finish();
        array.start_object().finish();
        array.finish();
        assert_eq!(r#"[{"Bucket":"b","Key":"k"},{}]"#, &output);
    }

    #[test]
    fn nested_object_and_array() {
        let mut output = String::new();
        let mut details = JsonObjectWriter::new(&mut output);
        let mut import = details.start_object("ImportAssetsFromS3");
        import.string("DataSetId", "ds-1");
        let mut sources = import.start_array("AssetSources");
        sources.start_object().finish();
        sources.finish();
        import.finish();
        details.start_array("ba\nr").finish();
        details.finish();
        assert_eq!(
            r#"{"ImportAssetsFromS3":{"DataSetId":"ds-1","AssetSources":[{}]},"ba\nr":[]}"#,
            &output
        );
    }

    #[test]
    fn array_inside_array() {
        let mut output = String::new();
        let mut outer = JsonArrayWriter::new(&mut output);
        let mut inner = outer.start_array();
        inner.number(Number::PosInt(5));
        inner.finish();
        outer.start_array().finish();
        outer.finish();
        assert_eq!("[[5],[]]", &output);
    }

    #[test]
    fn object() {
        let mut output = String::new();
        let mut object = JsonObjectWriter::new(&mut output);
        object.boolean("Finalized", true);
        object.boolean("slowPal", false);
        object.string("Comment", "line one\nline two");
        object.string_unchecked("unchecked_str", "unchecked");
        object.number("gopSize", Number::Float(3.5));
        object.null("some_null");

        let mut array = object.start_array("mixed");
        array
            .string("1")
            .number(Number::NegInt(-2))
            .string_unchecked("unchecked")
            .boolean(true)
            .boolean(false)
            .null();
        array.finish();
        object.finish();

        assert_eq!(
            r#"{"Finalized":true,"slowPal":false,"Comment":"line one\nline two","unchecked_str":"unchecked","gopSize":3.5,"some_null":null,"mixed":["1",-2,"unchecked",true,false,null]}"#,
            &output
        );
    }

    #[test]
    fn instants() {
        let mut output = String::new();
        let mut object = JsonObjectWriter::new(&mut output);
        object.instant(
            "epoch_seconds",
            &Instant::from_f64(5.2),
            Format::EpochSeconds,
        );
        object.instant(
            "CreatedAt",
            &Instant::from_str("2021-05-24T15:34:50.123Z", Format::DateTime).unwrap(),
            Format::DateTime,
        );
        let mut array = object.start_array("history");
        array.instant(&Instant::from_epoch_seconds(0), Format::DateTime);
        array.instant(&Instant::from_epoch_seconds(7), Format::EpochSeconds);
        array.finish();
        object.finish();

        assert_eq!(
            r#"{"epoch_seconds":5.2,"CreatedAt":"2021-05-24T15:34:50.123Z","history":["1970-01-01T00:00:00Z",7]}"#,
            &output,
        )
    }

    #[test]
    fn append_string_unchecked_no_escaping() {
        let mut value = String::new();
        append_string_unchecked(&mut value, "totally\ninvalid");
        assert_eq!("\"totally\ninvalid\"", &value);
    }

    fn format_test_number(number: Number) -> String {
        let mut formatted = String::new();
        append_number(&mut formatted, number);
        formatted
    }

    #[test]
    fn number_formatting() {
        assert_eq!("1", format_test_number(Number::PosInt(1)));
        assert_eq!("-1", format_test_number(Number::NegInt(-1)));
        assert_eq!("0.0", format_test_number(Number::Float(0.0)));
        assert_eq!("10000000000.0", format_test_number(Number::Float(1e10)));
        assert_eq!("-1.2", format_test_number(Number::Float(-1.2)));

        for non_finite in &[f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                serde_json::to_string(non_finite).unwrap(),
                format_test_number(Number::Float(*non_finite))
            );
        }
    }

    proptest! {
        #[test]
        fn matches_serde_json_pos_int_format(value: u64) {
            assert_eq!(
                serde_json::to_string(&value).unwrap(),
                format_test_number(Number::PosInt(value)),
            )
        }

        #[test]
        fn matches_serde_json_neg_int_format(value: i64) {
            assert_eq!(
                serde_json::to_string(&value).unwrap(),
                format_test_number(Number::NegInt(value)),
            )
        }

        #[test]
        fn matches_serde_json_float_format(value: f64) {
            assert_eq!(
                serde_json::to_string(&value).unwrap(),
                format_test_number(Number::Float(value)),
            )
        }
    }
}

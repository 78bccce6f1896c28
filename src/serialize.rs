// Copyright (c) The quick-allure Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Serialize a `Report`.

use crate::{
    document::{Case, CaseStatus, Document, Suite, SuiteProperty},
    report::Report,
    version::VersionProvider,
};
use quick_xml::{
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
    Writer,
};
use std::io::{self, BufWriter, Write};

static TESTSUITES_TAG: &str = "testsuites";
static TESTSUITE_TAG: &str = "testsuite";
static TESTCASE_TAG: &str = "testcase";
static PROPERTIES_TAG: &str = "properties";
static PROPERTY_TAG: &str = "property";
static FAILURE_TAG: &str = "failure";
static SKIPPED_TAG: &str = "skipped";

/// Options controlling how a [`Report`] is serialized.
#[derive(Clone, Debug, Default)]
pub struct SerializeOptions {
    no_xml_declaration: bool,
    go_version: Option<String>,
}

impl SerializeOptions {
    /// Creates options with the defaults: emit the XML declaration, and
    /// resolve the Go version through the active [`VersionProvider`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppresses the leading XML declaration.
    pub fn set_no_xml_declaration(&mut self, no_xml_declaration: bool) -> &mut Self {
        self.no_xml_declaration = no_xml_declaration;
        self
    }

    /// Overrides the Go version recorded in each suite's properties.
    ///
    /// An empty string counts as "not supplied" and falls back to the
    /// [`VersionProvider`] consulted at serialization time.
    pub fn set_go_version(&mut self, go_version: impl Into<String>) -> &mut Self {
        self.go_version = Some(go_version.into());
        self
    }
}

pub(crate) fn serialize_report(
    report: &Report,
    options: &SerializeOptions,
    versions: &dyn VersionProvider,
    writer: impl io::Write,
) -> quick_xml::Result<()> {
    let go_version = resolve_go_version(options, versions);
    let document = Document::build(report, &go_version);

    let mut writer = Writer::new_with_indent(BufWriter::new(writer), b'\t', 1);

    if !options.no_xml_declaration {
        let decl = BytesDecl::new(b"1.0", Some(b"UTF-8"), None);
        writer.write_event(Event::Decl(decl))?;
    }

    serialize_document(&document, &mut writer)?;

    // Trailing newline, then flush the buffered sink.
    let mut out = writer.into_inner();
    out.write_all(b"\n").map_err(quick_xml::Error::Io)?;
    out.flush().map_err(quick_xml::Error::Io)
}

/// A non-empty caller-supplied override wins; otherwise the provider is
/// consulted, once per serialization.
fn resolve_go_version(options: &SerializeOptions, versions: &dyn VersionProvider) -> String {
    match options.go_version.as_deref() {
        Some(version) if !version.is_empty() => version.to_owned(),
        _ => versions.go_version(),
    }
}

fn serialize_document(
    document: &Document,
    writer: &mut Writer<impl io::Write>,
) -> quick_xml::Result<()> {
    let testsuites_tag = BytesStart::borrowed_name(TESTSUITES_TAG.as_bytes());
    writer.write_event(Event::Start(testsuites_tag))?;

    for suite in &document.suites {
        serialize_suite(suite, writer)?;
    }

    serialize_end_tag(TESTSUITES_TAG, writer)?;
    writer.write_event(Event::Eof)?;

    Ok(())
}

fn serialize_suite(suite: &Suite, writer: &mut Writer<impl io::Write>) -> quick_xml::Result<()> {
    // Use the destructuring syntax to ensure that all fields are handled.
    let Suite {
        tests,
        failures,
        time_ms,
        name,
        properties,
        cases,
    } = suite;

    let mut testsuite_tag = BytesStart::borrowed_name(TESTSUITE_TAG.as_bytes());
    testsuite_tag.extend_attributes([
        ("tests", tests.to_string().as_str()),
        ("failures", failures.to_string().as_str()),
        ("time", serialize_time(*time_ms).as_str()),
        ("name", name.as_str()),
    ]);
    writer.write_event(Event::Start(testsuite_tag))?;

    if !properties.is_empty() {
        serialize_start_tag(PROPERTIES_TAG, writer)?;
        for property in properties {
            serialize_property(property, writer)?;
        }
        serialize_end_tag(PROPERTIES_TAG, writer)?;
    }

    for case in cases {
        serialize_case(case, writer)?;
    }

    serialize_end_tag(TESTSUITE_TAG, writer)?;
    Ok(())
}

fn serialize_property(
    property: &SuiteProperty,
    writer: &mut Writer<impl io::Write>,
) -> quick_xml::Result<()> {
    let mut property_tag = BytesStart::borrowed_name(PROPERTY_TAG.as_bytes());
    property_tag.extend_attributes([
        ("name", property.name.as_str()),
        ("value", property.value.as_str()),
    ]);

    writer.write_event(Event::Empty(property_tag))
}

fn serialize_case(case: &Case, writer: &mut Writer<impl io::Write>) -> quick_xml::Result<()> {
    let Case {
        classname,
        name,
        time_ms,
        status,
    } = case;

    let mut testcase_tag = BytesStart::borrowed_name(TESTCASE_TAG.as_bytes());
    testcase_tag.extend_attributes([
        ("classname", classname.as_str()),
        ("name", name.as_str()),
        ("time", serialize_time(*time_ms).as_str()),
    ]);

    match status {
        CaseStatus::Passed => {
            // A passed case has no child note.
            writer.write_event(Event::Empty(testcase_tag))?;
        }
        CaseStatus::Skipped(note) => {
            writer.write_event(Event::Start(testcase_tag))?;

            let mut skipped_tag = BytesStart::borrowed_name(SKIPPED_TAG.as_bytes());
            skipped_tag.push_attribute(("message", note.message.as_str()));
            writer.write_event(Event::Empty(skipped_tag))?;

            serialize_end_tag(TESTCASE_TAG, writer)?;
        }
        CaseStatus::Failed(note) => {
            writer.write_event(Event::Start(testcase_tag))?;

            let mut failure_tag = BytesStart::borrowed_name(FAILURE_TAG.as_bytes());
            failure_tag.extend_attributes([
                ("message", note.message.as_str()),
                ("type", note.ty.as_str()),
            ]);
            writer.write_event(Event::Start(failure_tag))?;
            writer.write_event(Event::Text(BytesText::from_plain_str(&note.body)))?;
            serialize_end_tag(FAILURE_TAG, writer)?;

            serialize_end_tag(TESTCASE_TAG, writer)?;
        }
    }

    Ok(())
}

fn serialize_start_tag(
    tag_name: &'static str,
    writer: &mut Writer<impl io::Write>,
) -> quick_xml::Result<()> {
    let tag = BytesStart::borrowed_name(tag_name.as_bytes());
    writer.write_event(Event::Start(tag))
}

fn serialize_end_tag(
    tag_name: &'static str,
    writer: &mut Writer<impl io::Write>,
) -> quick_xml::Result<()> {
    let end_tag = BytesEnd::borrowed(tag_name.as_bytes());
    writer.write_event(Event::End(end_tag))
}

// Serialize millisecond timings as seconds with 3 decimal points.
fn serialize_time(time_ms: u64) -> String {
    format!("{:.3}", time_ms as f64 / 1000.0)
}

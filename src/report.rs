// Copyright (c) The quick-allure Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    errors::SerializeError,
    serialize::{serialize_report, SerializeOptions},
    version::{GoToolchain, VersionProvider},
};
use std::io;

/// The parsed representation of a `go test` run, organized by package.
#[derive(Clone, Debug, Default)]
pub struct Report {
    /// The packages that were tested, in input order.
    pub packages: Vec<Package>,
}

impl Report {
    /// Creates a new, empty `Report`.
    pub fn new() -> Self {
        Self { packages: vec![] }
    }

    /// Adds a package to the report.
    pub fn add_package(&mut self, package: Package) -> &mut Self {
        self.packages.push(package);
        self
    }

    /// Adds several packages to the report.
    pub fn add_packages(&mut self, packages: impl IntoIterator<Item = Package>) -> &mut Self {
        self.packages.extend(packages);
        self
    }

    /// Serialize this report as an Allure XML document to the given writer.
    ///
    /// The Go version recorded in each suite's properties is resolved through
    /// [`GoToolchain`] unless `options` carries a non-empty override.
    pub fn serialize(
        &self,
        options: &SerializeOptions,
        writer: impl io::Write,
    ) -> Result<(), SerializeError> {
        self.serialize_with(options, &GoToolchain, writer)
    }

    /// Serialize this report, resolving the Go version through the given
    /// [`VersionProvider`].
    pub fn serialize_with(
        &self,
        options: &SerializeOptions,
        versions: &dyn VersionProvider,
        writer: impl io::Write,
    ) -> Result<(), SerializeError> {
        serialize_report(self, options, versions, writer).map_err(SerializeError::from)
    }

    /// Serialize this report to a string.
    pub fn to_string(&self, options: &SerializeOptions) -> Result<String, SerializeError> {
        let mut buf: Vec<u8> = vec![];
        self.serialize(options, &mut buf)?;
        String::from_utf8(buf)
            .map_err(|utf8_err| quick_xml::Error::Utf8(utf8_err.utf8_error()).into())
    }
}

/// A named group of tests, typically a single Go package, with aggregate
/// timing and optional statement coverage.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct Package {
    /// The import path of the package, e.g. `github.com/acme/widgets`.
    pub name: String,

    /// The total elapsed time for the package, in milliseconds.
    pub time_ms: u64,

    /// The statement coverage percentage reported by `go test -cover`.
    ///
    /// Empty if coverage was not measured; this mirrors the upstream parser's
    /// representation.
    pub coverage_pct: String,

    /// The tests that ran in this package, in input order.
    pub tests: Vec<Test>,
}

impl Package {
    /// Creates a new `Package` with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            time_ms: 0,
            coverage_pct: String::new(),
            tests: vec![],
        }
    }

    /// Sets the total elapsed time, in milliseconds.
    pub fn set_time_ms(&mut self, time_ms: u64) -> &mut Self {
        self.time_ms = time_ms;
        self
    }

    /// Sets the statement coverage percentage.
    pub fn set_coverage_pct(&mut self, coverage_pct: impl Into<String>) -> &mut Self {
        self.coverage_pct = coverage_pct.into();
        self
    }

    /// Adds a test to this package.
    pub fn add_test(&mut self, test: Test) -> &mut Self {
        self.tests.push(test);
        self
    }

    /// Adds several tests to this package.
    pub fn add_tests(&mut self, tests: impl IntoIterator<Item = Test>) -> &mut Self {
        self.tests.extend(tests);
        self
    }
}

/// A single test execution.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct Test {
    /// The name of the test, e.g. `TestParse`.
    pub name: String,

    /// The elapsed time for this test, in milliseconds.
    pub time_ms: u64,

    /// The outcome of the test.
    pub result: TestResult,

    /// Output lines captured while the test ran, in input order.
    pub output: Vec<String>,
}

impl Test {
    /// Creates a new `Test` with the given name and result.
    pub fn new(name: impl Into<String>, result: TestResult) -> Self {
        Self {
            name: name.into(),
            time_ms: 0,
            result,
            output: vec![],
        }
    }

    /// Sets the elapsed time, in milliseconds.
    pub fn set_time_ms(&mut self, time_ms: u64) -> &mut Self {
        self.time_ms = time_ms;
        self
    }

    /// Adds a captured output line.
    pub fn add_output_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.output.push(line.into());
        self
    }

    /// Adds several captured output lines.
    pub fn add_output_lines(
        &mut self,
        lines: impl IntoIterator<Item = impl Into<String>>,
    ) -> &mut Self {
        for line in lines {
            self.add_output_line(line);
        }
        self
    }
}

/// The outcome of a single test.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TestResult {
    /// The test passed.
    Pass,

    /// The test failed.
    Fail,

    /// The test was skipped.
    Skip,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packages_keep_input_order() {
        let mut report = Report::new();
        report.add_packages([
            Package::new("z/last"),
            Package::new("a/first"),
            Package::new("m/middle"),
        ]);

        let names: Vec<_> = report.packages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["z/last", "a/first", "m/middle"]);
    }

    #[test]
    fn output_lines_keep_input_order() {
        let mut test = Test::new("TestOrder", TestResult::Fail);
        test.add_output_lines(["one", "two"]).add_output_line("three");
        assert_eq!(test.output, ["one", "two", "three"]);
    }
}

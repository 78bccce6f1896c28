// Copyright (c) The quick-allure Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The output document tree.
//!
//! A [`Document`] is built fresh for every serialization, never mutated after
//! construction, and discarded once written out.

use crate::report::{Package, Report, Test, TestResult};

#[derive(Clone, Debug)]
pub(crate) struct Document {
    pub(crate) suites: Vec<Suite>,
}

impl Document {
    /// Builds the document tree for `report`, stamping `go_version` into the
    /// properties of every suite.
    pub(crate) fn build(report: &Report, go_version: &str) -> Self {
        let suites = report
            .packages
            .iter()
            .map(|package| Suite::build(package, go_version))
            .collect();
        Self { suites }
    }
}

/// One `<testsuite>` element, derived 1:1 from a [`Package`].
#[derive(Clone, Debug)]
pub(crate) struct Suite {
    pub(crate) tests: usize,
    pub(crate) failures: usize,
    pub(crate) time_ms: u64,
    pub(crate) name: String,
    pub(crate) properties: Vec<SuiteProperty>,
    pub(crate) cases: Vec<Case>,
}

impl Suite {
    pub(crate) fn build(package: &Package, go_version: &str) -> Self {
        let mut properties = vec![SuiteProperty::new("go.version", go_version)];
        if !package.coverage_pct.is_empty() {
            properties.push(SuiteProperty::new(
                "coverage.statements.pct",
                &package.coverage_pct,
            ));
        }

        let mut suite = Self {
            tests: 0,
            failures: 0,
            time_ms: package.time_ms,
            name: package.name.clone(),
            properties,
            cases: Vec::with_capacity(package.tests.len()),
        };

        let classname = final_path_segment(&package.name);
        for test in &package.tests {
            suite.push_case(Case::build(test, classname));
        }
        suite
    }

    /// Appends a case and updates the `tests` and `failures` counts.
    fn push_case(&mut self, case: Case) {
        self.tests += 1;
        if matches!(case.status, CaseStatus::Failed(_)) {
            self.failures += 1;
        }
        self.cases.push(case);
    }
}

#[derive(Clone, Debug)]
pub(crate) struct SuiteProperty {
    pub(crate) name: String,
    pub(crate) value: String,
}

impl SuiteProperty {
    fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One `<testcase>` element, derived 1:1 from a [`Test`].
#[derive(Clone, Debug)]
pub(crate) struct Case {
    pub(crate) classname: String,
    pub(crate) name: String,
    pub(crate) time_ms: u64,
    pub(crate) status: CaseStatus,
}

impl Case {
    fn build(test: &Test, classname: &str) -> Self {
        let status = match test.result {
            TestResult::Pass => CaseStatus::Passed,
            TestResult::Fail => CaseStatus::Failed(FailureNote {
                message: "Failed".to_owned(),
                ty: String::new(),
                body: collect_output(&test.output),
            }),
            TestResult::Skip => CaseStatus::Skipped(SkipNote {
                message: collect_output(&test.output),
            }),
        };
        Self {
            classname: classname.to_owned(),
            name: test.name.clone(),
            time_ms: test.time_ms,
            status,
        }
    }
}

/// Exactly one of these per case, matching the source result.
#[derive(Clone, Debug)]
pub(crate) enum CaseStatus {
    Passed,
    Skipped(SkipNote),
    Failed(FailureNote),
}

#[derive(Clone, Debug)]
pub(crate) struct SkipNote {
    pub(crate) message: String,
}

#[derive(Clone, Debug)]
pub(crate) struct FailureNote {
    pub(crate) message: String,
    pub(crate) ty: String,
    pub(crate) body: String,
}

/// The portion of `name` after the last `/`, or all of `name` when it has no
/// separator. Idempotent.
fn final_path_segment(name: &str) -> &str {
    match name.rfind('/') {
        Some(idx) => &name[idx + 1..],
        None => name,
    }
}

/// Joins captured output lines with newlines, removing the control
/// characters an XML 1.0 document cannot carry. Tabs, newlines and carriage
/// returns are kept.
fn collect_output(lines: &[String]) -> String {
    lines.join("\n").replace(
        |c| matches!(c, '\x00'..='\x08' | '\x0b' | '\x0c' | '\x0e'..='\x1f'),
        "",
    )
}

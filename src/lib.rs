// Copyright (c) The quick-allure Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Serialize parsed `go test` results as Allure XML reports.
//!
//! The input is the report produced by a `go test` output parser: an ordered
//! list of packages, each holding timed, named test cases with pass/fail/skip
//! outcomes and an optional coverage percentage. [`Report::serialize`] renders
//! it as the `<testsuites>` document understood by Allure and other
//! JUnit-flavored result viewers, with one `<testsuite>` per package.
//!
//! ```
//! use quick_allure::{Package, Report, SerializeOptions, Test, TestResult};
//!
//! let mut package = Package::new("github.com/acme/widgets");
//! package.set_time_ms(1234);
//! package.add_test(Test::new("TestFrobnicate", TestResult::Pass));
//!
//! let mut report = Report::new();
//! report.add_package(package);
//!
//! let mut options = SerializeOptions::new();
//! options.set_go_version("go1.21.5");
//!
//! let xml = report.to_string(&options).expect("serializing report succeeds");
//! assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
//! ```

mod document;
mod errors;
mod report;
mod serialize;
mod version;

pub use errors::*;
pub use report::*;
pub use serialize::SerializeOptions;
pub use version::*;

// Copyright (c) The quick-allure Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use goldenfile::Mint;
use quick_allure::{Package, Report, SerializeOptions, Test, TestResult};

#[test]
fn fixtures() {
    let mut mint = Mint::new("tests/fixtures");

    let mut options = SerializeOptions::new();
    options.set_go_version("go1.21.5");

    let report = basic_report();

    let f = mint
        .new_goldenfile("basic_report.xml")
        .expect("creating new goldenfile succeeds");
    report
        .serialize(&options, f)
        .expect("serializing basic_report succeeds");

    let f = mint
        .new_goldenfile("no_declaration.xml")
        .expect("creating new goldenfile succeeds");
    options.set_no_xml_declaration(true);
    report
        .serialize(&options, f)
        .expect("serializing basic_report without a declaration succeeds");
}

fn basic_report() -> Report {
    let mut report = Report::new();

    let mut parser = Package::new("github.com/acme/parser");
    parser.set_time_ms(4200).set_coverage_pct("81.0");

    let mut lex = Test::new("TestLex", TestResult::Pass);
    lex.set_time_ms(1200);
    parser.add_test(lex);

    let mut parse = Test::new("TestParse", TestResult::Fail);
    parse.set_time_ms(2500).add_output_lines([
        "parser_test.go:42: unexpected token `<`",
        "want x & y",
    ]);
    parser.add_test(parse);

    let mut unicode = Test::new("TestUnicode", TestResult::Skip);
    unicode
        .set_time_ms(500)
        .add_output_line("parser_test.go:88: skipping in short mode");
    parser.add_test(unicode);

    report.add_package(parser);

    // A package without a path separator or coverage data.
    let mut cmd = Package::new("cmd");
    cmd.set_time_ms(42);
    let mut main_test = Test::new("TestMain", TestResult::Pass);
    main_test.set_time_ms(42);
    cmd.add_test(main_test);
    report.add_package(cmd);

    // A package where no tests ran.
    report.add_package(Package::new("github.com/acme/empty"));

    report
}

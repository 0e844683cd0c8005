//! Behavior tests for the comparison table: projections, the official-figure
//! override, and the insufficient-data states the table must surface.

use navmark_tests::{
    align, build_comparison, date, series, table_view, LookbackWindow, OfficialReturns,
    DEFAULT_PRINCIPAL,
};

fn default_official() -> OfficialReturns {
    OfficialReturns::new()
}

#[test]
fn a_fifty_percent_return_projects_ten_thousand_to_fifteen_thousand() {
    // Given: a fund that gained 50% and a flat benchmark over the same dates
    let fund = series(&[("01/01/2023", "100.0"), ("06/14/2024", "150.0")]);
    let benchmark = series(&[("01/01/2023", "20000.0"), ("06/14/2024", "20000.0")]);
    let pair = align(&fund, &benchmark);

    // When: building the comparison
    let rows = build_comparison(&pair, date("06/14/2024"), DEFAULT_PRINCIPAL, &default_official())
        .expect("valid inputs");

    // Then: the ALL row projects 15,000 against an unchanged 10,000
    let all_row = rows.last().expect("has ALL row");
    assert_eq!(all_row.window, LookbackWindow::All);
    assert_eq!(all_row.fund.expect("fund data").projected_value, 15_000.0);
    assert_eq!(
        all_row.benchmark.expect("benchmark data").projected_value,
        10_000.0
    );
}

#[test]
fn every_window_is_computed_from_its_own_start_date() {
    // Given: a series whose growth is concentrated in the last year
    let fund = series(&[
        ("06/14/2019", "100.0"),
        ("06/14/2023", "110.0"),
        ("06/14/2024", "165.0"),
    ]);
    let benchmark = series(&[
        ("06/14/2019", "10000.0"),
        ("06/14/2023", "12000.0"),
        ("06/14/2024", "13000.0"),
    ]);
    let pair = align(&fund, &benchmark);

    let rows = build_comparison(&pair, date("06/14/2024"), DEFAULT_PRINCIPAL, &default_official())
        .expect("valid inputs");

    let one_year = rows
        .iter()
        .find(|row| row.window == LookbackWindow::OneYear)
        .expect("has 1Y row")
        .fund
        .expect("fund data");
    let five_year = rows
        .iter()
        .find(|row| row.window == LookbackWindow::FiveYears)
        .expect("has 5Y row")
        .fund
        .expect("fund data");

    // 1Y: 110 -> 165 = +50%; 5Y: 100 -> 165 = +65%.
    assert_eq!(one_year.simple_return_pct, 50.0);
    assert_eq!(one_year.invested_on, date("06/14/2023"));
    assert_eq!(five_year.simple_return_pct, 65.0);
    assert_eq!(five_year.invested_on, date("06/14/2019"));
}

#[test]
fn zero_overlap_reports_insufficient_data_for_every_window() {
    // Given: fund and benchmark with no shared dates
    let pair = align(
        &series(&[("01/01/2024", "100.0"), ("01/03/2024", "101.0")]),
        &series(&[("01/02/2024", "20000.0"), ("01/04/2024", "20100.0")]),
    );
    assert!(pair.is_empty());

    let rows = build_comparison(&pair, date("06/14/2024"), DEFAULT_PRINCIPAL, &default_official())
        .expect("empty pair is valid input");

    // Then: no window fabricates a 0% return
    for row in &rows {
        assert!(row.fund.is_none());
        assert!(row.benchmark.is_none());
    }

    // And the flattened table carries explicit nulls
    let table = table_view(&rows, DEFAULT_PRINCIPAL);
    let json = serde_json::to_value(&table).expect("serializable");
    for row in json["rows"].as_array().expect("rows array") {
        assert!(row["fund_simple_return_pct"].is_null());
        assert!(row["fund_projected_value"].is_null());
        assert!(row["invested_on"].is_null());
    }
}

#[test]
fn official_figure_drives_the_fund_side_only() {
    // Given: data implying +20% for the fund, but a published figure of +19.5%
    let fund = series(&[("01/01/2023", "100.0"), ("06/14/2024", "120.0")]);
    let benchmark = series(&[("01/01/2023", "20000.0"), ("06/14/2024", "23000.0")]);
    let pair = align(&fund, &benchmark);

    let mut official = OfficialReturns::new();
    official.insert(LookbackWindow::All, 19.5);

    // When: building the comparison with the override
    let rows = build_comparison(&pair, date("06/14/2024"), DEFAULT_PRINCIPAL, &official)
        .expect("valid inputs");
    let all_row = rows.last().expect("has ALL row");

    // Then: the fund row tracks the published figure
    let fund_outcome = all_row.fund.expect("fund data");
    assert_eq!(fund_outcome.simple_return_pct, 19.5);
    assert_eq!(fund_outcome.projected_value, 11_950.0);

    // And the benchmark is still computed independently from raw data
    let benchmark_outcome = all_row.benchmark.expect("benchmark data");
    assert_eq!(benchmark_outcome.simple_return_pct, 15.0);
    assert_eq!(benchmark_outcome.projected_value, 11_500.0);
}

#[test]
fn windows_without_data_ignore_official_figures() {
    // Given: a published 1M figure but no data inside the 1M window
    let fund = series(&[("01/01/2023", "100.0"), ("06/01/2023", "110.0")]);
    let benchmark = series(&[("01/01/2023", "20000.0"), ("06/01/2023", "21000.0")]);
    let pair = align(&fund, &benchmark);

    let mut official = OfficialReturns::new();
    official.insert(LookbackWindow::OneMonth, 2.5);

    let rows = build_comparison(&pair, date("06/14/2024"), DEFAULT_PRINCIPAL, &official)
        .expect("valid inputs");
    let one_month = rows
        .iter()
        .find(|row| row.window == LookbackWindow::OneMonth)
        .expect("has 1M row");

    // Then: the row stays insufficient; the feed cannot invent a start date
    assert!(one_month.fund.is_none());
}

#[test]
fn table_rows_expose_the_documented_output_contract() {
    let fund = series(&[("01/01/2021", "100.0"), ("06/14/2024", "140.0")]);
    let benchmark = series(&[("01/01/2021", "20000.0"), ("06/14/2024", "25000.0")]);
    let pair = align(&fund, &benchmark);

    let rows = build_comparison(&pair, date("06/14/2024"), DEFAULT_PRINCIPAL, &default_official())
        .expect("valid inputs");
    let table = table_view(&rows, DEFAULT_PRINCIPAL);
    let json = serde_json::to_value(&table).expect("serializable");

    assert_eq!(json["principal"], 10_000.0);
    let all_row = json["rows"]
        .as_array()
        .expect("rows array")
        .last()
        .expect("ALL row")
        .clone();

    for field in [
        "window",
        "invested_on",
        "fund_projected_value",
        "benchmark_projected_value",
        "fund_simple_return_pct",
        "benchmark_simple_return_pct",
        "fund_annualized_return_pct",
    ] {
        assert!(
            all_row.get(field).is_some(),
            "missing contract field {field}"
        );
    }

    assert_eq!(all_row["window"], "ALL");
    assert_eq!(all_row["invested_on"], "01/01/2021");
    // 40% over ~3.45 years annualizes via compounding, so the figure is
    // present and smaller than the simple return.
    let annualized = all_row["fund_annualized_return_pct"]
        .as_f64()
        .expect("multi-year span");
    assert!(annualized > 0.0 && annualized < 40.0);
}

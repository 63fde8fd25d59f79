use sales_dashboard::config::DashboardConfig;
use sales_dashboard::error::DashboardError;
use sales_dashboard::reports::yearly_totals;
use sales_dashboard::Dashboard;
use std::io::Write;
use tempfile::NamedTempFile;

fn config_for(contents: &str) -> (NamedTempFile, DashboardConfig) {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    let config = DashboardConfig {
        data_path: file.path().to_path_buf(),
        ..DashboardConfig::default()
    };
    (file, config)
}

#[test]
fn worked_example_end_to_end() {
    let (_file, config) = config_for(
        "Year,Month,Region,Product,Sales,Profit\n\
         2022,January,East,Widgets,100,20\n\
         2022,January,West,Widgets,50,5\n\
         2023,January,East,Gadgets,200,50\n",
    );
    let dashboard = Dashboard::build(&config).unwrap();
    let agg = &dashboard.aggregates;

    assert_eq!(yearly_totals(&agg.yearly), vec![(2022, 150.0), (2023, 200.0)]);
    assert_eq!(agg.monthly.len(), 12);
    assert_eq!(agg.monthly[0].sales, Some(350.0));
    assert_eq!(agg.monthly.iter().filter(|m| m.sales.is_none()).count(), 11);

    assert_eq!(dashboard.layout.graphs().count(), 5);
    assert!(dashboard.html.contains("Company Growth Analysis"));
    assert!(dashboard.html.contains("2. Monthly Sales Trend"));
}

#[test]
fn missing_profit_column_stops_before_any_chart() {
    let (_file, config) = config_for(
        "Year,Month,Region,Product,Sales\n2022,January,East,Widgets,100\n",
    );
    match Dashboard::build(&config) {
        Err(DashboardError::Schema { missing }) => assert_eq!(missing, vec!["Profit"]),
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn malformed_row_aborts_the_load() {
    let (_file, config) = config_for(
        "Year,Month,Region,Product,Sales,Profit\n2022,January,East,Widgets,100,20\n20x2,May,East,Widgets,1,1\n",
    );
    assert!(matches!(
        Dashboard::build(&config),
        Err(DashboardError::Parse { line: 3, .. })
    ));
}

#[test]
fn row_with_wrong_field_count_is_a_csv_error() {
    let (_file, config) = config_for(
        "Year,Month,Region,Product,Sales,Profit\n2022,January,East,Widgets,100,20\n2022,May,East,Widgets,1\n",
    );
    match Dashboard::build(&config) {
        Err(DashboardError::Csv(err)) => {
            assert!(matches!(err.kind(), csv::ErrorKind::UnequalLengths { .. }));
        }
        other => panic!("expected CSV error, got {other:?}"),
    }
}

#[test]
fn missing_file_is_reported() {
    let config = DashboardConfig {
        data_path: "no/such/sales_data.csv".into(),
        ..DashboardConfig::default()
    };
    assert!(matches!(
        Dashboard::build(&config),
        Err(DashboardError::FileNotFound(_))
    ));
}

#[test]
fn building_twice_is_identical() {
    let (_file, config) = config_for(
        "Year,Month,Region,Product,Sales,Profit\n\
         2021,March,North,Gizmos,12.5,3.25\n\
         2021,July,South,Gizmos,40,-2\n\
         2022,March,North,Widgets,77.1,9.9\n",
    );
    let a = Dashboard::build(&config).unwrap();
    let b = Dashboard::build(&config).unwrap();
    assert_eq!(a.aggregates, b.aggregates);
    assert_eq!(a.html, b.html);
}

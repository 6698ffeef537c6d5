use std::fs::File;
use std::io::Write;

use pretty_assertions::assert_eq;

use prsa_dashboard::analyzers::{caqi, overall_aqi, AqiCategory, AqiPollutant, CaqiCategory, DailyResampler};
use prsa_dashboard::cleaners::{format_timestamp, DataCleaner};
use prsa_dashboard::loaders::{DataSource, StationFetcher};
use prsa_dashboard::models::{Station, Variable};
use prsa_dashboard::utils::filename::station_csv_filename;

const HEADER: &str =
    "No,year,month,day,hour,PM2.5,PM10,SO2,NO2,CO,O3,TEMP,PRES,DEWP,RAIN,WSPM,wd,station";

fn write_station_file(dir: &std::path::Path, station: Station, rows: &[&str]) {
    let path = dir.join(station_csv_filename(station));
    let mut file = File::create(path).expect("failed to create fixture");
    writeln!(file, "{}", HEADER).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
}

#[tokio::test]
async fn test_fetch_clean_resample_report() {
    let dir = tempfile::tempdir().unwrap();

    write_station_file(
        dir.path(),
        Station::Aotizhongxin,
        &[
            "1,2013,3,1,0,4.0,30.0,3.0,40.0,300.0,50.0,-0.7,1023.0,-18.8,0.0,4.4,NNW,Aotizhongxin",
            "2,2013,3,1,1,NA,30.0,3.0,40.0,300.0,50.0,-1.1,1023.2,-18.2,0.0,4.7,N,Aotizhongxin",
            "3,2013,3,1,2,8.0,30.0,3.0,40.0,300.0,50.0,-1.1,1023.5,-18.2,0.0,5.6,NNW,Aotizhongxin",
            "4,2013,3,2,0,10.0,30.0,3.0,40.0,300.0,50.0,2.0,1020.0,-15.0,0.0,2.0,NE,Aotizhongxin",
            "5,2013,3,2,1,20.0,30.0,3.0,40.0,300.0,50.0,4.0,1019.0,-14.0,0.0,2.5,NE,Aotizhongxin",
        ],
    );
    write_station_file(
        dir.path(),
        Station::Changping,
        &["1,2013,3,1,0,3.0,6.0,5.0,2.0,300.0,85.0,-2.3,1020.8,-19.7,0.0,3.1,NW,Changping"],
    );

    // Fetch: two stations succeed, ten are skipped, rows are concatenated.
    let fetcher = StationFetcher::new(DataSource::local(dir.path()));
    let outcome = fetcher.fetch_all(None).await.unwrap();

    assert_eq!(outcome.dataset.len(), 6);
    assert_eq!(outcome.skipped.len(), 10);
    assert_eq!(
        outcome.dataset.stations(),
        vec!["Aotizhongxin".to_string(), "Changping".to_string()]
    );
    assert!(outcome.catalog.has_index_inputs());

    // Clean: the PM2.5 hole fills with the station median, timestamps are
    // composed and zero-padded.
    let mut dataset = outcome.dataset;
    let report = DataCleaner::new().clean(&mut dataset).unwrap();

    assert_eq!(report.total_filled(), 1);
    assert_eq!(dataset.readings()[1].value(Variable::Pm25), Some(9.0));
    assert_eq!(
        format_timestamp(dataset.readings()[0].date.unwrap()),
        "2013-03-01 00:00:00"
    );

    // Resample: two complete days for Aotizhongxin, daily means.
    let daily = DailyResampler::new()
        .resample(&dataset, "Aotizhongxin")
        .unwrap();

    assert_eq!(daily.len(), 2);
    assert_eq!(daily[0].value(Variable::Pm25), 7.0);
    assert_eq!(daily[0].wind_direction.as_deref(), Some("NNW"));
    assert_eq!(daily[1].value(Variable::Pm25), 15.0);
    assert_eq!(daily[1].value(Variable::Temp), 3.0);

    // Index derivation for the most recent day.
    let latest = daily.last().unwrap();
    let caqi_result = caqi(latest.no2, latest.pm10, latest.pm2_5, latest.o3);
    assert_eq!(caqi_result.value, 30.0);
    assert_eq!(caqi_result.category, CaqiCategory::Good);
    assert_eq!(caqi_result.category.label(), "Baik");

    let aqi_result = overall_aqi(latest.no2, latest.pm10, latest.pm2_5, latest.o3).unwrap();
    assert_eq!(aqi_result.dominant, AqiPollutant::Pm25);
    assert_eq!(aqi_result.category, AqiCategory::Moderate);
}

#[tokio::test]
async fn test_median_fill_resists_outliers() {
    let dir = tempfile::tempdir().unwrap();

    // Mean is 252.25, median 4.5; the fill must be the median.
    write_station_file(
        dir.path(),
        Station::Tiantan,
        &[
            "1,2013,3,1,0,2.0,30.0,3.0,40.0,300.0,50.0,1.0,1020.0,-15.0,0.0,2.0,N,Tiantan",
            "2,2013,3,1,1,3.0,30.0,3.0,40.0,300.0,50.0,1.0,1020.0,-15.0,0.0,2.0,N,Tiantan",
            "3,2013,3,1,2,NA,30.0,3.0,40.0,300.0,50.0,1.0,1020.0,-15.0,0.0,2.0,N,Tiantan",
            "4,2013,3,1,3,6.0,30.0,3.0,40.0,300.0,50.0,1.0,1020.0,-15.0,0.0,2.0,N,Tiantan",
            "5,2013,3,1,4,998.0,30.0,3.0,40.0,300.0,50.0,1.0,1020.0,-15.0,0.0,2.0,N,Tiantan",
        ],
    );

    let fetcher = StationFetcher::new(DataSource::local(dir.path()));
    let outcome = fetcher.fetch_all(None).await.unwrap();

    let mut dataset = outcome.dataset;
    DataCleaner::new().clean(&mut dataset).unwrap();

    assert_eq!(dataset.readings()[2].value(Variable::Pm25), Some(4.5));
}

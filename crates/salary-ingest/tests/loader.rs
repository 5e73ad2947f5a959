use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use salary_ingest::{DataSource, IngestError, load_dataset};

const HEADER: &str = "ano,senioridade,contrato,tamanho_empresa,remoto,cargo,residencia_iso3,usd,moeda";

fn write_csv(dir: &tempfile::TempDir, name: &str, body: &str) -> DataSource {
    let path = dir.path().join(name);
    fs::write(&path, body).expect("write csv");
    DataSource::Path(path)
}

#[test]
fn loads_records_from_local_csv() {
    let dir = tempfile::tempdir().expect("temp dir");
    let source = write_csv(
        &dir,
        "salaries.csv",
        &format!(
            "{HEADER}\n\
             2023,senior,integral,grande,remoto,Data Scientist,USA,150000,USD\n\
             2023,junior,integral,media,presencial,Data Analyst,BRA,30000,BRL\n\
             2024,pleno,contrato,pequena,hibrido,Data Engineer,DEU,81250.5,EUR\n"
        ),
    );

    let dataset = load_dataset(&source).expect("load dataset");

    assert_eq!(dataset.len(), 3);
    let records = dataset.records();
    assert_eq!(records[0].job_title, "Data Scientist");
    assert_eq!(records[1].seniority, "junior");
    assert_eq!(records[2].year, 2024);
    assert_eq!(records[2].usd, 81_250.5);
    assert_eq!(records[2].modality, "hibrido");
}

#[test]
fn header_only_csv_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let source = write_csv(&dir, "empty.csv", &format!("{HEADER}\n"));

    let err = load_dataset(&source).unwrap_err();
    assert!(matches!(err, IngestError::EmptyDataset { .. }));
}

#[test]
fn missing_required_column_fails_fast() {
    let dir = tempfile::tempdir().expect("temp dir");
    let source = write_csv(
        &dir,
        "no_usd.csv",
        "ano,senioridade,contrato,tamanho_empresa,remoto,cargo,residencia_iso3\n\
         2023,senior,integral,grande,remoto,Data Scientist,USA\n",
    );

    let err = load_dataset(&source).unwrap_err();
    assert!(matches!(err, IngestError::MissingColumn { ref column, .. } if column == "usd"));
    assert!(err.to_string().contains("no_usd.csv"));
}

#[test]
fn fractional_year_is_invalid() {
    let dir = tempfile::tempdir().expect("temp dir");
    let source = write_csv(
        &dir,
        "bad_year.csv",
        &format!("{HEADER}\n2023.5,senior,integral,grande,remoto,Data Scientist,USA,1,USD\n"),
    );

    let err = load_dataset(&source).unwrap_err();
    assert!(matches!(
        err,
        IngestError::InvalidValue { ref column, row: 1, .. } if column == "ano"
    ));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let source = DataSource::Path(dir.path().join("absent.csv"));

    let err = load_dataset(&source).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn non_finite_salary_is_invalid() {
    let dir = tempfile::tempdir().expect("temp dir");
    let source = write_csv(
        &dir,
        "nan_usd.csv",
        &format!(
            "{HEADER}\n\
             2023,senior,integral,grande,remoto,Data Scientist,USA,150000.0,USD\n\
             2023,junior,integral,media,presencial,Data Analyst,BRA,NaN,BRL\n\
             2024,pleno,integral,pequena,hibrido,Data Engineer,DEU,inf,EUR\n"
        ),
    );

    let err = load_dataset(&source).unwrap_err();
    assert!(matches!(
        err,
        IngestError::InvalidValue { ref column, row: 2, .. } if column == "usd"
    ));
}

#[test]
fn extra_columns_are_kept() {
    let dir = tempfile::tempdir().expect("temp dir");
    let source = write_csv(
        &dir,
        "salaries.csv",
        &format!("{HEADER}\n2023,senior,integral,grande,remoto,Data Scientist,USA,150000,USD\n"),
    );

    let dataset = load_dataset(&source).expect("load dataset");
    assert_eq!(dataset.extra_columns(), ["moeda".to_string()]);
    assert_eq!(dataset.records()[0].extra, vec!["USD".to_string()]);
}

/// Serves one HTTP response on a local port and returns its URL.
fn serve_once(response: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }
        let _ = stream.write_all(response.as_bytes());
    });
    format!("http://{addr}/salaries.csv")
}

fn http_response(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

#[test]
fn loads_records_over_http() {
    let body = format!("{HEADER}\n2023,senior,integral,grande,remoto,Data Scientist,USA,150000,USD\n");
    let url = serve_once(http_response("200 OK", &body));

    let dataset = load_dataset(&DataSource::Url(url)).expect("load over http");
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.records()[0].usd, 150_000.0);
}

#[test]
fn http_error_status_is_reported() {
    let url = serve_once(http_response("404 Not Found", ""));

    let err = load_dataset(&DataSource::Url(url.clone())).unwrap_err();
    assert!(matches!(
        err,
        IngestError::HttpStatus { url: ref failed, status: 404 } if *failed == url
    ));
}

#[test]
fn unreachable_host_is_a_network_error() {
    let source = DataSource::Url("http://127.0.0.1:1/salaries.csv".to_string());

    let err = load_dataset(&source).unwrap_err();
    assert!(matches!(err, IngestError::Network { .. }));
    assert!(err.to_string().contains("127.0.0.1:1"));
}

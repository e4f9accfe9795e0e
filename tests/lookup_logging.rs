use std::sync::Mutex;

use cep_finder::{AddressRecord, CepError, Result, Transport, TransportResponse};
use lazy_static::lazy_static;
use log::{Level, LevelFilter, Log, Metadata, Record};

struct CapturingLogger;

lazy_static! {
    static ref RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
}

static LOGGER: CapturingLogger = CapturingLogger;

impl Log for CapturingLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.lock().unwrap().push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

struct DeadTransport;

impl Transport for DeadTransport {
    fn get(&self, _url: &str) -> Result<TransportResponse> {
        Err(CepError::Transport {
            status: None,
            source: Box::new("connection refused")
        })
    }
}

#[test]
fn test_returned_errors_are_not_logged() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut record = AddressRecord::with_transport(Some("01001000"), DeadTransport);
    assert!(matches!(record.lookup(None), Err(CepError::Transport { status: None, .. })));

    let mut empty = AddressRecord::with_transport(None, DeadTransport);
    assert!(matches!(empty.lookup(None), Err(CepError::MissingInput)));
    assert!(matches!(empty.get("country"), Err(CepError::UnknownAttribute(_))));

    let records = RECORDS.lock().unwrap();
    assert!(
        records.iter().all(|(level, _)| *level > Level::Warn),
        "unexpected records: {:?}",
        *records
    );
}

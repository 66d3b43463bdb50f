use std::io;
use std::io::Write;
use std::str::from_utf8;

use threads_check::output::{print::PrintOutputter, BodyFormat};
use threads_check::{CheckOutcome, Checker, ClientConfig, Config};

pub fn config(api_base: &str) -> Config {
    Config {
        api_base: api_base.to_string(),
        access_token: "TOKEN123".to_string(),
        user_id: "USER456".to_string(),
    }
}

/// Runs one check against `config` with the real http client and returns what was printed.
pub fn check(config: &Config) -> (CheckOutcome, String) {
    let writer = &mut DebugWriter(String::new());
    let mut outputter = PrintOutputter::new(writer, BodyFormat::Compact);
    let outcome = Checker::new(&mut outputter, ClientConfig::default())
        .unwrap()
        .check(config)
        .unwrap();

    let DebugWriter(buf) = writer;
    (outcome, buf.clone())
}

pub struct DebugWriter(pub String);
impl Write for DebugWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let DebugWriter(inner) = self;
        let buf = from_utf8(buf).unwrap();
        inner.push_str(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

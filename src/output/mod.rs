pub mod print;


use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

use crate::{CheckOutcome, Request, Result};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BodyFormat {
    Compact,
    Pretty,
}

impl Default for BodyFormat {
    fn default() -> Self {
        BodyFormat::Compact
    }
}

pub trait Outputter {
    fn request(&mut self, request: &Request) -> Result<()>;
    fn outcome(&mut self, outcome: &CheckOutcome) -> Result<()>;
}

/// Single line json with a space after each `,` and `:`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

fn format_document(document: &serde_json::Value, format: BodyFormat) -> Result<String> {
    match format {
        BodyFormat::Pretty => Ok(serde_json::to_string_pretty(document)?),
        BodyFormat::Compact => {
            let mut buffer = Vec::new();
            let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, SpacedFormatter);
            document.serialize(&mut serializer)?;
            Ok(String::from_utf8(buffer)?)
        }
    }
}

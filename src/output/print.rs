use std::io::Write;

use crate::output::{format_document, BodyFormat, Outputter};
use crate::{CheckOutcome, Request, Result};

pub struct PrintOutputter<'a, W: Write> {
    writer: &'a mut W,
    body_format: BodyFormat,
}

impl<'a, W: Write> PrintOutputter<'a, W> {
    pub fn new(writer: &mut W, body_format: BodyFormat) -> PrintOutputter<W> {
        PrintOutputter {
            writer,
            body_format,
        }
    }
}

impl<'a, W: Write> Outputter for PrintOutputter<'a, W> {
    fn request(&mut self, request: &Request) -> Result<()> {
        writeln!(self.writer, "Checking API endpoint: {}...", request.target())?;
        Ok(())
    }

    fn outcome(&mut self, outcome: &CheckOutcome) -> Result<()> {
        let report = match outcome {
            CheckOutcome::Success { body, .. } => format!(
                "API Check Successful:\n{body}\n",
                body = format_document(body, self.body_format)?
            ),
            CheckOutcome::HttpError {
                status_code,
                detail,
                body,
            } => format!(
                "\
API Check Failed: {detail}
Response Status Code: {status_code}
Response Body: {body}
",
                detail = detail,
                status_code = status_code,
                body = body
            ),
            CheckOutcome::TransportError { detail } => format!(
                "API Check Failed: {detail}\nNo response received from server.\n",
                detail = detail
            ),
        };

        self.writer.write_all(report.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

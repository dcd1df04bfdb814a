//! Host that writes each configuration as JSON
//!
//! Used for `--print-config` and for handing the payload to a web page that
//! mounts the real sandbox widget.

use super::{SandboxConfig, SandboxHost};
use crate::error::HostError;
use std::io::Write;

pub struct JsonHost<W: Write> {
    writer: W,
    pretty: bool,
    written: usize,
}

impl<W: Write> JsonHost<W> {
    /// One compact JSON document per line
    pub fn new(writer: W) -> Self {
        JsonHost {
            writer,
            pretty: false,
            written: 0,
        }
    }

    pub fn pretty(writer: W) -> Self {
        JsonHost {
            writer,
            pretty: true,
            written: 0,
        }
    }

    /// Number of configurations written so far
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SandboxHost for JsonHost<W> {
    fn configure(&mut self, config: &SandboxConfig) -> Result<(), HostError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, config)?;
        } else {
            serde_json::to_writer(&mut self.writer, config)?;
        }
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        self.written += 1;
        tracing::debug!(
            template = config.template.id(),
            theme = config.theme_id.id(),
            "wrote sandbox configuration"
        );
        Ok(())
    }
}

//! Where status lines go. Commands take a `Console` so tests can capture output.

use std::io::{self, Write};

pub struct Console<O: Write, E: Write> {
    pub out: O,
    pub err: E,
}

impl Console<io::Stdout, io::Stderr> {
    pub fn stdio() -> Self {
        Self {
            out: io::stdout(),
            err: io::stderr(),
        }
    }
}

#[cfg(test)]
impl Console<Vec<u8>, Vec<u8>> {
    pub fn buffered() -> Self {
        Self {
            out: Vec::new(),
            err: Vec::new(),
        }
    }

    pub fn out_str(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }

    pub fn err_str(&self) -> String {
        String::from_utf8_lossy(&self.err).into_owned()
    }
}

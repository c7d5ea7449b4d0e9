use std::io::{BufRead, Write};

use crate::error::Result;

/// Line-oriented console the game talks through.
pub trait Terminal {
    /// Reads one line without its line terminator, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Writes `text` as-is and flushes, for prompts that stay on the same line.
    fn write(&mut self, text: &str) -> Result<()>;

    fn say(&mut self, text: &str) -> Result<()> {
        self.write(text)?;
        self.write("\n")
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        self.write(text)?;
        self.read_line()
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn output(&self) -> &W { &self.output }
}

impl<R: BufRead, W: Write> Terminal for Console<R, W> {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        let len = buffer.trim_end_matches(&['\r', '\n'][..]).len();
        buffer.truncate(len);
        Ok(Some(buffer))
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
pub type Scripted = Console<::std::io::Cursor<Vec<u8>>, Vec<u8>>;

#[cfg(test)]
pub fn scripted(input: &str) -> Scripted {
    Console::new(::std::io::Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[cfg(test)]
pub fn transcript(console: &Scripted) -> String {
    String::from_utf8_lossy(console.output()).into_owned()
}

use crate::domain::model::VolumeResult;
use crate::domain::ports::{OutputFormat, ResultRenderer};
use crate::utils::error::Result;
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

/// Writes `Volume: <text>` lines.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ResultRenderer for TextRenderer<W> {
    fn render(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "Volume: {}", text)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Writes one JSON object per result.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ResultRenderer for JsonRenderer<W> {
    fn render(&mut self, text: &str) -> Result<()> {
        serde_json::to_writer(&mut self.out, &VolumeResult::new(text))?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

pub fn renderer_for<W: Write + 'static>(format: OutputFormat, out: W) -> Box<dyn ResultRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer::new(out)),
        OutputFormat::Json => Box::new(JsonRenderer::new(out)),
    }
}

/// A writer several owners on one thread can share, e.g. a session printing
/// prompts and the renderer printing results to the same stdout.
pub struct SharedWriter<W> {
    inner: Rc<RefCell<W>>,
}

impl<W> SharedWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Runs `f` against the wrapped writer.
    pub fn with<T>(&self, f: impl FnOnce(&W) -> T) -> T {
        f(&self.inner.borrow())
    }
}

impl<W> Clone for SharedWriter<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<W: Write> Write for SharedWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.borrow_mut().flush()
    }
}

//! Minimal Wavefront .obj writer
//!
//! Each record is assembled in a line buffer and written with a single call.
//! Indices are passed 1-based, as they appear in the file.

use std::io;

pub struct ObjWriter<W: io::Write> {
    out: W,
    line_buf: Vec<u8>,
    /// Decimal places for floats, `None` for the shortest exact representation
    precision: Option<usize>,
}

impl<W: io::Write> ObjWriter<W> {
    pub fn new(writer: W) -> Self {
        ObjWriter {
            out: writer,
            line_buf: Vec::with_capacity(128),
            precision: None,
        }
    }

    /// Writes every float with a fixed number of decimals (like `%.6f`).
    pub fn with_precision(mut self, decimals: usize) -> Self {
        self.precision = Some(decimals);
        self
    }

    #[inline]
    fn push_str(&mut self, s: &str) {
        self.line_buf.extend_from_slice(s.as_bytes());
    }

    #[inline]
    fn push_index(&mut self, index: usize) {
        let mut buf = itoa::Buffer::new();
        self.push_str(buf.format(index));
    }

    #[inline]
    fn push_f(&mut self, v: f32) {
        // whole numbers as "1", not "1.0"
        let formatted = match self.precision {
            _ if v.fract() == 0.0 => format!("{v}"),
            Some(decimals) => format!("{v:.decimals$}"),
            None => format!("{v}"),
        };
        self.push_str(&formatted);
    }

    #[inline]
    fn end_line(&mut self) -> io::Result<()> {
        self.line_buf.push(b'\n');
        self.out.write_all(&self.line_buf)?;
        self.line_buf.clear();
        Ok(())
    }

    pub fn comment(&mut self, comment: &str) -> io::Result<()> {
        self.push_str("# ");
        self.push_str(comment);
        self.end_line()
    }

    pub fn object_name(&mut self, name: &str) -> io::Result<()> {
        self.push_str("o ");
        self.push_str(name);
        self.end_line()
    }

    pub fn vertex(&mut self, x: f32, y: f32, z: f32, w: Option<f32>) -> io::Result<()> {
        self.push_str("v ");
        self.push_f(x);
        self.push_str(" ");
        self.push_f(y);
        self.push_str(" ");
        self.push_f(z);
        if let Some(w) = w {
            self.push_str(" ");
            self.push_f(w);
        }
        self.end_line()
    }

    pub fn texture_coordinate(&mut self, u: f32, v: f32) -> io::Result<()> {
        self.push_str("vt ");
        self.push_f(u);
        self.push_str(" ");
        self.push_f(v);
        self.end_line()
    }

    /// `f v/vt ...` with an optional texture coordinate index per corner
    pub fn face(&mut self, corners: &[(usize, Option<usize>)]) -> io::Result<()> {
        self.push_str("f");
        for (v_idx, vt_idx) in corners {
            self.push_str(" ");
            self.push_index(*v_idx);
            if let Some(vt) = vt_idx {
                self.push_str("/");
                self.push_index(*vt);
            }
        }
        self.end_line()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

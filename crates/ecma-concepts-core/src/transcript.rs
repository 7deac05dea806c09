use std::io::{self, Write};

use crate::arith::{add, arrow_add, implicit_arrow_multiply};
use crate::sequence::{ABSENT, SparseSeq, Slot};

/// Rendering choices for the destructured line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    /// Printed in place of a hole.
    pub absent: String,
    /// Placed between destructured values.
    pub separator: String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            absent: ABSENT.to_string(),
            separator: " ".to_string(),
        }
    }
}

/// The program's output, one entry per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Evaluate every step in order and record what each one prints.
    pub fn build(style: &Style) -> Self {
        let arrow = arrow_add();
        let implicit_arrow = implicit_arrow_multiply();
        let (x, y, z) = SparseSeq::numbers().destructure3();

        let destructured = [x.as_ref(), y.as_ref(), z.as_ref()]
            .into_iter()
            .map(|slot| Slot::with_absent(slot, &style.absent).to_string())
            .collect::<Vec<_>>()
            .join(&style.separator);

        Self {
            lines: vec![
                add(1, 2).to_string(),
                arrow(3, 4).to_string(),
                implicit_arrow(4, 5).to_string(),
                destructured,
            ],
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Write every line, each terminated by `\n`.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        for line in &self.lines {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }
}

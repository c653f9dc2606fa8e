// ============================================================
// Layer 1 — Console Reporter
// ============================================================
// Prints the checklist the way a person reads it:
//
//   ==================================================
//   3. Testing basic tensor operations...
//   ✓ Tensor creation and matrix multiplication successful
//      x.shape = [3, 4], y.shape = [4, 5], z.shape = [3, 5]
//
// Write errors (e.g. a closed pipe) are logged, not fatal.

use std::io::Write;

use crate::domain::traits::Reporter;

const RULE_WIDTH: usize = 50;

pub struct Console<W: Write> {
    out:           W,
    first_section: bool,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out, first_section: true }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}") {
            tracing::warn!("Failed to write to console: {}", e);
        }
    }
}

impl<W: Write> Reporter for Console<W> {
    fn section(&mut self, title: &str) {
        let rule = "=".repeat(RULE_WIDTH);
        if self.first_section {
            self.first_section = false;
            self.emit(&rule);
        } else {
            self.emit(&format!("\n{rule}"));
        }
        self.emit(title);
    }

    fn pass(&mut self, message: &str)   { self.emit(&format!("✓ {message}")); }
    fn warn(&mut self, message: &str)   { self.emit(&format!("⚠ {message}")); }
    fn fail(&mut self, message: &str)   { self.emit(&format!("✗ {message}")); }
    fn detail(&mut self, message: &str) { self.emit(&format!("   {message}")); }
    fn fatal(&mut self, message: &str)  { self.emit(&format!("\n❌ {message}")); }
    fn note(&mut self, message: &str)   { self.emit(message); }
}

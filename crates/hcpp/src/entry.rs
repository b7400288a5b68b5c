//! The `int main()` entry routine.

use crate::Result;
use crate::dom::Element;
use crate::transcoder::NodeTranscoder;
use crate::writer::SourceWriter;

/// Wraps the children of the `<main>` container into `int main()`.
///
/// Children are transcoded one level deep. The terminating statement uses a
/// tab regardless of the configured indent unit.
pub fn emit_entry(out: &mut SourceWriter, main: &Element) -> Result<()> {
    out.blank_line();
    out.raw_line("int main() {");
    NodeTranscoder::new(out).emit_children(main, 1)?;
    out.raw_line("\treturn 0;");
    out.raw_line("}");
    Ok(())
}

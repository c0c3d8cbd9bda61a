// ============================================================
// Layer 5 — Index Page Emitter
// ============================================================
// Writes the master index: a heading and one list item per term,
// in exactly the order given. Sorting is the caller's job.

use anyhow::Result;

use crate::domain::glossary::anchor;
use crate::domain::traits::LineSink;

/// Write the index page listing `sorted_terms` to `out`.
pub fn emit_index<W: LineSink + ?Sized>(sorted_terms: &[String], out: &mut W) -> Result<()> {
    out.write_line("<html>")?;
    out.write_line("<head>")?;
    out.write_line("<title>Glossary</title>")?;
    out.write_line("</head>")?;
    out.write_line("<body>")?;
    out.write_line("<h2>Glossary</h2>")?;
    out.write_line("<hr />")?;
    out.write_line("<h3>Index</h3>")?;
    out.write_line("<ul>")?;
    for term in sorted_terms {
        out.write_line(&format!("<li>{}</li>", anchor(term)))?;
    }
    out.write_line("</ul>")?;
    out.write_line("</body>")?;
    out.write_line("</html>")?;
    Ok(())
}

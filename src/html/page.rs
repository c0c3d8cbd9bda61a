// ============================================================
// Layer 5 — Term Page Emitter
// ============================================================
// Writes the standalone page for one term:
//
//   <html>
//   <head>
//   <title>apple</title>
//   </head>
//   <body>
//   <h2><b><i><font color = "red">apple</font></i></b></h2>
//   <blockquote>a fruit, not a <a href="banana.html">banana</a></blockquote>
//   <hr />
//   <p>Return to <a href="index.html">index</a></p>
//   </body>
//   </html>
//
// Output depends only on (term, definition), so writing the same
// term twice produces the same document.

use anyhow::Result;

use crate::domain::glossary::Definition;
use crate::domain::traits::LineSink;
use crate::html::INDEX_FILE;

/// Write the page for `term` to `out`.
pub fn emit_term_page<W: LineSink + ?Sized>(term: &str, definition: &Definition, out: &mut W) -> Result<()> {
    out.write_line("<html>")?;
    out.write_line("<head>")?;
    out.write_line(&format!("<title>{term}</title>"))?;
    out.write_line("</head>")?;
    out.write_line("<body>")?;
    out.write_line(&format!("<h2><b><i><font color = \"red\">{term}</font></i></b></h2>"))?;
    out.write_line(&format!("<blockquote>{}</blockquote>", definition.to_html()))?;
    out.write_line("<hr />")?;
    out.write_line(&format!("<p>Return to <a href=\"{INDEX_FILE}\">index</a></p>"))?;
    out.write_line("</body>")?;
    out.write_line("</html>")?;
    Ok(())
}

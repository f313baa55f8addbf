//! Presentation layer for proportion tables.
//!
//! Statistics live in `montyhall_core`; this module only turns a finished
//! [`ProportionTable`] into text. Renderers are swappable through
//! [`TableRenderer`].

use crate::error::SimError;
use montyhall_core::{Outcome, ProportionTable, Strategy};
use std::io::Write;

/// Turns a proportion table into printable text.
pub trait TableRenderer {
    fn render(&self, table: &ProportionTable) -> Result<String, SimError>;
}

/// Plain-text crosstab, strategies as rows and outcomes as columns:
///
/// ```text
/// outcome     lose   win
/// strategy
/// stay        0.67  0.33
/// switch      0.33  0.67
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

const COLUMNS: [Outcome; 2] = [Outcome::Lose, Outcome::Win];

impl TableRenderer for TextRenderer {
    fn render(&self, table: &ProportionTable) -> Result<String, SimError> {
        let mut out = format!("{:<10}", "outcome");
        for outcome in COLUMNS {
            out.push_str(&format!("{:>6}", outcome.name()));
        }
        out.push('\n');
        out.push_str("strategy\n");

        for strategy in Strategy::ALL {
            out.push_str(&format!("{:<10}", strategy.name()));
            for outcome in COLUMNS {
                out.push_str(&format!("{:>6.2}", table.get(strategy, outcome)));
            }
            out.push('\n');
        }
        Ok(out)
    }
}

/// JSON object keyed by strategy, then outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl TableRenderer for JsonRenderer {
    fn render(&self, table: &ProportionTable) -> Result<String, SimError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(table)?
        } else {
            serde_json::to_string(table)?
        };
        Ok(json)
    }
}

/// Renders `table` into `out`.
pub fn write_table<T, W>(renderer: &T, table: &ProportionTable, out: &mut W) -> Result<(), SimError>
where
    T: TableRenderer + ?Sized,
    W: Write,
{
    let text = renderer.render(table)?;
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Renders `table` to standard output.
pub fn print_table<T: TableRenderer + ?Sized>(renderer: &T, table: &ProportionTable) -> Result<(), SimError> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write_table(renderer, table, &mut lock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use montyhall_core::OutcomeProportions;

    fn sample() -> ProportionTable {
        ProportionTable {
            stay: OutcomeProportions { win: 0.33, lose: 0.67 },
            switch: OutcomeProportions { win: 0.67, lose: 0.33 },
        }
    }

    #[test]
    fn test_text_renderer_layout() {
        let text = TextRenderer.render(&sample()).unwrap();
        let expected = "\
outcome     lose   win
strategy
stay        0.67  0.33
switch      0.33  0.67
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_json_renderer() {
        let json = JsonRenderer { pretty: false }.render(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["switch"]["win"], 0.67);
        assert_eq!(value["stay"]["lose"], 0.67);
    }

    #[test]
    fn test_write_table_adds_newline() {
        let mut buf = Vec::new();
        write_table(&JsonRenderer::default(), &sample(), &mut buf).unwrap();
        assert!(buf.ends_with(b"\n"));
    }

    #[test]
    fn test_renderers_are_swappable() {
        let renderers: Vec<Box<dyn TableRenderer>> = vec![Box::new(TextRenderer), Box::new(JsonRenderer::default())];
        for renderer in &renderers {
            let mut buf = Vec::new();
            write_table(renderer.as_ref(), &sample(), &mut buf).unwrap();
            assert!(!buf.is_empty());
        }
    }
}

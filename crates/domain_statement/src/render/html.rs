use fluent::FluentArgs;

use super::{RenderOptions, StatementRenderer};
use crate::error::StatementError;
use crate::statement::Statement;

/// HTML fragment: a heading, a table of performances, and the totals
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl StatementRenderer for HtmlRenderer {
    fn render(&self, statement: &Statement) -> Result<String, StatementError> {
        let format = self.options.money_formatter(statement);
        let labels = self.options.labels()?;

        let mut args = FluentArgs::new();
        args.set("customer", escape(statement.customer()));
        let mut result = format!("<h1>{}</h1>\n", labels.format("html-header", &args)?);

        result.push_str("<table>\n");
        result.push_str(&format!(
            "<tr><th>{}</th><th>{}</th><th>{}</th></tr>\n",
            labels.text("html-column-play")?,
            labels.text("html-column-seats")?,
            labels.text("html-column-amount")?,
        ));
        for line in statement.lines() {
            let mut args = FluentArgs::new();
            args.set("audience", line.audience.to_string());
            result.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape(&line.play_name),
                labels.format("html-seats", &args)?,
                escape(&format.format(&line.amount)?),
            ));
        }
        result.push_str("</table>\n");

        let mut args = FluentArgs::new();
        args.set("amount", escape(&format.format(&statement.total_amount())?));
        result.push_str(&format!("<p>{}</p>\n", labels.format("html-total", &args)?));

        let mut args = FluentArgs::new();
        args.set("credits", statement.total_volume_credits().to_string());
        result.push_str(&format!("<p>{}</p>\n", labels.format("html-credits", &args)?));

        Ok(result)
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

use fluent::FluentArgs;

use super::{RenderOptions, StatementRenderer};
use crate::error::StatementError;
use crate::statement::Statement;

/// Line-oriented text statement, one `\n`-terminated line each for the
/// header, every performance, the total and the credits
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer {
    options: RenderOptions,
}

impl PlainTextRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl StatementRenderer for PlainTextRenderer {
    fn render(&self, statement: &Statement) -> Result<String, StatementError> {
        let format = self.options.money_formatter(statement);
        let labels = self.options.labels()?;

        let mut args = FluentArgs::new();
        args.set("customer", statement.customer());
        let mut result = labels.format("statement-header", &args)?;
        result.push('\n');

        for line in statement.lines() {
            let mut args = FluentArgs::new();
            args.set("play", line.play_name.as_str());
            args.set("amount", format.format(&line.amount)?);
            args.set("audience", line.audience.to_string());
            result.push_str(&labels.format("statement-line", &args)?);
            result.push('\n');
        }

        let mut args = FluentArgs::new();
        args.set("amount", format.format(&statement.total_amount())?);
        result.push_str(&labels.format("statement-total", &args)?);
        result.push('\n');

        let mut args = FluentArgs::new();
        args.set("credits", statement.total_volume_credits().to_string());
        result.push_str(&labels.format("statement-credits", &args)?);
        result.push('\n');

        Ok(result)
    }
}

//! HTML results fragment: accumulation table, drawdown table, guidance

use std::fmt::Write;

use super::{format_money, format_percent};
use crate::projection::ProjectionResult;

/// Render the results fragment
///
/// Currency cells are plain numbers with two decimals; the caller's page
/// supplies the currency symbol in the headers via `currency`.
pub fn render_html(result: &ProjectionResult, currency: &str) -> String {
    let currency = escape(currency);
    let mut out = String::from("<h2>Results</h2>\n");

    let _ = writeln!(out, "<h3>Accumulation Phase</h3>");
    let _ = writeln!(
        out,
        "<table border='1'><tr><th>Year</th><th>Age</th><th>Fund ({currency})</th>\
         <th>Contribution ({currency})</th><th>Growth ({currency})</th></tr>"
    );
    for row in &result.accumulation {
        let _ = writeln!(
            out,
            "<tr><td class=\"centered\">{}</td><td class=\"centered\">{}</td>\
             <td>{}</td><td>{}</td><td>{}</td></tr>",
            row.calendar_year,
            row.age,
            format_money(row.fund_at_start),
            format_money(row.contribution),
            format_money(row.growth),
        );
    }
    let _ = writeln!(out, "</table>");

    let _ = writeln!(out, "<h3>Drawdown Phase</h3>");
    let _ = writeln!(
        out,
        "<table border='1'><tr><th>Year</th><th>Age</th><th>Balance at Start ({currency})</th>\
         <th>%</th><th>Max Drawdown ({currency})</th><th>Growth ({currency})</th></tr>"
    );
    for row in &result.drawdown {
        let class = if row.used_minimum { " class=\"minimum\"" } else { "" };
        let _ = writeln!(
            out,
            "<tr{}><td class=\"centered\">{}</td><td class=\"centered\">{}</td>\
             <td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            class,
            row.calendar_year,
            row.age,
            format_money(row.balance_at_start),
            format_percent(row.percentage),
            format_money(row.amount_withdrawn),
            format_money(row.growth),
        );
        if row.lump_sum_notice {
            let _ = writeln!(
                out,
                "<tr class=\"notice\"><td colspan=\"6\">At age {} the remaining balance of \
                 {currency}{} may be taken as a lump sum.</td></tr>",
                row.age + 1,
                format_money(row.balance_at_end()),
            );
        }
    }
    let _ = writeln!(out, "</table>");

    let _ = writeln!(
        out,
        "<p class=\"guidance {}\">{}</p>",
        result.guidance.label(),
        result.guidance.message()
    );

    out
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::{DrawdownRule, DrawdownTable};
    use crate::projection::{Guidance, ProjectionConfig, ProjectionEngine};
    use crate::SimulationInput;

    #[test]
    fn test_render_tables() {
        let table = DrawdownTable::from_rules((65..100).map(|a| (a, DrawdownRule::new(0.055, 0.0))))
            .expect("table");
        let input = SimulationInput::new(30, 65, 10_000.0, 1_000.0, 0.03, 0.05, 2025).expect("input");
        let result = ProjectionEngine::new(&table, ProjectionConfig::default())
            .project(&input)
            .expect("projection");

        let html = render_html(&result, "£");
        assert!(html.starts_with("<h2>Results</h2>"));
        assert!(html.contains("<th>Fund (£)</th>"));
        assert!(html.contains("<td>10,000.00</td><td>1,000.00</td><td>525.00</td>"));
        assert!(html.contains("<td>5.50</td>"));
        assert!(html.contains("<tr class=\"notice\">"));
        assert_eq!(html.matches("<table").count(), 2);
        assert_eq!(result.guidance, Guidance::Good);
        assert!(html.contains("<p class=\"guidance good\">"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("<b>&"), "&lt;b&gt;&amp;");
    }
}

//! Output rendering. Every function returns the text instead of printing so
//! the binary stays a thin shell.

use comfy_table::{
    Cell, CellAlignment, ContentArrangement, Row as CRow, Table, presets::ASCII_MARKDOWN,
};
use nest_stats::{Number, Summary, Value};
use serde::Serialize;

use crate::conf::{OutputConf, OutputFormat};

fn to_json<T: Serialize + ?Sized>(v: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string(v)?)
}

fn fmt_float(x: f64, precision: usize) -> String {
    format!("{:.*}", precision, x)
}

/// Floats get the configured precision; ints and bools print as they are.
fn fmt_number(n: Number, precision: usize) -> String {
    match n {
        Number::Float(x) => fmt_float(x, precision),
        other => other.to_string(),
    }
}

pub fn render_values(values: &[Value], out: &OutputConf) -> anyhow::Result<String> {
    match out.format {
        OutputFormat::Json => to_json(values),
        OutputFormat::Table => Ok(Value::List(values.to_vec()).to_string()),
    }
}

pub fn render_numbers(numbers: &[Number], out: &OutputConf) -> anyhow::Result<String> {
    match out.format {
        OutputFormat::Json => to_json(numbers),
        OutputFormat::Table => {
            let items: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();
            Ok(format!("[{}]", items.join(", ")))
        }
    }
}

pub fn render_number(name: &str, n: Number, out: &OutputConf) -> anyhow::Result<String> {
    match out.format {
        OutputFormat::Json => {
            let mut obj = serde_json::Map::new();
            obj.insert(name.to_string(), serde_json::to_value(n)?);
            to_json(&obj)
        }
        OutputFormat::Table => Ok(fmt_number(n, out.precision)),
    }
}

pub fn render_float(name: &str, x: f64, out: &OutputConf) -> anyhow::Result<String> {
    render_number(name, Number::Float(x), out)
}

/// Columns: Count | Mean | Median | Std Dev
pub fn render_summary(s: &Summary, out: &OutputConf) -> anyhow::Result<String> {
    if out.format == OutputFormat::Json {
        return to_json(s);
    }
    let mut t = Table::new();
    t.load_preset(ASCII_MARKDOWN);
    t.set_content_arrangement(ContentArrangement::Dynamic);
    t.set_header(vec!["Count", "Mean", "Median", "Std Dev"]);

    let mut row = CRow::new();
    row.add_cell(Cell::new(s.count).set_alignment(CellAlignment::Right));
    row.add_cell(Cell::new(fmt_float(s.mean, out.precision)).set_alignment(CellAlignment::Right));
    row.add_cell(Cell::new(fmt_number(s.median, out.precision)).set_alignment(CellAlignment::Right));
    row.add_cell(
        Cell::new(fmt_float(s.std_deviation, out.precision)).set_alignment(CellAlignment::Right),
    );
    t.add_row(row);
    Ok(t.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(precision: usize) -> OutputConf {
        OutputConf {
            format: OutputFormat::Table,
            precision,
        }
    }

    fn json() -> OutputConf {
        OutputConf {
            format: OutputFormat::Json,
            precision: 6,
        }
    }

    #[test]
    fn floats_use_precision_ints_do_not() {
        assert_eq!(render_float("mean", 2.5, &table(3)).unwrap(), "2.500");
        assert_eq!(render_number("median", Number::Int(2), &table(3)).unwrap(), "2");
        assert_eq!(
            render_number("median", Number::Bool(true), &table(3)).unwrap(),
            "true"
        );
    }

    #[test]
    fn json_scalars_are_keyed() {
        assert_eq!(
            render_number("median", Number::Int(2), &json()).unwrap(),
            r#"{"median":2}"#
        );
        assert_eq!(
            render_float("mean", 2.5, &json()).unwrap(),
            r#"{"mean":2.5}"#
        );
    }

    #[test]
    fn sequences() {
        let values = vec![Value::Int(1), Value::from("a"), Value::Float(0.5)];
        assert_eq!(render_values(&values, &table(2)).unwrap(), r#"[1, "a", 0.5]"#);
        assert_eq!(render_values(&values, &json()).unwrap(), r#"[1,"a",0.5]"#);
        let numbers = vec![Number::Int(1), Number::Bool(false)];
        assert_eq!(render_numbers(&numbers, &table(2)).unwrap(), "[1, false]");
        assert_eq!(render_numbers(&numbers, &json()).unwrap(), "[1,false]");
    }

    #[test]
    fn summary_table_has_all_columns() {
        let s = Summary {
            count: 4,
            mean: 2.5,
            median: Number::Float(2.5),
            std_deviation: 1.118033988749895,
        };
        let text = render_summary(&s, &table(4)).unwrap();
        for needle in ["Count", "Mean", "Median", "Std Dev", "2.5000", "1.1180"] {
            assert!(text.contains(needle), "missing {needle} in\n{text}");
        }
    }
}

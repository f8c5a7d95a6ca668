// text.rs - Delimited text writer and simple numeric reader

use super::Element;
use crate::error::{ArrayError, ArrayResult};
use crate::output::ensure_parent_dir;
use ndarray::{Array2, ArrayBase, Data, Ix2};
use regex::Regex;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

/// Default precision for `%f`, `%e` and `%g`, as in C printf
const DEFAULT_PRECISION: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conversion {
    Int,
    Fixed,
    Exp { upper: bool },
    General { upper: bool },
    Str,
}

/// A single printf-style field specification such as `%d`, `%.2f` or `%10.3e`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFormat {
    left_align: bool,
    zero_pad: bool,
    plus_sign: bool,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: Conversion,
}

impl FromStr for FieldFormat {
    type Err = ArrayError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let pattern = Regex::new(
            r"^%(?P<flags>[-+0 ]*)(?P<width>\d+)?(?:\.(?P<prec>\d+))?(?P<conv>[diufFeEgGs])$",
        )
        .map_err(|e| ArrayError::InvalidFormat(e.to_string()))?;

        let caps = pattern
            .captures(spec.trim())
            .ok_or_else(|| ArrayError::InvalidFormat(spec.to_string()))?;

        let flags = caps.name("flags").map(|m| m.as_str()).unwrap_or("");
        let parse_num = |name: &str| -> ArrayResult<Option<usize>> {
            caps.name(name)
                .map(|m| {
                    m.as_str()
                        .parse::<usize>()
                        .map_err(|_| ArrayError::InvalidFormat(spec.to_string()))
                })
                .transpose()
        };

        let conversion = match caps.name("conv").map(|m| m.as_str()) {
            Some("d") | Some("i") | Some("u") => Conversion::Int,
            Some("f") | Some("F") => Conversion::Fixed,
            Some("e") => Conversion::Exp { upper: false },
            Some("E") => Conversion::Exp { upper: true },
            Some("g") => Conversion::General { upper: false },
            Some("G") => Conversion::General { upper: true },
            Some("s") => Conversion::Str,
            _ => return Err(ArrayError::InvalidFormat(spec.to_string())),
        };

        Ok(Self {
            left_align: flags.contains('-'),
            zero_pad: flags.contains('0'),
            plus_sign: flags.contains('+'),
            width: parse_num("width")?,
            precision: parse_num("prec")?,
            conversion,
        })
    }
}

/// Rewrite Rust's `1.5e0` exponent style into C's `1.5e+00`
fn c_exponent(rendered: &str, upper: bool) -> String {
    let (mantissa, exponent) = match rendered.split_once('e') {
        Some(parts) => parts,
        None => return rendered.to_string(),
    };
    let exp_value: i32 = exponent.parse().unwrap_or(0);
    let sign = if exp_value < 0 { '-' } else { '+' };
    let marker = if upper { 'E' } else { 'e' };
    format!("{}{}{}{:02}", mantissa, marker, sign, exp_value.abs())
}

fn strip_fraction_zeros(rendered: &str) -> String {
    if rendered.contains('.') {
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rendered.to_string()
    }
}

impl FieldFormat {
    fn render_number(&self, value: f64) -> String {
        if !value.is_finite() {
            return if value.is_nan() {
                "nan".to_string()
            } else if value > 0.0 {
                "inf".to_string()
            } else {
                "-inf".to_string()
            };
        }

        let precision = self.precision.unwrap_or(DEFAULT_PRECISION);
        match self.conversion {
            Conversion::Int => format!("{}", value.trunc() as i64),
            Conversion::Fixed => format!("{:.*}", precision, value),
            Conversion::Exp { upper } => c_exponent(&format!("{:.*e}", precision, value), upper),
            Conversion::General { upper } => {
                let significant = precision.max(1);
                let probe = format!("{:.*e}", significant - 1, value);
                let exponent: i32 = probe
                    .split_once('e')
                    .and_then(|(_, exp)| exp.parse().ok())
                    .unwrap_or(0);

                if exponent < -4 || exponent >= significant as i32 {
                    let (mantissa, _) = probe.split_once('e').unwrap_or((probe.as_str(), ""));
                    let stripped = format!("{}e{}", strip_fraction_zeros(mantissa), exponent);
                    c_exponent(&stripped, upper)
                } else {
                    let decimals = (significant as i32 - 1 - exponent).max(0) as usize;
                    strip_fraction_zeros(&format!("{:.*}", decimals, value))
                }
            }
            Conversion::Str => value.to_string(),
        }
    }

    fn pad(&self, rendered: String, numeric: bool) -> String {
        let width = match self.width {
            Some(w) if w > rendered.len() => w,
            _ => return rendered,
        };

        if self.left_align {
            format!("{:<width$}", rendered, width = width)
        } else if self.zero_pad && numeric {
            let (sign, digits) = match rendered.strip_prefix(|c: char| c == '-' || c == '+') {
                Some(rest) => (&rendered[..1], rest),
                None => ("", rendered.as_str()),
            };
            format!("{}{:0>width$}", sign, digits, width = width - sign.len())
        } else {
            format!("{:>width$}", rendered, width = width)
        }
    }

    /// Render one element according to this specification
    pub fn format<T: Element>(&self, value: T) -> String {
        if self.conversion == Conversion::Str {
            return self.pad(value.to_string(), false);
        }

        // Integer elements are rendered exactly, never through f64
        let mut rendered = match (self.conversion, value.to_i64()) {
            (Conversion::Int, Some(int)) => int.to_string(),
            _ => self.render_number(value.to_f64()),
        };
        if self.plus_sign && !rendered.starts_with('-') {
            rendered.insert(0, '+');
        }
        self.pad(rendered, true)
    }
}

/// Write a 2-D array as delimited text, one row per line
pub fn save_txt<T, S>(
    file_path: &Path,
    array: &ArrayBase<S, Ix2>,
    fmt: &str,
    delimiter: &str,
) -> ArrayResult<()>
where
    T: Element,
    S: Data<Elem = T>,
{
    let format: FieldFormat = fmt.parse()?;
    ensure_parent_dir(file_path)?;

    let file = File::create(file_path)?;
    let mut writer = BufWriter::new(file);

    for row in array.rows() {
        let fields: Vec<String> = row.iter().map(|&value| format.format(value)).collect();
        writeln!(writer, "{}", fields.join(delimiter))?;
    }

    writer.flush()?;
    tracing::debug!(
        path = %file_path.display(),
        rows = array.nrows(),
        cols = array.ncols(),
        "array written as text"
    );
    Ok(())
}

/// Read a purely numeric delimited file into a float matrix.
/// Blank lines and `#` comments are skipped; any other non-numeric field is an error.
pub fn load_txt(file_path: &Path, delimiter: u8) -> ArrayResult<Array2<f64>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(file_path)?;

    let mut data = Vec::new();
    let mut columns: Option<usize> = None;
    let mut rows = 0;

    for (record_num, record) in reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(record_num + 1);

        let expected = *columns.get_or_insert(record.len());
        if record.len() != expected {
            return Err(ArrayError::Ragged {
                line,
                expected,
                found: record.len(),
            });
        }

        for (col, field) in record.iter().enumerate() {
            let value = field.parse::<f64>().map_err(|_| ArrayError::Parse {
                line,
                column: col + 1,
                field: field.to_string(),
            })?;
            data.push(value);
        }
        rows += 1;
    }

    let cols = columns.unwrap_or(0);
    tracing::debug!(path = %file_path.display(), rows, cols, "numeric text loaded");
    Array2::from_shape_vec((rows, cols), data).map_err(|e| ArrayError::InvalidArgument(e.to_string()))
}

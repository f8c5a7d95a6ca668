// display.rs - NumPy-style text rendering of arrays

use super::Element;
use ndarray::{ArrayBase, Data, Dimension};

/// Most decimals shown for a float before rounding kicks in
const MAX_PRECISION: usize = 8;

fn decimals_needed(value: f64) -> usize {
    let rendered = format!("{:.*}", MAX_PRECISION, value);
    rendered
        .split('.')
        .nth(1)
        .map(|frac| frac.trim_end_matches('0').len())
        .unwrap_or(0)
}

/// Format floats with a shared precision; integral values keep a trailing `.`
/// and trailing zeros turn into padding so decimal points line up.
pub fn format_floats(items: &[f64]) -> Vec<String> {
    let precision = items
        .iter()
        .filter(|x| x.is_finite())
        .map(|&x| decimals_needed(x))
        .max()
        .unwrap_or(0);

    items
        .iter()
        .map(|&x| {
            if x.is_nan() {
                return "nan".to_string();
            }
            if x.is_infinite() {
                return if x > 0.0 { "inf" } else { "-inf" }.to_string();
            }
            if precision == 0 {
                return format!("{:.0}.", x);
            }
            let full = format!("{:.*}", precision, x);
            let trimmed = full.trim_end_matches('0');
            format!("{:<width$}", trimmed, width = full.len())
        })
        .collect()
}

fn render(out: &mut String, shape: &[usize], cells: &mut impl Iterator<Item = String>, depth: usize) {
    match shape {
        [] => {
            if let Some(cell) = cells.next() {
                out.push_str(&cell);
            }
        }
        [len] => {
            out.push('[');
            for i in 0..*len {
                if i > 0 {
                    out.push(' ');
                }
                if let Some(cell) = cells.next() {
                    out.push_str(&cell);
                }
            }
            out.push(']');
        }
        [len, rest @ ..] => {
            out.push('[');
            for i in 0..*len {
                if i > 0 {
                    out.push_str(&"\n".repeat(rest.len()));
                    out.push_str(&" ".repeat(depth + 1));
                }
                render(out, rest, cells, depth + 1);
            }
            out.push(']');
        }
    }
}

/// Render an array the way NumPy's `str()` does: space separated,
/// right-aligned cells, one row per line for 2-D and up.
pub fn format_array<T, S, D>(array: &ArrayBase<S, D>) -> String
where
    T: Element,
    S: Data<Elem = T>,
    D: Dimension,
{
    let items: Vec<T> = array.iter().copied().collect();
    let formatted = T::format_items(&items);
    let width = formatted.iter().map(|cell| cell.len()).max().unwrap_or(0);

    let mut cells = formatted
        .into_iter()
        .map(|cell| format!("{:>width$}", cell, width = width));
    let mut out = String::new();
    render(&mut out, array.shape(), &mut cells, 0);
    out
}

/// Shape as a tuple literal: `(5,)`, `(2, 3)`
pub fn format_shape(shape: &[usize]) -> String {
    match shape {
        [single] => format!("({},)", single),
        _ => {
            let dims: Vec<String> = shape.iter().map(|d| d.to_string()).collect();
            format!("({})", dims.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array1};

    #[test]
    fn test_integer_rendering() {
        assert_eq!(format_array(&array![1i64, 2, 3, 4, 5]), "[1 2 3 4 5]");
        assert_eq!(
            format_array(&array![[1i64, 2, 3], [4, 5, 6]]),
            "[[1 2 3]\n [4 5 6]]"
        );
        assert_eq!(format_array(&array![[19i64, 22], [43, 50]]), "[[19 22]\n [43 50]]");
        assert_eq!(format_array(&array![5i64, 100]), "[  5 100]");
    }

    #[test]
    fn test_float_rendering() {
        assert_eq!(format_array(&array![0.0, 2.5, 5.0]), "[0.  2.5 5. ]");
        assert_eq!(format_array(&array![[0.0, 0.0], [0.0, 0.0]]), "[[0. 0.]\n [0. 0.]]");

        let roots = array![1.0f64, 2.0, 3.0, 4.0].mapv(f64::sqrt);
        assert_eq!(
            format_array(&roots),
            "[1.         1.41421356 1.73205081 2.        ]"
        );

        let exps = array![1.0f64, 2.0, 3.0, 4.0].mapv(f64::exp);
        assert_eq!(
            format_array(&exps),
            "[ 2.71828183  7.3890561  20.08553692 54.59815003]"
        );
        assert_eq!(format_array(&array![1.0, f64::NAN]), "[ 1. nan]");
    }

    #[test]
    fn test_bool_and_edge_shapes() {
        assert_eq!(format_array(&array![false, true]), "[False  True]");

        let empty: Array1<i64> = Array1::from_vec(vec![]);
        assert_eq!(format_array(&empty), "[]");

        let cube = ndarray::Array3::<i64>::zeros((2, 1, 2));
        assert_eq!(format_array(&cube), "[[[0 0]]\n\n [[0 0]]]");
    }

    #[test]
    fn test_shape_rendering() {
        assert_eq!(format_shape(&[5]), "(5,)");
        assert_eq!(format_shape(&[2, 3]), "(2, 3)");
        assert_eq!(format_shape(&[]), "()");
    }
}

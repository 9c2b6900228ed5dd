//! Rust expression tree and pretty printer for generated programs

use serde_json::{Map, Number, Value};

/// Inline calls longer than this are broken over several lines
const MAX_INLINE_WIDTH: usize = 80;

/// A Rust expression in a generated program
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Emitted verbatim
    Raw(String),
    /// Owned string, emitted as `String::from("..")`
    Str(String),
    /// Boolean literal
    Bool(bool),
    /// `None`
    None,
    /// `Some(..)`
    Some(Box<Expr>),
    /// Function or tuple-variant call: `path(args..)`
    Call {
        /// Callee path
        path: String,
        /// Arguments in order
        args: Vec<Expr>,
    },
    /// Struct literal with fields in order
    Struct {
        /// Struct or variant path
        path: String,
        /// Field names and values
        fields: Vec<(String, Expr)>,
    },
    /// `vec![..]`
    Vec(Vec<Expr>),
    /// Array literal `[..]`
    Array(Vec<Expr>),
    /// Tuple `(a, b)`, always on one line
    Tuple(Vec<Expr>),
}

impl Expr {
    /// Shorthand for [`Expr::Str`]
    pub fn string(text: impl Into<String>) -> Self {
        Self::Str(text.into())
    }

    /// Shorthand for [`Expr::Some`]
    pub fn some(inner: Expr) -> Self {
        Self::Some(Box::new(inner))
    }

    /// Shorthand for [`Expr::Call`]
    pub fn call(path: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::Call {
            path: path.into(),
            args,
        }
    }

    /// Constructor expression rebuilding `value` without macros
    ///
    /// Nesting depth and array length only affect indentation, never macro
    /// recursion in the generated program.
    pub fn value(value: &Value) -> Self {
        match value {
            Value::Null => Self::Raw("Value::Null".to_string()),
            Value::Bool(b) => Self::call("Value::Bool", vec![Self::Bool(*b)]),
            Value::Number(n) => Self::call("Value::from", vec![Self::Raw(number_literal(n))]),
            Value::String(s) => Self::call("Value::from", vec![Self::Raw(string_literal(s))]),
            Value::Array(items) if items.is_empty() => {
                Self::Raw("Value::Array(Vec::new())".to_string())
            }
            Value::Array(items) => Self::call(
                "Value::Array",
                vec![Self::call(
                    "Vec::from",
                    vec![Self::Array(items.iter().map(Self::value).collect())],
                )],
            ),
            Value::Object(map) => Self::call("Value::Object", vec![Self::context(map)]),
        }
    }

    /// `Context` expression with entries in document order
    pub fn context(map: &Map<String, Value>) -> Self {
        if map.is_empty() {
            return Self::Raw("Context::new()".to_string());
        }
        let pairs = map
            .iter()
            .map(|(key, value)| Self::Tuple(vec![Self::string(key), Self::value(value)]))
            .collect();
        Self::call("Context::from_iter", vec![Self::Array(pairs)])
    }
}

/// Renders expressions with a fixed indent unit
#[derive(Debug, Clone)]
pub struct Printer {
    unit: String,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(4)
    }
}

impl Printer {
    /// Printer indenting nested blocks by `width` spaces
    pub fn new(width: usize) -> Self {
        Self {
            unit: " ".repeat(width),
        }
    }

    /// Render `expr` as if it started at column zero
    pub fn render(&self, expr: &Expr) -> String {
        match expr {
            Expr::Raw(text) => text.clone(),
            Expr::Str(text) => format!("String::from({})", string_literal(text)),
            Expr::Bool(value) => value.to_string(),
            Expr::None => "None".to_string(),
            Expr::Some(inner) => format!("Some({})", self.render(inner)),
            Expr::Call { path, args } => {
                let rendered: Vec<String> = args.iter().map(|a| self.render(a)).collect();
                let inline = format!("{}({})", path, rendered.join(", "));
                // A lone argument hugs the parentheses even when it spans lines.
                if rendered.len() > 1 && (inline.contains('\n') || inline.len() > MAX_INLINE_WIDTH) {
                    self.block(&format!("{}(", path), rendered, ")")
                } else {
                    inline
                }
            }
            Expr::Struct { path, fields } => {
                if fields.is_empty() {
                    return format!("{} {{}}", path);
                }
                let rendered = fields
                    .iter()
                    .map(|(name, value)| format!("{}: {}", name, self.render(value)))
                    .collect();
                self.block(&format!("{} {{", path), rendered, "}")
            }
            Expr::Vec(items) => {
                if items.is_empty() {
                    return "vec![]".to_string();
                }
                let rendered = items.iter().map(|i| self.render(i)).collect();
                self.block("vec![", rendered, "]")
            }
            Expr::Array(items) => {
                if items.is_empty() {
                    return "[]".to_string();
                }
                let rendered = items.iter().map(|i| self.render(i)).collect();
                self.block("[", rendered, "]")
            }
            Expr::Tuple(items) => {
                let rendered: Vec<String> = items.iter().map(|i| self.render(i)).collect();
                format!("({})", rendered.join(", "))
            }
        }
    }

    /// Indent every line of `text` after the first by one unit
    pub fn indent_tail(&self, text: &str) -> String {
        text.split('\n')
            .enumerate()
            .map(|(n, line)| {
                if n == 0 || line.is_empty() {
                    line.to_string()
                } else {
                    format!("{}{}", self.unit, line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn block(&self, open: &str, items: Vec<String>, close: &str) -> String {
        let mut out = String::from(open);
        out.push('\n');
        for item in items {
            out.push_str(&self.unit);
            out.push_str(&self.indent_tail(&item));
            out.push_str(",\n");
        }
        out.push_str(close);
        out
    }
}

/// Rust string literal reproducing `text` exactly
///
/// `str`'s Debug output only uses escapes that are also valid in Rust
/// source (`\"`, `\\`, `\n`, `\t`, `\r`, `\0`, `\u{..}`).
pub fn string_literal(text: &str) -> String {
    format!("{:?}", text)
}

/// Typed numeric literal, so integers and floats keep their JSON form
pub fn number_literal(n: &Number) -> String {
    if let Some(v) = n.as_u64() {
        format!("{}u64", v)
    } else if let Some(v) = n.as_i64() {
        format!("{}i64", v)
    } else {
        format!("{:?}f64", n.as_f64().unwrap_or_default())
    }
}

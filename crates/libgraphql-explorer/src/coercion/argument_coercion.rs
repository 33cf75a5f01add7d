use crate::coercion::ScalarKind;
use crate::introspection::InputValue;
use crate::introspection::TypeRef;
use indexmap::IndexMap;

/// A raw value that is absent from every emitted argument list.
pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

/// The [`ScalarKind`] a raw value for `arg_type` is coerced to.
///
/// Dispatches on the named type beneath all wrappers, so `Int!` and `[Int]`
/// both coerce as `Int`: a list argument is sent as a single item, which
/// input coercion wraps into a one-element list. A malformed reference
/// coerces as a custom scalar.
pub fn scalar_kind_of(arg_type: &TypeRef) -> ScalarKind {
    match arg_type.named_type() {
        Some(name) => ScalarKind::from_type_name(name),
        None => ScalarKind::Custom(String::new()),
    }
}

/// Coerce `raw` to GraphQL literal source text for an argument of type
/// `arg_type`.
///
/// * `Int` and `Float` read the longest numeric prefix of the (trimmed)
///   value, so `"4.5"` is the Int `4` and `"1.5x"` the Float `1.5`. A value
///   with no numeric prefix, an Int outside `i64` and a non-finite Float
///   all emit `null`.
/// * `Boolean` is `true` iff `raw` is exactly `"true"`.
/// * Everything else becomes a quoted, escaped string literal.
pub fn coerce_literal(arg_type: &TypeRef, raw: &str) -> String {
    match scalar_kind_of(arg_type) {
        ScalarKind::Boolean => (raw == "true").to_string(),
        ScalarKind::Float => match parse_float(raw) {
            Some(value) => value.to_string(),
            None => "null".to_string(),
        },
        ScalarKind::Int => match parse_int(raw) {
            Some(value) => value.to_string(),
            None => "null".to_string(),
        },
        ScalarKind::Custom(_)
        | ScalarKind::ID
        | ScalarKind::String => quote_string(raw),
    }
}

/// Coerce `raw` to the native JSON value sent in a `variables` object. Uses
/// the same rules as [`coerce_literal`].
pub fn coerce_json(arg_type: &TypeRef, raw: &str) -> serde_json::Value {
    match scalar_kind_of(arg_type) {
        ScalarKind::Boolean => serde_json::Value::Bool(raw == "true"),
        ScalarKind::Float =>
            parse_float(raw)
                .and_then(serde_json::Number::from_f64)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
        ScalarKind::Int =>
            parse_int(raw)
                .map(serde_json::Value::from)
                .unwrap_or(serde_json::Value::Null),
        ScalarKind::Custom(_)
        | ScalarKind::ID
        | ScalarKind::String => serde_json::Value::String(raw.to_string()),
    }
}

/// Render `(name: <literal>, ...)` for every argument in `args` that has a
/// non-blank value in `values`, in declared order.
///
/// Returns the empty string when no argument qualifies.
pub fn inline_arguments(
    args: &[InputValue],
    values: &IndexMap<String, String>,
) -> String {
    let rendered: Vec<String> =
        present_arguments(args, values)
            .map(|(arg, raw)| format!(
                "{}: {}",
                arg.name(),
                coerce_literal(arg.type_ref(), raw),
            ))
            .collect();

    if rendered.is_empty() {
        String::new()
    } else {
        format!("({})", rendered.join(", "))
    }
}

/// The arguments from `args` that have a non-blank value in `values`,
/// paired with that value, in declared order (not in `values`' order).
pub fn present_arguments<'a>(
    args: &'a [InputValue],
    values: &'a IndexMap<String, String>,
) -> impl Iterator<Item = (&'a InputValue, &'a str)> {
    args.iter().filter_map(|arg| {
        let raw = values.get(arg.name())?;
        if is_blank(raw) {
            None
        } else {
            Some((arg, raw.as_str()))
        }
    })
}

fn parse_int(raw: &str) -> Option<i64> {
    let text = raw.trim();
    let sign = sign_len(text);
    let digits = digits_len(&text[sign..]);
    if digits == 0 {
        return None;
    }
    text[..sign + digits].parse::<i64>().ok()
}

fn parse_float(raw: &str) -> Option<f64> {
    let text = raw.trim();
    let mut end = sign_len(text);
    let int_digits = digits_len(&text[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if text[end..].starts_with('.') {
        frac_digits = digits_len(&text[end + 1..]);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if text[end..].starts_with(['e', 'E']) {
        let exp_start = end + 1;
        let exp_sign = sign_len(&text[exp_start..]);
        let exp_digits = digits_len(&text[exp_start + exp_sign..]);
        if exp_digits > 0 {
            end = exp_start + exp_sign + exp_digits;
        }
    }

    text[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn sign_len(text: &str) -> usize {
    usize::from(text.starts_with(['+', '-']))
}

fn digits_len(text: &str) -> usize {
    text.bytes().take_while(u8::is_ascii_digit).count()
}

fn quote_string(raw: &str) -> String {
    serde_json::Value::String(raw.to_string()).to_string()
}

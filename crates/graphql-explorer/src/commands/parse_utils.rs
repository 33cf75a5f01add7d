/// Parse `name=value`. Everything after the first `=` is the value, which
/// may be empty.
pub(crate) fn parse_key_value(input: &str) -> Result<(String, String), String> {
    let (key, value) =
        input.split_once('=')
            .ok_or_else(|| format!("expected `name=value`, found `{input}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing a name before `=` in `{input}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Parse `field.name`.
pub(crate) fn parse_field_path(input: &str) -> Result<(String, String), String> {
    let (field, name) =
        input.trim()
            .split_once('.')
            .ok_or_else(|| format!("expected `field.name`, found `{input}`"))?;
    let (field, name) = (field.trim(), name.trim());
    if field.is_empty() || name.is_empty() || name.contains('.') {
        return Err(format!("expected `field.name`, found `{input}`"));
    }
    Ok((field.to_string(), name.to_string()))
}

/// Parse `field.arg=value`.
pub(crate) fn parse_field_arg(input: &str) -> Result<(String, String, String), String> {
    let (path, value) = parse_key_value(input)?;
    let (field, arg) = parse_field_path(&path)?;
    Ok((field, arg, value))
}

use libgraphql_explorer::classify::FieldClass;
use libgraphql_explorer::document::BuiltOperation;
use libgraphql_explorer::introspection::Field;
use libgraphql_explorer::introspection::InputValue;
use libgraphql_explorer::selection::SelectionTree;
use libgraphql_explorer::session::ExplorerSession;

pub(crate) const GREEN_CHECK: &str = "✅";
pub(crate) const RED_X: &str = "❌";

/// `name: Type`, or `name: Type = default` when a default is declared.
pub(crate) fn input_value_signature(input_value: &InputValue) -> String {
    match input_value.default_value() {
        Some(default_value) => format!(
            "{}: {} = {default_value}",
            input_value.name(),
            input_value.type_ref(),
        ),
        None => format!("{}: {}", input_value.name(), input_value.type_ref()),
    }
}

/// `name(arg: Type, ...): ReturnType`
pub(crate) fn field_signature(field: &Field) -> String {
    let args: Vec<String> =
        field.args()
            .iter()
            .map(input_value_signature)
            .collect();
    let args =
        if args.is_empty() {
            String::new()
        } else {
            format!("({})", args.join(", "))
        };
    let deprecated = if field.is_deprecated() { " (deprecated)" } else { "" };

    format!("{}{args}: {}{deprecated}", field.name(), field.type_ref())
}

pub(crate) fn description_lines(description: Option<&str>, indent: &str) -> Vec<String> {
    description
        .map(str::trim)
        .filter(|description| !description.is_empty())
        .map(|description| {
            description.lines()
                .map(|line| format!("{indent}# {}", line.trim()))
                .collect()
        })
        .unwrap_or_default()
}

/// Lines describing `operation`: its signature, its arguments and every
/// field selectable on its return type along with that field's
/// classification. When `checked` is given, each field is prefixed with its
/// check box.
pub(crate) fn operation_lines(
    session: &ExplorerSession<'_>,
    operation: &Field,
    checked: Option<&SelectionTree>,
) -> Vec<String> {
    let mut lines = vec![field_signature(operation)];
    lines.extend(description_lines(operation.description(), "  "));

    if !operation.args().is_empty() {
        lines.push("Arguments:".to_string());
        for arg in operation.args() {
            let required = if arg.is_required() { "  (required)" } else { "" };
            lines.push(format!("  {}{required}", input_value_signature(arg)));
        }
    }

    let return_fields = session.catalog().fields_of(operation.type_ref());
    if return_fields.is_empty() {
        return lines;
    }
    lines.push(format!(
        "Fields of {}:",
        operation.type_ref().named_type().unwrap_or_default(),
    ));
    for field in return_fields {
        let selection = checked.and_then(|tree| tree.get(field.name()));
        let check_box = match checked {
            Some(_) => if selection.is_some() { "[x] " } else { "[ ] " },
            None => "",
        };
        let class = session.classify(field);
        lines.push(format!("  {check_box}{}  <{class}>", field_signature(field)));

        if class == FieldClass::Connection {
            let subfields: Vec<String> =
                session.connection_subfields(field)
                    .into_iter()
                    .map(|subfield| {
                        let is_checked =
                            selection.is_some_and(|selection| {
                                selection.subfields()
                                    .iter()
                                    .any(|name| name == subfield.name())
                            });
                        if is_checked {
                            format!("{}*", subfield.name())
                        } else {
                            subfield.name().to_string()
                        }
                    })
                    .collect();
            lines.push(format!("      node fields: {}", subfields.join(" ")));
        }
    }
    lines
}

pub(crate) fn pretty_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("<unprintable JSON: {e}>"))
}

/// The document, followed by its variables (if there are any).
pub(crate) fn built_operation_lines(built: &BuiltOperation) -> Vec<String> {
    let mut lines = vec![built.document().to_string()];
    if let Some(variables) = built.variables()
        && !variables.is_empty() {
        lines.push("Variables:".to_string());
        lines.push(pretty_json(&serde_json::Value::Object(variables.clone())));
    }
    lines
}

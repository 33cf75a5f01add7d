use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use libgraphql_explorer::catalog::TypeCatalog;
use libgraphql_explorer::document::OperationKind;
use libgraphql_explorer::introspection::SchemaType;
use libgraphql_explorer::introspection::TypeKind;

#[derive(Debug, clap::Args)]
pub(crate) struct SchemaCmd {
    #[arg(
        help="Also list every type defined by the schema.",
        long,
    )]
    types: bool,
}

#[inherent::inherent]
impl RunnableCommand for SchemaCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        let catalog = match cli.load_catalog().await {
            Ok(catalog) => catalog,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };

        CommandResult::stdout(format_args!(
            "{}",
            schema_lines(&catalog, self.types).join("\n"),
        ))
    }
}

pub(crate) fn schema_lines(catalog: &TypeCatalog, include_types: bool) -> Vec<String> {
    let mut lines = vec![];
    for (title, kind) in [
        ("Queries", OperationKind::Query),
        ("Mutations", OperationKind::Mutation),
    ] {
        let fields = catalog.operation_fields(kind);
        if catalog.operation_type(kind).is_none() {
            lines.push(format!("{title}: none (the schema defines no {kind} type)"));
            continue;
        }
        lines.push(format!("{title} ({}):", fields.len()));
        for field in fields {
            lines.push(format!("  {}", output_utils::field_signature(field)));
            lines.extend(output_utils::description_lines(field.description(), "      "));
        }
    }

    if include_types {
        let user_types: Vec<&SchemaType> = catalog.user_types().collect();
        lines.push(format!("Types ({}):", user_types.len()));
        for schema_type in user_types {
            lines.extend(type_lines(schema_type));
        }
    }
    lines
}

fn type_lines(schema_type: &SchemaType) -> Vec<String> {
    let mut lines = vec![format!("  {} {}", schema_type.kind(), schema_type.name())];
    lines.extend(output_utils::description_lines(schema_type.description(), "      "));
    match schema_type.kind() {
        TypeKind::Enum =>
            for enum_value in schema_type.enum_values() {
                lines.push(format!("    {}", enum_value.name()));
            },

        TypeKind::InputObject =>
            for input_field in schema_type.input_fields() {
                lines.push(format!(
                    "    {}",
                    output_utils::input_value_signature(input_field),
                ));
            },

        TypeKind::Union =>
            for possible_type in schema_type.possible_types() {
                lines.push(format!("    | {possible_type}"));
            },

        _ =>
            for field in schema_type.fields() {
                lines.push(format!("    {}", output_utils::field_signature(field)));
            },
    }
    lines
}

use anyhow::bail;
use crate::commands::parse_field_arg;
use crate::commands::parse_field_path;
use crate::commands::parse_key_value;
use crate::output_utils;
use libgraphql_explorer::document::OperationKind;
use libgraphql_explorer::session::ExplorerSession;
use libgraphql_explorer::transport::GraphQLTransport;

pub(crate) const HELP: &str = "\
Commands:
  op [query|mutation] NAME     start building the named operation
  toggle FIELD                 check or uncheck a field of the result
  arg NAME=VALUE               set an argument of the operation
  farg FIELD.ARG=VALUE         set an argument of a checked field
  sub FIELD.SUBFIELD           check or uncheck a node field of a connection
  fields                       list operations, or the current operation's fields
  preview                      print the document as it stands
  run                          send the document and print the result
  help                         print this message
  quit                         leave";

/// One line of input to the interactive explorer.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum ReplCommand {
    Arg {
        name: String,
        value: String,
    },
    FieldArg {
        arg: String,
        field: String,
        value: String,
    },
    Fields,
    Help,
    Op {
        kind: OperationKind,
        name: String,
    },
    Preview,
    Quit,
    Run,
    Sub {
        field: String,
        subfield: String,
    },
    Toggle {
        field: String,
    },
}
impl ReplCommand {
    /// Parse one input line. Blank lines parse to `None`.
    pub(crate) fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word {
            "arg" => {
                let (name, value) = parse_key_value(rest)?;
                Self::Arg { name, value }
            },

            "farg" => {
                let (field, arg, value) = parse_field_arg(rest)?;
                Self::FieldArg { arg, field, value }
            },

            "fields" => Self::Fields,
            "help" | "?" => Self::Help,

            "op" => {
                let words: Vec<&str> = rest.split_whitespace().collect();
                let (kind, name) = match words.as_slice() {
                    ["query", name] => (OperationKind::Query, *name),
                    ["mutation", name] => (OperationKind::Mutation, *name),
                    [name] => (OperationKind::Query, *name),
                    _ => return Err("usage: op [query|mutation] NAME".to_string()),
                };
                Self::Op {
                    kind,
                    name: name.to_string(),
                }
            },

            "preview" => Self::Preview,
            "quit" | "exit" => Self::Quit,
            "run" => Self::Run,

            "sub" => {
                let (field, subfield) = parse_field_path(rest)?;
                Self::Sub { field, subfield }
            },

            "toggle" => {
                if rest.is_empty() || rest.contains(char::is_whitespace) {
                    return Err("usage: toggle FIELD".to_string());
                }
                Self::Toggle {
                    field: rest.to_string(),
                }
            },

            other => return Err(format!(
                "unknown command `{other}` (try `help`)",
            )),
        };
        Ok(Some(command))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum ReplFlow {
    Continue,
    Quit,
}

/// Drives an [`ExplorerSession`] from [`ReplCommand`]s, collecting what it
/// has to say as output lines.
pub(crate) struct Repl<'catalog, 'transport, T: GraphQLTransport> {
    session: ExplorerSession<'catalog>,
    target: Option<(&'transport T, String)>,
}
impl<'catalog, 'transport, T: GraphQLTransport> Repl<'catalog, 'transport, T> {
    /// `target` is the transport and endpoint used by `run`; without one,
    /// documents can be built and previewed but not sent.
    pub(crate) fn new(
        session: ExplorerSession<'catalog>,
        target: Option<(&'transport T, String)>,
    ) -> Self {
        Self {
            session,
            target,
        }
    }

    pub(crate) fn prompt(&self) -> String {
        match self.session.active_operation() {
            Some(operation) => format!("{} {}> ", operation.kind(), operation.name()),
            None => "> ".to_string(),
        }
    }

    pub(crate) async fn handle_line(&mut self, line: &str, out: &mut Vec<String>) -> ReplFlow {
        let command = match ReplCommand::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return ReplFlow::Continue,
            Err(e) => {
                out.push(format!("{} {e}", output_utils::RED_X));
                return ReplFlow::Continue;
            },
        };

        log::trace!("Handling {command:?}.");
        match self.dispatch(command, out).await {
            Ok(flow) => flow,
            Err(e) => {
                out.push(format!("{} {e:#}", output_utils::RED_X));
                ReplFlow::Continue
            },
        }
    }

    async fn dispatch(
        &mut self,
        command: ReplCommand,
        out: &mut Vec<String>,
    ) -> anyhow::Result<ReplFlow> {
        match command {
            ReplCommand::Arg { name, value } => {
                self.session.set_argument(&name, &value)?;
                out.push(format!("Set `{name}`."));
            },

            ReplCommand::FieldArg { arg, field, value } => {
                self.session.set_subfield_argument(&field, &arg, &value)?;
                out.push(format!("Set `{field}.{arg}`."));
            },

            ReplCommand::Fields => self.push_fields(out),
            ReplCommand::Help => out.push(HELP.to_string()),

            ReplCommand::Op { kind, name } => {
                self.session.select_operation(kind, &name)?;
                out.push(format!("{} Building {kind} `{name}`.", output_utils::GREEN_CHECK));
                self.push_fields(out);
            },

            ReplCommand::Preview => {
                let built = self.session.preview_query()?;
                out.extend(output_utils::built_operation_lines(&built));
            },

            ReplCommand::Quit => return Ok(ReplFlow::Quit),

            ReplCommand::Run => {
                let Some((transport, endpoint)) = &self.target else {
                    bail!(
                        "No endpoint to run against. Restart with --endpoint \
                        or --preset to execute documents.",
                    );
                };
                let data = self.session.execute(*transport, endpoint).await?;
                out.push(output_utils::pretty_json(&data));
            },

            ReplCommand::Sub { field, subfield } => {
                let checked = self.session.set_connection_subfield(&field, &subfield)?;
                out.push(format!("{} `{field}.{subfield}`.", check_verb(checked)));
            },

            ReplCommand::Toggle { field } => {
                let checked = self.session.toggle_field(&field)?;
                out.push(format!("{} `{field}`.", check_verb(checked)));
            },
        }
        Ok(ReplFlow::Continue)
    }

    fn push_fields(&self, out: &mut Vec<String>) {
        if let Some(operation) = self.session.active_operation() {
            out.extend(output_utils::operation_lines(
                &self.session,
                operation.field(),
                Some(operation.selections()),
            ));
            return;
        }

        for (title, kind) in [
            ("Queries", OperationKind::Query),
            ("Mutations", OperationKind::Mutation),
        ] {
            let fields = self.session.selectable_fields(kind);
            if fields.is_empty() {
                continue;
            }
            out.push(format!("{title}:"));
            for field in fields {
                out.push(format!("  {}", output_utils::field_signature(field)));
            }
        }
    }
}

fn check_verb(checked: bool) -> &'static str {
    if checked { "Checked" } else { "Unchecked" }
}

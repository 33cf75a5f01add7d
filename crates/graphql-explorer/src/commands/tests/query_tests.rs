use crate::commands::CommandEnum;
use crate::commands::QueryCmd;
use crate::tests::fixtures;
use clap::Parser;
use libgraphql_explorer::ExplorerError;
use libgraphql_explorer::session::ExplorerSession;

fn query_cmd(args: &[&str]) -> QueryCmd {
    let argv =
        ["graphql-explorer", "query"].into_iter()
            .chain(args.iter().copied());
    match CommandEnum::try_parse_from(argv) {
        Ok(CommandEnum::Query(cmd)) => *cmd,
        other => panic!("expected the query command, found {other:?}"),
    }
}

fn build(args: &[&str]) -> Result<String, ExplorerError> {
    let catalog = fixtures::catalog();
    let cmd = query_cmd(args);
    let mut session =
        ExplorerSession::with_config(&catalog, cmd.build_options.session_config());
    cmd.apply(&mut session)?;
    Ok(session.preview_query()?.document().to_string())
}

#[test]
fn default_selection() {
    assert_eq!(
        build(&["blocks", "--inline"]),
        Ok("query { blocks { hash number } }".to_string()),
    );
}

#[test]
fn select_replaces_default_selection() {
    assert_eq!(
        build(&["blocks", "--inline", "--select", "number, hash,number"]),
        Ok("query { blocks { number hash } }".to_string()),
    );
}

#[test]
fn subfields_and_field_args_check_their_field() {
    assert_eq!(
        build(&[
            "blocks", "--inline", "--connection-subfields", "0",
            "--select", "number",
            "--arg", "limit=3",
            "--subfield", "transactions.hash",
            "--subfield", "transactions.hash",
            "--field-arg", "transactions.first=2",
        ]),
        Ok(
            "query { blocks(limit: 3) { number transactions(first: 2) { edges { node { hash } } \
            pageInfo { endCursor hasNextPage } } } }".to_string(),
        ),
    );
}

#[test]
fn checked_connections_start_with_their_node_fields() {
    assert_eq!(
        build(&["blocks", "--inline", "--select", "transactions", "--subfield", "transactions.hash"]),
        Ok(
            "query { blocks { transactions { edges { node { hash value } } \
            pageInfo { endCursor hasNextPage } } } }".to_string(),
        ),
    );
}

#[test]
fn mutation_with_variables() {
    assert_eq!(
        build(&["deleteBlock", "--mutation", "--arg", "id=0x1"]),
        Ok("mutation($id: ID!) { deleteBlock(id: $id) }".to_string()),
    );
}

#[test]
fn unknown_names_fail() {
    assert_eq!(
        build(&["blocks", "--arg", "first=1"]),
        Err(ExplorerError::UnknownArgument {
            argument_name: "first".to_string(),
            field_name: "blocks".to_string(),
        }),
    );
    assert!(matches!(
        build(&["blocks", "--select", "miner"]),
        Err(ExplorerError::UnknownField { .. }),
    ));
    assert!(matches!(
        build(&["blocks", "--subfield", "number.hash"]),
        Err(ExplorerError::NotAConnection { .. }),
    ));
}

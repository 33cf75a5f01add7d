use crate::http_transport::HttpTransport;
use crate::output_utils::RED_X;
use crate::repl::Repl;
use crate::repl::ReplCommand;
use crate::repl::ReplFlow;
use crate::tests::fixtures;
use libgraphql_explorer::catalog::TypeCatalog;
use libgraphql_explorer::document::DocumentShape;
use libgraphql_explorer::document::OperationKind;
use libgraphql_explorer::session::ExplorerSession;
use libgraphql_explorer::session::SessionConfig;

fn offline_repl(catalog: &TypeCatalog) -> Repl<'_, '_, HttpTransport> {
    let config = SessionConfig {
        shape: DocumentShape::InlineLiterals,
        ..SessionConfig::default()
    };
    Repl::new(ExplorerSession::with_config(catalog, config), None)
}

async fn feed(repl: &mut Repl<'_, '_, HttpTransport>, line: &str) -> Vec<String> {
    let mut out = vec![];
    assert_eq!(repl.handle_line(line, &mut out).await, ReplFlow::Continue);
    out
}

#[test]
fn parse_commands() {
    assert_eq!(ReplCommand::parse("   "), Ok(None));
    assert_eq!(
        ReplCommand::parse("op blocks"),
        Ok(Some(ReplCommand::Op {
            kind: OperationKind::Query,
            name: "blocks".to_string(),
        })),
    );
    assert_eq!(
        ReplCommand::parse(" op   mutation deleteBlock "),
        Ok(Some(ReplCommand::Op {
            kind: OperationKind::Mutation,
            name: "deleteBlock".to_string(),
        })),
    );
    assert_eq!(
        ReplCommand::parse("arg term=hello world"),
        Ok(Some(ReplCommand::Arg {
            name: "term".to_string(),
            value: "hello world".to_string(),
        })),
    );
    assert_eq!(
        ReplCommand::parse("farg transactions.first=5"),
        Ok(Some(ReplCommand::FieldArg {
            arg: "first".to_string(),
            field: "transactions".to_string(),
            value: "5".to_string(),
        })),
    );
    assert_eq!(
        ReplCommand::parse("sub transactions.hash"),
        Ok(Some(ReplCommand::Sub {
            field: "transactions".to_string(),
            subfield: "hash".to_string(),
        })),
    );
    assert_eq!(ReplCommand::parse("exit"), Ok(Some(ReplCommand::Quit)));
    assert_eq!(ReplCommand::parse("?"), Ok(Some(ReplCommand::Help)));
}

#[test]
fn parse_errors() {
    assert!(ReplCommand::parse("op").is_err());
    assert!(ReplCommand::parse("op subscription feed").is_err());
    assert!(ReplCommand::parse("toggle").is_err());
    assert!(ReplCommand::parse("toggle a b").is_err());
    assert!(ReplCommand::parse("sub transactions").is_err());
    assert!(ReplCommand::parse("arg limit").is_err());
    assert_eq!(
        ReplCommand::parse("select hash"),
        Err("unknown command `select` (try `help`)".to_string()),
    );
}

#[tokio::test]
async fn build_a_query_step_by_step() {
    let catalog = fixtures::catalog();
    let mut repl = offline_repl(&catalog);
    assert_eq!(repl.prompt(), "> ");

    let out = feed(&mut repl, "op blocks").await;
    assert_eq!(out[0], "✅ Building query `blocks`.");
    assert_eq!(repl.prompt(), "query blocks> ");

    assert_eq!(feed(&mut repl, "arg limit=2").await, vec!["Set `limit`."]);
    assert_eq!(feed(&mut repl, "toggle number").await, vec!["Unchecked `number`."]);
    assert_eq!(feed(&mut repl, "toggle transactions").await, vec!["Checked `transactions`."]);
    assert_eq!(
        feed(&mut repl, "sub transactions.value").await,
        vec!["Unchecked `transactions.value`."],
    );
    assert_eq!(
        feed(&mut repl, "farg transactions.first=5").await,
        vec!["Set `transactions.first`."],
    );

    assert_eq!(
        feed(&mut repl, "preview").await,
        vec![
            "query { blocks(limit: 2) { hash transactions(first: 5) { edges { node { hash } } \
            pageInfo { endCursor hasNextPage } } } }",
        ],
    );
}

#[tokio::test]
async fn session_errors_are_reported() {
    let catalog = fixtures::catalog();
    let mut repl = offline_repl(&catalog);

    assert_eq!(
        feed(&mut repl, "preview").await,
        vec![format!("{RED_X} No operation has been selected")],
    );
    feed(&mut repl, "op blocks").await;
    assert_eq!(
        feed(&mut repl, "sub hash.value").await,
        vec![format!("{RED_X} Field `hash` is not a connection")],
    );
    assert_eq!(
        feed(&mut repl, "bogus").await,
        vec![format!("{RED_X} unknown command `bogus` (try `help`)")],
    );
}

#[tokio::test]
async fn run_needs_an_endpoint() {
    let catalog = fixtures::catalog();
    let mut repl = offline_repl(&catalog);
    feed(&mut repl, "op status").await;

    let out = feed(&mut repl, "run").await;
    assert_eq!(out.len(), 1);
    assert!(out[0].starts_with(&format!("{RED_X} No endpoint to run against.")), "{}", out[0]);
}

#[tokio::test]
async fn fields_lists_operations_before_one_is_chosen() {
    let catalog = fixtures::catalog();
    let mut repl = offline_repl(&catalog);

    assert_eq!(
        feed(&mut repl, "fields").await,
        vec![
            "Queries:",
            "  blocks(limit: Int = 10): [Block!]",
            "  status: String (deprecated)",
            "Mutations:",
            "  deleteBlock(id: ID!): Boolean",
        ],
    );
}

#[tokio::test]
async fn quit_ends_the_session() {
    let catalog = fixtures::catalog();
    let mut repl = offline_repl(&catalog);
    let mut out = vec![];

    assert_eq!(repl.handle_line("quit", &mut out).await, ReplFlow::Quit);
    assert!(out.is_empty());
}

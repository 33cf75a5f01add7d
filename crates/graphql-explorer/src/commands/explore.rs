use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::BuildOptions;
use crate::output_utils;
use crate::repl::HELP;
use crate::repl::Repl;
use crate::repl::ReplFlow;
use libgraphql_explorer::session::ExplorerSession;
use std::io::BufRead;
use std::io::Write;

#[derive(Debug, clap::Args)]
pub(crate) struct ExploreCmd {
    #[command(flatten)]
    build_options: BuildOptions,
}

#[inherent::inherent]
impl RunnableCommand for ExploreCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        let catalog = match cli.load_catalog().await {
            Ok(catalog) => catalog,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };
        let transport = match cli.http_transport() {
            Ok(transport) => transport,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };
        let target = match cli.endpoint() {
            Ok(endpoint) => Some((&transport, endpoint)),
            Err(e) => {
                log::warn!("`run` is disabled: {e:#}");
                None
            },
        };

        let session =
            ExplorerSession::with_config(&catalog, self.build_options.session_config());
        let mut repl = Repl::new(session, target);
        println!("{} Loaded {} types.\n{HELP}", output_utils::GREEN_CHECK, catalog.len());

        let mut stdin = std::io::stdin().lock();
        let mut out = vec![];
        loop {
            print!("{}", repl.prompt());
            if let Err(e) = std::io::stdout().flush() {
                return CommandResult::stderr(format_args!("{} {e}", output_utils::RED_X));
            }

            let mut line = String::new();
            match stdin.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => (),
                Err(e) => return CommandResult::stderr(format_args!(
                    "{} Unable to read input: {e}",
                    output_utils::RED_X,
                )),
            }

            let flow = repl.handle_line(&line, &mut out).await;
            for output_line in out.drain(..) {
                println!("{output_line}");
            }
            if flow == ReplFlow::Quit {
                break;
            }
        }

        CommandResult::silent_success()
    }
}

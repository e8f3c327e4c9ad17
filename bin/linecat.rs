use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use linecat::{connect, init_tracing, session, Arguments};
use tokio::{
    io::{stdin, stdout},
    runtime::Builder,
};

async fn chat(args: Arguments) -> anyhow::Result<()> {
    let stream = connect::connect(&args.hostname, args.port)
        .await
        .with_context(|| format!("Failed to connect to {}:{}", args.hostname, args.port))?;
    let (reader, writer) = stream.into_split();

    session::run(stdin(), stdout(), reader, writer)
        .await
        .context("Relay failed")?;
    Ok(())
}

fn main() -> ExitCode {
    let args = match Arguments::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(args.console);

    let runtime = match Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build async runtime")
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("{e:?}");
            return ExitCode::FAILURE;
        }
    };

    let result = runtime.block_on(chat(args));
    // A pending stdin read cannot be cancelled; don't wait for it.
    runtime.shutdown_background();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:?}");
            ExitCode::FAILURE
        }
    }
}

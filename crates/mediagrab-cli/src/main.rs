use mediagrab_lib::cli::{ResolvedCommand, parse_args, resolve_command, run_fetch};
use mediagrab_lib::error::MediaGrabError;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), MediaGrabError> {
    color_eyre::install()?;

    let args = parse_args();
    let command = resolve_command(args.command)?;

    match command {
        ResolvedCommand::Fetch(params) => run_fetch(params).await?,
    }

    Ok(())
}

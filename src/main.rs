//! Custodian's application entry point.
//! Parses the command line, sets up logging and hands over to the session.

use custodian::{
    cli::{get_args, print_usage, Args},
    constants::NEED_INPUT_MESSAGE,
    error::{default_error_handler, Result},
    renderer::MiniJinjaRenderer,
    session,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// Without any path this prints usage and returns successfully. The session
/// outcome is only reported through its console trace.
fn run(args: Args) -> Result<()> {
    let Some((imports, dest)) = args.targets() else {
        print_usage()?;
        println!("{}", NEED_INPUT_MESSAGE);
        return Ok(());
    };

    let renderer = MiniJinjaRenderer::new();
    let outcome = session::run(&renderer, imports, dest)?;
    log::debug!("Session finished: {:?}", outcome);
    Ok(())
}

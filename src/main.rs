use clap::Parser;
use rgbnorm::cli::Args;
use rgbnorm::display::{NoPreview, PipelineObserver, TerminalPreview};
use rgbnorm::pipeline;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Usage errors print their own diagnostic and exit with status 2
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .format_timestamp(None)
        .format_target(false)
        .init();

    let mut observer: Box<dyn PipelineObserver> = if args.preview {
        Box::new(TerminalPreview::default())
    } else {
        Box::new(NoPreview)
    };

    match pipeline::run(&args, observer.as_mut()) {
        Ok(report) => {
            if args.statistics {
                rgbnorm::print_statistics(&report);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

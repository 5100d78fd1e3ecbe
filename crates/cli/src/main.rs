use clap::Parser;
use solbal_cli::args::CliArgs;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    solbal_cli::init_tracing(args.verbose);

    match solbal_cli::run(&args).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(solbal_cli::exit_code(&err))
        }
    }
}

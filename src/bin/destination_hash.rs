use api_checks::destination::{HashArgs, run};
use api_checks::telemetry::{get_subscriber, init_subscriber};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Keep stdout reserved for the `<digest>;<salt>` line
    let subscriber = get_subscriber("destination_hash".into(), "warn".into(), std::io::stderr);
    init_subscriber(subscriber);

    let outcome = HashArgs::parse(std::env::args_os().skip(1))
        .and_then(|args| run(&args, &mut rand::thread_rng()));
    match outcome {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            // The cause chain ends in a blank line
            eprintln!("{}", format!("{:?}", e).trim_end());
            ExitCode::FAILURE
        }
    }
}

use anyhow::Result;

pub use self::args::Arguments;
pub use self::exit_status::ExitStatus;

mod args;
mod exit_status;
mod run;

/// Run the CLI and print one dependency per line on stdout.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let dependencies = run::run(&args)?;
    for dependency in &dependencies {
        println!("{}", dependency);
    }
    Ok(ExitStatus::Success)
}

use processsutra::cli::{self, Command};
use processsutra::{AppConfig, AppError};

fn main() {
    // RUST_LOG manda; por defecto info. El bridge de tracing-log recoge los `log::` de las librerías.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter)
                                     .with_writer(std::io::stderr)
                                     .try_init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match execute(&args) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("[sutra] {e}");
            std::process::exit(e.exit_code());
        }
    }
}

fn execute(args: &[String]) -> Result<String, AppError> {
    let cmd: Command = cli::parse_args(args)?;
    let cfg = AppConfig::from_env()?;
    let output = cli::run(&cmd, &cfg)?;
    Ok(serde_json::to_string_pretty(&output)?)
}

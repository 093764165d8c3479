use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use material_estimator::app::{self, AppError, RunOptions};
use material_estimator::{config, logging};

#[derive(Parser)]
#[command(name = "material_estimator")]
#[command(version)]
#[command(about = "Interactive construction material estimator (English / Filipino)")]
struct Cli {
    /// Configuration file
    #[arg(long, value_name = "PATH", default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Directory with <code>.toml locale packs overriding built-in messages
    #[arg(long, value_name = "DIR")]
    locales: Option<PathBuf>,

    /// Re-prompt until every measurement is a non-negative number
    #[arg(long)]
    strict: bool,

    /// Log filter (e.g. "debug"), overrides RUST_LOG and the config file
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 대화 세션을 한 번 실행한다.
fn main() {
    let cli = Cli::parse();
    if let Err(err) = try_run(cli) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let cfg = match config::load_or_default(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            logging::init_logging(cli.log_level.as_deref(), "warn");
            return Err(e.into());
        }
    };
    logging::init_logging(cli.log_level.as_deref(), &cfg.log.filter);

    let opts = RunOptions::resolve(&cfg, cli.strict, cli.locales);
    let stdin = io::stdin();
    app::run(stdin.lock(), io::stdout().lock(), &opts)?;
    Ok(())
}

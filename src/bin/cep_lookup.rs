use cep_weather::utils::error::{ErrorKind, LookupStage};
use cep_weather::utils::logger;
use cep_weather::{config, AppState, CliConfig};
use clap::Parser;

/// 單次查詢：CEP → 目前溫度，輸出 JSON
#[derive(Debug, Parser)]
#[command(name = "cep-lookup")]
#[command(about = "Resolve one CEP and print its current temperature")]
struct LookupArgs {
    /// CEP to look up, with or without the dash (e.g. 01001-000)
    code: String,

    #[command(flatten)]
    config: CliConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = LookupArgs::parse();
    logger::init_logger(args.config.verbose);

    let settings = config::load(&args.config)?;
    let state = AppState::from_config(&*settings)?;

    match state.service.temperature_for(&args.code).await {
        Ok(report) => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Err(failure) => {
            tracing::error!("❌ {}", failure);
            eprintln!("❌ {}", failure);

            let exit_code = match (failure.stage, failure.kind()) {
                (LookupStage::Location, ErrorKind::InvalidFormat) => 2,
                (LookupStage::Location, ErrorKind::NotFound) => 3,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}

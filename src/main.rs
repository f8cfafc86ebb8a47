use clap::Parser;
use small_calc::core::output::{render_calc, render_plate};
use small_calc::utils::{logger, validation::Validate};
use small_calc::{
    check_licence_plate, CalcError, Calculator, Car, CliConfig, Command, InMemoryRegistry,
    LicencePlate, Settings, Value,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 驗證配置
    let settings = match config.validate().and_then(|_| config.settings()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    if settings.is_json() {
        logger::init_json_logger(settings.verbose);
    } else {
        logger::init_cli_logger(settings.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    match run(&config.command, &settings) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Command failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(command: &Command, settings: &Settings) -> Result<String, CalcError> {
    match command {
        Command::Calc { operation, a, b } => {
            let lhs = Value::parse_operand(a)?;
            let rhs = Value::parse_operand(b)?;
            tracing::info!("Computing {} {} {}", lhs, operation.symbol(), rhs);

            let result = Calculator::new().apply(*operation, &lhs, &rhs)?;
            render_calc(*operation, result, settings.is_json())
        }
        Command::Plate { plate, .. } => {
            let plate = LicencePlate::new(plate)?;
            let car = Car::new(plate.clone());
            let registry = InMemoryRegistry::from_strings(settings.stolen_plates.as_slice())?;
            tracing::info!("Checking plate against {} stolen entries", registry.len());

            let stolen = check_licence_plate(&car, &registry);
            render_plate(&plate, stolen, settings.is_json())
        }
    }
}

use clap::Parser;
use mockable::DefaultClock;
use std::sync::Arc;
use user_registrar::core::{ClientLookup, CreditScoringService, UserStore};
use user_registrar::utils::error::ErrorCategory;
use user_registrar::utils::{logger, validation::Validate};
use user_registrar::{
    CliConfig, HttpCreditScoringService, InMemoryClientDirectory, InMemoryUserStore,
    JsonLinesUserStore, RegistrarConfig, RegistrarError, RegistrationOutcome, UserRegistrar,
};

const EXIT_REJECTED: i32 = 2;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose, cli.json_logs);

    tracing::info!("🚀 Starting user-registrar");
    tracing::info!("📁 Loading configuration from: {}", cli.config);
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match RegistrarConfig::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }
    tracing::info!("✅ Configuration loaded and validated successfully");

    let endpoint = match config.scoring_endpoint() {
        Ok(endpoint) => endpoint,
        Err(e) => exit_with(&e),
    };
    let clients = InMemoryClientDirectory::new(config.clients.clone());
    if clients.is_empty() {
        tracing::warn!("⚠️ No clients configured; every registration will be rejected");
    }
    let scoring = HttpCreditScoringService::new(endpoint, config.scoring_timeout());
    tracing::info!(
        "Using {} configured clients, scoring at {}",
        clients.len(),
        scoring.endpoint()
    );

    let result = if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - users are kept in memory only");
        run(&cli, &config, clients, InMemoryUserStore::new(), scoring).await
    } else {
        let store = JsonLinesUserStore::new(config.user_store_path());
        run(&cli, &config, clients, store, scoring).await
    };

    match result {
        Ok(RegistrationOutcome::Registered(user)) => {
            tracing::info!("✅ User registered");
            println!("✅ Registered {} {}", user.first_name, user.last_name);
            match user.credit_limit {
                Some(limit) => println!("💳 Credit limit: {}", limit),
                None => println!("💳 No credit limit"),
            }
            Ok(())
        }
        Ok(RegistrationOutcome::Rejected(reason)) => {
            eprintln!("❌ Registration rejected: {}", reason);
            eprintln!("   reason code: {}", reason.code());
            std::process::exit(EXIT_REJECTED);
        }
        Err(e) => exit_with(&e),
    }
}

async fn run<L, U, S>(
    cli: &CliConfig,
    config: &RegistrarConfig,
    clients: L,
    users: U,
    scoring: S,
) -> user_registrar::Result<RegistrationOutcome>
where
    L: ClientLookup,
    U: UserStore,
    S: CreditScoringService,
{
    let registrar =
        UserRegistrar::with_rules(clients, users, scoring, Arc::new(DefaultClock), config.rules);
    registrar.register(cli.registration_request()).await
}

fn exit_with(e: &RegistrarError) -> ! {
    tracing::error!(
        "❌ Registration failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.category() {
        ErrorCategory::Configuration => 1,
        ErrorCategory::Collaborator | ErrorCategory::System => 3,
    };
    std::process::exit(exit_code);
}

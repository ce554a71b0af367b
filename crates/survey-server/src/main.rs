use anyhow::Context;
use survey_config::SurveyConfig;
use survey_db::service::SurveyService;
use survey_server::state::AppState;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive.
const LOG_ENV: &str = "SURVEY_LOG";

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("bi-survey error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    init_tracing()?;

    let config = SurveyConfig::load_with_dotenv().context("failed to load configuration")?;
    let database = config
        .require_database()
        .context("a database connection string is required")?;

    let service = SurveyService::open(database)
        .await
        .context("failed to open survey database")?;
    let mode = if service.db().is_remote() {
        "remote"
    } else {
        "local"
    };
    tracing::info!(mode, "database ready");

    let state = AppState::new(service, config.server.clone());
    survey_server::serve(state)
        .await
        .context("survey server failed")
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing: {error}"))
}

mod cli;
mod repl;
mod source;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use photoprompt_ai::{
    CaptionClient, CaptionConfig, CaptionProvider, ConversationClient, ConversationConfig,
    ConversationProvider,
};
use photoprompt_common::{ImageOrigin, PhotopromptError};
use photoprompt_config::PhotopromptConfig;
use photoprompt_session::{FileImageReader, PipelineController};
use tokio::io::BufReader;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use crate::source::PathSource;

const FALLBACK_DIRECTIVE: &str = "photoprompt=info";

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Workspace root, two levels up from crates/photoprompt-app/
        manifest_dir.join("..").join("..").join(".env"),
        PathBuf::from(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

fn init_logging(directive: &str) {
    let directive: Result<Directive, _> = directive
        .parse()
        .or_else(|_| FALLBACK_DIRECTIVE.parse());
    let filter = match directive {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_controller(config: &PhotopromptConfig) -> Result<PipelineController, PhotopromptError> {
    let mut caption = CaptionConfig::new(config.captioning.endpoint.clone())
        .with_timeout(Duration::from_secs(config.captioning.timeout_secs.into()));
    if let Some(token) = config.captioning.token() {
        caption = caption.with_token(token);
    } else {
        tracing::warn!(
            var = %config.captioning.token_env,
            "no captioning token set, captions will come from file metadata"
        );
    }

    let mut conversation = ConversationConfig::new(config.conversation.endpoint.clone())
        .with_timeout(Duration::from_secs(config.conversation.timeout_secs.into()));
    if let Some(key) = config.conversation.token() {
        conversation = conversation.with_api_key(key);
    } else {
        tracing::warn!(
            var = %config.conversation.token_env,
            "no conversation API key set, openers will come from keyword rules"
        );
    }

    let captioner = CaptionClient::new(caption)
        .map_err(|e| PhotopromptError::Other(format!("captioning client: {e}")))?;
    let conversation = ConversationClient::new(conversation)
        .map_err(|e| PhotopromptError::Other(format!("conversation client: {e}")))?;

    Ok(PipelineController::new(
        Arc::new(FileImageReader),
        Arc::new(captioner) as Arc<dyn CaptionProvider>,
        Arc::new(conversation) as Arc<dyn ConversationProvider>,
    ))
}

async fn run(args: cli::Args, config: PhotopromptConfig) -> Result<(), PhotopromptError> {
    let mut controller = build_controller(&config)?;

    let mut stdout = std::io::stdout();

    let source = PathSource::new(args.image.as_ref().map(PathBuf::from));
    if args.camera {
        repl::acquire(&mut controller, &source, ImageOrigin::Camera, "the camera", &mut stdout)
            .await?;
    } else if let Some(path) = &args.image {
        repl::acquire(&mut controller, &source, ImageOrigin::Gallery, path, &mut stdout).await?;
    }

    let stdin = BufReader::new(tokio::io::stdin());
    repl::run(&mut controller, stdin, &mut stdout).await
}

#[tokio::main]
async fn main() -> ExitCode {
    load_dotenv();

    let args = cli::parse();

    let loaded = match &args.config {
        Some(path) => photoprompt_config::load_config_from(Path::new(path)),
        None => photoprompt_config::load_config(),
    };
    let (config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (PhotopromptConfig::default(), Some(e)),
    };

    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.directive().to_string());
    init_logging(&directive);

    tracing::info!("photoprompt v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    if let Some(e) = load_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    if args.print_config {
        println!("{}", photoprompt_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    match run(args, config).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("photoprompt failed: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

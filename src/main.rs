use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use avataurus::application::services::{
    AvatarUrlBuilder, GravatarCheck, SeedResolver, register_default_avatars,
};
use avataurus::application::{ResolveAvatarUseCase, UninstallUseCase};
use avataurus::domain::entities::{AvatarOption, AvatarRequest, IdentityRef, absolute_size};
use avataurus::domain::ports::{AVATAR_DEFAULT_OPTION, SettingsPort, TransientStorePort};
use avataurus::infrastructure::{
    AppConfig, CacheBackend, CliArgs, Command, DiskTransientStore, FileSettingsStore,
    GravatarClient, MemoryTransientStore, StaticUserDirectory, StorageManager,
};

/// Logs to the configured file, and echoes warnings and errors to stderr so
/// they reach whoever ran the command. Without a file everything goes to stderr.
fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    let Some(log_path) = config.effective_log_path() else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
        return Ok(());
    };

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let file_layer = fmt::layer().with_writer(file).with_ansi(false);
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_filter(LevelFilter::WARN);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    info!(path = %log_path.display(), "Logging initialized");
    Ok(())
}

fn load_config(args: &CliArgs) -> Result<(AppConfig, StorageManager)> {
    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok((config, storage))
}

async fn open_store(config: &AppConfig) -> Result<Arc<dyn TransientStorePort>> {
    Ok(match config.cache {
        CacheBackend::Memory => Arc::new(MemoryTransientStore::new(config.memory_cache_capacity)),
        CacheBackend::Disk => Arc::new(
            DiskTransientStore::default_location()
                .await
                .wrap_err("Failed to open disk cache")?,
        ),
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    let (config, storage) = load_config(&args)?;

    init_logging(&config)?;

    info!(version = avataurus::VERSION, "Starting Avataurus");

    let settings: Arc<dyn SettingsPort> =
        Arc::new(FileSettingsStore::open(storage).wrap_err("Failed to load site settings")?);

    match args.command {
        Command::Resolve {
            identity,
            size,
            default,
            force_default,
            fallback,
        } => {
            let store = open_store(&config).await?;
            let probe = GravatarClient::with_config(&config.gravatar_url, config.probe_timeout())?;
            let use_case = ResolveAvatarUseCase::new(
                SeedResolver::new(Arc::new(StaticUserDirectory::from_records(
                    config.users.clone(),
                ))),
                GravatarCheck::new(store, Arc::new(probe)).with_ttl(config.cache_ttl()),
                AvatarUrlBuilder::with_base_url(&config.service_url),
                settings,
            );

            let request = AvatarRequest {
                size: size.map(absolute_size),
                force_default,
                default,
            };
            let url = use_case
                .execute(&IdentityRef::from_input(&identity), &request, &fallback)
                .await;
            println!("{url}");
        }
        Command::Defaults => {
            let mut defaults = vec![AvatarOption::new("mystery", "Mystery Person")];
            register_default_avatars(&mut defaults);
            let current = settings.get_option(AVATAR_DEFAULT_OPTION).await?;
            for option in defaults {
                let marker = if current.as_deref() == Some(option.id.as_str()) {
                    "*"
                } else {
                    " "
                };
                println!("{marker} {:<20} {}", option.id, option.label);
            }
        }
        Command::SetDefault { selector } => {
            settings
                .update_option(AVATAR_DEFAULT_OPTION, &selector)
                .await?;
            info!(selector = %selector, "Default avatar updated");
        }
        Command::Uninstall => {
            let store = open_store(&config).await?;
            let report = UninstallUseCase::new(settings, store).execute().await?;
            println!("{report}");
        }
    }

    Ok(())
}

use clap::Parser;
use recx_api::RestApi;
use recx_storage::{load_model, BlobStoreConfig, ModelSource};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// A small collaborative-filtering recommendation server
#[derive(Parser, Debug)]
#[command(name = "recx")]
#[command(about = "Serve article recommendations from a precomputed user-similarity model", long_about = None)]
struct Args {
    /// Load the model artifact from a local file instead of the object store
    #[arg(long)]
    model_file: Option<PathBuf>,

    /// Object store endpoint, e.g. https://models.example.net
    #[arg(long)]
    store_endpoint: Option<String>,

    /// Object store container holding the model blob
    #[arg(long, default_value = "model")]
    container: String,

    /// Name of the model blob
    #[arg(long, default_value = "user_similarity_model.bin")]
    blob: String,

    /// HTTP API port
    #[arg(long, default_value_t = 7071)]
    http_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn model_source(&self) -> anyhow::Result<ModelSource> {
        match (&self.model_file, &self.store_endpoint) {
            (Some(path), None) => Ok(ModelSource::File { path: path.clone() }),
            (None, Some(endpoint)) => Ok(ModelSource::Http {
                config: BlobStoreConfig {
                    endpoint: endpoint.clone(),
                    container: self.container.clone(),
                },
                blob_name: self.blob.clone(),
            }),
            (Some(_), Some(_)) => {
                anyhow::bail!("--model-file and --store-endpoint are mutually exclusive")
            }
            (None, None) => anyhow::bail!("either --model-file or --store-endpoint is required"),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting recx v{}", env!("CARGO_PKG_VERSION"));
    info!("HTTP API port: {}", args.http_port);

    let source = args.model_source()?;
    let model = Arc::new(load_model(&source).await?);
    info!(
        "Model loaded: {} users, {} items",
        model.user_count(),
        model.item_count()
    );

    let http_port = args.http_port;
    let model_http = model.clone();
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(model_http, http_port).await {
                eprintln!("HTTP server error: {}", e);
            }
        })
    });

    info!("recx started successfully");
    info!("HTTP API: http://localhost:{}/", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}

use std::{net::SocketAddr, path::PathBuf, sync::Arc, time::Duration};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use earnings_digest::{
    gemini::GeminiClient, server, tokens::TiktokenCounter, tracing::init_tracing_subscriber,
    DigestService, DigestServiceBuilder, SummaryRequest, DEFAULT_MAX_TRANSCRIPT_TOKENS,
};
use transcript_pdf::PdfExtractBackend;

#[derive(Parser)]
#[command(
    name = "earnings-digest",
    about = "Summarize earnings call transcripts with Gemini"
)]
struct Cli {
    /// Google Generative AI API key
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Gemini model used for summaries
    #[arg(long, env = "GEMINI_MODEL", default_value = GeminiClient::DEFAULT_MODEL)]
    model: String,

    /// Override for the Gemini API base URL
    #[arg(long, env = "GEMINI_BASE_URL")]
    base_url: Option<String>,

    /// Transcripts above this many tokens are rejected before reaching the model
    #[arg(long, env = "MAX_TRANSCRIPT_TOKENS", default_value_t = DEFAULT_MAX_TRANSCRIPT_TOKENS)]
    max_tokens: usize,

    /// Timeout for a single model request, in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "120")]
    request_timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP API
    Serve {
        /// Address to bind
        #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8000")]
        addr: SocketAddr,
    },
    /// Summarize a single transcript and print the JSON summary
    Summarize(SummarizeArgs),
}

#[derive(Args)]
struct SummarizeArgs {
    /// Company the transcript belongs to
    #[arg(long)]
    company: String,

    /// Plain-text transcript file
    #[arg(long, conflicts_with = "pdf", required_unless_present = "pdf")]
    text: Option<PathBuf>,

    /// PDF transcript file
    #[arg(long)]
    pdf: Option<PathBuf>,
}

type Service = DigestService<GeminiClient, TiktokenCounter, PdfExtractBackend>;

fn build_service(cli: &Cli) -> anyhow::Result<Service> {
    let mut gemini = GeminiClient::new(&cli.api_key)
        .with_model(&cli.model)
        .with_timeout(Duration::from_secs(cli.request_timeout))
        .context("Failed to build HTTP client")?;
    if let Some(base_url) = &cli.base_url {
        gemini = gemini.with_base_url(base_url);
    }

    let token_counter = TiktokenCounter::new().context("Failed to initialize tokenizer")?;

    tracing::info!(model = %gemini.model(), max_tokens = cli.max_tokens, "Initialized model client");

    Ok(DigestServiceBuilder::new()
        .generator(gemini)
        .token_counter(token_counter)
        .pdf_extractor(PdfExtractBackend::new())
        .max_transcript_tokens(cli.max_tokens)
        .build())
}

async fn summarize(service: &Service, args: SummarizeArgs) -> anyhow::Result<()> {
    let summary = match (args.text, args.pdf) {
        (Some(path), _) => {
            let transcript_text = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read transcript {}", path.display()))?;
            let request = SummaryRequest::new(args.company, transcript_text);
            service.summarize_text(&request).await?
        }
        (None, Some(path)) => service.summarize_pdf(&args.company, &path).await?,
        (None, None) => anyhow::bail!("Either --text or --pdf is required"),
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let service = build_service(&cli)?;

    match cli.command {
        Command::Serve { addr } => {
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("Failed to bind {addr}"))?;
            server::serve(listener, server::router(Arc::new(service))).await?;
        }
        Command::Summarize(args) => summarize(&service, args).await?,
    }

    Ok(())
}

use anyhow::{bail, Context};
use clap::Parser;
use solrq::prelude::*;
use solrq::MATCH_ALL;
use solrq_client::config::{DEFAULT_BASE_URL, DEFAULT_CORE};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Build a Solr hybrid search query and run it
#[derive(Parser, Debug)]
#[command(name = "solrq")]
#[command(about = "Typed Solr text, vector and hybrid search", long_about = None)]
struct Args {
    /// Solr base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    url: String,

    /// Core (collection) to search
    #[arg(long, default_value = DEFAULT_CORE)]
    core: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Read the whole query from a JSON file instead of the flags below
    #[arg(long, conflicts_with_all = ["text", "vector", "rerank"])]
    query_file: Option<PathBuf>,

    /// Base query
    #[arg(long, default_value = MATCH_ALL)]
    query: String,

    /// Filter clause (repeatable)
    #[arg(short, long)]
    filter: Vec<String>,

    /// Text to search with edismax
    #[arg(short, long)]
    text: Option<String>,

    /// Query fields with boosts, e.g. "title^5 content^1"
    #[arg(long)]
    qf: Option<String>,

    /// Minimum match, e.g. "75%"
    #[arg(long)]
    mm: Option<String>,

    /// Default boolean operator (AND or OR)
    #[arg(long)]
    q_op: Option<String>,

    /// Tie breaker in 0.0..=1.0
    #[arg(long)]
    tie: Option<f64>,

    /// Query vector as comma-separated numbers
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    vector: Option<Vec<f64>>,

    /// Dense vector field name
    #[arg(long, default_value = "content_vector")]
    vector_field: String,

    /// Nearest neighbors to retrieve
    #[arg(long, default_value_t = 10)]
    top_k: usize,

    /// Rerank query
    #[arg(long)]
    rerank: Option<String>,

    /// Number of first-stage hits to rerank
    #[arg(long, default_value_t = 100)]
    rerank_docs: usize,

    /// Rerank blend weight
    #[arg(long, default_value_t = 0.5)]
    rerank_weight: f64,

    #[arg(long, default_value_t = 10, allow_hyphen_values = true)]
    limit: i64,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    offset: i64,

    /// Sort expression, e.g. "score desc"
    #[arg(long)]
    sort: Option<String>,

    /// Fields to return, comma-separated
    #[arg(long, value_delimiter = ',')]
    fields: Option<Vec<String>>,

    /// Print the wire JSON instead of sending it
    #[arg(long)]
    dry_run: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn parse_operator(op: &str) -> anyhow::Result<QueryOperator> {
    match op.to_ascii_uppercase().as_str() {
        "AND" => Ok(QueryOperator::And),
        "OR" => Ok(QueryOperator::Or),
        other => bail!("Unknown query operator: {} (expected AND or OR)", other),
    }
}

fn build_query(args: &Args) -> anyhow::Result<CompositeQuery> {
    if let Some(path) = &args.query_file {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read query file {:?}", path))?;
        return Ok(CompositeQuery::from_json_str(&raw)?);
    }

    let mut query = CompositeQuery::new()
        .with_query(args.query.as_str())
        .with_limit(args.limit)
        .with_offset(args.offset);

    for filter in &args.filter {
        query = query.with_filter(filter.as_str());
    }

    if let Some(text) = &args.text {
        let mut text_query = TextQuery::new(text.as_str());
        if let Some(qf) = &args.qf {
            text_query = text_query.with_qf(qf.as_str());
        }
        if let Some(mm) = &args.mm {
            text_query = text_query.with_mm(mm.as_str());
        }
        query = query.with_text(text_query);
    }

    let mut lexical = LexicalParams::new();
    if let Some(op) = &args.q_op {
        lexical = lexical.with_q_op(parse_operator(op)?);
    }
    if let Some(tie) = args.tie {
        lexical = lexical.with_tie(tie)?;
    }
    if !lexical.is_empty() {
        query = query.with_lexical(lexical);
    }

    if let Some(vector) = &args.vector {
        query = query.with_vector(VectorQuery::new(
            args.vector_field.as_str(),
            vector.clone(),
            args.top_k,
        )?);
    }

    if let Some(rerank) = &args.rerank {
        query = query.with_rerank(RerankConfig::new(
            rerank.as_str(),
            args.rerank_docs,
            args.rerank_weight,
        )?);
    }

    if let Some(sort) = &args.sort {
        query = query.with_sort(sort.as_str());
    }
    if let Some(fields) = &args.fields {
        query = query.with_fields(fields.iter().map(String::as_str));
    }

    query.validate()?;
    Ok(query)
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

    // stdout carries JSON only
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let query = build_query(&args)?;

    if args.dry_run {
        println!("{}", query.to_json_pretty()?);
        return Ok(());
    }

    let config = ClientConfig::new(args.url.as_str(), args.core.as_str())
        .with_timeout(Duration::from_secs(args.timeout));
    let client = SolrClient::new(config)?;
    info!("Searching {}", client.query_url());

    let response = client.search(&query).await?;
    info!(
        "{} documents matched, {} returned",
        response.num_found().unwrap_or(0),
        response.docs().len()
    );
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

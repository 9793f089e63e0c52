use clap::Parser;
use log::{debug, info};

use translate_critic::{
  LlmClient, LlmConfig, TranslationReport, Translator, TranslatorConfig,
};

/// Translate a text with one model and have another model judge it
#[derive(Parser, Debug)]
#[command(name = "translate-critic", version)]
struct Cli
{   /// Text to translate
    #[arg(required = true, num_args = 1..)]
    text: Vec<String>
  , /// Target language (default: English)
    #[arg(long, short = 'l')]
    target_lang: Option<String>
  , /// Model used for the translation
    #[arg(long)]
    translator_model: Option<String>
  , /// Model used for the evaluation
    #[arg(long)]
    judge_model: Option<String>
  , /// Inference endpoint
    #[arg(long, env = "MENTORPIECE_ENDPOINT")]
    endpoint: Option<String>
  , /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>
}

#[tokio::main]
async fn main()
{   // A missing .env file is fine; the real environment still applies.
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(
      env_logger::Env::default().default_filter_or("info")
    ).init();

    let cli = Cli::parse();
    debug!(
      "target_lang={:?}, translator={:?}, judge={:?}",
      cli.target_lang, cli.translator_model, cli.judge_model
    );

    let mut llm_config = LlmConfig::from_env();
    if let Some(endpoint) = cli.endpoint
    {   llm_config = llm_config.with_endpoint(endpoint);
    }
    if let Some(secs) = cli.timeout_secs
    {   llm_config = llm_config.with_timeout_secs(secs);
    }

    let mut translator_config = TranslatorConfig::default();
    if let Some(model) = cli.translator_model
    {   translator_config.translator_model = model;
    }
    if let Some(model) = cli.judge_model
    {   translator_config.judge_model = model;
    }

    info!("Using endpoint {}", llm_config.endpoint);
    let translator = Translator::new(
      LlmClient::new(llm_config),
      translator_config
    );

    let text = cli.text.join(" ");
    let report = translator
      .run(&text, cli.target_lang.as_deref())
      .await;
    print_report(&report);
}

fn print_report(report: &TranslationReport)
{   println!("Original:\n{}\n", report.original);
    println!("Translation:\n{}\n", report.translation);
    println!("Evaluation:\n{}", report.evaluation);
}

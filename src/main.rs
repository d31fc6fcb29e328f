use clap::Parser;
use orientation_engine::adapters::{JsonLinesRecorder, TracingRecorder};
use orientation_engine::app::render;
use orientation_engine::utils::error::ErrorSeverity;
use orientation_engine::utils::{logger, validation::Validate};
use orientation_engine::{
    AnswerSheet, AssessmentRecorder, CatalogData, CliConfig, EngineError, RecommendationEngine,
    TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    // 載入 TOML 配置
    let mut config = match &args.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };

    if config.json_logging() {
        logger::init_json_logger(args.verbose, config.log_level());
    } else {
        logger::init_cli_logger(args.verbose, config.log_level());
    }

    tracing::info!("🚀 Starting orientation engine");

    // 應用命令列覆蓋設定
    if let Some(limit) = args.limit {
        config.engine.limit = limit;
        tracing::info!("🔧 Limit overridden to: {}", limit);
    }

    if let Err(e) = run(&args, &config).await {
        tracing::error!(
            "❌ Assessment failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(args: &CliConfig, config: &TomlConfig) -> Result<(), EngineError> {
    config.validate()?;

    let data_path = args.data.as_deref().or(config.data_path());
    let data = match data_path {
        Some(path) => {
            tracing::info!("📁 Loading catalog data from: {}", path);
            CatalogData::from_file(path)?
        }
        None => CatalogData::builtin()?,
    };

    let engine = RecommendationEngine::from_data(data, config.engine.clone())?;
    tracing::info!("✅ Configuration and catalog validated");

    if args.dry_run {
        display_summary(&engine, config, data_path);
        return Ok(());
    }

    let mut answers = match &args.answers {
        Some(path) => {
            let content = tokio::fs::read_to_string(path).await?;
            AnswerSheet::from_json_str(&content)?
        }
        None => AnswerSheet::new(),
    };
    args.apply_inline_answers(&mut answers)?;

    if answers.is_empty() {
        tracing::warn!("No answers supplied; recommendations follow catalog order");
    }

    let assessment = engine.assess(&answers);
    println!("{}", render(&assessment, args.format)?);

    let recorder: Box<dyn AssessmentRecorder> = match config.audit_path() {
        Some(path) => {
            let recorder = JsonLinesRecorder::new(path);
            tracing::debug!("Recording assessment to {}", recorder.path().display());
            Box::new(recorder)
        }
        None => Box::new(TracingRecorder),
    };
    recorder.record(&assessment).await?;

    Ok(())
}

fn display_summary(engine: &RecommendationEngine, config: &TomlConfig, data_path: Option<&str>) {
    let settings = engine.settings();
    println!("📋 Configuration Summary:");
    println!("  Data: {}", data_path.unwrap_or("built-in catalog"));
    println!("  Interest areas: {}", engine.taxonomy().len());
    println!("  Keywords: {}", engine.taxonomy().keyword_count());
    println!("  Programs: {}", engine.catalog().len());
    println!("  Institutions: {}", engine.catalog().institution_count());
    println!("  Limit: {}", settings.limit);
    println!("  Weight: {}", settings.weight);
    println!("  Top areas: {}", settings.top_areas);
    println!(
        "  Default institutions: {}",
        engine.resolver().defaults().join(", ")
    );
    println!("  Audit log: {}", config.audit_path().unwrap_or("disabled"));
    println!();
    println!("🔍 DRY RUN MODE - no assessment performed");
}

//! Subcommand implementations.

use std::path::Path;

use anyhow::Context;
use menumind_chat::{GeminiClient, LLMConfig, RecommendationRequest, Recommender};
use menumind_core::MenuMindConfig;
use menumind_enrich::{cuisine_frequency, price_frequency, EnrichmentPipeline};
use menumind_store::ListingStore;
use tracing::info;

fn open(data_dir: &Path) -> anyhow::Result<(MenuMindConfig, ListingStore)> {
    let config = MenuMindConfig::from_env(data_dir)
        .with_context(|| format!("cannot prepare data directory {}", data_dir.display()))?;
    let store = ListingStore::new(&config.data_paths.restaurants_file);
    Ok((config, store))
}

/// Deduplicate and enrich the collection, replacing the file in place.
pub fn enrich(data_dir: &Path) -> anyhow::Result<()> {
    let (_, store) = open(data_dir)?;
    let raw = store.load_raw()?;
    if raw.is_empty() {
        println!("No restaurants found in {}", store.path().display());
        return Ok(());
    }

    let report = EnrichmentPipeline::run(raw);
    store.save(&report.listings)?;

    println!("Read:        {}", report.input_count);
    println!("Duplicates:  {}", report.duplicates_dropped);
    println!("Enriched:    {}", report.listings.len());
    println!("Time:        {}ms", report.duration_ms);
    println!("Saved to {}", store.path().display());
    Ok(())
}

pub fn stats(data_dir: &Path) -> anyhow::Result<()> {
    let (config, store) = open(data_dir)?;
    let listings = store.load_enriched()?;

    println!("Total restaurants: {}", listings.len());
    println!();
    println!("Top cuisines:");
    for row in cuisine_frequency(&listings).iter().take(config.stats_top) {
        println!("  {:<24} {}", row.label, row.count);
    }
    println!();
    println!("Price levels:");
    for row in price_frequency(&listings) {
        println!("  {:<24} {}", row.label, row.count);
    }
    Ok(())
}

pub async fn recommend(data_dir: &Path, request: &RecommendationRequest) -> anyhow::Result<()> {
    let (config, store) = open(data_dir)?;
    let listings = store.load_enriched()?;

    let llm_config = LLMConfig::load(&config.data_paths.llm_config_file);
    let client = GeminiClient::new(&llm_config)?;
    let recommender = Recommender::new(listings, config.max_context_restaurants);
    info!("Asking {} for {} recommendations", client.model(), request.num_results);

    let response = recommender.recommend(&client, request).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

pub fn details(data_dir: &Path, place_id: &str) -> anyhow::Result<()> {
    let (_, store) = open(data_dir)?;
    let listing = store.find(place_id)?;
    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}

pub fn cities(data_dir: &Path) -> anyhow::Result<()> {
    let (_, store) = open(data_dir)?;
    for city in store.cities()? {
        println!("{}", city);
    }
    Ok(())
}

/// Parse `<query words...> [--city NAME] [--price 1,2] [--count N]`.
pub fn parse_recommend_args(args: &[String]) -> Result<RecommendationRequest, String> {
    let mut words: Vec<&str> = Vec::new();
    let mut request = RecommendationRequest::new(String::new());

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--city" => {
                let city = iter.next().ok_or("--city needs a value")?;
                request.city = Some(city.clone());
            }
            "--price" => {
                let raw = iter.next().ok_or("--price needs a value, e.g. 1,2")?;
                let levels = raw
                    .split(',')
                    .map(|p| p.trim().parse::<i64>())
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|_| format!("invalid price levels: {}", raw))?;
                request.price_levels = Some(levels);
            }
            "--count" => {
                let raw = iter.next().ok_or("--count needs a value")?;
                request.num_results = raw
                    .parse::<usize>()
                    .ok()
                    .filter(|&n| n > 0)
                    .ok_or_else(|| format!("invalid count: {}", raw))?;
            }
            flag if flag.starts_with("--") => return Err(format!("unknown option: {}", flag)),
            word => words.push(word),
        }
    }

    if words.is_empty() {
        return Err("Usage: menumind recommend <query> [--city NAME] [--price 1,2] [--count N]".into());
    }
    request.query = words.join(" ");
    Ok(request)
}

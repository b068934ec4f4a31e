//! MenuMind — restaurant enrichment and LLM-backed recommendations.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

mod commands;

fn resolve_data_dir() -> PathBuf {
    std::env::var("MENUMIND_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let exe_dir = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()));
            if let Some(dir) = exe_dir {
                let parent_data = dir.join("../data");
                if parent_data.exists() {
                    return parent_data;
                }
            }
            PathBuf::from("data")
        })
}

fn print_help() {
    println!("MenuMind — restaurant enrichment and recommendations");
    println!();
    println!("Usage: menumind <command>");
    println!();
    println!("Commands:");
    println!("  enrich [data-dir]        Deduplicate and enrich restaurants.json in place");
    println!("  stats [data-dir]         Show cuisine and price-level statistics");
    println!("  recommend <query> [--city NAME] [--price 1,2] [--count N]");
    println!("                           Ask the LLM for recommendations");
    println!("  details <place-id>       Show one enriched restaurant");
    println!("  cities                   List cities in the collection");
    println!("  help                     Show this help message");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        print_help();
        return Ok(());
    };

    let data_dir_arg = || args.get(2).map(PathBuf::from).unwrap_or_else(resolve_data_dir);

    match command.as_str() {
        "enrich" | "--clean" => commands::enrich(&data_dir_arg()),
        "stats" | "--stats" => commands::stats(&data_dir_arg()),
        "recommend" => {
            let request = match commands::parse_recommend_args(&args[2..]) {
                Ok(r) => r,
                Err(msg) => {
                    eprintln!("{}", msg);
                    std::process::exit(1);
                }
            };
            commands::recommend(&resolve_data_dir(), &request).await
        }
        "details" => {
            let Some(place_id) = args.get(2) else {
                eprintln!("Usage: menumind details <place-id>");
                std::process::exit(1);
            };
            commands::details(&resolve_data_dir(), place_id)
        }
        "cities" => commands::cities(&resolve_data_dir()),
        "--help" | "-h" | "help" => {
            print_help();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}. Use 'menumind help' for usage.", other);
            std::process::exit(1);
        }
    }
}

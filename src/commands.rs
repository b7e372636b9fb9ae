use chrono::Local;
use clap::Args;
use opportunity_scout::config::AppConfig;
use opportunity_scout::error::AppError;
use opportunity_scout::ranking::{load_batch, rank_batch, RankingReport};
use opportunity_scout::scoring::{
    ClusterSignals, DataQualityLevel, ExistingSolution, PriorityLevel, PriorityScore,
    PriorityScorer,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// Cluster export to rank (`.csv` rows or a JSON batch)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Override the batch's total signal count
    #[arg(long)]
    pub(crate) total_data_size: Option<u64>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Signals in the cluster
    #[arg(long)]
    pub(crate) cluster_size: u64,
    /// Signals across the whole batch
    #[arg(long)]
    pub(crate) total_data_size: u64,
    /// Emotional intensity rating between 0 and 5
    #[arg(long)]
    pub(crate) emotional_intensity: f64,
    /// Topic keyword (repeatable)
    #[arg(long)]
    pub(crate) keyword: Vec<String>,
    /// Existing solution as `name:limitation` (repeatable)
    #[arg(long)]
    pub(crate) competitor: Vec<String>,
    /// Print the score as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

fn scorer_from_env() -> Result<PriorityScorer, AppError> {
    let config = AppConfig::load()?;
    Ok(PriorityScorer::new(config.scoring))
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), AppError> {
    let RankArgs {
        input,
        total_data_size,
        json,
    } = args;

    let scorer = scorer_from_env()?;
    let mut batch = load_batch(&input)?;
    if total_data_size.is_some() {
        batch.total_data_size = total_data_size;
    }

    let report = rank_batch(&scorer, &batch)?;

    if json {
        print_json(&report)?;
    } else {
        render_ranking_report(&report, &input);
    }

    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let json = args.json;
    let signals = signals_from_args(args);

    let scorer = scorer_from_env()?;
    let score = scorer.score_cluster(&signals)?;

    if json {
        print_json(&score)?;
    } else {
        render_score(&score, signals.total_data_size);
    }

    Ok(())
}

fn signals_from_args(args: ScoreArgs) -> ClusterSignals {
    let existing_solutions = args
        .competitor
        .iter()
        .map(|raw| match raw.split_once(':') {
            Some((name, limitation)) => ExistingSolution::new(name.trim(), limitation.trim()),
            None => ExistingSolution::new(raw.trim(), ""),
        })
        .collect();

    ClusterSignals {
        cluster_size: args.cluster_size,
        total_data_size: args.total_data_size,
        emotional_intensity: args.emotional_intensity,
        keywords: args.keyword,
        existing_solutions,
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
    println!("{rendered}");
    Ok(())
}

fn render_score(score: &PriorityScore, total_data_size: u64) {
    let quality = DataQualityLevel::from_total_size(total_data_size);
    println!("Priority: {} ({:.1}/5.0)", score.level.label(), score.overall);
    println!("- demand intensity: {:.1}", score.demand_intensity);
    println!("- market size: {:.1}", score.market_size);
    println!(
        "- competition: {:.1} ({})",
        score.competition,
        score.landscape().label()
    );
    println!("Data quality: {}", quality.label());
    if let Some(advisory) = quality.advisory() {
        println!("Note: {advisory}");
    }
}

fn render_ranking_report(report: &RankingReport, input: &std::path::Path) {
    let quality = &report.data_quality;

    println!("Opportunity ranking");
    println!(
        "Source: {} (evaluated {})",
        input.display(),
        Local::now().format("%Y-%m-%d %H:%M")
    );
    println!(
        "Data quality: {} ({} signals, {} clusters, avg {:.1} per cluster)",
        quality.level_label,
        quality.total_data_size,
        quality.cluster_count,
        quality.average_cluster_size
    );
    if let Some(advisory) = &quality.advisory {
        println!("Note: {advisory}");
    }

    for level in PriorityLevel::ordered() {
        let clusters: Vec<_> = report.clusters_at(level).collect();
        if clusters.is_empty() {
            println!("\n{} priority: none", level.label());
            continue;
        }

        println!("\n{} priority", level.label());
        for cluster in clusters {
            println!(
                "- #{} {} ({}): overall {:.1} | demand {:.1} | market {:.1} | competition {:.1} ({}, {} competitor(s))",
                cluster.rank,
                cluster.id,
                if cluster.label.is_empty() { "-" } else { cluster.label.as_str() },
                cluster.score.overall,
                cluster.score.demand_intensity,
                cluster.score.market_size,
                cluster.score.competition,
                cluster.landscape.label(),
                cluster.valid_competitors
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn competitor_flags_split_name_and_limitation() {
        let signals = signals_from_args(ScoreArgs {
            cluster_size: 10,
            total_data_size: 100,
            emotional_intensity: 3.0,
            keyword: vec!["健康".to_string()],
            competitor: vec!["Keep: paywalled plans".to_string(), "待调研".to_string()],
            json: false,
        });

        assert_eq!(
            signals.existing_solutions,
            vec![
                ExistingSolution::new("Keep", "paywalled plans"),
                ExistingSolution::new("待调研", ""),
            ]
        );
        assert_eq!(signals.keywords, vec!["健康"]);
    }
}

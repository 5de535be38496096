use crate::infra::{build_classifier, seed_catalogue};
use ad_quality::ads::{Ad, ClassificationThresholds};
use ad_quality::config::AppConfig;
use ad_quality::error::AppError;
use clap::Args;

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Print the per-rule points for every ad
    #[arg(long)]
    show_breakdown: bool,
    /// Override the configured public score threshold
    #[arg(long, requires = "quality_threshold")]
    public_threshold: Option<u32>,
    /// Override the configured quality score threshold
    #[arg(long, requires = "public_threshold")]
    quality_threshold: Option<u32>,
}

pub(crate) fn run_score_pass(args: ScoreArgs) -> Result<(), AppError> {
    let thresholds = resolve_thresholds(&args)?;

    let classifier = build_classifier(thresholds);
    let report = classifier.update_ad_scores()?;

    println!("Ad scoring pass");
    println!(
        "Thresholds: public >= {}, quality >= {}",
        thresholds.public(),
        thresholds.quality()
    );
    println!(
        "{} ad(s) rescored, {} failure(s)",
        report.updated.len(),
        report.failures.len()
    );
    for failure in &report.failures {
        println!("- failed {failure}");
    }

    if args.show_breakdown {
        println!("\nScore breakdown");
        for ad in seed_catalogue() {
            match classifier.engine().evaluate(&ad) {
                Ok(card) => {
                    println!("- {} ({}): {}", card.ad_id, card.typology, card.total);
                    for component in &card.components {
                        println!(
                            "    {:?}: {} ({})",
                            component.rule, component.points, component.notes
                        );
                    }
                }
                Err(err) => println!("- {}: {err}", ad.id),
            }
        }
    }

    render_listing("Public ads", &classifier.find_public_ads()?);
    render_listing("Quality ads", &classifier.find_quality_ads()?);

    Ok(())
}

/// Command-line thresholds win; the environment is only read when they are absent.
fn resolve_thresholds(args: &ScoreArgs) -> Result<ClassificationThresholds, AppError> {
    match (args.public_threshold, args.quality_threshold) {
        (Some(public), Some(quality)) => ClassificationThresholds::new(public, quality)
            .map_err(|err| AppError::Config(err.into())),
        _ => Ok(AppConfig::load()?.scoring.thresholds),
    }
}

fn render_listing(title: &str, ads: &[Ad]) {
    if ads.is_empty() {
        println!("\n{title}: none");
        return;
    }

    println!("\n{title}");
    for ad in ads {
        let score = ad
            .score
            .map(|score| score.to_string())
            .unwrap_or_else(|| "unscored".to_string());
        println!(
            "- {} | {} | score {} | {} picture(s)",
            ad.id,
            ad.typology,
            score,
            ad.picture_count()
        );
    }
}

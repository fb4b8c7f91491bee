use anyhow::{Context, Result};
use benefits_pricing_core_rs::{
    compute_roi_with, fill_placeholders, format_currency, format_percent, placeholder_map,
    validate_snapshot, PriceTable, PricingBreakdown, PricingConfig, PricingEngine,
    PricingSelections, ProposalDetails, QuoteSnapshot, RoiBenchmarks, RoiMetrics,
    SubscriptionPlan,
};
use clap::Parser;
use std::path::{Path, PathBuf};

mod cli;

use cli::{Cli, Commands, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Quote {
            selections,
            prices,
            employees,
            benchmarks,
            format,
        } => handle_quote(&selections, prices.as_deref(), employees, benchmarks.as_deref(), format),
        Commands::Fill {
            template,
            selections,
            out,
            client,
            project,
            date,
            valid,
            package,
            subscription,
            xml_escape,
        } => {
            let details = ProposalDetails {
                client_name: client,
                project_name: project,
                date,
                valid_through: valid,
                package,
                subscription,
            };
            handle_fill(&template, &selections, &out, details, xml_escape)
        }
        Commands::Snapshot {
            selections,
            employees,
            prices,
            out,
        } => handle_snapshot(&selections, employees, prices.as_deref(), out),
        Commands::Verify { snapshot, prices } => handle_verify(&snapshot, prices.as_deref()),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_engine(prices: Option<&Path>) -> Result<PricingEngine> {
    let config = match prices {
        Some(path) => PricingConfig::load(path)?,
        None => PricingConfig::default(),
    };
    Ok(PricingEngine::new(config)?)
}

fn load_selections(path: &Path) -> Result<PricingSelections> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read selections {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Invalid selections in {}", path.display()))
}

fn handle_quote(
    selections: &Path,
    prices: Option<&Path>,
    employees: Option<i64>,
    benchmarks: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let engine = load_engine(prices)?;
    let sel = load_selections(selections)?;
    let breakdown = engine.compute(&sel)?;

    let roi = match employees {
        Some(count) => {
            let table = match benchmarks {
                Some(path) => RoiBenchmarks::load(path)?,
                None => RoiBenchmarks::default(),
            };
            Some(compute_roi_with(&breakdown, count, &table)?)
        }
        None => None,
    };

    match format {
        OutputFormat::Json => {
            let value = match &roi {
                Some(metrics) => serde_json::json!({ "breakdown": breakdown, "roi": metrics }),
                None => serde_json::to_value(&breakdown)?,
            };
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => print!("{}", render_text(&breakdown, roi.as_ref())),
    }
    Ok(())
}

fn render_text(breakdown: &PricingBreakdown, roi: Option<&RoiMetrics>) -> String {
    let mut out = String::new();
    for item in &breakdown.line_items {
        out.push_str(&format!("{:<48} {:>12}\n", item.label, format_currency(item.amount)));
        if let Some(description) = &item.description {
            out.push_str(&format!("    {}\n", description));
        }
    }
    for discount in &breakdown.discount_items {
        out.push_str(&format!(
            "{:<48} {:>12}\n",
            discount.label,
            format!("({})", format_currency(discount.amount))
        ));
    }

    out.push('\n');
    out.push_str(&format!("{:<48} {:>12}\n", "Subtotal", format_currency(breakdown.subtotal)));
    if breakdown.rush_surcharge > 0 {
        out.push_str(&format!(
            "{:<48} {:>12}\n",
            "Rush surcharge",
            format_currency(breakdown.rush_surcharge)
        ));
    }
    out.push_str(&format!(
        "{:<48} {:>12}\n",
        "Total due now",
        format_currency(breakdown.total_due_now)
    ));
    if breakdown.subscription_total > 0 {
        out.push_str(&format!(
            "{:<48} {:>12}\n",
            format!("Subscription ({}/mo)", format_currency(breakdown.monthly_subscription_cost)),
            format_currency(breakdown.subscription_total)
        ));
        out.push_str(&format!(
            "{:<48} {:>12}\n",
            "Total all-in",
            format_currency(breakdown.total_all_in)
        ));
    }

    out.push_str(&format!("\nTimeline: {}\n", breakdown.estimated_timeline));
    out.push_str(&format!("Payment terms: {}\n", breakdown.payment_terms));

    if let Some(metrics) = roi {
        out.push_str("\nROI\n");
        out.push_str(&format!(
            "  Engagement increase:  {}\n",
            format_percent(i64::from(metrics.employee_engagement_increase))
        ));
        out.push_str(&format!(
            "  Enrollment increase:  {}\n",
            format_percent(i64::from(metrics.enrollment_rate_increase))
        ));
        out.push_str(&format!("  HR hours saved / mo:  {:.1}\n", metrics.hr_time_saved_hours));
        out.push_str(&format!("  Cost per employee:    ${:.2}\n", metrics.cost_per_employee));
        out.push_str(&format!("  Annual savings:       {}\n", format_currency(metrics.annual_savings)));
        out.push_str(&format!("  Break-even:           {} months\n", metrics.break_even_months));
        if let Some(percent) = metrics.annual_roi_percent {
            out.push_str(&format!("  Annual ROI:           {}\n", format_percent(percent)));
        }
    }
    out
}

fn handle_fill(
    template: &Path,
    selections: &Path,
    out: &Path,
    mut details: ProposalDetails,
    xml_escape: bool,
) -> Result<()> {
    let sel = load_selections(selections)?;
    let engine = PricingEngine::default();
    let breakdown = engine.compute(&sel)?;

    if details.package.is_none() {
        details.package = sel.preset.map(|preset| preset.label().to_string());
    }
    if details.subscription.is_none() {
        details.subscription = subscription_summary(&sel, &engine.config().prices);
    }

    let text = std::fs::read_to_string(template)
        .with_context(|| format!("Failed to read template {}", template.display()))?;
    let filled = fill_placeholders(&text, &placeholder_map(&breakdown, &details), xml_escape);
    std::fs::write(out, filled).with_context(|| format!("Failed to write {}", out.display()))?;

    log::info!("Filled proposal written to {}", out.display());
    Ok(())
}

/// `Growth (6 months, 3 min/month)`, or `None` for one-time projects
fn subscription_summary(sel: &PricingSelections, prices: &PriceTable) -> Option<String> {
    if sel.subscription_plan == SubscriptionPlan::None {
        return None;
    }
    Some(format!(
        "{} ({} months, {} min/month)",
        sel.subscription_plan.label(),
        sel.subscription_months.max(0),
        prices.subscription_minutes(sel.subscription_plan)
    ))
}

fn handle_snapshot(
    selections: &Path,
    employees: Option<i64>,
    prices: Option<&Path>,
    out: Option<PathBuf>,
) -> Result<()> {
    let engine = load_engine(prices)?;
    let sel = load_selections(selections)?;
    let snapshot = QuoteSnapshot::capture(&engine, &sel, employees)?;
    let json = snapshot.to_json()?;

    match out {
        Some(path) => std::fs::write(&path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{}", json),
    }
    Ok(())
}

fn handle_verify(snapshot: &Path, prices: Option<&Path>) -> Result<()> {
    let engine = load_engine(prices)?;
    let contents = std::fs::read_to_string(snapshot)
        .with_context(|| format!("Failed to read snapshot {}", snapshot.display()))?;
    let stored = QuoteSnapshot::from_json(&contents)?;

    validate_snapshot(&stored, engine.config())
        .with_context(|| format!("Quote {} failed verification", stored.quote_id))?;
    println!(
        "{} verified: {} due now",
        stored.quote_id,
        format_currency(stored.breakdown.total_due_now)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use benefits_pricing_core_rs::compute_pricing;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_text_shows_rush_only_when_applied() {
        let plain = compute_pricing(&PricingSelections::default()).unwrap();
        let rushed = compute_pricing(&PricingSelections::default().with_rush()).unwrap();

        assert!(!render_text(&plain, None).contains("Rush surcharge"));
        let text = render_text(&rushed, None);
        assert!(text.contains("Rush surcharge"));
        assert!(text.contains("$2,397"));
    }

    #[test]
    fn test_render_text_with_roi() {
        let quote = compute_pricing(&PricingSelections::default()).unwrap();
        let roi = benefits_pricing_core_rs::compute_roi(&quote, 500).unwrap();
        let text = render_text(&quote, Some(&roi));

        assert!(text.contains("Engagement increase:  65%"));
        assert!(text.contains("$105,000"));
        assert!(text.contains("Annual ROI:           6,571%"));
    }

    #[test]
    fn test_subscription_summary_includes_minutes() {
        let prices = PriceTable::default();
        let sel = PricingSelections::default().with_subscription(SubscriptionPlan::Growth, 6);

        assert_eq!(
            subscription_summary(&sel, &prices).as_deref(),
            Some("Growth (6 months, 3 min/month)")
        );
        assert_eq!(subscription_summary(&PricingSelections::default(), &prices), None);
    }

    #[test]
    fn test_parse_quote_command() {
        let cli = Cli::try_parse_from([
            "benefits-quote",
            "quote",
            "sel.json",
            "--employees",
            "300",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Quote {
                employees, format, ..
            } => {
                assert_eq!(employees, Some(300));
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}

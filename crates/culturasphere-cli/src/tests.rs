use super::*;

#[test]
fn parses_trends_with_filters() {
    let cli = Cli::try_parse_from([
        "culturasphere",
        "trends",
        "--category",
        "Music",
        "--region",
        "Europe",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Trends {
            category: Some(ref c),
            region: Some(ref r),
        } if c == "Music" && r == "Europe"
    ));
}

#[test]
fn parses_trends_without_filters() {
    let cli = Cli::try_parse_from(["culturasphere", "trends"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Trends {
            category: None,
            region: None
        }
    ));
}

#[test]
fn parses_persona_kebab_case_flags() {
    let cli = Cli::try_parse_from([
        "culturasphere",
        "persona",
        "--age-range",
        "25-34",
        "--target-market",
        "B2C",
        "--interests",
        "gaming,anime",
    ])
    .unwrap();

    let Commands::Persona(args) = cli.command else {
        panic!("expected persona command");
    };
    let form = culturasphere_core::PersonaForm::from(args);
    assert_eq!(form.age_range.as_deref(), Some("25-34"));
    assert_eq!(form.target_market.as_deref(), Some("B2C"));
    assert_eq!(form.interests.as_deref(), Some("gaming,anime"));
    assert!(form.values.is_none());
}

#[test]
fn persona_text_shares_persona_flags() {
    let cli = Cli::try_parse_from([
        "culturasphere",
        "persona-text",
        "--region",
        "Europe",
        "--values",
        "craft,community",
    ])
    .unwrap();

    let Commands::PersonaText(args) = cli.command else {
        panic!("expected persona-text command");
    };
    assert_eq!(args.region.as_deref(), Some("Europe"));
    assert_eq!(args.values.as_deref(), Some("craft,community"));
}

#[test]
fn analyze_trend_requires_trend_file() {
    assert!(Cli::try_parse_from(["culturasphere", "analyze-trend"]).is_err());

    let cli = Cli::try_parse_from([
        "culturasphere",
        "analyze-trend",
        "--trend-file",
        "config/trend.yaml",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::AnalyzeTrend { ref trend_file } if trend_file.ends_with("trend.yaml")
    ));
}

#[test]
fn forecast_requires_trend_file() {
    assert!(Cli::try_parse_from(["culturasphere", "forecast"]).is_err());

    let cli =
        Cli::try_parse_from(["culturasphere", "forecast", "--trend-file", "config/trend.yaml"])
            .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Forecast { ref trend_file } if trend_file.ends_with("trend.yaml")
    ));
}

#[test]
fn search_filters_are_optional() {
    let cli = Cli::try_parse_from(["culturasphere", "search", "afrobeats"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Search { ref query, filters: None } if query == "afrobeats"
    ));

    let cli = Cli::try_parse_from([
        "culturasphere",
        "recommend",
        "u-42",
        "--context",
        "context.yaml",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Recommend { ref user_id, context: Some(_) } if user_id == "u-42"
    ));
}

#[test]
fn source_insights_takes_a_query() {
    let cli =
        Cli::try_parse_from(["culturasphere", "source-insights", "streetwear in Seoul"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::SourceInsights { ref query } if query == "streetwear in Seoul"
    ));
}

#[test]
fn classify_splits_labels() {
    let cli = Cli::try_parse_from([
        "culturasphere",
        "classify",
        "vinyl is back",
        "--labels",
        "music,food,fashion",
    ])
    .unwrap();

    let Commands::Classify { text, labels } = cli.command else {
        panic!("expected classify command");
    };
    assert_eq!(text, "vinyl is back");
    assert_eq!(labels, vec!["music", "food", "fashion"]);
}

#[test]
fn classify_requires_labels() {
    assert!(Cli::try_parse_from(["culturasphere", "classify", "text"]).is_err());
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["culturasphere"]).is_err());
}

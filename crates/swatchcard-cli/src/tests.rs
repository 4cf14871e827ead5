use super::*;

#[test]
fn parses_inspect_command() {
    let cli = Cli::try_parse_from(["swatchcard-cli", "inspect", "tee.json"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Inspect { ref product }) if product == &PathBuf::from("tee.json")
    ));
}

#[test]
fn parses_select_command() {
    let cli = Cli::try_parse_from(["swatchcard-cli", "select", "tee.json", "Navy"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Select { ref color, .. }) if color == "Navy"
    ));
}

#[test]
fn preview_defaults_to_one_second_hover() {
    let cli = Cli::try_parse_from(["swatchcard-cli", "preview", "tee.json"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Preview {
            color: None,
            hover_ms: 1_000,
            ..
        })
    ));
}

#[test]
fn parses_preview_with_color_and_palette() {
    let cli = Cli::try_parse_from([
        "swatchcard-cli",
        "preview",
        "tee.json",
        "--color",
        "red",
        "--hover-ms",
        "250",
        "--palette",
        "palette.yaml",
    ])
    .expect("expected valid cli args");

    assert_eq!(cli.palette, Some(PathBuf::from("palette.yaml")));
    assert!(matches!(
        cli.command,
        Some(Commands::Preview {
            color: Some(ref color),
            hover_ms: 250,
            ..
        }) if color == "red"
    ));
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["swatchcard-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

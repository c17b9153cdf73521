// tests/cli_args.rs
use fc_payout::cli::parse_args;
use fc_payout::error::CliError;
use fc_payout::import::PageInput;

fn args(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn parses_full_command_line() {
    let p = parse_args(args(&[
        "--pool", "1,500,000",
        "--paste", "-",
        "--br", "https://br.evetools.org/br/abc",
        "--team", "B",
        "-k", "saved_km.html",
        "--scout", "Ann",
        "--exclude", "Bob",
        "--dynamic", "2",
        "--weight", "Cid Three=4",
        "--no-lookup",
    ]))
    .unwrap();

    assert_eq!(p.pool, Some(1_500_000.0));
    assert_eq!(p.paste, vec!["-"]);
    assert_eq!(p.br, Some(PageInput::Url("https://br.evetools.org/br/abc".into())));
    assert_eq!(p.team.as_deref(), Some("B"));
    assert_eq!(p.killmails, vec![PageInput::File("saved_km.html".into())]);
    assert_eq!(p.scouts, vec!["Ann"]);
    assert_eq!(p.excludes, vec!["Bob"]);
    assert_eq!(p.dynamic.flatten().map(|n| n.get()), Some(2));
    assert_eq!(p.weights.len(), 1);
    assert_eq!(p.weights[0].0, "Cid Three");
    assert_eq!(p.weights[0].1.get(), 4);
    assert!(p.no_lookup);
}

#[test]
fn rejects_bad_input() {
    assert!(matches!(parse_args(args(&["--bogus"])), Err(CliError::Usage(_))));
    assert!(matches!(parse_args(args(&["--pool"])), Err(CliError::Usage(_))));
    assert!(matches!(parse_args(args(&["--pool", "-5"])), Err(CliError::Payout(_))));
    assert!(matches!(parse_args(args(&["--weight", "Ann"])), Err(CliError::Usage(_))));
    assert!(matches!(
        parse_args(args(&["--dynamic", "off", "--weight", "Ann=2"])),
        Err(CliError::Usage(_))
    ));
}

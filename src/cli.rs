// src/cli.rs
use std::{
    env,
    io::{self, Read},
    num::NonZeroU32,
    path::PathBuf,
};

use crate::{
    config::settings::{self, Settings},
    error::CliError,
    import::{
        BattleReportSource, EsiDirectory, ImportBatch, ImportOutput, ImportSource, KillmailSource,
        PageInput, PasteSource,
    },
    mail,
    payout::{
        amount::{format_isk, parse_dynamic_default, parse_pool_amount, parse_share_weight},
        Role, Session,
    },
    progress::StderrProgress,
    specs::battle_report,
};

#[derive(Debug, Default)]
pub struct Params {
    pub pool: Option<f64>,
    /// `-` reads stdin.
    pub paste: Vec<String>,
    pub br: Option<PageInput>,
    pub team: Option<String>,
    pub killmails: Vec<PageInput>,
    pub scouts: Vec<String>,
    pub excludes: Vec<String>,
    /// `None` = flag not given; `Some(None)` = explicitly off.
    pub dynamic: Option<Option<NonZeroU32>>,
    pub weights: Vec<(String, NonZeroU32)>,
    pub no_lookup: bool,
    pub init_config: bool,
    pub config: Option<PathBuf>,
}

pub fn run() -> Result<(), CliError> {
    let params = parse_args(env::args().skip(1))?;
    run_with(params)
}

pub fn run_with(params: Params) -> Result<(), CliError> {
    let cfg_path = params.config.clone().unwrap_or_else(settings::default_path);

    if params.init_config {
        settings::save(&cfg_path, &Settings::default())?;
        eprintln!("Wrote {}", cfg_path.display());
        return Ok(());
    }

    let cfg = settings::load(&cfg_path);
    let mut session = Session::new();

    // Dynamic mode first so imported participants pick up the default.
    match params.dynamic {
        Some(Some(n)) => session.enable_dynamic_shares(n),
        Some(None) => session.disable_dynamic_shares(),
        None => match cfg.dynamic_default {
            Some(n) => session.enable_dynamic_shares(n),
            None if !params.weights.is_empty() => session.enable_dynamic_shares(NonZeroU32::MIN),
            None => {}
        },
    }

    for batch in collect_batches(&params, &cfg)? {
        let note = batch.note.clone();
        let source = batch.source;
        let summary = session.add_batch(batch.into_participants());
        eprintln!(
            "Imported {} from {source} ({} new, {} updated)",
            summary.total(), summary.appended, summary.merged
        );
        if let Some(n) = note { eprintln!("{n}"); }
    }

    for name in &params.scouts {
        let id = lookup(&session, name)?;
        session.set_role(id, Role::Scout)?;
    }
    for name in &params.excludes {
        let id = lookup(&session, name)?;
        session.set_included(id, false)?;
    }
    for (name, w) in &params.weights {
        let id = lookup(&session, name)?;
        session.set_share_weight(id, *w)?;
    }
    if let Some(pool) = params.pool {
        session.set_pool_amount(pool)?;
    }

    let snap = session.snapshot();
    for p in &snap.participants {
        eprintln!(
            "{:<4} {:<6} {:<32} {:<4} {:>6} {:>20}",
            if p.included { "Yes" } else { "No" },
            p.role.label(),
            p.name,
            if p.external_id.is_some() { "Yes" } else { "No" },
            if snap.dynamic { p.share_weight.to_string() } else { s!("NA") },
            format_isk(p.share()),
        );
    }
    eprintln!("{}", mail::count_line(&snap));
    eprintln!("{}", mail::footer_line(&snap));

    print!("{}", mail::compose(&snap));
    logf!("CLI: mail written for {} participant(s)", snap.included_count);
    Ok(())
}

fn lookup(session: &Session, name: &str) -> Result<crate::payout::ParticipantId, CliError> {
    session
        .roster()
        .find_by_name(name)
        .map(|p| p.id())
        .ok_or_else(|| CliError::Usage(format!("No participant named {name:?}")))
}

fn collect_batches(params: &Params, cfg: &Settings) -> Result<Vec<ImportBatch>, CliError> {
    let mut out = Vec::new();
    let lookup_enabled = cfg.import.esi_lookup && !params.no_lookup;

    for src in &params.paste {
        let text = if src == "-" {
            let mut buf = s!();
            io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            std::fs::read_to_string(src)?
        };
        let mut source = PasteSource::new(text);
        if lookup_enabled {
            source = source.with_directory(Box::new(EsiDirectory::new(cfg.import.clone())));
        }
        out.push(expect_batch(run_source(&source)?)?);
    }

    if let Some(page) = &params.br {
        let source = BattleReportSource::new(page.clone(), cfg.import.clone());
        let ImportOutput::Teams(teams) = run_source(&source)? else {
            return Err(CliError::Usage(s!("battle report produced no team list")));
        };
        let team = match (&params.team, teams.len()) {
            (Some(t), _) => battle_report::select(&teams, t)?,
            (None, 1) => &teams[0],
            (None, _) => {
                for t in &teams {
                    eprintln!("{}: {} ({} pilots)", t.name, t.affiliations, t.pilot_count());
                }
                return Err(CliError::Usage(s!("Several teams found; pick one with --team <letter>")));
            }
        };
        out.push(ImportBatch::from_team(team));
    }

    if !params.killmails.is_empty() {
        let source = KillmailSource::new(params.killmails.clone(), cfg.import.clone());
        out.push(expect_batch(run_source(&source)?)?);
    }

    Ok(out)
}

fn run_source(source: &dyn ImportSource) -> Result<ImportOutput, CliError> {
    let mut progress = StderrProgress::new();
    Ok(source.collect(Some(&mut progress))?)
}

fn expect_batch(out: ImportOutput) -> Result<ImportBatch, CliError> {
    match out {
        ImportOutput::Batch(b) => Ok(b),
        ImportOutput::Teams(_) => Err(CliError::Usage(s!("expected a pilot list, got teams"))),
    }
}

fn page_arg(v: String) -> PageInput {
    if v.starts_with("http://") || v.starts_with("https://") {
        PageInput::Url(v)
    } else {
        PageInput::File(PathBuf::from(v))
    }
}

pub fn parse_args<I>(args: I) -> Result<Params, CliError>
where
    I: IntoIterator<Item = String>,
{
    let usage = |m: &str| CliError::Usage(s!(m));
    let mut params = Params::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "--pool" | "-p" => {
                let v = args.next().ok_or_else(|| usage("Missing value for --pool"))?;
                params.pool = Some(parse_pool_amount(&v)?);
            }
            "--paste" | "--names" => {
                params.paste.push(args.next().ok_or_else(|| usage("Missing file for --paste"))?);
            }
            "--br" | "--br-html" => {
                let v = args.next().ok_or_else(|| usage("Missing value for --br"))?;
                params.br = Some(page_arg(v));
            }
            "--team" | "-t" => {
                params.team = Some(args.next().ok_or_else(|| usage("Missing team letter"))?);
            }
            "--killmail" | "-k" => {
                let v = args.next().ok_or_else(|| usage("Missing value for --killmail"))?;
                params.killmails.push(page_arg(v));
            }
            "--scout" => params.scouts.push(args.next().ok_or_else(|| usage("Missing name for --scout"))?),
            "--exclude" => params.excludes.push(args.next().ok_or_else(|| usage("Missing name for --exclude"))?),
            "--dynamic" => {
                let v = args.next().ok_or_else(|| usage("Missing value for --dynamic"))?;
                params.dynamic = Some(parse_dynamic_default(&v)?);
            }
            "--weight" => {
                let v = args.next().ok_or_else(|| usage("Missing value for --weight"))?;
                let (name, w) = v
                    .rsplit_once('=')
                    .ok_or_else(|| usage("--weight expects <name>=<count>"))?;
                params.weights.push((s!(name.trim()), parse_share_weight(w)?));
            }
            "--no-lookup" => params.no_lookup = true,
            "--init-config" => params.init_config = true,
            "--config" => {
                params.config = Some(PathBuf::from(args.next().ok_or_else(|| usage("Missing path for --config"))?));
            }
            "-h" | "--help" => {
                eprintln!("{}", include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(CliError::Usage(format!("Unknown arg: {a}"))),
        }
    }

    if matches!(params.dynamic, Some(None)) && !params.weights.is_empty() {
        return Err(usage("--weight needs dynamic shares; drop --dynamic off"));
    }
    Ok(params)
}

// src/bin/cli.rs
use color_eyre::eyre::WrapErr;
use fc_payout::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run().wrap_err("fc_payout cli failed")?;
    Ok(())
}

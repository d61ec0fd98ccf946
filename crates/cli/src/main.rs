use clap::Parser;

use cashbox_cli::{run, CashboxCli};

fn main() -> anyhow::Result<()> {
    let cli = CashboxCli::parse();
    cashbox_observability::init(cli.log_format);

    let output = run(&cli)?;
    println!("{output}");
    Ok(())
}

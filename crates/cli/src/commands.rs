//! Subcommand execution.

use anyhow::Context;

use crate::cli::{CashboxCli, Command};

/// Run one subcommand and return what should be printed on stdout.
///
/// Mutating commands log out afterwards, which writes the accounts file.
/// A rejected operation returns early, so nothing is written.
pub fn run(cli: &CashboxCli) -> anyhow::Result<String> {
    let config = cli.bank_config().context("invalid configuration")?;
    tracing::debug!(accounts = %config.accounts_path.display(), "running command");
    let mut bank = config.open_bank().with_context(|| {
        format!(
            "failed to load accounts from {}",
            config.accounts_path.display()
        )
    })?;

    match &cli.command {
        Command::Open { login, amount } => {
            let account =
                bank.create_account(&login.username, &login.password, (*amount).into())?;
            Ok(format!("Account created successfully. {account}"))
        }
        Command::Balance { login } => {
            let session = bank.login(&login.username, &login.password)?;
            Ok(session.balance()?.to_string())
        }
        Command::Deposit { login, amount } => {
            let mut session = bank.login(&login.username, &login.password)?;
            let rendered = session.deposit((*amount).into())?.to_string();
            session.logout()?;
            Ok(rendered)
        }
        Command::Withdraw { login, amount } => {
            let mut session = bank.login(&login.username, &login.password)?;
            let rendered = session.withdraw((*amount).into())?.to_string();
            session.logout()?;
            Ok(rendered)
        }
        Command::Transfer { login, to, amount } => {
            let mut session = bank.login(&login.username, &login.password)?;
            let rendered = session.transfer(to, (*amount).into())?.to_string();
            session.logout()?;
            Ok(format!("Transfer successful. {rendered}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;

    fn cli(path: &Path, args: &[&str]) -> CashboxCli {
        let path = path.to_str().unwrap();
        let argv = ["cashbox", "--accounts", path]
            .into_iter()
            .chain(args.iter().copied());
        CashboxCli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn open_deposit_and_balance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accounts.txt");

        let out = run(&cli(&path, &["open", "alice", "--password", "pw", "--whole", "100", "--fraction", "50"])).unwrap();
        assert_eq!(out, "Account created successfully. Balance: 100 dollars, 50 cents");

        let out = run(&cli(&path, &["deposit", "alice", "--password", "pw", "--whole", "20", "--fraction", "75"])).unwrap();
        assert_eq!(out, "Balance: 121 dollars, 25 cents");

        let out = run(&cli(&path, &["balance", "alice", "--password", "pw"])).unwrap();
        assert_eq!(out, "Balance: 121 dollars, 25 cents");
    }

    #[test]
    fn wrong_password_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accounts.txt");
        run(&cli(&path, &["open", "alice", "--password", "pw"])).unwrap();

        let err = run(&cli(&path, &["balance", "alice", "--password", "nope"])).unwrap_err();
        assert_eq!(err.to_string(), "invalid credential");
    }

    #[test]
    fn corrupt_file_mentions_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accounts.txt");
        std::fs::write(&path, "{").unwrap();

        let err = run(&cli(&path, &["balance", "alice", "--password", "pw"])).unwrap_err();
        assert!(err.to_string().starts_with("failed to load accounts from"));
    }
}

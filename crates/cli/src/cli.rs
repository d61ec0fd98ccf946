//! Command-line argument structure, using `clap` derive.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use cashbox_accounts::Amount;
use cashbox_infra::{BankConfig, ConfigError};
use cashbox_observability::LogFormat;

/// Single-user ledger over a flat accounts file.
#[derive(Parser, Debug)]
#[command(name = "cashbox", version, propagate_version = true)]
pub struct CashboxCli {
    /// Accounts file to load and save. Overrides `CASHBOX_ACCOUNTS_FILE`;
    /// defaults to `accounts.txt`.
    #[arg(long, global = true)]
    pub accounts: Option<PathBuf>,

    /// Reject stored or opening balances whose cents are 100 or more. Also
    /// enabled by `CASHBOX_STRICT_FRACTIONS`.
    #[arg(long, global = true)]
    pub strict_fractions: bool,

    /// Log output format (`pretty` or `json`).
    #[arg(long, global = true, env = "CASHBOX_LOG_FORMAT", default_value = "pretty")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

impl CashboxCli {
    /// Environment settings with the command-line flags applied on top.
    pub fn bank_config(&self) -> Result<BankConfig, ConfigError> {
        Ok(self.overlay(BankConfig::from_env()?))
    }

    /// Apply the command-line flags to `config`.
    pub fn overlay(&self, mut config: BankConfig) -> BankConfig {
        if let Some(path) = &self.accounts {
            config = config.with_accounts_path(path.clone());
        }
        if self.strict_fractions {
            config = config.strict();
        }
        config
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open a new account with an initial balance.
    Open {
        #[command(flatten)]
        login: LoginArgs,
        #[command(flatten)]
        amount: AmountArgs,
    },
    /// Print the current balance.
    Balance {
        #[command(flatten)]
        login: LoginArgs,
    },
    /// Add funds to the account.
    Deposit {
        #[command(flatten)]
        login: LoginArgs,
        #[command(flatten)]
        amount: AmountArgs,
    },
    /// Take funds out of the account.
    Withdraw {
        #[command(flatten)]
        login: LoginArgs,
        #[command(flatten)]
        amount: AmountArgs,
    },
    /// Move funds to another account.
    Transfer {
        #[command(flatten)]
        login: LoginArgs,
        /// Recipient username.
        #[arg(long)]
        to: String,
        #[command(flatten)]
        amount: AmountArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct LoginArgs {
    /// Account username.
    pub username: String,

    /// Account password.
    #[arg(long, env = "CASHBOX_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Amounts are parsed as signed integers; the account rejects negatives.
#[derive(Args, Debug, Clone, Copy)]
pub struct AmountArgs {
    /// Whole units (dollars).
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub whole: i64,

    /// Fraction units (cents).
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub fraction: i64,
}

impl From<AmountArgs> for Amount {
    fn from(value: AmountArgs) -> Self {
        Amount::new(value.whole, value.fraction)
    }
}

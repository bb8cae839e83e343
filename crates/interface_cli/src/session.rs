//! Interactive session loop
//!
//! Drives the two-level menu over any buffered reader and writer pair, so
//! tests can script a whole session. All ledger work goes through the
//! registry and the engine; this module only prompts, parses, dispatches,
//! and renders.
//!
//! Input is read synchronously: the ledger is single-actor, so nothing else
//! is in flight while the loop waits on the terminal.

use std::io::{BufRead, Write};

use rust_decimal::Decimal;
use tracing::{error, info, warn};

use core_kernel::{AccountId, Money};
use domain_ledger::{AccountRegistry, LedgerError, TransactionEngine};

use crate::error::CliError;
use crate::menu::{MainMenuChoice, SessionChoice};

/// The ledger services a session dispatches to
#[derive(Clone)]
pub struct LedgerCli {
    registry: AccountRegistry,
    engine: TransactionEngine,
}

impl LedgerCli {
    /// Creates a front end over the given services
    pub fn new(registry: AccountRegistry, engine: TransactionEngine) -> Self {
        Self { registry, engine }
    }

    /// Runs the main menu loop until Exit or end of input
    pub async fn run<R, W>(&self, input: &mut R, output: &mut W) -> Result<(), CliError>
    where
        R: BufRead,
        W: Write,
    {
        loop {
            write_main_menu(output)?;
            let Some(line) = read_line(input)? else {
                return Ok(());
            };
            let Some(choice) = MainMenuChoice::parse(&line) else {
                writeln!(output, "Invalid option.")?;
                continue;
            };

            match choice {
                MainMenuChoice::OpenAccount => self.open_account(input, output).await?,
                MainMenuChoice::CloseAccount => self.close_account(input, output).await?,
                MainMenuChoice::ListClients => self.list_clients(output).await?,
                MainMenuChoice::CountClients => self.count_clients(output).await?,
                MainMenuChoice::ClientSession => self.client_session(input, output).await?,
                MainMenuChoice::Exit => return Ok(()),
            }
        }
    }

    async fn open_account<R, W>(&self, input: &mut R, output: &mut W) -> Result<(), CliError>
    where
        R: BufRead,
        W: Write,
    {
        let Some(name) = prompt(input, output, "Enter first name: ")? else {
            return Ok(());
        };
        let Some(occupation) = prompt(input, output, "Enter occupation (optional): ")? else {
            return Ok(());
        };

        match self.registry.open_account(&name, Some(&occupation)).await {
            Ok(account) => {
                info!(account_id = %account.id, name = %account.name, "Account created");
                writeln!(output, "Created account {} for {}.", account.id, account.name)?;
            }
            Err(e) => report(output, e)?,
        }
        Ok(())
    }

    async fn close_account<R, W>(&self, input: &mut R, output: &mut W) -> Result<(), CliError>
    where
        R: BufRead,
        W: Write,
    {
        let Some(id) = prompt_account_id(input, output, "Enter client ID: ")? else {
            return Ok(());
        };

        match self.registry.close_account(id).await {
            Ok(()) => {
                info!(account_id = %id, "Account closed");
                writeln!(output, "Closed account {}.", id)?;
            }
            Err(e) => report(output, e)?,
        }
        Ok(())
    }

    async fn list_clients<W: Write>(&self, output: &mut W) -> Result<(), CliError> {
        match self.registry.list_accounts().await {
            Ok(accounts) => {
                for account in accounts {
                    writeln!(
                        output,
                        "{} | {} | {} | {}",
                        account.id,
                        account.name,
                        account.balance,
                        account.occupation.as_deref().unwrap_or("-"),
                    )?;
                }
            }
            Err(e) => report(output, e)?,
        }
        Ok(())
    }

    async fn count_clients<W: Write>(&self, output: &mut W) -> Result<(), CliError> {
        match self.registry.count_accounts().await {
            Ok(count) => writeln!(output, "Total clients: {}", count)?,
            Err(e) => report(output, e)?,
        }
        Ok(())
    }

    async fn client_session<R, W>(&self, input: &mut R, output: &mut W) -> Result<(), CliError>
    where
        R: BufRead,
        W: Write,
    {
        let Some(id) = prompt_account_id(input, output, "Enter client ID: ")? else {
            return Ok(());
        };

        // The account must resolve before the session menu opens
        if let Err(e) = self.registry.get_account(id).await {
            return report(output, e);
        }

        loop {
            write_session_menu(output)?;
            let Some(line) = read_line(input)? else {
                return Ok(());
            };
            let Some(choice) = SessionChoice::parse(&line) else {
                writeln!(output, "Invalid action.")?;
                continue;
            };

            match choice {
                SessionChoice::Withdraw => self.withdraw(id, input, output).await?,
                SessionChoice::Deposit => self.deposit(id, input, output).await?,
                SessionChoice::Transfer => self.transfer(id, input, output).await?,
                SessionChoice::CheckBalance => self.check_balance(id, output).await?,
                SessionChoice::ShowMovements => self.show_movements(id, output).await?,
                SessionChoice::EndSession => return Ok(()),
            }
        }
    }

    async fn withdraw<R, W>(
        &self,
        id: AccountId,
        input: &mut R,
        output: &mut W,
    ) -> Result<(), CliError>
    where
        R: BufRead,
        W: Write,
    {
        let Some(amount) = prompt_amount(input, output, "Enter amount to withdraw: ")? else {
            return Ok(());
        };

        match self.engine.withdraw(id, amount).await {
            Ok(balance) => {
                info!(account_id = %id, %amount, %balance, "Withdrawal recorded");
                writeln!(output, "Withdrew {}. New balance: {}", amount, balance)?;
            }
            Err(e) => report(output, e)?,
        }
        Ok(())
    }

    async fn deposit<R, W>(
        &self,
        id: AccountId,
        input: &mut R,
        output: &mut W,
    ) -> Result<(), CliError>
    where
        R: BufRead,
        W: Write,
    {
        let Some(amount) = prompt_amount(input, output, "Enter amount to deposit: ")? else {
            return Ok(());
        };

        match self.engine.deposit(id, amount).await {
            Ok(balance) => {
                info!(account_id = %id, %amount, %balance, "Deposit recorded");
                writeln!(output, "Deposited {}. New balance: {}", amount, balance)?;
            }
            Err(e) => report(output, e)?,
        }
        Ok(())
    }

    async fn transfer<R, W>(
        &self,
        id: AccountId,
        input: &mut R,
        output: &mut W,
    ) -> Result<(), CliError>
    where
        R: BufRead,
        W: Write,
    {
        let Some(destination) =
            prompt_account_id(input, output, "Enter client ID to transfer to: ")?
        else {
            return Ok(());
        };
        let Some(amount) = prompt_amount(input, output, "Enter amount to transfer: ")? else {
            return Ok(());
        };

        match self.engine.transfer(id, destination, amount).await {
            Ok(()) => {
                info!(source = %id, destination = %destination, %amount, "Transfer recorded");
                writeln!(output, "Transferred {} to account {}.", amount, destination)?;
            }
            Err(e) => report(output, e)?,
        }
        Ok(())
    }

    async fn check_balance<W: Write>(&self, id: AccountId, output: &mut W) -> Result<(), CliError> {
        match self.engine.check_balance(id).await {
            Ok(balance) => writeln!(output, "Client ID {} balance: {}", id, balance)?,
            Err(e) => report(output, e)?,
        }
        Ok(())
    }

    async fn show_movements<W: Write>(
        &self,
        id: AccountId,
        output: &mut W,
    ) -> Result<(), CliError> {
        match self.engine.movements(id).await {
            Ok(movements) => {
                writeln!(output, "Client ID {} movements:", id)?;
                for movement in movements {
                    writeln!(output, "  {}: {}", movement.kind, movement.amount)?;
                }
            }
            Err(e) => report(output, e)?,
        }
        Ok(())
    }
}

fn write_main_menu<W: Write>(output: &mut W) -> Result<(), CliError> {
    writeln!(output, "1. Create Account")?;
    writeln!(output, "2. Close Account")?;
    writeln!(output, "3. Show All Clients")?;
    writeln!(output, "4. Count Clients")?;
    writeln!(output, "5. Client Actions")?;
    writeln!(output, "6. Exit")?;
    write!(output, "Select an option: ")?;
    output.flush()?;
    Ok(())
}

fn write_session_menu<W: Write>(output: &mut W) -> Result<(), CliError> {
    writeln!(output, "1. Withdraw")?;
    writeln!(output, "2. Deposit")?;
    writeln!(output, "3. Transfer")?;
    writeln!(output, "4. Check Balance")?;
    writeln!(output, "5. Show Movements")?;
    writeln!(output, "6. Exit")?;
    write!(output, "Select an action: ")?;
    output.flush()?;
    Ok(())
}

/// Reads one trimmed line, `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, CliError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<R, W>(input: &mut R, output: &mut W, label: &str) -> Result<Option<String>, CliError>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", label)?;
    output.flush()?;
    read_line(input)
}

/// Prompts for an identifier; `None` re-enters the menu without engine involvement
fn prompt_account_id<R, W>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<AccountId>, CliError>
where
    R: BufRead,
    W: Write,
{
    let Some(raw) = prompt(input, output, label)? else {
        return Ok(None);
    };
    match raw.parse::<AccountId>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            writeln!(output, "Invalid client ID.")?;
            Ok(None)
        }
    }
}

/// Prompts for a positive amount; `None` re-enters the menu without engine involvement
fn prompt_amount<R, W>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<Money>, CliError>
where
    R: BufRead,
    W: Write,
{
    let Some(raw) = prompt(input, output, label)? else {
        return Ok(None);
    };
    match raw.parse::<Decimal>().map(Money::new) {
        Ok(amount) if amount.is_positive() => Ok(Some(amount)),
        _ => {
            writeln!(output, "Invalid amount.")?;
            Ok(None)
        }
    }
}

/// Renders a domain rejection as a menu message, or aborts on storage failure
fn report<W: Write>(output: &mut W, error: LedgerError) -> Result<(), CliError> {
    if error.is_storage() {
        error!(%error, "Storage failure, ending session");
        return Err(error.into());
    }
    warn!(%error, "Operation rejected");
    writeln!(output, "{}", user_message(&error))?;
    Ok(())
}

/// Maps domain errors to the one-line messages the menu prints
fn user_message(error: &LedgerError) -> String {
    match error {
        LedgerError::AccountNotFound(_) => "Client not found.".to_string(),
        LedgerError::DestinationNotFound(_) => "Client to transfer to not found.".to_string(),
        LedgerError::InsufficientFunds { .. } => "Insufficient funds.".to_string(),
        other => other.to_string(),
    }
}

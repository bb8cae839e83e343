//! End-to-end tests for the menu front end
//!
//! Each test scripts a whole session against the real SQLite store: input
//! lines feed the prompt loop through a cursor and the rendered output is
//! checked as a user would read it.

use std::io::Cursor;

use infra_db::{DatabasePool, SqliteLedgerStore};
use interface_cli::build_cli;
use test_utils::{assert_reconciled, memory_pool, pool_with_accounts, IdFixtures};

/// Runs one scripted session to completion and returns the rendered output
async fn run_script(pool: DatabasePool, script: &str) -> String {
    let cli = build_cli(pool);
    let mut input = Cursor::new(script.to_string());
    let mut output = Vec::new();
    cli.run(&mut input, &mut output)
        .await
        .expect("Session should complete");
    String::from_utf8(output).expect("Output should be UTF-8")
}

// ============================================================================
// Roster Management
// ============================================================================

mod roster_tests {
    use super::*;

    #[tokio::test]
    async fn test_open_accounts_and_show_roster() {
        let pool = memory_pool().await;

        let script = "1\nAlice\nEngineer\n1\nBob\n\n3\n4\n6\n";
        let output = run_script(pool, script).await;

        assert!(output.contains("Created account 1 for Alice."));
        assert!(output.contains("Created account 2 for Bob."));
        assert!(output.contains("1 | Alice | 0.00 | Engineer"));
        assert!(output.contains("2 | Bob | 0.00 | -"));
        assert!(output.contains("Total clients: 2"));
    }

    #[tokio::test]
    async fn test_close_account_removes_it_from_census() {
        let (pool, _ids) = pool_with_accounts(&["Alice"]).await;

        let output = run_script(pool, "2\n1\n4\n6\n").await;

        assert!(output.contains("Closed account 1."));
        assert!(output.contains("Total clients: 0"));
    }

    #[tokio::test]
    async fn test_close_unknown_account_reports_not_found() {
        let pool = memory_pool().await;

        let output = run_script(pool, "2\n42\n6\n").await;

        assert!(output.contains("Client not found."));
    }

    #[tokio::test]
    async fn test_empty_name_is_rejected() {
        let pool = memory_pool().await;

        let output = run_script(pool.clone(), "1\n   \n\n4\n6\n").await;

        assert!(output.contains("name must not be empty"));
        assert!(output.contains("Total clients: 0"));
    }
}

// ============================================================================
// Client Sessions
// ============================================================================

mod session_tests {
    use super::*;

    #[tokio::test]
    async fn test_deposit_withdraw_and_overdraft_scenario() {
        let (pool, _ids) = pool_with_accounts(&["Alice"]).await;

        let script = "5\n1\n2\n100\n1\n30\n1\n1000\n4\n5\n6\n6\n";
        let output = run_script(pool.clone(), script).await;

        assert!(output.contains("Deposited 100.00. New balance: 100.00"));
        assert!(output.contains("Withdrew 30.00. New balance: 70.00"));
        assert!(output.contains("Insufficient funds."));
        assert!(output.contains("Client ID 1 balance: 70.00"));
        assert!(output.contains("Client ID 1 movements:"));
        assert!(output.contains("  Deposit: 100.00"));
        assert!(output.contains("  Withdraw: -30.00"));

        let store = SqliteLedgerStore::new(pool);
        assert_reconciled(&store, IdFixtures::account_id()).await;
    }

    #[tokio::test]
    async fn test_transfer_between_clients() {
        let (pool, _ids) = pool_with_accounts(&["Alice", "Bob"]).await;

        let script = "5\n1\n2\n50\n3\n2\n20\n6\n3\n6\n";
        let output = run_script(pool.clone(), script).await;

        assert!(output.contains("Transferred 20.00 to account 2."));
        assert!(output.contains("1 | Alice | 30.00 | -"));
        assert!(output.contains("2 | Bob | 20.00 | -"));

        let store = SqliteLedgerStore::new(pool);
        assert_reconciled(&store, IdFixtures::account_id()).await;
        assert_reconciled(&store, IdFixtures::other_account_id()).await;
    }

    #[tokio::test]
    async fn test_transfer_to_missing_destination_changes_nothing() {
        let (pool, _ids) = pool_with_accounts(&["Alice"]).await;

        let script = "5\n1\n2\n50\n3\n99\n20\n4\n6\n6\n";
        let output = run_script(pool, script).await;

        assert!(output.contains("Client to transfer to not found."));
        assert!(output.contains("Client ID 1 balance: 50.00"));
    }

    #[tokio::test]
    async fn test_session_for_unknown_client_is_refused() {
        let pool = memory_pool().await;

        let output = run_script(pool, "5\n42\n6\n").await;

        assert!(output.contains("Client not found."));
        // The session menu never opened
        assert!(!output.contains("Select an action:"));
    }
}

// ============================================================================
// Input Handling
// ============================================================================

mod input_tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_selections_reprompt() {
        let (pool, _ids) = pool_with_accounts(&["Alice"]).await;

        let script = "9\n5\nabc\n5\n1\n7\n2\nxyz\n6\n6\n";
        let output = run_script(pool, script).await;

        assert!(output.contains("Invalid option."));
        assert!(output.contains("Invalid client ID."));
        assert!(output.contains("Invalid action."));
        assert!(output.contains("Invalid amount."));
    }

    #[tokio::test]
    async fn test_non_positive_amounts_never_reach_the_ledger() {
        let (pool, _ids) = pool_with_accounts(&["Alice"]).await;

        let script = "5\n1\n2\n-10\n2\n0\n4\n6\n6\n";
        let output = run_script(pool, script).await;

        assert!(output.contains("Invalid amount."));
        assert!(output.contains("Client ID 1 balance: 0.00"));
    }

    #[tokio::test]
    async fn test_end_of_input_exits_cleanly() {
        let pool = memory_pool().await;

        let output = run_script(pool, "").await;

        assert!(output.contains("Select an option:"));
    }
}

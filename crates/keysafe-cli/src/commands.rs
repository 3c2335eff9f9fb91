use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, info_span};

use keysafe_cli::logging::redact_value;
use keysafe_cli::report::{account_rows, summary_report, transaction_rows};
use keysafe_model::Snapshot;
use keysafe_selectors::SelectorError;

use crate::cli::SnapshotArgs;
use crate::tables::{print_accounts, print_onboarding, print_summary, print_transactions};

fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let span = info_span!("load", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();
    let snapshot = Snapshot::load(path).context("load snapshot")?;
    info!(
        account_count = snapshot.metamask.accounts.len(),
        token_count = snapshot.metamask.tokens.len(),
        message_count = snapshot.metamask.unapproved_msgs.len(),
        duration_ms = start.elapsed().as_millis(),
        "snapshot loaded"
    );
    Ok(snapshot)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize report")?;
    println!("{json}");
    Ok(())
}

pub fn run_summary(args: &SnapshotArgs) -> Result<()> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let report = match summary_report(&snapshot) {
        Ok(report) => report,
        Err(SelectorError::NoAccounts) => {
            info!("wallet has no accounts yet");
            print_onboarding();
            return Ok(());
        }
        Err(error) => return Err(error).context("derive wallet view"),
    };
    debug!(
        address = redact_value(report.wallet.address.as_str()),
        keyring = %report.wallet.keyring_type,
        imported = report.wallet.imported,
        "wallet view derived"
    );
    if args.json {
        print_json(&report)
    } else {
        print_summary(&report);
        Ok(())
    }
}

pub fn run_accounts(args: &SnapshotArgs) -> Result<()> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let rows = account_rows(&snapshot);
    if rows.is_empty() && !args.json {
        print_onboarding();
        return Ok(());
    }
    if args.json {
        print_json(&rows)
    } else {
        print_accounts(&rows);
        Ok(())
    }
}

pub fn run_transactions(args: &SnapshotArgs) -> Result<()> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let rows = transaction_rows(&snapshot);
    info!(pending = rows.len(), "pending messages selected");
    if args.json {
        print_json(&rows)
    } else {
        print_transactions(&rows);
        Ok(())
    }
}

//! Demo command - the fixed Read, Create, Update, Delete sequence
//!
//! Runs once, never branches on results, and keeps going after failures.
//! Each returned record is printed as one line on stdout; a missing row
//! prints as the zero-valued record. A failed step prints
//! `<step> failed: <error>` on stdout in place of its record.

use clap::Args;
use recordctl_store::RecordStore;
use std::fmt::Display;
use tracing::{error, info};

/// Row targeted by read/update/delete unless `--id` says otherwise
const DEFAULT_TARGET_ID: i64 = 1;

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Record id to read, update and delete
    #[arg(long, default_value_t = DEFAULT_TARGET_ID)]
    pub id: i64,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            id: DEFAULT_TARGET_ID,
        }
    }
}

/// What the demo did, logged once at the end
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DemoReport {
    pub created_id: Option<i64>,
    pub deleted: bool,
}

pub async fn run_demo(store: &dyn RecordStore, args: &DemoArgs) -> DemoReport {
    let id = args.id;
    let mut report = DemoReport::default();

    match store.read(id).await {
        Ok(record) => println!("{}", record.unwrap_or_default()),
        Err(err) => report_failure("read", id, &err),
    }

    match store.create("hello", "world").await {
        Ok(record) => {
            report.created_id = Some(record.id);
            println!("{record}");
        }
        Err(err) => report_failure("create", id, &err),
    }

    match store.update(id, "hello", "golang").await {
        Ok(record) => println!("{}", record.unwrap_or_default()),
        Err(err) => report_failure("update", id, &err),
    }

    report.deleted = match store.delete(id).await {
        Ok(deleted) => deleted,
        Err(err) => {
            report_failure("delete", id, &err);
            false
        }
    };

    info!(target_id = id, created_id = ?report.created_id, deleted = report.deleted, "demo finished");
    report
}

fn report_failure(step: &str, id: i64, err: &impl Display) {
    error!(step, id, error = %err, "demo step failed");
    println!("{step} failed: {err}");
}

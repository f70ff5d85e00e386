//! Single-operation commands: get, create, update, delete

use anyhow::{Context, Result};
use clap::Subcommand;
use recordctl_store::{Record, RecordStore};

#[derive(Subcommand, Debug)]
pub enum RecordCommand {
    /// Print the record with the given id
    Get {
        /// Record id
        id: i64,
    },
    /// Insert a record and print it as stored
    Create {
        /// Record key
        key: String,
        /// Record value
        value: String,
    },
    /// Overwrite key and value of a record, then print it
    Update {
        /// Record id
        id: i64,
        /// New key
        key: String,
        /// New value
        value: String,
    },
    /// Delete the record with the given id
    Delete {
        /// Record id
        id: i64,
    },
}

pub async fn run_record(store: &dyn RecordStore, command: RecordCommand, json: bool) -> Result<()> {
    match command {
        RecordCommand::Get { id } => {
            let record = store.read(id).await.context("Failed to read record")?;
            print_record(record.as_ref(), json)
        }
        RecordCommand::Create { key, value } => {
            let record = store
                .create(&key, &value)
                .await
                .context("Failed to create record")?;
            print_record(Some(&record), json)
        }
        RecordCommand::Update { id, key, value } => {
            let record = store
                .update(id, &key, &value)
                .await
                .context("Failed to update record")?;
            print_record(record.as_ref(), json)
        }
        RecordCommand::Delete { id } => {
            let deleted = store.delete(id).await.context("Failed to delete record")?;
            if json {
                println!("{}", serde_json::json!({ "id": id, "deleted": deleted }));
            } else {
                println!("{}", if deleted { "deleted" } else { "not deleted" });
            }
            Ok(())
        }
    }
}

fn print_record(record: Option<&Record>, json: bool) -> Result<()> {
    match (record, json) {
        (Some(record), true) => println!("{}", serde_json::to_string(record)?),
        (None, true) => println!("null"),
        (Some(record), false) => println!("{record}"),
        (None, false) => println!("not found"),
    }
    Ok(())
}

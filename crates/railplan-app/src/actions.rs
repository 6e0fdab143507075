//! Background task execution for update actions.
//!
//! Every action spawns onto the runtime and reports back by sending a
//! completion message; the update loop stays synchronous and never blocks
//! on the network or the disk.

use std::path::{Path, PathBuf};

use tokio::sync::mpsc::UnboundedSender;

use railplan_api::{ApiClient, ExportFormat};
use railplan_core::prelude::*;
use railplan_core::{sanitize_filename, Proposal};

use crate::config::Settings;
use crate::handler::UpdateAction;
use crate::message::Message;
use crate::store::{self, SavedProject};

fn send(tx: &UnboundedSender<Message>, message: Message) {
    if tx.send(message).is_err() {
        warn!("message channel closed, dropping task result");
    }
}

/// Spawn the background work for one action.
pub fn handle_action(
    action: UpdateAction,
    tx: UnboundedSender<Message>,
    client: ApiClient,
    settings: Settings,
) {
    match action {
        UpdateAction::SubmitProject(project) => {
            tokio::spawn(async move {
                match client.compute(*project).await {
                    Ok(proposal) => send(&tx, Message::ComputeSucceeded(Box::new(proposal))),
                    Err(e) => {
                        error!("computation failed: {e}");
                        send(
                            &tx,
                            Message::ComputeFailed {
                                message: e.to_string(),
                            },
                        );
                    }
                }
            });
        }

        UpdateAction::FetchExport { format, proposal } => {
            tokio::spawn(async move {
                match fetch_export(&client, *proposal, format, &settings.export_dir).await {
                    Ok(path) => send(&tx, Message::ExportSucceeded { format, path }),
                    Err(e) => {
                        error!("{format} export failed: {e}");
                        send(
                            &tx,
                            Message::ExportFailed {
                                format,
                                message: e.to_string(),
                            },
                        );
                    }
                }
            });
        }

        UpdateAction::SaveSnapshot(fields) => {
            tokio::spawn(async move {
                let path = store::store_path();
                let result = tokio::task::spawn_blocking(move || {
                    let target = store::store_path();
                    store::save_to(&target, &SavedProject::now(fields))
                })
                .await
                .unwrap_or_else(|e| Err(Error::channel_send(format!("task join error: {e}"))));

                match result {
                    Ok(()) => send(&tx, Message::ProjectSaved { path }),
                    Err(e) => send(
                        &tx,
                        Message::StoreFailed {
                            message: format!("Sauvegarde impossible: {e}"),
                        },
                    ),
                }
            });
        }

        UpdateAction::LoadSnapshot => {
            tokio::spawn(async move {
                let result =
                    tokio::task::spawn_blocking(|| store::load_from(&store::store_path()))
                        .await
                        .unwrap_or_else(|e| Err(Error::channel_send(format!("task join error: {e}"))));

                match result {
                    Ok(snapshot) => send(&tx, Message::ProjectLoaded(snapshot.fields)),
                    Err(e) => send(
                        &tx,
                        Message::StoreFailed {
                            message: format!("Aucun projet restauré: {e}"),
                        },
                    ),
                }
            });
        }
    }
}

/// Fetch the drawing bytes and write them under the export directory as
/// `<sanitized title>.<ext>`.
async fn fetch_export(
    client: &ApiClient,
    proposal: Proposal,
    format: ExportFormat,
    export_dir: &Path,
) -> Result<PathBuf> {
    let stem = sanitize_filename(&proposal.plan_title);
    let bytes = client.export(proposal, format).await?;
    tokio::fs::create_dir_all(export_dir).await?;
    let path = export_dir.join(format!("{stem}.{}", format.extension()));
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
}

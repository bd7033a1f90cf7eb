use std::sync::Arc;
use std::time::Duration;
use chrono::{NaiveDate, Utc};
use tokio::time::sleep;
use tracing::{error, info, info_span, Instrument};

use crate::domain::models::member::STATUS_ARCHIVED;
use crate::domain::services::lifecycle;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Clone, Copy)]
pub struct SweepSummary {
    pub reminders: u32,
    pub archived: u32,
}

/// Periodic lifecycle sweep. The same pass also runs on demand (tests,
/// admin triggers); every member transition is independent and idempotent,
/// so overlapping or redundant passes are harmless.
pub async fn start_sweep_worker(state: Arc<AppState>) {
    info!("Starting lifecycle sweep worker...");

    loop {
        let span = info_span!("lifecycle_sweep");

        async {
            match run_sweep(&state).await {
                Ok(summary) => {
                    if summary.reminders > 0 || summary.archived > 0 {
                        info!(
                            reminders = summary.reminders,
                            archived = summary.archived,
                            "Sweep applied transitions"
                        );
                    }
                }
                Err(e) => error!("Sweep failed: {:?}", e),
            }
        }
            .instrument(span)
            .await;

        sleep(Duration::from_secs(state.config.sweep_interval_secs)).await;
    }
}

pub async fn run_sweep(state: &AppState) -> Result<SweepSummary, AppError> {
    run_sweep_at(state, Utc::now().date_naive()).await
}

/// Sweep all members against the given reference date: flag reminders for
/// due dates exactly three days out, archive members three or more unpaid
/// months behind. Archival is one-way here; only a payment re-activates.
pub async fn run_sweep_at(state: &AppState, today: NaiveDate) -> Result<SweepSummary, AppError> {
    let members = state.member_repo.list(None).await?;
    let mut summary = SweepSummary::default();

    for member in members {
        let action = lifecycle::assess(&member, today);
        if action.is_noop() {
            continue;
        }

        if action.remind {
            if let Some(due_on) = member.next_due_date {
                match state.notifier.deliver(&member, due_on).await {
                    Ok(()) => {
                        state.member_repo.mark_reminder_sent(&member.id, today).await?;
                        summary.reminders += 1;
                    }
                    // Delivery is best-effort; an unstamped member is
                    // retried on the next pass.
                    Err(e) => error!("Reminder delivery failed for {}: {:?}", member.id, e),
                }
            }
        }

        if action.archive {
            state.member_repo.set_status(&member.id, STATUS_ARCHIVED).await?;
            info!(member_id = %member.id, "Member archived after missed billing cycles");
            summary.archived += 1;
        }
    }

    Ok(summary)
}

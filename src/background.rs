use std::sync::Arc;
use std::time::Duration;
use chrono::{Days, Utc};
use tokio::time::sleep;
use tracing::{error, info, info_span, Instrument};
use crate::domain::services::intervals::format_hm;
use crate::domain::services::reminders::select_upcoming;
use crate::error::AppError;
use crate::state::AppState;

pub async fn start_reminder_worker(state: Arc<AppState>) {
    info!("Starting reminder worker...");

    loop {
        let span = info_span!("reminder_scan");
        async {
            match run_reminder_scan(&state).await {
                Ok(0) => {}
                Ok(sent) => info!("Sent {} reminders", sent),
                Err(e) => error!("Reminder scan failed: {:?}", e),
            }
        }
            .instrument(span)
            .await;

        sleep(Duration::from_secs(state.config.reminder_poll_secs)).await;
    }
}

/// One scan pass: fetch unreminded confirmed bookings around today, keep
/// those starting within the lookahead window (each in its own business's
/// timezone), notify, and mark them sent. Returns how many went out.
pub async fn run_reminder_scan(state: &AppState) -> Result<usize, AppError> {
    let now = Utc::now();
    // The date filter is deliberately wide; a business far behind UTC can
    // have a local "today" that is UTC yesterday, and a long lookahead can
    // reach into UTC tomorrow.
    let from = now.date_naive() - Days::new(1);
    let to = now.date_naive() + Days::new(2);

    let candidates = state.booking_repo.list_reminder_candidates(from, to).await?;
    let upcoming = select_upcoming(candidates, now, state.config.reminder_lookahead_min);

    let mut sent = 0;
    for (candidate, _start) in upcoming {
        let message = format!(
            "Reminder: {} at {} on {} at {}",
            candidate.service_name,
            candidate.business_name,
            candidate.date,
            format_hm(candidate.start_min),
        );

        match state.notification_service.send(&candidate.customer_phone, &message).await {
            Ok(()) => {
                state.booking_repo.mark_reminder_sent(&candidate.id).await?;
                sent += 1;
            }
            Err(e) => {
                // Leave reminder_sent unset so the next scan retries.
                error!("Failed to send reminder for booking {}: {:?}", candidate.id, e);
            }
        }
    }

    Ok(sent)
}

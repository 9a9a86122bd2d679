use std::sync::Arc;
use crate::domain::ports::{
    BookingRepository, BusinessRepository, NotificationService, ScheduleRepository,
    ServiceRepository, SpecialDayRepository,
};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub business_repo: Arc<dyn BusinessRepository>,
    pub service_repo: Arc<dyn ServiceRepository>,
    pub schedule_repo: Arc<dyn ScheduleRepository>,
    pub special_day_repo: Arc<dyn SpecialDayRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub notification_service: Arc<dyn NotificationService>,
}

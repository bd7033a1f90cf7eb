use std::sync::Arc;
use crate::domain::ports::{MemberRepository, PaymentRepository, ReminderNotifier, UserRepository};
use crate::config::Config;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub member_repo: Arc<dyn MemberRepository>,
    pub payment_repo: Arc<dyn PaymentRepository>,
    pub user_repo: Arc<dyn UserRepository>,
    pub notifier: Arc<dyn ReminderNotifier>,
    pub templates: Arc<Tera>,
}

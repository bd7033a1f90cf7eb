use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use std::sync::Arc;
use chrono::Utc;
use tracing::info;

use crate::api::dtos::requests::{MembersQuery, RegisterMemberRequest, UpdateMemberRequest};
use crate::api::dtos::responses::MemberView;
use crate::domain::models::member::{Member, NewMemberParams, TYPE_EXISTING, TYPE_NEW};
use crate::domain::models::payment::{self, Payment, TYPE_MEMBERSHIP, TYPE_REGISTRATION};
use crate::domain::services::billing;
use crate::error::AppError;
use crate::state::AppState;

fn view(member: Member, today: chrono::NaiveDate) -> MemberView {
    MemberView {
        unpaid_months: billing::unpaid_months(member.next_due_date, today),
        due_status: billing::due_status(member.next_due_date, today),
        member,
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::MissingField(field.to_string())),
    }
}

pub async fn register_member(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    let today = Utc::now().date_naive();

    let member_type = payload.member_type.unwrap_or_else(|| TYPE_NEW.to_string());
    if member_type != TYPE_NEW && member_type != TYPE_EXISTING {
        return Err(AppError::Validation(format!("Unknown member type: {}", member_type)));
    }

    let name = required(payload.name, "Name")?;

    let registration_fee = payload.registration_fee.unwrap_or(0);
    let membership_fee = payload.membership_fee.unwrap_or(0);
    if registration_fee < 0 || membership_fee < 0 {
        return Err(AppError::InvalidAmount);
    }

    let age = payload.dob.map(|dob| billing::age(dob, today));

    let (member, initial_payments) = if member_type == TYPE_NEW {
        let phone = required(payload.phone, "Phone")?;

        if state.member_repo.find_by_phone(&phone).await?.is_some() {
            return Err(AppError::DuplicateMember);
        }

        // A fee payment is only recorded when a fee was actually charged,
        // and each one needs its own method choice.
        let mut fee_payments = Vec::new();
        if registration_fee > 0 {
            let method = required(payload.registration_method, "Registration Payment Method")?;
            fee_payments.push((registration_fee, method, TYPE_REGISTRATION));
        }
        if membership_fee > 0 {
            let method = required(payload.membership_method, "Membership Payment Method")?;
            fee_payments.push((membership_fee, method, TYPE_MEMBERSHIP));
        }
        for (_, method, _) in &fee_payments {
            if !payment::is_valid_method(method) {
                return Err(AppError::Validation(format!("Unknown payment method: {}", method)));
            }
        }

        let registration_date = payload.registration_date.unwrap_or(today);
        let next_due_date = billing::roll_forward_due_date(registration_date);

        let member = Member::new(NewMemberParams {
            name: name.clone(),
            phone: Some(phone),
            dob: payload.dob,
            age,
            id_type: payload.id_type,
            id_number: payload.id_number,
            registration_fee,
            membership_fee,
            member_type,
            registration_date: Some(registration_date),
            last_paid_date: Some(registration_date),
            next_due_date: Some(next_due_date),
        });

        let initial_payments: Vec<Payment> = fee_payments
            .into_iter()
            .map(|(amount, method, payment_type)| {
                Payment::new(
                    member.id.clone(),
                    name.clone(),
                    amount,
                    registration_date,
                    method,
                    payment_type.to_string(),
                )
            })
            .collect();

        (member, initial_payments)
    } else {
        // Pre-existing members migrate in with whatever due date the owner
        // picked; fees only apply to fresh registrations.
        let member = Member::new(NewMemberParams {
            name,
            phone: payload.phone.filter(|p| !p.trim().is_empty()),
            dob: payload.dob,
            age,
            id_type: payload.id_type,
            id_number: payload.id_number,
            registration_fee: 0,
            membership_fee: 0,
            member_type,
            registration_date: None,
            last_paid_date: None,
            next_due_date: payload.next_due_date,
        });

        (member, Vec::new())
    };

    let created = state.member_repo.create_with_payments(&member, initial_payments).await?;
    info!("Registered member {} ({})", created.id, created.member_type);

    Ok(Json(view(created, today)))
}

pub async fn list_members(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MembersQuery>,
) -> Result<impl IntoResponse, AppError> {
    let today = Utc::now().date_naive();
    let members = state.member_repo.list(query.q.as_deref()).await?;

    let views: Vec<MemberView> = members.into_iter().map(|m| view(m, today)).collect();
    Ok(Json(views))
}

pub async fn get_member(
    State(state): State<Arc<AppState>>,
    Path(member_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let today = Utc::now().date_naive();
    let member = state.member_repo.find_by_id(&member_id).await?
        .ok_or(AppError::NotFound("Member not found".into()))?;

    Ok(Json(view(member, today)))
}

pub async fn update_member(
    State(state): State<Arc<AppState>>,
    Path(member_id): Path<String>,
    Json(payload): Json<UpdateMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    let today = Utc::now().date_naive();

    let mut member = state.member_repo.find_by_id(&member_id).await?
        .ok_or(AppError::NotFound("Member not found".into()))?;

    member.name = required(payload.name, "Name")?;
    member.phone = payload.phone.filter(|p| !p.trim().is_empty());
    member.id_type = payload.id_type;
    member.id_number = payload.id_number;
    member.dob = payload.dob;
    member.age = payload.dob.map(|dob| billing::age(dob, today));
    member.registration_date = payload.registration_date;
    member.next_due_date = payload.next_due_date;

    let updated = state.member_repo.update(&member).await?;
    info!("Updated member {}", updated.id);

    Ok(Json(view(updated, today)))
}

pub async fn delete_member(
    State(state): State<Arc<AppState>>,
    Path(member_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    // Payment rows stay behind as the audit trail.
    state.member_repo.delete(&member_id).await?;
    info!("Deleted member {}", member_id);

    Ok(Json(serde_json::json!({"status": "deleted"})))
}

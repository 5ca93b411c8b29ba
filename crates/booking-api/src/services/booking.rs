//! Seat allocation orchestration.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use booking_core::config::booking::DuplicatePolicy;
use booking_core::error::AppError;
use booking_core::events::{ChangeEvent, ChangeOp, ChangeTable};
use booking_core::result::AppResult;
use booking_database::repositories::booking::{AllocationOutcome, BookingRepository};
use booking_database::repositories::user::UserRepository;
use booking_entity::booking::{Booking, BookingWithUser, Club};

/// Resolves the caller's identity, invokes the seat allocator, and
/// publishes feed events for committed claims.
#[derive(Debug)]
pub struct BookingService {
    users: Arc<UserRepository>,
    bookings: Arc<BookingRepository>,
    feed: Arc<booking_realtime::feed::ChangeFeed>,
    policy: DuplicatePolicy,
}

impl BookingService {
    /// Create a new booking service.
    pub fn new(
        users: Arc<UserRepository>,
        bookings: Arc<BookingRepository>,
        feed: Arc<booking_realtime::feed::ChangeFeed>,
        policy: DuplicatePolicy,
    ) -> Self {
        Self {
            users,
            bookings,
            feed,
            policy,
        }
    }

    /// Claim a seat of `slot_id` for `club` on behalf of the verified
    /// phone number.
    ///
    /// Every rejection maps to a distinct error; success means the booking
    /// row and counter increment are durable. Feed events go out only
    /// after the transaction has committed, and the caller's response does
    /// not wait on fan-out.
    pub async fn book_slot(&self, phone: &str, slot_id: Uuid, club: Club) -> AppResult<Booking> {
        let user = self
            .users
            .find_by_phone(phone)
            .await?
            .ok_or_else(|| {
                AppError::not_found("User not found. Please complete registration.")
            })?;

        let outcome = self
            .bookings
            .allocate(user.id, slot_id, club, self.policy)
            .await?;

        let booking = match outcome {
            AllocationOutcome::Booked(booking) => booking,
            AllocationOutcome::SlotNotFound => {
                return Err(AppError::not_found("Time slot not found"));
            }
            AllocationOutcome::UserNotFound => {
                return Err(AppError::not_found(
                    "User not found. Please complete registration.",
                ));
            }
            AllocationOutcome::SlotFull => {
                return Err(AppError::capacity("This slot is full"));
            }
            AllocationOutcome::Duplicate => {
                return Err(AppError::conflict(
                    "You already have a booking for this slot",
                ));
            }
        };

        info!(
            booking_id = %booking.id,
            slot_id = %slot_id,
            club = %club,
            "Seat booked"
        );

        self.feed.publish(ChangeEvent::now(
            ChangeTable::TimeSlots,
            ChangeOp::Update,
            Some(slot_id),
        ));
        self.feed.publish(ChangeEvent::now(
            ChangeTable::Bookings,
            ChangeOp::Insert,
            Some(booking.id),
        ));

        Ok(booking)
    }

    /// Roster of committed bookings for one (slot, club) pair.
    pub async fn roster(&self, slot_id: Uuid, club: Club) -> AppResult<Vec<BookingWithUser>> {
        self.bookings.list_for_slot(slot_id, club).await
    }
}

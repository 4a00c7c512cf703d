//! End-to-end booking flow against the in-memory store.

use venue_booking::booking::service::{
    delete_booking, draft_for_latest, month_view, submit_booking,
};
use venue_booking::{
    BookingRequest, CategoryConfig, ConflictResolver, Decision, HolidayCalendar, MemoryStore,
    ReservationStore, TimeSlot, VenueChoice,
};

fn request(category: &str, venue: &str, date: &str, slot: TimeSlot) -> BookingRequest {
    BookingRequest {
        category: Some(category.to_string()),
        kind: None,
        venue: VenueChoice::Fixed(venue.to_string()),
        date: date.to_string(),
        time_slot: slot.to_string(),
        requested_by: "Dance Society".to_string(),
    }
}

#[tokio::test]
async fn full_booking_lifecycle() {
    let store = MemoryStore::new();
    let resolver = ConflictResolver::with_campus_defaults();
    let config = CategoryConfig::default_campus();
    let holidays = HolidayCalendar::new();

    // Secure a slot.
    let decision = submit_booking(
        &store,
        &resolver,
        request("cultural", "MLS Auditorium", "2026-03-10", TimeSlot::TenToNoon),
    )
    .await
    .unwrap();
    assert!(decision.is_accepted());

    // The same triple is now taken.
    let decision = submit_booking(
        &store,
        &resolver,
        request("cultural", "MLS Auditorium", "2026-03-10", TimeSlot::TenToNoon),
    )
    .await
    .unwrap();
    let Decision::RejectedConflict { message } = decision else {
        panic!("expected a conflict");
    };
    assert!(message.contains("MLS Auditorium"));
    assert!(message.contains("2026-03-10"));

    // A Monday sports booking at a recreation venue is rejected by policy
    // even though the slot is free.
    let decision = submit_booking(
        &store,
        &resolver,
        request("sports", "Rec Centre - Squash Court 1", "2026-03-09", TimeSlot::EightToTen),
    )
    .await
    .unwrap();
    assert!(matches!(decision, Decision::RejectedPolicy { .. }));

    // The calendar shows the one accepted booking on day 10.
    let view = month_view(&store, None, 2026, 3, &holidays).await.unwrap();
    let bookings = view.bookings_on(10);
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].venue, "MLS Auditorium");
    assert_eq!(bookings[0].time_slot, "10:00 AM - 12:00 PM");

    // The draft restates the accepted booking for the admin team.
    let draft = draft_for_latest(&store, &config, None).await.unwrap();
    assert!(draft.starts_with("Subject: Venue Reservation Request - MLS Auditorium"));
    assert!(draft.contains("dean.office@campus.edu"));

    // Deleting the booking empties the month again.
    let removed = delete_booking(&store, Some("cultural"), 0).await.unwrap();
    assert_eq!(removed.venue, "MLS Auditorium");

    let view = month_view(&store, None, 2026, 3, &holidays).await.unwrap();
    assert!(view.bookings_on(10).is_empty());
}

#[tokio::test]
async fn rejected_submissions_leave_no_record() {
    let store = MemoryStore::new();
    let resolver = ConflictResolver::with_campus_defaults();

    let accepted = submit_booking(
        &store,
        &resolver,
        request("sports", "Yoga Room", "2026-03-10", TimeSlot::FourToSix),
    )
    .await
    .unwrap();
    assert!(accepted.is_accepted());

    // Conflict and policy rejections add nothing.
    submit_booking(
        &store,
        &resolver,
        request("sports", "Yoga Room", "2026-03-10", TimeSlot::FourToSix),
    )
    .await
    .unwrap();
    submit_booking(
        &store,
        &resolver,
        request("sports", "Yoga Room", "2026-03-16", TimeSlot::FourToSix),
    )
    .await
    .unwrap();

    assert_eq!(store.list(None).await.unwrap().len(), 1);
}

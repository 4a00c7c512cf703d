//! Approval draft composition.
//!
//! Renders the most recent reservation into a message for manual dispatch:
//! a formal email for the admin team, or a one-line chat invite. Pure
//! string building; callers re-compose whenever the reservation set
//! changes.

use crate::models::{DraftStyle, Reservation};

/// Returned when there is no reservation to draft from.
pub const NO_BOOKINGS_PLACEHOLDER: &str =
    "No recent bookings available. Please secure a slot to generate a template.";

/// Compose a draft for the most recent reservation.
///
/// # Arguments
/// * `latest` - Most recent reservation; `None` yields the fixed
///   placeholder, not an error
/// * `style` - The category's communication style
/// * `recipients` - Recipient list appended to email drafts, joined by ", "
pub fn compose(latest: Option<&Reservation>, style: DraftStyle, recipients: &[String]) -> String {
    let Some(reservation) = latest else {
        return NO_BOOKINGS_PLACEHOLDER.to_string();
    };
    match style {
        DraftStyle::Email => compose_email(reservation, recipients),
        DraftStyle::ChatMessage => compose_chat(reservation),
    }
}

/// Subject line: venue name, with a bracketed kind prefix when present.
fn subject_line(reservation: &Reservation) -> String {
    if reservation.kind.trim().is_empty() {
        format!("Venue Reservation Request - {}", reservation.venue)
    } else {
        format!(
            "Venue Reservation Request - [{}] {}",
            reservation.kind, reservation.venue
        )
    }
}

fn compose_email(reservation: &Reservation, recipients: &[String]) -> String {
    let event = if reservation.category.trim().is_empty() {
        "an upcoming event".to_string()
    } else {
        format!("an upcoming {} event", reservation.category)
    };

    format!(
        "Subject: {subject}\n\
         \n\
         Dear Admin Team,\n\
         \n\
         This message serves as a formal request to reserve {venue} for {event}.\n\
         \n\
         Reservation Details:\n\
         - Date: {date}\n\
         - Time Slot: {slot}\n\
         - Requested By: {requester}\n\
         \n\
         We kindly request you to review and approve this reservation at your earliest convenience.\n\
         \n\
         Best regards,\n\
         \n\
         {requester}\n\
         \n\
         ---\n\
         Recipients: {recipients}\n",
        subject = subject_line(reservation),
        venue = reservation.venue,
        event = event,
        date = reservation.date,
        slot = reservation.time_slot,
        requester = reservation.requested_by,
        recipients = recipients.join(", "),
    )
}

fn compose_chat(reservation: &Reservation) -> String {
    format!(
        "Hey everyone! {} is booked on {} ({}) by {} - come join us!",
        reservation.venue, reservation.date, reservation.time_slot, reservation.requested_by
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Reservation {
        Reservation {
            category: "cultural".to_string(),
            kind: String::new(),
            venue: "MLS Auditorium".to_string(),
            date: "2026-03-10".to_string(),
            time_slot: "10:00 AM - 12:00 PM".to_string(),
            requested_by: "Dance Society".to_string(),
        }
    }

    fn recipients() -> Vec<String> {
        vec![
            "admin1@campus.edu".to_string(),
            "admin2@campus.edu".to_string(),
        ]
    }

    #[test]
    fn test_none_yields_placeholder() {
        let draft = compose(None, DraftStyle::Email, &recipients());
        assert_eq!(draft, NO_BOOKINGS_PLACEHOLDER);
        assert_eq!(
            compose(None, DraftStyle::ChatMessage, &[]),
            NO_BOOKINGS_PLACEHOLDER
        );
    }

    #[test]
    fn test_email_structure() {
        let reservation = sample();
        let draft = compose(Some(&reservation), DraftStyle::Email, &recipients());

        assert!(draft.starts_with("Subject: Venue Reservation Request - MLS Auditorium\n"));
        assert!(draft.contains("Dear Admin Team,"));
        assert!(draft.contains("- Date: 2026-03-10"));
        assert!(draft.contains("- Time Slot: 10:00 AM - 12:00 PM"));
        assert!(draft.contains("- Requested By: Dance Society"));
        assert!(draft.contains("an upcoming cultural event"));
        assert!(draft.contains("Recipients: admin1@campus.edu, admin2@campus.edu"));

        // Sign-off repeats the requester.
        assert_eq!(draft.matches("Dance Society").count(), 2);
    }

    #[test]
    fn test_email_subject_kind_prefix() {
        let mut reservation = sample();
        reservation.kind = "Rehearsal".to_string();
        let draft = compose(Some(&reservation), DraftStyle::Email, &[]);
        assert!(
            draft.starts_with("Subject: Venue Reservation Request - [Rehearsal] MLS Auditorium\n")
        );
    }

    #[test]
    fn test_email_without_category() {
        let mut reservation = sample();
        reservation.category = String::new();
        let draft = compose(Some(&reservation), DraftStyle::Email, &[]);
        assert!(draft.contains("for an upcoming event"));
        assert!(draft.contains("Recipients: \n"));
    }

    #[test]
    fn test_chat_is_one_informal_line() {
        let reservation = sample();
        let draft = compose(Some(&reservation), DraftStyle::ChatMessage, &recipients());

        assert!(!draft.contains('\n'));
        assert!(draft.contains("MLS Auditorium"));
        assert!(draft.contains("2026-03-10"));
        assert!(draft.contains("10:00 AM - 12:00 PM"));
        // Chat drafts carry no recipient trailer.
        assert!(!draft.contains("admin1@campus.edu"));
    }
}

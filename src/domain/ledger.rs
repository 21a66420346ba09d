use super::{booking::ApprovedPurchase, Club, Competition};

/// Apply an approved purchase to copies of the club and competition records
///
/// The club spends one point per place, the competition loses the booked places and the club's
/// cumulative booking in the competition grows by the same amount. Nothing is persisted here.
pub fn apply_purchase(purchase: ApprovedPurchase) -> (Club, Competition) {
    let ApprovedPurchase {
        mut club,
        mut competition,
        places,
        points_available,
        places_available,
    } = purchase;

    club.points = (points_available - i128::from(places)).to_string();
    competition.number_of_places = (places_available - i128::from(places)).to_string();
    let booked = competition.booked_by(&club.name) + places;
    competition.bookings.insert(club.name.clone(), booked.into());

    (club, competition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{booking::validate_purchase, BookedPlaces};
    use chrono::NaiveDate;
    use speculoos::prelude::*;

    fn approve(club: Club, competition: Competition, places: &str) -> ApprovedPurchase {
        let now = NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        validate_purchase(
            &[club.clone()],
            &[competition.clone()],
            &competition.name,
            &club.name,
            places,
            now,
        )
        .unwrap()
    }

    #[test]
    fn test_apply_first_booking() {
        // GIVEN an approved purchase of 5 places by a club with 10 points
        let purchase = approve(
            Club::new("Simply Lift", "john@simplylift.co", "10"),
            Competition::new("Spring Festival", "2030-03-27 10:00:00", "30"),
            "5",
        );

        // WHEN applying it
        let (club, competition) = apply_purchase(purchase);

        // THEN points, places and the booking ledger are updated
        assert_that!(club.points.as_str()).is_equal_to("5");
        assert_that!(competition.number_of_places.as_str()).is_equal_to("25");
        assert_that!(competition.booked_by("Simply Lift")).is_equal_to(5);
        assert_that!(competition.bookings.len()).is_equal_to(1);
    }

    #[test]
    fn test_apply_accumulates_bookings() {
        // GIVEN a competition where the club already holds places
        let mut competition = Competition::new("Spring Festival", "2030-03-27 10:00:00", "30");
        competition.bookings.insert("Simply Lift".to_string(), BookedPlaces::Count(4));
        competition.bookings.insert("Iron Temple".to_string(), BookedPlaces::Count(2));
        let purchase = approve(
            Club::new("Simply Lift", "john@simplylift.co", "13"),
            competition,
            "3",
        );

        // WHEN applying another purchase
        let (club, competition) = apply_purchase(purchase);

        // THEN only that club's total grows
        assert_that!(club.points.as_str()).is_equal_to("10");
        assert_that!(competition.number_of_places.as_str()).is_equal_to("27");
        assert_that!(competition.booked_by("Simply Lift")).is_equal_to(7);
        assert_that!(competition.booked_by("Iron Temple")).is_equal_to(2);
    }

    #[test]
    fn test_apply_spends_everything() {
        let purchase = approve(
            Club::new("Iron Temple", "admin@irontemple.com", "4"),
            Competition::new("Fall Classic", "2030-10-22 13:30:00", "4"),
            "4",
        );

        let (club, competition) = apply_purchase(purchase);

        assert_that!(club.points.as_str()).is_equal_to("0");
        assert_that!(competition.number_of_places.as_str()).is_equal_to("0");
    }

    #[test]
    fn test_apply_large_counts() {
        let purchase = approve(
            Club::new("Simply Lift", "john@simplylift.co", "99999999999999999999"),
            Competition::new("Spring Festival", "2030-03-27 10:00:00", "100000000000000000000"),
            "5",
        );

        let (club, competition) = apply_purchase(purchase);

        assert_that!(club.points.as_str()).is_equal_to("99999999999999999994");
        assert_that!(competition.number_of_places.as_str()).is_equal_to("99999999999999999995");
    }
}

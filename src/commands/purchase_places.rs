use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use crate::{
    domain::{booking::validate_purchase, ledger::apply_purchase, Club, Competition},
    ports::{clock::ClockPort, club::ClubPort, competition::CompetitionPort},
};
use tower::Service;
use tracing::{error, info, warn};

use super::{load_clubs, load_competitions, DomainLogic, Error};

/// Banner shown alongside the confirmation of a successful purchase
pub const BOOKING_COMPLETE_MESSAGE: &str = "Great-booking complete!";

pub struct PurchasePlacesRequest {
    pub competition: String,
    pub club: String,
    /// Number of places as typed by the user
    ///
    /// Kept as text so that a non-numeric entry is reported as a rejection rather than failing
    /// earlier in the presentation layer.
    pub places: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct PurchasePlacesResponse {
    /// Club after spending its points
    pub club: Club,
    /// Competition after the places were booked
    pub competition: Competition,
    /// Number of places booked by this purchase
    pub places: u32,
}

impl PurchasePlacesResponse {
    /// Confirmation shown to the user once the purchase is saved
    pub fn confirmation(&self) -> String {
        format!(
            "You have reserved {} place(s) for the competition {}.",
            self.places, self.competition.name
        )
    }
}

impl<C, P, K> Service<PurchasePlacesRequest> for DomainLogic<C, P, K>
where
    C: ClubPort + 'static,
    P: CompetitionPort + 'static,
    K: ClockPort + 'static,
{
    type Response = PurchasePlacesResponse;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: PurchasePlacesRequest) -> Self::Future {
        let club_port = self.clubs.clone();
        let competition_port = self.competitions.clone();
        let clock = self.clock.clone();
        Box::pin(async move {
            // Fetch the current state of both collections
            let clubs = load_clubs(club_port.as_ref()).await;
            let competitions = load_competitions(competition_port.as_ref()).await;

            let approved = validate_purchase(
                &clubs,
                &competitions,
                &req.competition,
                &req.club,
                &req.places,
                clock.now(),
            )
            .map_err(|rejection| {
                warn!(
                    club = %req.club,
                    competition = %req.competition,
                    places = %req.places,
                    %rejection,
                    "purchase rejected"
                );
                rejection
            })?;

            let places = approved.places;
            let (club, competition) = apply_purchase(approved);

            if !commit(
                club_port.as_ref(),
                competition_port.as_ref(),
                &club,
                &competition,
                &clubs,
                &competitions,
            )
            .await
            {
                return Err(Error::SaveChanges);
            }

            info!(
                club = %club.name,
                competition = %competition.name,
                places,
                "places booked"
            );
            Ok(PurchasePlacesResponse {
                club,
                competition,
                places,
            })
        })
    }
}

/// Write the updated records back as part of their full collections
///
/// Clubs are saved first, then competitions. Returns `true` only when both saves succeed. When
/// the competitions save fails after the clubs were written, the original clubs are saved again
/// so that points are not spent on places that were never recorded. That restore is best effort:
/// the two files are not written atomically.
pub async fn commit<C, P>(
    club_port: &C,
    competition_port: &P,
    club: &Club,
    competition: &Competition,
    clubs: &[Club],
    competitions: &[Competition],
) -> bool
where
    C: ClubPort,
    P: CompetitionPort,
{
    let updated_clubs = replace_by_name(clubs, club, |c| &c.name);
    let updated_competitions = replace_by_name(competitions, competition, |c| &c.name);

    if let Err(err) = club_port.save_clubs(updated_clubs).await {
        error!(error = %err, club = %club.name, "unable to save clubs");
        return false;
    }

    if let Err(err) = competition_port
        .save_competitions(updated_competitions)
        .await
    {
        error!(
            error = %err,
            competition = %competition.name,
            "unable to save competitions after clubs were saved, restoring clubs"
        );
        if let Err(err) = club_port.save_clubs(clubs.to_vec()).await {
            error!(
                error = %err,
                club = %club.name,
                "unable to restore clubs, stored points and places are now inconsistent"
            );
        }
        return false;
    }

    true
}

fn replace_by_name<T, F>(records: &[T], updated: &T, name: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> &String,
{
    records
        .iter()
        .map(|record| {
            if name(record) == name(updated) {
                updated.clone()
            } else {
                record.clone()
            }
        })
        .collect()
}

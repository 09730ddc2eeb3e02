//! View aggregates shared by the venue, artist and show pages
//!
//! Everything here is pure: callers load rows from `db` and pass in the
//! reference time, so classification is decided once per request.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

use super::datetime::{format_datetime, DateFormat};
use crate::models::{ShowListing, VenueSummary};

/// A show as rendered on a profile or the show list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowDisplay {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

impl ShowDisplay {
    pub fn from_listing(show: ShowListing, format: DateFormat) -> Self {
        Self {
            venue_id: show.venue_id,
            venue_name: show.venue_name,
            artist_id: show.artist_id,
            artist_name: show.artist_name,
            artist_image_link: show.artist_image_link,
            start_time: format_datetime(show.start_time, format),
        }
    }
}

/// Shows split around a reference time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PartitionedShows {
    pub past_shows: Vec<ShowDisplay>,
    pub upcoming_shows: Vec<ShowDisplay>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// A show starting exactly at `now` is upcoming.
pub fn is_upcoming(start_time: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    start_time >= now
}

/// Split shows into past (`start_time < now`) and upcoming, keeping input order.
pub fn partition_shows(
    shows: Vec<ShowListing>,
    now: DateTime<Utc>,
    format: DateFormat,
) -> PartitionedShows {
    let (upcoming, past): (Vec<_>, Vec<_>) = shows
        .into_iter()
        .partition(|show| is_upcoming(show.start_time, now));

    let past_shows: Vec<ShowDisplay> = past
        .into_iter()
        .map(|s| ShowDisplay::from_listing(s, format))
        .collect();
    let upcoming_shows: Vec<ShowDisplay> = upcoming
        .into_iter()
        .map(|s| ShowDisplay::from_listing(s, format))
        .collect();

    PartitionedShows {
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }
}

/// Number of upcoming shows per owner id, from `(owner_id, start_time)` pairs.
pub fn upcoming_counts(
    start_times: &[(i64, DateTime<Utc>)],
    now: DateTime<Utc>,
) -> HashMap<i64, usize> {
    let mut counts = HashMap::new();
    for (owner_id, start_time) in start_times {
        if is_upcoming(*start_time, now) {
            *counts.entry(*owner_id).or_insert(0) += 1;
        }
    }
    counts
}

/// An entry of the directory or of a search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedEntity {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

impl ListedEntity {
    pub fn new(id: i64, name: String, counts: &HashMap<i64, usize>) -> Self {
        Self {
            num_upcoming_shows: counts.get(&id).copied().unwrap_or(0),
            id,
            name,
        }
    }
}

/// Venues of one city
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<ListedEntity>,
}

/// Group consecutive venues sharing `(city, state)`.
///
/// Input order is kept; only runs are merged, so the caller sorts first.
pub fn group_by_city(venues: Vec<VenueSummary>, counts: &HashMap<i64, usize>) -> Vec<CityGroup> {
    let mut groups: Vec<CityGroup> = Vec::new();

    for venue in venues {
        let entry = ListedEntity::new(venue.id, venue.name, counts);
        match groups.last_mut() {
            Some(group) if group.city == venue.city && group.state == venue.state => {
                group.venues.push(entry);
            },
            _ => groups.push(CityGroup {
                city: venue.city,
                state: venue.state,
                venues: vec![entry],
            }),
        }
    }

    groups
}

/// The payload of a name search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<ListedEntity>,
    pub search_term: String,
}

impl SearchResults {
    pub fn new(search_term: String, data: Vec<ListedEntity>) -> Self {
        Self {
            count: data.len(),
            data,
            search_term,
        }
    }
}

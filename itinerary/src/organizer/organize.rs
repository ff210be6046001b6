//! Partitioning of sorted segments into trips.

use chrono::Duration;
use tracing::debug;

use super::config::OrganizerConfig;
use crate::domain::{Iata, Segment, Trip};

/// Sealed trips plus the trip still being built.
///
/// Threaded by value through the fold in [`organize_trips`]; each step
/// consumes the accumulator and hands back the next one.
#[derive(Debug, Default)]
struct TripAccumulator {
    sealed: Vec<Trip>,
    current: Vec<Segment>,
}

impl TripAccumulator {
    /// Add `segment` to the current trip, sealing the trip with it if the gap
    /// to the next segment is too long. `gap` is `None` after the last
    /// segment.
    fn push(mut self, segment: Segment, gap: Option<Duration>, config: &OrganizerConfig) -> Self {
        if gap.is_some_and(|gap| gap <= config.max_gap()) {
            self.current.push(segment);
            return self;
        }

        let destination = title_destination(&segment, config.base);
        let trip = Trip::ending_with(destination, std::mem::take(&mut self.current), segment);

        debug!(
            destination = %destination,
            segments = trip.segments().len(),
            gap_mins = gap.map(|gap| gap.num_minutes()),
            "Closing trip"
        );
        self.sealed.push(trip);

        self
    }

    fn finish(self) -> Vec<Trip> {
        debug_assert!(self.current.is_empty(), "last segment closes its trip");
        self.sealed
    }
}

/// The location a trip ending with `last` is named after.
///
/// Hotel stays name their own location. Travel names the endpoint that is
/// not `base`: the origin when only the destination is home, otherwise the
/// destination (including when neither or both endpoints are home, or when
/// no base is configured).
///
/// # Examples
///
/// ```
/// use itinerary::domain::{Iata, Segment, SegmentKind};
/// use itinerary::organizer::title_destination;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2023, 3, 2).unwrap();
/// let svq = Iata::parse("SVQ").unwrap();
/// let bcn = Iata::parse("BCN").unwrap();
///
/// // Flying home names the place we came from.
/// let home = Segment::travel(
///     SegmentKind::Flight,
///     bcn,
///     svq,
///     day.and_hms_opt(10, 0, 0).unwrap(),
///     day.and_hms_opt(11, 50, 0).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(title_destination(&home, Some(svq)), bcn);
/// ```
pub fn title_destination(last: &Segment, base: Option<Iata>) -> Iata {
    match last.destination() {
        None => last.origin(),
        Some(destination) => {
            if Some(destination) == base && Some(last.origin()) != base {
                last.origin()
            } else {
                destination
            }
        }
    }
}

/// Split start-sorted segments into trips.
///
/// Segments stay in the order given. A trip ends after a segment when the
/// next segment starts more than `config.max_gap()` after it ends, and after
/// the final segment. Each trip is titled from its last segment, see
/// [`title_destination`].
pub fn organize_trips(segments: Vec<Segment>, config: &OrganizerConfig) -> Vec<Trip> {
    let gaps: Vec<Option<Duration>> = segments
        .windows(2)
        .map(|pair| Some(pair[0].gap_until(&pair[1])))
        .chain(std::iter::once(None))
        .collect();

    let trips = segments
        .into_iter()
        .zip(gaps)
        .fold(TripAccumulator::default(), |acc, (segment, gap)| {
            acc.push(segment, gap, config)
        })
        .finish();

    debug!(trips = trips.len(), "Organized trips");
    trips
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::SegmentKind;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    const CODES: [&str; 5] = ["SVQ", "BCN", "MAD", "NYC", "BOS"];

    /// Segments at arbitrary offsets (minutes) from a fixed epoch,
    /// sorted by start the way the parser hands them over.
    fn sorted_segments() -> impl Strategy<Value = Vec<Segment>> {
        let epoch = NaiveDate::from_ymd_opt(2023, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let segment = (
            0i64..60 * 24 * 90,
            -120i64..600,
            0usize..5,
            0usize..5,
            any::<bool>(),
        )
            .prop_map(move |(offset, length, from, to, is_hotel)| {
                let start = epoch + Duration::minutes(offset);
                let origin = Iata::parse(CODES[from]).unwrap();
                if is_hotel {
                    let nights = Duration::minutes(length.abs()).num_days() + 1;
                    let check_out = start.date() + Duration::days(nights);
                    Segment::hotel(origin, start.date(), check_out)
                } else {
                    Segment::travel(
                        SegmentKind::Flight,
                        origin,
                        Iata::parse(CODES[to]).unwrap(),
                        start,
                        start + Duration::minutes(length),
                    )
                    .unwrap()
                }
            });

        prop::collection::vec(segment, 0..20).prop_map(|mut segments| {
            segments.sort_by_key(Segment::start);
            segments
        })
    }

    proptest! {
        /// Flattening the trips gives back exactly the input sequence
        #[test]
        fn partition_preserves_segments(segments in sorted_segments()) {
            let trips = organize_trips(segments.clone(), &OrganizerConfig::default());
            let flattened: Vec<Segment> = trips.into_iter().flat_map(Trip::into_segments).collect();
            prop_assert_eq!(flattened, segments);
        }

        /// No trip is empty, and gaps inside a trip never exceed the threshold
        #[test]
        fn trips_are_internally_connected(segments in sorted_segments()) {
            let config = OrganizerConfig::default();
            let trips = organize_trips(segments, &config);

            for trip in &trips {
                prop_assert!(!trip.segments().is_empty());
                for pair in trip.segments().windows(2) {
                    prop_assert!(pair[0].gap_until(&pair[1]) <= config.max_gap());
                }
            }
        }

        /// Consecutive trips are separated by a gap above the threshold
        #[test]
        fn trips_are_separated(segments in sorted_segments()) {
            let config = OrganizerConfig::default();
            let trips = organize_trips(segments, &config);

            for pair in trips.windows(2) {
                let last = pair[0].segments().last().unwrap();
                let first = pair[1].segments().first().unwrap();
                prop_assert!(last.gap_until(first) > config.max_gap());
            }
        }
    }
}

//! Day-by-day itinerary synthesis from trip length.

/// One synthesized day of a trip, before persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPlan {
    pub day: i32,
    pub activities: String,
}

const ONE_DAY_TRIP: &str = "Arrival, Hotel Check-in, Evening city exploration";
const TWO_DAY_ARRIVAL: &str = "Arrival, Hotel Check-in, Evening city tour";
const TWO_DAY_RETURN: &str = "Main attractions visit, Lunch, Return";
const ARRIVAL_DAY: &str = "Arrival, Hotel Check-in, Evening exploration";
const CULTURAL_DAY: &str = "Main attractions visit, Cultural experience, Lunch";
const ADVENTURE_DAY: &str = "Adventure activities, Local food, Evening relaxation";
const DEPARTURE_DAY: &str = "Shopping, Last-minute sightseeing, Hotel checkout, Return";

/// Produces the day-plan sequence for a trip of `travel_days` days.
///
/// One- and two-day trips get fixed templates with their own wording.
/// Longer trips get an arrival day, a departure day, and middle days that
/// alternate by day-number parity: even days lean cultural, odd days lean
/// adventure and local food.
///
/// The output is deterministic and depends only on `travel_days`;
/// `destination_id` and `num_travelers` are accepted for call-site
/// compatibility but do not influence the generated text.
///
/// Callers must reject `travel_days <= 0` before calling; the rules below
/// are only defined for positive lengths.
pub fn generate_itinerary(
    travel_days: i64,
    _destination_id: Option<i64>,
    _num_travelers: i32,
) -> Vec<DayPlan> {
    match travel_days {
        1 => vec![DayPlan {
            day: 1,
            activities: ONE_DAY_TRIP.to_string(),
        }],
        2 => vec![
            DayPlan {
                day: 1,
                activities: TWO_DAY_ARRIVAL.to_string(),
            },
            DayPlan {
                day: 2,
                activities: TWO_DAY_RETURN.to_string(),
            },
        ],
        _ => {
            let mut days = Vec::with_capacity(travel_days as usize);

            days.push(DayPlan {
                day: 1,
                activities: ARRIVAL_DAY.to_string(),
            });

            // Middle days only: the final day is handled below.
            for day in 2..travel_days {
                let activities = if day % 2 == 0 {
                    CULTURAL_DAY
                } else {
                    ADVENTURE_DAY
                };
                days.push(DayPlan {
                    day: day as i32,
                    activities: activities.to_string(),
                });
            }

            days.push(DayPlan {
                day: travel_days as i32,
                activities: DEPARTURE_DAY.to_string(),
            });

            days
        }
    }
}

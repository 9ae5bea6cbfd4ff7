//! Travel plan lifecycle and itinerary orchestration.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::application::services::RecommendationService;
use crate::domain::entities::{
    ItineraryDay, NewItineraryDay, NewTravelPlan, TravelPlan,
};
use crate::domain::repositories::{HotelRepository, PlanRepository, TransportRepository};
use crate::domain::rules::{self, Criteria, RawCriteria};
use crate::error::AppError;

/// Distance assumed when building a plan from recommendations.
///
/// No geographic distance is computed between the traveler and the chosen
/// destination yet, so transport is resolved for a fixed 500 km leg.
/// TODO: derive the leg distance from origin/destination coordinates once
/// the catalog carries them.
pub const PLACEHOLDER_DISTANCE_KM: i64 = 500;

/// What to do with existing itinerary rows when generating again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItineraryMode {
    /// Keep existing rows and add the new ones after them.
    #[default]
    Append,
    /// Drop existing rows before inserting the new ones.
    Replace,
}

/// Inputs for building a plan from recommendations.
#[derive(Debug, Clone)]
pub struct RecommendedPlanInput {
    pub travel_date: NaiveDate,
    pub return_date: NaiveDate,
    /// Budget tier driving destination, hotel and transport selection.
    pub budget: String,
    pub num_travelers: i32,
    pub interest: Option<String>,
    pub country: Option<String>,
    /// Optional monetary budget stored on the plan itself.
    pub budget_amount: Option<Decimal>,
}

/// Cost estimate for a plan; missing selections contribute zero.
#[derive(Debug, Clone, Serialize)]
pub struct CostBreakdown {
    pub nights: i64,
    pub hotel_total: Decimal,
    pub transport_total: Decimal,
    pub total: Decimal,
}

/// Service owning travel plans and their generated itineraries.
///
/// Chains criteria normalization, the recommendation rules and itinerary
/// synthesis; the selection policy is first-candidate-wins with no
/// ranking.
pub struct PlanService {
    plans: Arc<dyn PlanRepository>,
    hotels: Arc<dyn HotelRepository>,
    transports: Arc<dyn TransportRepository>,
    recommendations: Arc<RecommendationService>,
}

impl PlanService {
    /// Creates a new plan service.
    pub fn new(
        plans: Arc<dyn PlanRepository>,
        hotels: Arc<dyn HotelRepository>,
        transports: Arc<dyn TransportRepository>,
        recommendations: Arc<RecommendationService>,
    ) -> Self {
        Self {
            plans,
            hotels,
            transports,
            recommendations,
        }
    }

    /// Creates a plan from explicit selections.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the return date is not on or
    /// after the travel date.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_plan(&self, new_plan: NewTravelPlan) -> Result<TravelPlan, AppError> {
        validate_trip_length(new_plan.travel_date, new_plan.return_date)?;
        self.plans.create(new_plan).await
    }

    /// Lists all plans.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_plans(&self) -> Result<Vec<TravelPlan>, AppError> {
        self.plans.list().await
    }

    /// Retrieves a plan by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the plan does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_plan(&self, id: i64) -> Result<TravelPlan, AppError> {
        self.plans
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Travel plan not found", json!({ "id": id })))
    }

    /// Deletes a plan and its itinerary rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the plan does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_plan(&self, id: i64) -> Result<(), AppError> {
        if !self.plans.delete(id).await? {
            return Err(AppError::not_found(
                "Travel plan not found",
                json!({ "id": id }),
            ));
        }
        Ok(())
    }

    /// Builds a complete plan from recommendations.
    ///
    /// Destination, hotel and transport are each the FIRST candidate their
    /// rule returns; hotel and transport may end up unset when their rule
    /// yields nothing. Transport is resolved for
    /// [`PLACEHOLDER_DISTANCE_KM`]. The itinerary is generated and
    /// persisted in the same call.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the trip length is not positive
    /// (checked before anything is written).
    /// Returns [`AppError::NotFound`] if no destination matches; nothing
    /// is persisted in that case.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_plan_with_recommendations(
        &self,
        input: RecommendedPlanInput,
    ) -> Result<(TravelPlan, Vec<ItineraryDay>), AppError> {
        let travel_days = validate_trip_length(input.travel_date, input.return_date)?;

        let criteria = Criteria::from_raw(RawCriteria {
            budget: Some(input.budget.clone()),
            interest: input.interest.clone(),
            country: input.country.clone(),
            ..Default::default()
        });

        let destinations = self.recommendations.recommend_destinations(&criteria).await?;
        let Some(destination) = destinations.into_iter().next() else {
            return Err(AppError::not_found(
                "No destinations found matching your criteria",
                json!({ "budget": input.budget, "interest": input.interest, "country": input.country }),
            ));
        };

        let hotel = self
            .recommendations
            .recommend_hotels(destination.id, Some(&input.budget))
            .await?
            .into_iter()
            .next();

        let transport = self
            .recommendations
            .recommend_transports(PLACEHOLDER_DISTANCE_KM, Some(&input.budget))
            .await?
            .into_iter()
            .next();

        let plan = self
            .plans
            .create(NewTravelPlan {
                destination_id: Some(destination.id),
                hotel_id: hotel.map(|h| h.id),
                transport_id: transport.map(|t| t.id),
                travel_date: input.travel_date,
                return_date: input.return_date,
                budget: input.budget_amount,
                num_travelers: input.num_travelers,
                notes: String::new(),
            })
            .await?;

        let days = rules::generate_itinerary(travel_days, plan.destination_id, plan.num_travelers);
        let created = self
            .plans
            .insert_days(plan.id, to_new_days(days))
            .await?;

        Ok((plan, created))
    }

    /// Generates and persists the itinerary for an existing plan.
    ///
    /// With [`ItineraryMode::Append`] the new rows join any existing ones;
    /// with [`ItineraryMode::Replace`] the old rows are cleared first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the plan does not exist.
    /// Returns [`AppError::Validation`] if the trip length is not positive;
    /// no rows are written or cleared in that case.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn generate_itinerary(
        &self,
        plan_id: i64,
        mode: ItineraryMode,
    ) -> Result<Vec<ItineraryDay>, AppError> {
        let plan = self.get_plan(plan_id).await?;
        let travel_days = validate_trip_length(plan.travel_date, plan.return_date)?;

        let days = rules::generate_itinerary(travel_days, plan.destination_id, plan.num_travelers);

        if mode == ItineraryMode::Replace {
            self.plans.clear_days(plan_id).await?;
        }

        self.plans.insert_days(plan_id, to_new_days(days)).await
    }

    /// Lists a plan's persisted itinerary rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the plan does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn itinerary(&self, plan_id: i64) -> Result<Vec<ItineraryDay>, AppError> {
        self.get_plan(plan_id).await?;
        self.plans.list_days(plan_id).await
    }

    /// Estimates the cost of a plan.
    ///
    /// Hotel cost is per night across `trip length - 1` nights; transport
    /// cost is per traveler. A plan without a hotel or transport selection
    /// simply contributes zero for that component.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the plan does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn plan_cost(&self, plan_id: i64) -> Result<CostBreakdown, AppError> {
        let plan = self.get_plan(plan_id).await?;
        let nights = (plan.trip_length_days() - 1).max(0);

        let hotel_total = match plan.hotel_id {
            Some(hotel_id) => self
                .hotels
                .find_by_id(hotel_id)
                .await?
                .map(|h| h.price_per_night * Decimal::from(nights))
                .unwrap_or_default(),
            None => Decimal::ZERO,
        };

        let transport_total = match plan.transport_id {
            Some(transport_id) => self
                .transports
                .find_by_id(transport_id)
                .await?
                .map(|t| t.price * Decimal::from(plan.num_travelers))
                .unwrap_or_default(),
            None => Decimal::ZERO,
        };

        Ok(CostBreakdown {
            nights,
            hotel_total,
            transport_total,
            total: hotel_total + transport_total,
        })
    }
}

/// Validates the inclusive trip length and returns it.
fn validate_trip_length(travel_date: NaiveDate, return_date: NaiveDate) -> Result<i64, AppError> {
    let travel_days = (return_date - travel_date).num_days() + 1;

    if travel_days <= 0 {
        return Err(AppError::bad_request(
            "Return date must be after travel date",
            json!({ "travel_date": travel_date, "return_date": return_date }),
        ));
    }

    Ok(travel_days)
}

fn to_new_days(days: Vec<rules::DayPlan>) -> Vec<NewItineraryDay> {
    days.into_iter()
        .map(|d| NewItineraryDay {
            day_number: d.day,
            activities: d.activities,
        })
        .collect()
}

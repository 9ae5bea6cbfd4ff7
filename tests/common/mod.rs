#![allow(dead_code)]

//! Shared fixtures: in-memory repositories and a ready-to-serve `AppState`.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::json;

use travel_planner::application::services::{
    AuthService, CatalogService, PlanService, RecommendationService,
};
use travel_planner::domain::entities::{
    BudgetLevel, Destination, DestinationPatch, Hotel, HotelPatch, ItineraryDay, NewDestination,
    NewHotel, NewItineraryDay, NewTransport, NewTravelPlan, Objective, Transport, TransportMode,
    TransportPatch, TravelCategory, TravelPlan,
};
use travel_planner::domain::repositories::{
    DestinationRepository, HotelRepository, PlanRepository, TransportRepository,
};
use travel_planner::error::AppError;
use travel_planner::state::AppState;

pub const TEST_ADMIN_TOKEN: &str = "test-admin-token";

#[derive(Default)]
pub struct InMemoryDestinationRepository {
    rows: Mutex<Vec<Destination>>,
    next_id: AtomicI64,
}

#[async_trait]
impl DestinationRepository for InMemoryDestinationRepository {
    async fn create(&self, new_destination: NewDestination) -> Result<Destination, AppError> {
        let destination = Destination {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            name: new_destination.name,
            country: new_destination.country,
            city: new_destination.city,
            description: new_destination.description,
            location: new_destination.location,
            category: new_destination.category,
            best_season: new_destination.best_season,
            budget_level: new_destination.budget_level,
            budget_min: new_destination.budget_min,
            budget_max: new_destination.budget_max,
            objectives_supported: new_destination.objectives_supported,
            is_active: new_destination.is_active,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(destination.clone());
        Ok(destination)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Destination>, AppError> {
        Ok(self.rows.lock().unwrap().iter().find(|d| d.id == id).cloned())
    }

    async fn list(&self, only_active: bool) -> Result<Vec<Destination>, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.is_active || !only_active)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.rows.lock().unwrap().len() as i64)
    }

    async fn update(&self, id: i64, patch: DestinationPatch) -> Result<Destination, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let destination = rows
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| AppError::not_found("Destination not found", json!({ "id": id })))?;

        if let Some(name) = patch.name {
            destination.name = name;
        }
        if let Some(country) = patch.country {
            destination.country = country;
        }
        if let Some(city) = patch.city {
            destination.city = city;
        }
        if let Some(description) = patch.description {
            destination.description = description;
        }
        if let Some(location) = patch.location {
            destination.location = location;
        }
        if let Some(category) = patch.category {
            destination.category = category;
        }
        if let Some(best_season) = patch.best_season {
            destination.best_season = best_season;
        }
        if let Some(budget_level) = patch.budget_level {
            destination.budget_level = budget_level;
        }
        if let Some(budget_min) = patch.budget_min {
            destination.budget_min = budget_min;
        }
        if let Some(budget_max) = patch.budget_max {
            destination.budget_max = budget_max;
        }
        if let Some(objectives) = patch.objectives_supported {
            destination.objectives_supported = objectives;
        }
        if let Some(is_active) = patch.is_active {
            destination.is_active = is_active;
        }

        Ok(destination.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|d| d.id != id);
        Ok(rows.len() < before)
    }
}

#[derive(Default)]
pub struct InMemoryHotelRepository {
    rows: Mutex<Vec<Hotel>>,
    next_id: AtomicI64,
}

#[async_trait]
impl HotelRepository for InMemoryHotelRepository {
    async fn create(&self, new_hotel: NewHotel) -> Result<Hotel, AppError> {
        let hotel = Hotel {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            destination_id: new_hotel.destination_id,
            name: new_hotel.name,
            stars: new_hotel.stars,
            price_per_night: new_hotel.price_per_night,
            budget_category: new_hotel.budget_category,
            description: new_hotel.description,
            amenities: new_hotel.amenities,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(hotel.clone());
        Ok(hotel)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Hotel>, AppError> {
        Ok(self.rows.lock().unwrap().iter().find(|h| h.id == id).cloned())
    }

    async fn list_by_destination(&self, destination_id: i64) -> Result<Vec<Hotel>, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|h| h.destination_id == destination_id)
            .cloned()
            .collect())
    }

    async fn update(&self, id: i64, patch: HotelPatch) -> Result<Hotel, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let hotel = rows
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| AppError::not_found("Hotel not found", json!({ "id": id })))?;

        if let Some(name) = patch.name {
            hotel.name = name;
        }
        if let Some(stars) = patch.stars {
            hotel.stars = stars;
        }
        if let Some(price) = patch.price_per_night {
            hotel.price_per_night = price;
        }
        if let Some(category) = patch.budget_category {
            hotel.budget_category = category;
        }
        if let Some(description) = patch.description {
            hotel.description = description;
        }
        if let Some(amenities) = patch.amenities {
            hotel.amenities = amenities;
        }

        Ok(hotel.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|h| h.id != id);
        Ok(rows.len() < before)
    }
}

#[derive(Default)]
pub struct InMemoryTransportRepository {
    rows: Mutex<Vec<Transport>>,
    next_id: AtomicI64,
}

#[async_trait]
impl TransportRepository for InMemoryTransportRepository {
    async fn create(&self, new_transport: NewTransport) -> Result<Transport, AppError> {
        let transport = Transport {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            origin: new_transport.origin,
            destination: new_transport.destination,
            mode: new_transport.mode,
            distance_km: new_transport.distance_km,
            price: new_transport.price,
            duration_hours: new_transport.duration_hours,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(transport.clone());
        Ok(transport)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Transport>, AppError> {
        Ok(self.rows.lock().unwrap().iter().find(|t| t.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Transport>, AppError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn update(&self, id: i64, patch: TransportPatch) -> Result<Transport, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let transport = rows
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::not_found("Transport not found", json!({ "id": id })))?;

        if let Some(origin) = patch.origin {
            transport.origin = origin;
        }
        if let Some(destination) = patch.destination {
            transport.destination = destination;
        }
        if let Some(mode) = patch.mode {
            transport.mode = mode;
        }
        if let Some(distance_km) = patch.distance_km {
            transport.distance_km = distance_km;
        }
        if let Some(price) = patch.price {
            transport.price = price;
        }
        if let Some(duration_hours) = patch.duration_hours {
            transport.duration_hours = duration_hours;
        }

        Ok(transport.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|t| t.id != id);
        Ok(rows.len() < before)
    }
}

#[derive(Default)]
pub struct InMemoryPlanRepository {
    plans: Mutex<Vec<TravelPlan>>,
    days: Mutex<Vec<ItineraryDay>>,
    next_plan_id: AtomicI64,
    next_day_id: AtomicI64,
}

#[async_trait]
impl PlanRepository for InMemoryPlanRepository {
    async fn create(&self, new_plan: NewTravelPlan) -> Result<TravelPlan, AppError> {
        let plan = TravelPlan {
            id: self.next_plan_id.fetch_add(1, Ordering::SeqCst) + 1,
            destination_id: new_plan.destination_id,
            hotel_id: new_plan.hotel_id,
            transport_id: new_plan.transport_id,
            travel_date: new_plan.travel_date,
            return_date: new_plan.return_date,
            budget: new_plan.budget,
            num_travelers: new_plan.num_travelers,
            notes: new_plan.notes,
            created_at: Utc::now(),
        };
        self.plans.lock().unwrap().push(plan.clone());
        Ok(plan)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TravelPlan>, AppError> {
        Ok(self.plans.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<TravelPlan>, AppError> {
        Ok(self.plans.lock().unwrap().clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut plans = self.plans.lock().unwrap();
        let before = plans.len();
        plans.retain(|p| p.id != id);
        let deleted = plans.len() < before;
        if deleted {
            self.days.lock().unwrap().retain(|d| d.plan_id != id);
        }
        Ok(deleted)
    }

    async fn insert_days(
        &self,
        plan_id: i64,
        days: Vec<NewItineraryDay>,
    ) -> Result<Vec<ItineraryDay>, AppError> {
        let mut stored = self.days.lock().unwrap();
        let mut created = Vec::with_capacity(days.len());

        for day in days {
            let row = ItineraryDay {
                id: self.next_day_id.fetch_add(1, Ordering::SeqCst) + 1,
                plan_id,
                day_number: day.day_number,
                activities: day.activities,
                created_at: Utc::now(),
            };
            stored.push(row.clone());
            created.push(row);
        }

        Ok(created)
    }

    async fn list_days(&self, plan_id: i64) -> Result<Vec<ItineraryDay>, AppError> {
        Ok(self
            .days
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.plan_id == plan_id)
            .cloned()
            .collect())
    }

    async fn clear_days(&self, plan_id: i64) -> Result<(), AppError> {
        self.days.lock().unwrap().retain(|d| d.plan_id != plan_id);
        Ok(())
    }
}

/// Test harness bundling the state with direct repository handles for
/// seeding.
pub struct TestApp {
    pub state: AppState,
    pub destinations: Arc<InMemoryDestinationRepository>,
    pub hotels: Arc<InMemoryHotelRepository>,
    pub transports: Arc<InMemoryTransportRepository>,
    pub plans: Arc<InMemoryPlanRepository>,
}

pub fn create_test_app() -> TestApp {
    let destinations = Arc::new(InMemoryDestinationRepository::default());
    let hotels = Arc::new(InMemoryHotelRepository::default());
    let transports = Arc::new(InMemoryTransportRepository::default());
    let plans = Arc::new(InMemoryPlanRepository::default());

    let catalog_service = Arc::new(CatalogService::new(
        destinations.clone(),
        hotels.clone(),
        transports.clone(),
    ));
    let recommendation_service = Arc::new(RecommendationService::new(
        destinations.clone(),
        hotels.clone(),
        transports.clone(),
    ));
    let plan_service = Arc::new(PlanService::new(
        plans.clone(),
        hotels.clone(),
        transports.clone(),
        recommendation_service.clone(),
    ));
    let auth_service = Arc::new(AuthService::new(TEST_ADMIN_TOKEN.to_string()));

    let state = AppState {
        catalog_service,
        recommendation_service,
        plan_service,
        auth_service,
    };

    TestApp {
        state,
        destinations,
        hotels,
        transports,
        plans,
    }
}

/// Inserts a destination with sensible defaults.
pub async fn seed_destination(
    app: &TestApp,
    name: &str,
    category: TravelCategory,
    budget_level: BudgetLevel,
    is_active: bool,
) -> Destination {
    app.destinations
        .create(NewDestination {
            name: name.to_string(),
            country: "Italy".to_string(),
            city: "Rome".to_string(),
            description: String::new(),
            location: "Lazio, central Italy".to_string(),
            category,
            best_season: "Spring".to_string(),
            budget_level,
            budget_min: Some(Decimal::from(500)),
            budget_max: Some(Decimal::from(2000)),
            objectives_supported: vec![Objective::Leisure],
            is_active,
        })
        .await
        .unwrap()
}

/// Inserts a hotel with sensible defaults.
pub async fn seed_hotel(
    app: &TestApp,
    destination_id: i64,
    name: &str,
    stars: i32,
    budget_category: BudgetLevel,
) -> Hotel {
    app.hotels
        .create(NewHotel {
            destination_id,
            name: name.to_string(),
            stars,
            price_per_night: Decimal::from(75),
            budget_category,
            description: String::new(),
            amenities: String::new(),
        })
        .await
        .unwrap()
}

/// Inserts a transport option with sensible defaults.
pub async fn seed_transport(app: &TestApp, mode: TransportMode, distance_km: i64) -> Transport {
    app.transports
        .create(NewTransport {
            origin: "Rome".to_string(),
            destination: "Florence".to_string(),
            mode,
            distance_km,
            price: Decimal::from(30),
            duration_hours: 2.0,
        })
        .await
        .unwrap()
}

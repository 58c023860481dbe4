//! Typed accessors over [`TrackingClient::execute`], one per command.

use crate::error::ClientError;
use crate::normalize::{
    merge_vehicles, normalize_address, normalize_events, normalize_locations, normalize_route,
};
use crate::protocol::commands::{Commands, DateRange, EventWindow, ALL_OBJECTS, DEFAULT_ROUTE_SAMPLING};
use crate::protocol::RawResponse;
use crate::types::{AccountOverview, Event, RouteSummary, Vehicle, VehicleLocation};

use super::TrackingClient;

impl TrackingClient {
    pub async fn get_user_objects(&self) -> Result<RawResponse, ClientError> {
        self.execute(Commands::user_get_objects()).await
    }

    /// Latest locations for `imeis` (`*` for every object).
    pub async fn get_object_locations(
        &self,
        imeis: &str,
    ) -> Result<Vec<VehicleLocation>, ClientError> {
        let cmd = Commands::object_get_locations(imeis);
        Ok(normalize_locations(&self.execute(&cmd).await?))
    }

    pub async fn get_object_route(
        &self,
        imei: &str,
        range: &DateRange,
    ) -> Result<RouteSummary, ClientError> {
        let cmd = Commands::object_get_route(imei, range, DEFAULT_ROUTE_SAMPLING);
        Ok(normalize_route(&self.execute(&cmd).await?))
    }

    pub async fn get_object_messages(
        &self,
        imei: &str,
        range: &DateRange,
    ) -> Result<RawResponse, ClientError> {
        self.execute(&Commands::object_get_messages(imei, range)).await
    }

    pub async fn get_object_events(
        &self,
        imei: &str,
        range: &DateRange,
    ) -> Result<Vec<Event>, ClientError> {
        let cmd = Commands::object_get_events(imei, range);
        Ok(normalize_events(&self.execute(&cmd).await?))
    }

    pub async fn get_last_events(&self, window: EventWindow) -> Result<Vec<Event>, ClientError> {
        let raw = self.execute(Commands::object_get_last_events(window)).await?;
        Ok(normalize_events(&raw))
    }

    pub async fn get_user_markers(&self) -> Result<RawResponse, ClientError> {
        self.execute(Commands::user_get_markers()).await
    }

    pub async fn get_user_routes(&self) -> Result<RawResponse, ClientError> {
        self.execute(Commands::user_get_routes()).await
    }

    pub async fn get_user_zones(&self) -> Result<RawResponse, ClientError> {
        self.execute(Commands::user_get_zones()).await
    }

    pub async fn get_user_maintenance(&self, imeis: &str) -> Result<RawResponse, ClientError> {
        self.execute(&Commands::user_get_maintenance(imeis)).await
    }

    pub async fn get_user_expenses(
        &self,
        imeis: &str,
        range: &DateRange,
    ) -> Result<RawResponse, ClientError> {
        self.execute(&Commands::user_get_expenses(imeis, range)).await
    }

    pub async fn get_user_tasks(
        &self,
        imeis: &str,
        range: &DateRange,
    ) -> Result<RawResponse, ClientError> {
        self.execute(&Commands::user_get_tasks(imeis, range)).await
    }

    pub async fn get_address(&self, lat: f64, lng: f64) -> Result<Option<String>, ClientError> {
        let raw = self.execute(&Commands::get_address(lat, lng)).await?;
        Ok(normalize_address(&raw))
    }

    /// Objects joined with their latest locations.
    ///
    /// Both commands are issued concurrently; either failing fails the call.
    pub async fn get_vehicles(&self) -> Result<Vec<Vehicle>, ClientError> {
        let (objects, locations) = tokio::try_join!(
            self.get_user_objects(),
            self.get_object_locations(ALL_OBJECTS)
        )?;

        Ok(merge_vehicles(&objects, &locations))
    }

    /// Counts of zones, markers, and saved routes.
    pub async fn get_overview(&self) -> Result<AccountOverview, ClientError> {
        let (zones, markers, routes) = tokio::try_join!(
            self.get_user_zones(),
            self.get_user_markers(),
            self.get_user_routes()
        )?;

        Ok(AccountOverview {
            zones: zones.item_count(),
            markers: markers.item_count(),
            routes: routes.item_count(),
        })
    }
}

//! Station retrieval: fetch, map, filter, sort, limit.

use chrono::NaiveDateTime;
use futures::future::{try_join, try_join_all};
use tracing::debug;

use crate::domain::{LocationModeError, NormalizedStation};
use crate::fuelcheck::{ApiConnector, FuelApiError, RawStation, ReferenceData};

use super::config::{QueryConfig, SortBy};
use super::mapper::map_station;

/// Error fetching stations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Location(#[from] LocationModeError),

    #[error(transparent)]
    Fetch(#[from] FuelApiError),
}

/// Fetches and shapes station results through an [`ApiConnector`].
pub struct StationRepository<C> {
    connector: C,
}

impl<C: ApiConnector> StationRepository<C> {
    pub fn new(connector: C) -> Self {
        Self { connector }
    }

    pub async fn get_reference_data(&self) -> Result<ReferenceData, RepositoryError> {
        Ok(self.connector.fetch_reference_data().await?)
    }

    /// Fetch reference data and stations concurrently, then shape the
    /// results. Nothing is returned if either fetch fails.
    pub async fn get_stations(
        &self,
        config: &QueryConfig,
        now: NaiveDateTime,
    ) -> Result<Vec<NormalizedStation>, RepositoryError> {
        let (reference, raw) =
            try_join(self.get_reference_data(), self.fetch_raw_stations(config)).await?;
        Ok(shape_stations(&raw, &reference, config, now))
    }

    /// Same as [`get_stations`](Self::get_stations) with reference data the
    /// caller already holds.
    pub async fn get_stations_with_reference(
        &self,
        config: &QueryConfig,
        reference: &ReferenceData,
        now: NaiveDateTime,
    ) -> Result<Vec<NormalizedStation>, RepositoryError> {
        let raw = self.fetch_raw_stations(config).await?;
        Ok(shape_stations(&raw, reference, config, now))
    }

    /// One upstream query per selected fuel type, concatenated in
    /// selection order.
    async fn fetch_raw_stations(
        &self,
        config: &QueryConfig,
    ) -> Result<Vec<RawStation>, RepositoryError> {
        let bbox = config.bounding_box()?;
        let brands = config.upstream_brands();
        let codes = config.fuel_type.codes();

        debug!(
            fuel_types = ?codes,
            brands = ?brands,
            south = bbox.south,
            west = bbox.west,
            north = bbox.north,
            east = bbox.east,
            "fetching stations"
        );

        let fetches = codes
            .iter()
            .map(|code| self.connector.fetch_stations_by_location(code, &brands, &bbox));
        let batches = try_join_all(fetches).await?;

        let raw: Vec<RawStation> = batches.into_iter().flatten().collect();
        debug!(count = raw.len(), "fetched raw stations");
        Ok(raw)
    }
}

fn shape_stations(
    raw: &[RawStation],
    reference: &ReferenceData,
    config: &QueryConfig,
    now: NaiveDateTime,
) -> Vec<NormalizedStation> {
    let brands = &reference.brands.items;
    let mapped = raw
        .iter()
        .map(|station| {
            map_station(station, brands, now, config.show_tank_price, config.price_unit)
        })
        .collect();

    let stations = apply_filters(mapped, config);
    debug!(count = stations.len(), "stations after filtering");
    stations
}

/// Brand and open filters, stable sort, distance cut-off, then limit.
///
/// Sorting happens before the distance cut-off and the limit, so the limit
/// keeps the best-ranked stations.
pub fn apply_filters(
    mut stations: Vec<NormalizedStation>,
    config: &QueryConfig,
) -> Vec<NormalizedStation> {
    if config.filters_brands() {
        stations.retain(|s| config.brands.contains(&s.brand));
    }

    if !config.show_closed_stations {
        stations.retain(|s| s.is_open_now);
    }

    match config.sort_by {
        SortBy::Price => stations.sort_by(|a, b| a.raw_price.total_cmp(&b.raw_price)),
        SortBy::Distance => stations.sort_by(|a, b| a.distance.total_cmp(&b.distance)),
    }

    if let Some(max_km) = config.distance {
        stations.retain(|s| s.distance <= max_km);
    }

    if let Some(limit) = config.limit {
        stations.truncate(limit);
    }

    stations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BoundingBox, PriceUnit};
    use crate::fuelcheck::{MockFuelApi, SELECT_ALL};
    use crate::query::FuelTypeSelection;
    use chrono::NaiveDate;

    const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/mock");

    fn saturday_evening() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 16)
            .unwrap()
            .and_hms_opt(21, 30, 0)
            .unwrap()
    }

    fn fixtures() -> MockFuelApi {
        MockFuelApi::from_dir(FIXTURES).unwrap()
    }

    fn unbounded() -> QueryConfig {
        QueryConfig::centered("P95", -35.36, 150.47)
            .with_limit(None)
            .with_distance(None)
    }

    fn names(stations: &[NormalizedStation]) -> Vec<&str> {
        stations.iter().map(|s| s.name.as_str()).collect()
    }

    #[tokio::test]
    async fn sorts_by_price_by_default() {
        let repo = StationRepository::new(fixtures());
        let stations = repo
            .get_stations(&unbounded(), saturday_evening())
            .await
            .unwrap();

        assert_eq!(
            names(&stations),
            [
                "Costco Marsden Park (Members only)",
                "Metro West Botany North",
                "Shell Milton",
                "BP Ulladulla",
            ]
        );
    }

    #[tokio::test]
    async fn sorts_by_distance() {
        let repo = StationRepository::new(fixtures());
        let config = unbounded().with_sort_by(SortBy::Distance);
        let stations = repo.get_stations(&config, saturday_evening()).await.unwrap();

        let distances: Vec<f64> = stations.iter().map(|s| s.distance).collect();
        assert_eq!(distances, [1.0, 2.0, 4.3, 9.8]);
    }

    #[tokio::test]
    async fn default_limit_and_distance() {
        let repo = StationRepository::new(fixtures());
        let config = QueryConfig::centered("P95", -35.36, 150.47);
        let stations = repo.get_stations(&config, saturday_evening()).await.unwrap();

        assert_eq!(stations.len(), 3);
        assert_eq!(stations[0].location, "Marsden Park");
    }

    #[tokio::test]
    async fn distance_cutoff_applies_after_sorting() {
        let repo = StationRepository::new(fixtures());
        let config = unbounded().with_distance(Some(5.0)).with_limit(Some(2));
        let stations = repo.get_stations(&config, saturday_evening()).await.unwrap();

        assert_eq!(names(&stations), ["Metro West Botany North", "Shell Milton"]);
    }

    #[tokio::test]
    async fn empty_brands_forward_select_all_and_keep_everything() {
        let api = fixtures();
        let repo = StationRepository::new(api.clone());
        let stations = repo.get_stations(&unbounded(), saturday_evening()).await.unwrap();

        assert_eq!(stations.len(), api.station_count());
        let queries = api.queries();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].fuel_type, "P95");
        assert_eq!(queries[0].brands, [SELECT_ALL]);
    }

    #[tokio::test]
    async fn explicit_brands_are_forwarded_and_filtered() {
        let api = fixtures();
        let repo = StationRepository::new(api.clone());
        let config = unbounded().with_brands(["BP", "Shell"]);
        let stations = repo.get_stations(&config, saturday_evening()).await.unwrap();

        assert_eq!(names(&stations), ["Shell Milton", "BP Ulladulla"]);
        assert_eq!(api.queries()[0].brands, ["BP", "Shell"]);
    }

    #[tokio::test]
    async fn hides_closed_stations_when_asked() {
        let repo = StationRepository::new(fixtures());
        let config = unbounded().with_closed_stations(false);
        let stations = repo.get_stations(&config, saturday_evening()).await.unwrap();

        assert_eq!(names(&stations), ["Metro West Botany North", "Shell Milton"]);
        assert!(stations.iter().all(|s| s.is_open_now));
    }

    #[tokio::test]
    async fn maps_fixture_records() {
        let repo = StationRepository::new(fixtures());
        let config = unbounded()
            .with_price_unit(PriceUnit::Dollars)
            .with_tank_price(Some(50.0));
        let stations = repo.get_stations(&config, saturday_evening()).await.unwrap();

        let shell = stations.iter().find(|s| s.brand == "Shell").unwrap();
        assert_eq!(shell.location, "Milton");
        assert!(shell.is_open_now);
        assert!(shell.is_closing_soon);
        assert_eq!(shell.price, "$1.9500");
        assert_eq!(shell.tank_price.as_deref(), Some("$97.5000"));
        assert!(shell.logo_url.is_some());

        let metro = stations.iter().find(|s| s.brand == "Metro Fuel").unwrap();
        assert_eq!(metro.address, "365 Garfield Road, West Botany NSW 2019");
        assert_eq!(metro.location, "West Botany North");
        assert!(!metro.is_closing_soon);
    }

    #[tokio::test]
    async fn sends_centre_bounding_box() {
        let api = fixtures();
        let repo = StationRepository::new(api.clone());
        let config = unbounded().with_radius(5.0);
        repo.get_stations(&config, saturday_evening()).await.unwrap();

        assert_eq!(
            api.queries()[0].bbox,
            BoundingBox::around(-35.36, 150.47, 5.0)
        );
    }

    #[tokio::test]
    async fn one_query_per_fuel_type_in_selection_order() {
        let api = fixtures().with_fuel_type_stations("E10", Vec::new());
        let repo = StationRepository::new(api.clone());
        let mut config = unbounded();
        config.fuel_type = FuelTypeSelection::Multiple(vec!["E10".to_string(), "P95".to_string()]);

        let stations = repo.get_stations(&config, saturday_evening()).await.unwrap();

        assert_eq!(stations.len(), 4);
        let codes: Vec<String> = api.queries().into_iter().map(|q| q.fuel_type).collect();
        assert_eq!(codes, ["E10", "P95"]);
    }

    #[tokio::test]
    async fn invalid_location_fails_before_fetching_stations() {
        let api = fixtures();
        let repo = StationRepository::new(api.clone());
        let mut config = unbounded();
        config.long = None;

        let err = repo.get_stations(&config, saturday_evening()).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Location(LocationModeError::Missing)));
        assert!(api.queries().is_empty());
    }

    #[tokio::test]
    async fn reference_failure_aborts() {
        let repo = StationRepository::new(fixtures().fail_reference_data(500));
        let err = repo.get_stations(&unbounded(), saturday_evening()).await.unwrap_err();

        match err {
            RepositoryError::Fetch(e) => assert_eq!(e.status(), Some(500)),
            other => panic!("expected fetch error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn station_failure_aborts() {
        let repo = StationRepository::new(fixtures().fail_stations(503));
        let reference = repo.get_reference_data().await.unwrap();
        let err = repo
            .get_stations_with_reference(&unbounded(), &reference, saturday_evening())
            .await
            .unwrap_err();

        match err {
            RepositoryError::Fetch(e) => assert_eq!(e.status(), Some(503)),
            other => panic!("expected fetch error, got {other:?}"),
        }
    }
}

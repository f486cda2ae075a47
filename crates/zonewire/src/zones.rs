//! Zone CRUD operations and pagination following
//!
//! The operations mirror the server's `zones` endpoint: list and get read
//! zone data (following `Link` pagination to assemble the complete result
//! set), create/update write a zone's configuration and return the
//! server's view of it, delete removes a zone and all its records.
//!
//! Each operation is one logical unit of work. It may expand into several
//! sequential HTTP calls when pagination is followed, but there are no
//! automatic retries, and a failed follow-up fails the whole operation.

use reqwest::Method;
use tracing::{debug, info};

use crate::client::{Page, RestClient};
use crate::errors::ZoneError;
use crate::types::Zone;

/// Operations on the `zones` endpoint.
///
/// Obtained from [`RestClient::zones`]; borrows the client it was created
/// from.
pub struct ZonesService<'c> {
    client: &'c RestClient,
}

impl<'c> ZonesService<'c> {
    pub(crate) fn new(client: &'c RestClient) -> Self {
        Self { client }
    }

    /// List all active zones and their zone-level configuration.
    ///
    /// Pages are concatenated in arrival order; with pagination following
    /// disabled only the first page is returned.
    pub async fn list(&self) -> Result<Vec<Zone>, ZoneError> {
        let page: Page<Vec<Zone>> = self
            .client
            .request_json(Method::GET, "zones", None::<&()>)
            .await?;
        let Page {
            body: mut zones,
            mut next,
        } = page;

        if self.client.follows_pagination() {
            while let Some(uri) = next {
                next = self.next_zones(&mut zones, &uri).await?;
            }
        }

        Ok(zones)
    }

    /// Fetch a single zone by name, including its records.
    ///
    /// Record pages are concatenated in arrival order; with pagination
    /// following disabled only the first page of records is returned.
    /// Returns [`ZoneError::ZoneMissing`] when no such zone exists.
    pub async fn get(&self, name: &str) -> Result<Zone, ZoneError> {
        let path = zone_path(name)?;
        let page: Page<Zone> = self
            .client
            .request_json(Method::GET, &path, None::<&()>)
            .await
            .map_err(ZoneError::into_missing_zone)?;
        let Page {
            body: mut zone,
            mut next,
        } = page;

        if self.client.follows_pagination() {
            while let Some(uri) = next {
                next = self.next_records(&mut zone, &uri).await?;
            }
        }

        Ok(zone)
    }

    /// Create a new DNS zone.
    ///
    /// On success the server's view of the zone is returned, with
    /// server-assigned fields populated; the input value is left
    /// untouched. Returns [`ZoneError::ZoneExists`] when the name is
    /// already taken.
    pub async fn create(&self, zone: &Zone) -> Result<Zone, ZoneError> {
        let path = zone_path(&zone.name)?;
        let page: Page<Zone> = self
            .client
            .request_json(Method::PUT, &path, Some(zone))
            .await
            .map_err(ZoneError::into_zone_exists)?;

        info!("created zone {}", zone.name);

        Ok(page.body)
    }

    /// Modify basic details of an existing DNS zone.
    ///
    /// Same merge-back behavior as [`ZonesService::create`]: the returned
    /// value is the server's view after the update. Returns
    /// [`ZoneError::ZoneMissing`] when the zone does not exist.
    pub async fn update(&self, zone: &Zone) -> Result<Zone, ZoneError> {
        let path = zone_path(&zone.name)?;
        let page: Page<Zone> = self
            .client
            .request_json(Method::POST, &path, Some(zone))
            .await
            .map_err(ZoneError::into_missing_zone)?;

        info!("updated zone {}", zone.name);

        Ok(page.body)
    }

    /// Destroy an existing DNS zone and all records in it.
    ///
    /// Returns [`ZoneError::ZoneMissing`] when the zone does not exist.
    pub async fn delete(&self, name: &str) -> Result<(), ZoneError> {
        let path = zone_path(name)?;
        self.client
            .request_empty(Method::DELETE, &path)
            .await
            .map_err(ZoneError::into_missing_zone)?;

        info!("deleted zone {}", name);

        Ok(())
    }

    /// Fetch one follow-up page of zones and append it to the accumulator.
    async fn next_zones(
        &self,
        zones: &mut Vec<Zone>,
        uri: &str,
    ) -> Result<Option<String>, ZoneError> {
        debug!("following zones page: {}", uri);

        let page: Page<Vec<Zone>> = self
            .client
            .request_json(Method::GET, uri, None::<&()>)
            .await?;
        zones.extend(page.body);

        Ok(page.next)
    }

    /// Fetch one follow-up page of a zone's records and append them.
    ///
    /// Aside from `records`, follow-up pages repeat the zone data from
    /// the first page, so everything else is discarded.
    async fn next_records(
        &self,
        zone: &mut Zone,
        uri: &str,
    ) -> Result<Option<String>, ZoneError> {
        debug!("following records page for {}: {}", zone.name, uri);

        let page: Page<Zone> = self
            .client
            .request_json(Method::GET, uri, None::<&()>)
            .await?;
        zone.records.extend(page.body.records);

        Ok(page.next)
    }
}

/// Path for a single zone.
///
/// The name lands in the path verbatim; supplying a path-safe name is the
/// caller's responsibility.
fn zone_path(name: &str) -> Result<String, ZoneError> {
    if name.is_empty() {
        return Err(ZoneError::Validation(
            "zone name must not be empty".to_string(),
        ));
    }
    Ok(format!("zones/{}", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_path() {
        assert_eq!(zone_path("example.com").unwrap(), "zones/example.com");
    }

    #[test]
    fn test_zone_path_rejects_empty_name() {
        assert!(matches!(zone_path(""), Err(ZoneError::Validation(_))));
    }

    #[tokio::test]
    async fn test_empty_name_fails_before_any_request() {
        // Port 1 is never listening; a request attempt would error with
        // ZoneError::Request rather than Validation.
        let client = RestClient::new("http://127.0.0.1:1", "test_token").unwrap();

        let err = client.zones().get("").await.unwrap_err();
        assert!(matches!(err, ZoneError::Validation(_)));

        let err = client.zones().delete("").await.unwrap_err();
        assert!(matches!(err, ZoneError::Validation(_)));

        let err = client.zones().create(&Zone::new("")).await.unwrap_err();
        assert!(matches!(err, ZoneError::Validation(_)));
    }
}

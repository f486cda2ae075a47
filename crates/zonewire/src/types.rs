//! Wire models for zone resources

use serde::{Deserialize, Serialize};

/// A DNS zone and its zone-level configuration.
///
/// The zone name is the resource identity. Server-assigned fields are
/// optional and only populated on values decoded from API responses;
/// they are omitted from request bodies when unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Zone name, e.g. `example.com`. Serialized as `zone` on the wire.
    #[serde(rename = "zone")]
    pub name: String,

    /// Server-assigned zone id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,

    /// Negative-answer TTL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nx_ttl: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostmaster: Option<String>,

    /// Nameservers assigned to serve this zone.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dns_servers: Vec<String>,

    /// Network ids this zone is published on.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<u32>,

    /// Record sets in this zone. A paginated zone response carries one
    /// page of records per response.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub records: Vec<ZoneRecord>,
}

impl Zone {
    /// Create a zone with the given name and no configuration set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A record set belonging to a zone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneRecord {
    /// Server-assigned record id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Fully qualified domain of the record set.
    pub domain: String,

    #[serde(rename = "type")]
    pub record_type: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub short_answers: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_name_serializes_as_zone() {
        let zone = Zone::new("example.com");
        let json = serde_json::to_value(&zone).unwrap();

        assert_eq!(json["zone"], "example.com");
        assert!(json.get("name").is_none());
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let zone = Zone::new("example.com");
        let json = serde_json::to_string(&zone).unwrap();

        assert_eq!(json, r#"{"zone":"example.com"}"#);
    }

    #[test]
    fn test_zone_round_trips_configuration() {
        let zone = Zone {
            ttl: Some(3600),
            nx_ttl: Some(60),
            hostmaster: Some("hostmaster@example.com".to_string()),
            ..Zone::new("example.com")
        };

        let json = serde_json::to_string(&zone).unwrap();
        let back: Zone = serde_json::from_str(&json).unwrap();

        assert_eq!(back, zone);
    }

    #[test]
    fn test_zone_deserializes_server_fields() {
        let json = serde_json::json!({
            "zone": "example.com",
            "id": "5c7e8a1f",
            "ttl": 3600,
            "dns_servers": ["dns1.example.net", "dns2.example.net"],
            "networks": [1],
            "records": [
                {
                    "id": "a1",
                    "domain": "www.example.com",
                    "type": "A",
                    "short_answers": ["192.0.2.1"],
                    "ttl": 300
                }
            ]
        });

        let zone: Zone = serde_json::from_value(json).unwrap();

        assert_eq!(zone.name, "example.com");
        assert_eq!(zone.id.as_deref(), Some("5c7e8a1f"));
        assert_eq!(zone.dns_servers.len(), 2);
        assert_eq!(zone.records.len(), 1);
        assert_eq!(zone.records[0].record_type, "A");
        assert_eq!(zone.records[0].short_answers, vec!["192.0.2.1"]);
    }

    #[test]
    fn test_record_type_serializes_as_type() {
        let record = ZoneRecord {
            domain: "www.example.com".to_string(),
            record_type: "CNAME".to_string(),
            short_answers: vec!["example.com".to_string()],
            ..Default::default()
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "CNAME");
        assert!(json.get("record_type").is_none());
    }
}

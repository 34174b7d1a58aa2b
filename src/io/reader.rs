//! Header-less CSV readers with field validation.

use std::collections::HashSet;
use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::info;

use crate::config::FleetConfig;
use crate::distance::DistanceTable;
use crate::error::{DispatchError, Entity};
use crate::models::{Parcel, Truck};

use super::LoadError;

/// Reads `id, capacity` rows into trucks at the common depot.
///
/// # Errors
///
/// [`LoadError::InvalidField`] for a malformed row, [`LoadError::Record`]
/// for an id over the limit, a zero capacity or a repeated id.
pub fn read_trucks<R: Read>(reader: R, config: &FleetConfig) -> Result<Vec<Truck>, LoadError> {
    let mut seen = HashSet::new();
    let mut trucks = Vec::new();

    for (line, record) in records(reader, 2, "truck")? {
        let id = parse_number(&record[0], line, "truck id")?;
        let capacity = parse_number(&record[1], line, "truck capacity")?;
        if !seen.insert(id) {
            return Err(duplicate(Entity::Truck, id, line));
        }
        let truck = Truck::at_depot(id, capacity, config)
            .map_err(|err| LoadError::Record { line, source: err })?;
        trucks.push(truck);
    }

    info!(count = trucks.len(), "trucks loaded");
    Ok(trucks)
}

/// Reads `id, source, destination, volume` rows into parcels.
///
/// # Errors
///
/// [`LoadError::InvalidField`] for a malformed row or a volume above
/// `config.max_volume`, [`LoadError::Record`] for an invalid parcel or a
/// repeated id.
pub fn read_parcels<R: Read>(reader: R, config: &FleetConfig) -> Result<Vec<Parcel>, LoadError> {
    let mut seen = HashSet::new();
    let mut parcels = Vec::new();

    for (line, record) in records(reader, 4, "parcel")? {
        let id = parse_number(&record[0], line, "parcel id")?;
        let source = parse_city(&record[1], line)?;
        let destination = parse_city(&record[2], line)?;
        let volume = parse_number(&record[3], line, "parcel volume")?;
        if volume > config.max_volume {
            return Err(LoadError::InvalidField {
                line,
                reason: format!(
                    "parcel volume {volume} exceeds the maximum of {}",
                    config.max_volume
                ),
            });
        }
        if !seen.insert(id) {
            return Err(duplicate(Entity::Parcel, id, line));
        }
        let parcel = Parcel::new(id, volume, source, destination, config)
            .map_err(|err| LoadError::Record { line, source: err })?;
        parcels.push(parcel);
    }

    info!(count = parcels.len(), "parcels loaded");
    Ok(parcels)
}

/// Reads `city, city, km` rows into a distance table.
///
/// Repeated pairs keep the first distance.
///
/// # Errors
///
/// [`LoadError::InvalidField`] for a malformed row or a distance above
/// `config.max_distance_km`.
pub fn read_distances<R: Read>(
    reader: R,
    config: &FleetConfig,
) -> Result<DistanceTable, LoadError> {
    let mut table = DistanceTable::new();

    for (line, record) in records(reader, 3, "map")? {
        let city_a = parse_city(&record[0], line)?;
        let city_b = parse_city(&record[1], line)?;
        let km = parse_number(&record[2], line, "distance")?;
        if km > config.max_distance_km {
            return Err(LoadError::InvalidField {
                line,
                reason: format!(
                    "distance {km} km exceeds the maximum of {} km",
                    config.max_distance_km
                ),
            });
        }
        table.add_distance(city_a, city_b, km);
    }

    info!(count = table.len(), "distances loaded");
    Ok(table)
}

/// Non-blank rows with their line numbers, each exactly `width` fields.
fn records<R: Read>(
    reader: R,
    width: usize,
    what: &str,
) -> Result<Vec<(u64, StringRecord)>, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        if record.iter().all(str::is_empty) {
            continue;
        }
        if record.len() != width {
            return Err(LoadError::InvalidField {
                line,
                reason: format!(
                    "{what} rows need {width} fields, found {}",
                    record.len()
                ),
            });
        }
        rows.push((line, record));
    }
    Ok(rows)
}

fn parse_number(field: &str, line: u64, what: &str) -> Result<u64, LoadError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LoadError::InvalidField {
            line,
            reason: format!("{what} must be a non-negative integer, found {field:?}"),
        });
    }
    field.parse().map_err(|_| LoadError::InvalidField {
        line,
        reason: format!("{what} {field} is out of range"),
    })
}

fn parse_city(field: &str, line: u64) -> Result<String, LoadError> {
    let city: String = field.chars().filter(|c| !c.is_whitespace()).collect();
    if city.is_empty() || !city.chars().all(char::is_alphabetic) {
        return Err(LoadError::InvalidField {
            line,
            reason: format!("city name must only contain letters, found {field:?}"),
        });
    }
    Ok(city)
}

fn duplicate(entity: Entity, id: u64, line: u64) -> LoadError {
    LoadError::Record {
        line,
        source: DispatchError::DuplicateId { entity, id },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> FleetConfig {
        FleetConfig::default()
    }

    #[test]
    fn test_read_trucks() {
        let data = "101, 150\n102,300\n\n103 , 75\n";
        let trucks = read_trucks(data.as_bytes(), &config()).expect("valid");
        assert_eq!(trucks.len(), 3);
        assert_eq!(trucks[0].id(), 101);
        assert_eq!(trucks[0].capacity(), 150);
        assert_eq!(trucks[2].capacity(), 75);
        assert!(trucks.iter().all(|t| t.depot() == "Toronto"));
    }

    #[test]
    fn test_truck_extra_field() {
        let err = read_trucks("1, 100, 5\n".as_bytes(), &config()).expect_err("3 fields");
        assert!(matches!(err, LoadError::InvalidField { line: 1, .. }));
    }

    #[test]
    fn test_truck_not_a_number() {
        let err = read_trucks("1, 100\n2, 10x\n".as_bytes(), &config()).expect_err("10x");
        match err {
            LoadError::InvalidField { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("truck capacity"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_truck_duplicate_id() {
        let err = read_trucks("1, 100\n1, 50\n".as_bytes(), &config()).expect_err("dup");
        assert!(matches!(
            err,
            LoadError::Record {
                line: 2,
                source: DispatchError::DuplicateId {
                    entity: Entity::Truck,
                    id: 1
                }
            }
        ));
    }

    #[test]
    fn test_truck_id_limit() {
        let err = read_trucks("100001, 100\n".as_bytes(), &config()).expect_err("big id");
        assert!(matches!(
            err,
            LoadError::Record {
                source: DispatchError::InvalidId { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_read_parcels() {
        let data = "50, Hamilton, Toronto, 7\n51, Toronto, Niagara Falls, 20\n";
        let parcels = read_parcels(data.as_bytes(), &config()).expect("valid");
        assert_eq!(parcels.len(), 2);
        assert_eq!(parcels[0].id(), 50);
        assert_eq!(parcels[0].source(), "Hamilton");
        assert_eq!(parcels[0].destination(), "Toronto");
        assert_eq!(parcels[0].volume(), 7);
        assert_eq!(parcels[1].destination(), "NiagaraFalls");
    }

    #[test]
    fn test_parcel_same_city() {
        let err = read_parcels("1, Ajax, Ajax, 5\n".as_bytes(), &config()).expect_err("same");
        assert!(matches!(
            err,
            LoadError::Record {
                source: DispatchError::InvalidRoute { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_parcel_bad_city() {
        let err = read_parcels("1, Ajax, B4rrie, 5\n".as_bytes(), &config()).expect_err("digit");
        assert!(matches!(err, LoadError::InvalidField { line: 1, .. }));
    }

    #[test]
    fn test_parcel_volume_limit() {
        let err =
            read_parcels("1, Ajax, Barrie, 100001\n".as_bytes(), &config()).expect_err("huge");
        assert!(matches!(err, LoadError::InvalidField { .. }));
    }

    #[test]
    fn test_parcel_duplicate_id() {
        let data = "1, Ajax, Barrie, 5\n1, Ajax, Toronto, 5\n";
        let err = read_parcels(data.as_bytes(), &config()).expect_err("dup");
        assert!(matches!(
            err,
            LoadError::Record {
                source: DispatchError::DuplicateId {
                    entity: Entity::Parcel,
                    ..
                },
                ..
            }
        ));
    }

    #[test]
    fn test_read_distances() {
        let data = "Hamilton, Toronto, 69\nToronto, Hamilton, 70\nToronto, Barrie, 90\n";
        let table = read_distances(data.as_bytes(), &config()).expect("valid");
        assert_eq!(table.len(), 2);
        assert_eq!(table.distance("Toronto", "Hamilton"), Ok(69));
        assert_eq!(table.distance("Barrie", "Toronto"), Ok(90));
    }

    #[test]
    fn test_distance_limit() {
        let err =
            read_distances("Toronto, Vancouver, 4400\n".as_bytes(), &config()).expect_err("far");
        assert!(matches!(err, LoadError::InvalidField { line: 1, .. }));
    }

    #[test]
    fn test_empty_input() {
        assert!(read_trucks("".as_bytes(), &config()).expect("empty").is_empty());
        assert!(read_distances("".as_bytes(), &config()).expect("empty").is_empty());
    }
}

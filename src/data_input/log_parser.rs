// src/data_input/log_parser.rs

use csv::{ReaderBuilder, StringRecord};
use log::{debug, info, warn};
use ndarray::Array1;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use crate::axis_names::{axis_name, AXIS_COUNT};
use crate::data_input::log_data::{channel_extent, SensorLog};
use crate::error::{SensorLogError, SensorLogResult};

// Column names written by the Pico logger firmware, plus English aliases.
// Matching is case-insensitive.
const TARGET_HEADERS: [&[&str]; 8] = [
    &["Amostra", "Sample"],                 // 0
    &["Acel_X", "Accel_X"],                 // 1
    &["Acel_Y", "Accel_Y"],                 // 2
    &["Acel_Z", "Accel_Z"],                 // 3
    &["Giro_X", "Gyro_X"],                  // 4
    &["Giro_Y", "Gyro_Y"],                  // 5
    &["Giro_Z", "Gyro_Z"],                  // 6
    &["Temp", "Temperature"],               // 7
];

const SAMPLE_TARGET: usize = 0;
const ACCEL_TARGET: usize = 1;
const GYRO_TARGET: usize = 4;
const TEMP_TARGET: usize = 7;

/// Minimum column count for the positional layout (sample + 3 accel).
const POSITIONAL_ACCEL_COLUMNS: usize = 4;
/// Column count from which the positional layout also carries 3 gyro channels.
const POSITIONAL_GYRO_COLUMNS: usize = 7;

/// Where each channel lives in the CSV record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub sample: usize,
    pub accel: [usize; AXIS_COUNT],
    pub gyro: Option<[usize; AXIS_COUNT]>,
    pub temperature: Option<usize>,
    pub positional: bool,
}

fn find_header(header_record: &StringRecord, target_idx: usize) -> Option<usize> {
    header_record.iter().position(|h| {
        let trimmed = h.trim();
        TARGET_HEADERS[target_idx]
            .iter()
            .any(|name| trimmed.eq_ignore_ascii_case(name))
    })
}

/// Maps CSV header positions to sensor channels.
///
/// Named columns win when the sample and all three acceleration headers are
/// present, in any order. Otherwise the layout is taken positionally: sample,
/// accel X/Y/Z, then gyro X/Y/Z when the file is wide enough. Gyro channels are
/// all-or-none. Temperature is only ever picked up by name.
pub fn resolve_columns(header_record: &StringRecord) -> SensorLogResult<ColumnMapping> {
    let header_indices: Vec<Option<usize>> = (0..TARGET_HEADERS.len())
        .map(|target_idx| find_header(header_record, target_idx))
        .collect();

    let temperature = header_indices[TEMP_TARGET];

    let named_sample = header_indices[SAMPLE_TARGET];
    let named_accel: Option<Vec<usize>> = (0..AXIS_COUNT)
        .map(|axis| header_indices[ACCEL_TARGET + axis])
        .collect();

    if let (Some(sample), Some(accel)) = (named_sample, named_accel) {
        let gyro: Option<Vec<usize>> = (0..AXIS_COUNT)
            .map(|axis| header_indices[GYRO_TARGET + axis])
            .collect();
        let any_gyro_named =
            (0..AXIS_COUNT).any(|axis| header_indices[GYRO_TARGET + axis].is_some());
        if gyro.is_none() && any_gyro_named {
            warn!("Only some gyroscope headers found; ignoring gyroscope channels");
        }
        return Ok(ColumnMapping {
            sample,
            accel: [accel[0], accel[1], accel[2]],
            gyro: gyro.map(|g| [g[0], g[1], g[2]]),
            temperature,
            positional: false,
        });
    }

    let column_count = header_record.len();
    if column_count < POSITIONAL_ACCEL_COLUMNS {
        return Err(SensorLogError::MissingColumn(format!(
            "expected sample and 3 acceleration columns, header has {column_count} column(s): {:?}",
            header_record.iter().collect::<Vec<_>>()
        )));
    }

    let gyro = if column_count >= POSITIONAL_GYRO_COLUMNS {
        Some([4, 5, 6])
    } else {
        None
    };
    // A named temperature column may not collide with a positional channel.
    let temperature = temperature.filter(|&idx| {
        idx >= POSITIONAL_GYRO_COLUMNS || (gyro.is_none() && idx >= POSITIONAL_ACCEL_COLUMNS)
    });

    Ok(ColumnMapping {
        sample: 0,
        accel: [1, 2, 3],
        gyro,
        temperature,
        positional: true,
    })
}

/// Parses an MPU sensor log CSV file.
///
/// A path that does not resolve to a readable file is reported as
/// `SensorLogError::InputNotFound` before any parsing happens.
pub fn parse_sensor_log(input_file_path: &Path) -> SensorLogResult<SensorLog> {
    if !input_file_path.is_file() {
        return Err(SensorLogError::InputNotFound {
            path: input_file_path.to_path_buf(),
        });
    }
    let file = File::open(input_file_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound | ErrorKind::PermissionDenied => SensorLogError::InputNotFound {
            path: input_file_path.to_path_buf(),
        },
        _ => SensorLogError::Io(e),
    })?;

    let log = read_sensor_log(BufReader::new(file))?;
    info!(
        "File '{}' read successfully ({} samples).",
        input_file_path.display(),
        log.len()
    );
    Ok(log)
}

/// Reads a sensor log from any CSV source. The first row is always the header.
pub fn read_sensor_log<R: Read>(source: R) -> SensorLogResult<SensorLog> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let header_record = reader.headers()?.clone();
    debug!("Headers found in CSV: {:?}", header_record);

    let mapping = resolve_columns(&header_record)?;
    let column_name = |idx: usize| -> String {
        header_record
            .get(idx)
            .map(str::to_string)
            .unwrap_or_else(|| format!("column {idx}"))
    };

    info!(
        "Column mapping ({}): sample={}, accel={:?}, gyro={}, temperature={}",
        if mapping.positional { "positional" } else { "named" },
        column_name(mapping.sample),
        mapping.accel.map(column_name),
        match mapping.gyro {
            Some(g) => format!("{:?}", g.map(column_name)),
            None => "not found".to_string(),
        },
        mapping
            .temperature
            .map(column_name)
            .unwrap_or_else(|| "not found".to_string()),
    );

    let mut sample: Vec<f64> = Vec::new();
    let mut accel: [Vec<f64>; AXIS_COUNT] = Default::default();
    let mut gyro: [Vec<f64>; AXIS_COUNT] = Default::default();
    let mut temperature: Vec<f64> = Vec::new();

    for (row_index, result) in reader.records().enumerate() {
        let record = result?;
        let row = row_index + 1;

        let parse_f64 = |csv_idx: usize| -> SensorLogResult<f64> {
            let raw = record.get(csv_idx).ok_or_else(|| {
                SensorLogError::MissingColumn(format!("row {row} has no {}", column_name(csv_idx)))
            })?;
            raw.parse::<f64>().map_err(|_| SensorLogError::InvalidValue {
                row,
                column: column_name(csv_idx),
                value: raw.to_string(),
            })
        };

        sample.push(parse_f64(mapping.sample)?);
        for axis in 0..AXIS_COUNT {
            accel[axis].push(parse_f64(mapping.accel[axis])?);
        }
        if let Some(gyro_idx) = mapping.gyro {
            for axis in 0..AXIS_COUNT {
                gyro[axis].push(parse_f64(gyro_idx[axis])?);
            }
        }
        if let Some(temp_idx) = mapping.temperature {
            temperature.push(parse_f64(temp_idx)?);
        }
    }

    if sample.is_empty() {
        warn!("Sensor log has a header but no data rows.");
    }

    let [ax, ay, az] = accel;
    let [gx, gy, gz] = gyro;
    let log = SensorLog {
        sample: Array1::from(sample),
        accel: [Array1::from(ax), Array1::from(ay), Array1::from(az)],
        gyro: mapping
            .gyro
            .map(|_| [Array1::from(gx), Array1::from(gy), Array1::from(gz)]),
        temperature: mapping.temperature.map(|_| Array1::from(temperature)),
    };

    for (axis, channel) in log.accel.iter().enumerate() {
        if let Some((min, max)) = channel_extent(channel.view()) {
            debug!("  Acel_{} range: {min:.3} .. {max:.3}", axis_name(axis));
        }
    }

    Ok(log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn header(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_resolve_firmware_header() {
        let mapping = resolve_columns(&header(&[
            "Amostra", "Acel_X", "Acel_Y", "Acel_Z", "Giro_X", "Giro_Y", "Giro_Z", "Temp",
        ]))
        .unwrap();
        assert!(!mapping.positional);
        assert_eq!(mapping.sample, 0);
        assert_eq!(mapping.accel, [1, 2, 3]);
        assert_eq!(mapping.gyro, Some([4, 5, 6]));
        assert_eq!(mapping.temperature, Some(7));
    }

    #[test]
    fn test_resolve_named_columns_in_any_order() {
        let mapping =
            resolve_columns(&header(&["acel_z", "AMOSTRA", "Accel_Y", "acel_x"])).unwrap();
        assert!(!mapping.positional);
        assert_eq!(mapping.sample, 1);
        assert_eq!(mapping.accel, [3, 2, 0]);
        assert_eq!(mapping.gyro, None);
        assert_eq!(mapping.temperature, None);
    }

    #[test]
    fn test_resolve_partial_gyro_is_dropped() {
        let mapping = resolve_columns(&header(&[
            "Amostra", "Acel_X", "Acel_Y", "Acel_Z", "Giro_X", "Giro_Y",
        ]))
        .unwrap();
        assert_eq!(mapping.gyro, None);
    }

    #[test]
    fn test_resolve_positional_fallback() {
        let mapping = resolve_columns(&header(&["n", "ax", "ay", "az", "gx", "gy", "gz"])).unwrap();
        assert!(mapping.positional);
        assert_eq!(mapping.accel, [1, 2, 3]);
        assert_eq!(mapping.gyro, Some([4, 5, 6]));

        let accel_only = resolve_columns(&header(&["n", "ax", "ay", "az"])).unwrap();
        assert!(accel_only.positional);
        assert_eq!(accel_only.gyro, None);
    }

    #[test]
    fn test_resolve_too_few_columns() {
        assert!(matches!(
            resolve_columns(&header(&["n", "value"])),
            Err(SensorLogError::MissingColumn(_))
        ));
    }

    #[test]
    fn test_read_firmware_log() {
        let csv = "Amostra,Acel_X,Acel_Y,Acel_Z,Giro_X,Giro_Y,Giro_Z,Temp\n\
                   1,0.123,-0.456,9.810,1.000,-2.000,0.500,24.50\n\
                   2,0.120,-0.450,9.800,1.500,-2.500,0.000,24.52\n";
        let log = read_sensor_log(csv.as_bytes()).unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.sample.to_vec(), vec![1.0, 2.0]);
        assert_eq!(log.accel[2].to_vec(), vec![9.81, 9.8]);
        let gyro = log.gyro.as_ref().unwrap();
        assert_eq!(gyro[1].to_vec(), vec![-2.0, -2.5]);
        assert_eq!(log.temperature.as_ref().unwrap().to_vec(), vec![24.5, 24.52]);
    }

    #[test]
    fn test_read_positional_log_without_named_headers() {
        let csv = "idx,a,b,c,d,e,f\n0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0\n";
        let log = read_sensor_log(csv.as_bytes()).unwrap();
        assert_eq!(log.accel[0].to_vec(), vec![1.0]);
        assert_eq!(log.gyro.as_ref().unwrap()[2].to_vec(), vec![6.0]);
        assert!(log.temperature.is_none());
    }

    #[test]
    fn test_read_header_only_log() {
        let log = read_sensor_log("Amostra,Acel_X,Acel_Y,Acel_Z\n".as_bytes()).unwrap();
        assert!(log.is_empty());
        assert!(!log.has_gyro());
    }

    #[test]
    fn test_read_non_numeric_cell_fails() {
        let csv = "Amostra,Acel_X,Acel_Y,Acel_Z\n1,0.1,0.2,0.3\n2,0.1,oops,0.3\n";
        match read_sensor_log(csv.as_bytes()) {
            Err(SensorLogError::InvalidValue { row, column, value }) => {
                assert_eq!(row, 2);
                assert_eq!(column, "Acel_Y");
                assert_eq!(value, "oops");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_read_short_row_fails() {
        let csv = "Amostra,Acel_X,Acel_Y,Acel_Z\n1,0.1,0.2\n";
        assert!(matches!(
            read_sensor_log(csv.as_bytes()),
            Err(SensorLogError::Csv(_))
        ));
    }

    #[test]
    fn test_parse_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("dados_MPU.csv");
        match parse_sensor_log(&missing) {
            Err(SensorLogError::InputNotFound { path }) => assert_eq!(path, missing),
            other => panic!("expected InputNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Amostra,Acel_X,Acel_Y,Acel_Z").unwrap();
        writeln!(file, "1,0.5,0.25,9.75").unwrap();
        let log = parse_sensor_log(file.path()).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log.accel[1].to_vec(), vec![0.25]);
    }
}

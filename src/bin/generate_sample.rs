use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use launch_dash::data::model::{BOOSTER_COLUMN, OUTCOME_COLUMN, PAYLOAD_COLUMN, SITE_COLUMN};

/// (site, share of launches)
const SITES: [(&str, f64); 4] = [
    ("CCAFS LC-40", 0.46),
    ("CCAFS SLC-40", 0.12),
    ("KSC LC-39A", 0.24),
    ("VAFB SLC-4E", 0.18),
];

/// (category, success probability, max payload kg), in flight order.
const BOOSTERS: [(&str, f64, f64); 5] = [
    ("v1.0", 0.2, 700.0),
    ("v1.1", 0.35, 4500.0),
    ("FT", 0.7, 7000.0),
    ("B4", 0.75, 9600.0),
    ("B5", 0.95, 9600.0),
];

const FLIGHTS: usize = 56;

#[derive(Serialize)]
struct Row {
    #[serde(rename = "Flight Number")]
    flight_number: i64,
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "class")]
    class: i64,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass: f64,
    #[serde(rename = "Booster Version Category")]
    booster: String,
}

fn pick_site(rng: &mut StdRng) -> &'static str {
    let mut roll: f64 = rng.gen();
    for (site, share) in SITES {
        if roll < share {
            return site;
        }
        roll -= share;
    }
    SITES[0].0
}

fn main() {
    let mut rng = StdRng::seed_from_u64(42);

    let rows: Vec<Row> = (0..FLIGHTS)
        .map(|i| {
            // Later flights use later booster generations.
            let generation = i * BOOSTERS.len() / FLIGHTS;
            let (booster, p_success, max_payload) = BOOSTERS[generation];
            // A handful of flights fly with an undisclosed (zero) payload.
            let payload_mass = if i < 5 && rng.gen_bool(0.3) {
                0.0
            } else {
                (rng.gen_range(300.0..max_payload) / 10.0_f64).round() * 10.0
            };
            Row {
                flight_number: i as i64 + 1,
                site: pick_site(&mut rng).to_string(),
                class: i64::from(rng.gen_bool(p_success)),
                payload_mass,
                booster: booster.to_string(),
            }
        })
        .collect();

    // ---- CSV ----
    let csv_path = "sample_launches.csv";
    let mut writer = csv::Writer::from_path(csv_path).expect("Failed to create CSV file");
    for row in &rows {
        writer.serialize(row).expect("Failed to write CSV row");
    }
    writer.flush().expect("Failed to flush CSV");

    // ---- Parquet ----
    let schema = Arc::new(Schema::new(vec![
        Field::new("Flight Number", DataType::Int64, false),
        Field::new(SITE_COLUMN, DataType::Utf8, false),
        Field::new(OUTCOME_COLUMN, DataType::Int64, false),
        Field::new(PAYLOAD_COLUMN, DataType::Float64, false),
        Field::new(BOOSTER_COLUMN, DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.flight_number))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.site.as_str()))),
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.class))),
            Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.payload_mass))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.booster.as_str()))),
        ],
    )
    .expect("Failed to create RecordBatch");

    let parquet_path = "sample_launches.parquet";
    let file = std::fs::File::create(parquet_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    println!("Wrote {} launches to {csv_path} and {parquet_path}", rows.len());
}

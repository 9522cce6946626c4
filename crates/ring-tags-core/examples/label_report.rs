//! Label a batch of detections by marker identity and emit a JSON report.
//!
//! The detections here are stand-ins for what a decoder would produce: two
//! identified tags and one the decoder gave up on.

use log::{info, warn, LevelFilter};
use ring_tags_core::{init_with_level, MarkerId};
use serde::Serialize;

#[derive(Serialize)]
struct LabeledDetection {
    id: MarkerId,
    center: [f32; 2],
    quality: f32,
}

fn main() {
    init_with_level(LevelFilter::Info).expect("install logger");

    let detections = vec![
        LabeledDetection {
            id: MarkerId::new(7),
            center: [104.2, 88.9],
            quality: 0.97,
        },
        LabeledDetection {
            id: MarkerId::new(23),
            center: [411.0, 137.4],
            quality: 0.91,
        },
        LabeledDetection {
            id: MarkerId::UNASSIGNED,
            center: [250.6, 301.8],
            quality: 0.42,
        },
    ];

    for det in &detections {
        match det.id.assigned() {
            Some(id) => info!(
                "tag {} at ({:.1}, {:.1})",
                id, det.center[0], det.center[1]
            ),
            None => warn!(
                "unidentified tag at ({:.1}, {:.1})",
                det.center[0], det.center[1]
            ),
        }
    }

    let json = serde_json::to_string_pretty(&detections).expect("serialize report");
    println!("{json}");
}
